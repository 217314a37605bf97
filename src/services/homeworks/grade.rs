use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::middlewares::RequireJWT;
use crate::models::homeworks::requests::GradeAssignmentRequest;
use crate::models::homeworks::status::AssignmentStatus;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 评分
///
/// 只有 submitted/late 的分配可以评分；graded 可以再次评分以修正
/// 成绩与评语，状态保持 graded。pending 没有可评的内容，直接拒绝。
pub async fn grade_assignment(
    service: &HomeworkService,
    request: &HttpRequest,
    assignment_id: i64,
    req: GradeAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if req.grade.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "成绩不能为空",
        )));
    }

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业分配不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业分配失败: {e}"),
                )),
            );
        }
    };

    // 权限验证：布置该作业的教师或管理员
    let homework = match storage.get_homework_by_id(assignment.homework_id).await {
        Ok(Some(homework)) => homework,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::HomeworkNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    if current_user.role != UserRole::Admin && homework.created_by != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有布置该作业的教师可以评分",
        )));
    }

    if assignment.status == AssignmentStatus::Pending {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::AssignmentStateInvalid,
            "该学生尚未提交，无法评分",
        )));
    }

    match storage
        .record_grade(assignment_id, req.grade, req.feedback)
        .await
    {
        Ok(updated) => {
            tracing::info!(
                "Teacher {} graded assignment {} ({})",
                current_user.id,
                assignment_id,
                updated.grade.as_deref().unwrap_or_default()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "评分成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("评分失败: {e}"),
            )),
        ),
    }
}
