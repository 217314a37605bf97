use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::middlewares::RequireJWT;
use crate::models::homeworks::responses::{AssignmentView, HomeworkBrief};
use crate::models::users::entities::{UserBrief, UserRole};
use crate::models::{ApiResponse, ErrorCode};

/// 学生分配详情：只能看自己的分配
pub async fn get_assignment(
    service: &HomeworkService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

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

    if current_user.role != UserRole::Admin && assignment.student_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能查看自己的作业",
        )));
    }

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

    let creator = match storage.get_user_by_id(homework.created_by).await {
        Ok(Some(user)) => Some(UserBrief::from(&user)),
        _ => None,
    };

    let brief = HomeworkBrief::from_homework(homework, creator);
    let view = AssignmentView::build(assignment, brief, chrono::Utc::now());

    Ok(HttpResponse::Ok().json(ApiResponse::success(view, "查询成功")))
}
