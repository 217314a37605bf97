use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::middlewares::RequireJWT;
use crate::models::homeworks::requests::SubmitAssignmentRequest;
use crate::models::homeworks::responses::{AssignmentView, HomeworkBrief};
use crate::models::homeworks::status::AssignmentStatus;
use crate::models::users::entities::UserBrief;
use crate::models::{ApiResponse, ErrorCode};

/// 提交作业
///
/// 只有 pending 分配可以提交，提交后不允许重交。
/// 截止时间之后收到的提交落库为 late，截止前为 submitted——
/// 权威状态在这里流转，展示层的 Overdue 细化不参与。
pub async fn submit_assignment(
    service: &HomeworkService,
    request: &HttpRequest,
    assignment_id: i64,
    req: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if req.submit_file_url.is_none() && req.submission_text.is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "提交内容不能为空：请附上文件链接或文字内容",
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

    if assignment.student_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能提交自己的作业",
        )));
    }

    if assignment.status != AssignmentStatus::Pending {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::AssignmentStateInvalid,
            format!("当前状态（{}）不允许提交", assignment.status),
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

    let now = chrono::Utc::now();
    let new_status = if now > homework.due_date {
        AssignmentStatus::Late
    } else {
        AssignmentStatus::Submitted
    };

    let updated = match storage
        .record_submission(
            assignment_id,
            new_status.clone(),
            req.submit_file_url,
            req.submission_text,
        )
        .await
    {
        Ok(updated) => updated,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("提交作业失败: {e}"),
                )),
            );
        }
    };

    tracing::info!(
        "Student {} submitted assignment {} as {}",
        current_user.id,
        assignment_id,
        new_status
    );

    let creator = match storage.get_user_by_id(homework.created_by).await {
        Ok(Some(user)) => Some(UserBrief::from(&user)),
        _ => None,
    };

    let brief = HomeworkBrief::from_homework(homework, creator);
    let view = AssignmentView::build(updated, brief, now);

    Ok(HttpResponse::Ok().json(ApiResponse::success(view, "提交成功")))
}
