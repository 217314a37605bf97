use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::middlewares::RequireJWT;
use crate::models::homeworks::requests::CreateHomeworkRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 创建作业：为名单里的每个学生生成一条 pending 分配
pub async fn create_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    req: CreateHomeworkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "作业标题不能为空",
        )));
    }

    if req.student_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "请至少指派一名学生",
        )));
    }

    match storage
        .create_homework_with_assignments(current_user.id, req)
        .await
    {
        Ok(homework) => {
            tracing::info!(
                "Teacher {} created homework {} ({})",
                current_user.id,
                homework.id,
                homework.title
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(homework, "作业创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建作业失败: {e}"),
            )),
        ),
    }
}
