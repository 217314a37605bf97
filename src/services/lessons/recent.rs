use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LessonService;
use super::list::build_lesson_views;
use crate::middlewares::RequireJWT;
use crate::models::lessons::requests::RecentLessonsParams;
use crate::models::{ApiResponse, ErrorCode};

const DEFAULT_RECENT_LIMIT: i64 = 5;

/// 教师面板：最近发布的课程
pub async fn list_recent_teacher_lessons(
    service: &LessonService,
    request: &HttpRequest,
    query: RecentLessonsParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);

    match storage
        .list_recent_teacher_lessons(current_user.id, limit)
        .await
    {
        Ok(lessons) => {
            let views = build_lesson_views(&storage, lessons).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(views, "查询成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询课程列表失败: {e}"),
            )),
        ),
    }
}
