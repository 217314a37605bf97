use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LessonService;
use super::list::build_lesson_views;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 课程详情：作者、组内学生和管理员可见
pub async fn get_lesson(
    service: &LessonService,
    request: &HttpRequest,
    lesson_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let lesson = match storage.get_lesson_by_id(lesson_id).await {
        Ok(Some(lesson)) => lesson,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LessonNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    };

    // 权限验证：管理员与作者放行，其余必须是小组成员
    if current_user.role != UserRole::Admin && lesson.created_by != current_user.id {
        match storage.is_group_member(lesson.group_id, current_user.id).await {
            Ok(true) => {}
            Ok(false) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::GroupPermissionDenied,
                    "您不是该小组成员，无权查看此课程",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("验证小组成员资格失败: {e}"),
                    )),
                );
            }
        }
    }

    let mut views = build_lesson_views(&storage, vec![lesson]).await;
    let view = views.remove(0);

    Ok(HttpResponse::Ok().json(ApiResponse::success(view, "查询成功")))
}
