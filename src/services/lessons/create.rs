use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LessonService;
use crate::middlewares::RequireJWT;
use crate::models::lessons::requests::CreateLessonRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 创建课程：只能发布到自己持有的小组
pub async fn create_lesson(
    service: &LessonService,
    request: &HttpRequest,
    req: CreateLessonRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "课程名称不能为空",
        )));
    }

    // 目标小组必须存在且归当前教师持有
    match storage.get_group_by_id(req.group_id).await {
        Ok(Some(group)) => {
            if current_user.role != UserRole::Admin && group.teacher_id != current_user.id {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::GroupPermissionDenied,
                    "只能向自己持有的小组发布课程",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GroupNotFound,
                "小组不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询小组失败: {e}"),
                )),
            );
        }
    }

    match storage.create_lesson(current_user.id, req).await {
        Ok(lesson) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(lesson, "课程创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建课程失败: {e}"),
            )),
        ),
    }
}
