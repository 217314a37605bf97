use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::middlewares::RequireJWT;
use crate::models::groups::requests::CreateGroupRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 创建小组；持有人取自 JWT 身份，不接受请求体里的教师 ID
pub async fn create_group(
    service: &GroupService,
    request: &HttpRequest,
    req: CreateGroupRequest,
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
            "小组名称不能为空",
        )));
    }

    if req.student_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "请至少选择一名学生",
        )));
    }

    match storage.create_group(current_user.id, req).await {
        Ok(group) => Ok(HttpResponse::Created().json(ApiResponse::success(group, "小组创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::GroupCreationFailed,
                format!("创建小组失败: {e}"),
            )),
        ),
    }
}
