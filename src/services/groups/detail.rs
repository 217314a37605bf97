use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::middlewares::RequireJWT;
use crate::models::groups::responses::GroupDetail;
use crate::models::users::entities::{UserBrief, UserRole};
use crate::models::{ApiResponse, ErrorCode};

/// 小组详情：持有教师、组内学生和管理员可见
pub async fn get_group(
    service: &GroupService,
    request: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let group = match storage.get_group_by_id(group_id).await {
        Ok(Some(group)) => group,
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
    };

    // 权限验证：管理员直接放行，否则必须是持有教师或组内学生
    if current_user.role != UserRole::Admin && group.teacher_id != current_user.id {
        match storage.is_group_member(group_id, current_user.id).await {
            Ok(true) => {}
            Ok(false) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::GroupPermissionDenied,
                    "您不是该小组成员，无权查看",
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

    let students = match storage.list_group_students(group_id).await {
        Ok(students) => students.iter().map(UserBrief::from).collect(),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询小组成员失败: {e}"),
                )),
            );
        }
    };

    // 持有教师信息
    let teacher = match storage.get_user_by_id(group.teacher_id).await {
        Ok(Some(user)) => Some(UserBrief::from(&user)),
        _ => None,
    };

    let detail = GroupDetail {
        id: group.id,
        name: group.name,
        teacher,
        students,
        created_at: group.created_at,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功")))
}
