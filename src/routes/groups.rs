use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::groups::requests::CreateGroupRequest;
use crate::models::users::entities::UserRole;
use crate::services::GroupService;
use crate::utils::SafeGroupIdI64;

// 懒加载的全局 GroupService 实例
static GROUP_SERVICE: Lazy<GroupService> = Lazy::new(GroupService::new_lazy);

// 创建小组
pub async fn create_group(
    req: HttpRequest,
    body: web::Json<CreateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.create_group(&req, body.into_inner()).await
}

// 教师小组列表
pub async fn list_teacher_groups(req: HttpRequest) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_teacher_groups(&req).await
}

// 学生小组列表
pub async fn list_student_groups(req: HttpRequest) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_student_groups(&req).await
}

// 小组详情
pub async fn get_group(req: HttpRequest, path: SafeGroupIdI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.get_group(&req, path.0).await
}

// 删除小组
pub async fn delete_group(req: HttpRequest, path: SafeGroupIdI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.delete_group(&req, path.0).await
}

// 配置路由
pub fn configure_groups_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/groups")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 创建小组 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_group)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 教师视角列表 - 仅教师和管理员
            .service(
                web::resource("/teacher")
                    .route(web::get().to(list_teacher_groups))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            // 学生视角列表 - 所有登录用户
            .service(web::resource("/student").route(web::get().to(list_student_groups)))
            .service(
                web::resource("/{id}")
                    // 小组详情 - 业务层验证成员资格
                    .route(web::get().to(get_group))
                    // 删除小组 - 仅教师和管理员（业务层再验证持有人）
                    .route(
                        web::delete()
                            .to(delete_group)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
