use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::homeworks::requests::{
    CreateHomeworkRequest, GradeAssignmentRequest, SubmitAssignmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::HomeworkService;
use crate::utils::{SafeAssignmentIdI64, SafeIdI64};

// 懒加载的全局 HomeworkService 实例
static HOMEWORK_SERVICE: Lazy<HomeworkService> = Lazy::new(HomeworkService::new_lazy);

// 创建作业
pub async fn create_homework(
    req: HttpRequest,
    body: web::Json<CreateHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.create_homework(&req, body.into_inner()).await
}

// 教师作业列表（带统计）
pub async fn list_teacher_homeworks(req: HttpRequest) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.list_teacher_homeworks(&req).await
}

// 学生作业列表（带展示状态）
pub async fn list_student_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.list_student_assignments(&req).await
}

// 教师作业详情
pub async fn get_homework(req: HttpRequest, path: SafeIdI64) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.get_homework(&req, path.0).await
}

// 学生分配详情
pub async fn get_assignment(
    req: HttpRequest,
    path: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.get_assignment(&req, path.0).await
}

// 提交作业
pub async fn submit_assignment(
    req: HttpRequest,
    path: SafeAssignmentIdI64,
    body: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .submit_assignment(&req, path.0, body.into_inner())
        .await
}

// 评分
pub async fn grade_assignment(
    req: HttpRequest,
    path: SafeAssignmentIdI64,
    body: web::Json<GradeAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .grade_assignment(&req, path.0, body.into_inner())
        .await
}

// 删除作业
pub async fn delete_homework(req: HttpRequest, path: SafeIdI64) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.delete_homework(&req, path.0).await
}

// 配置路由
pub fn configure_homeworks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/homeworks")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 创建作业 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_homework)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 教师作业列表 - 仅教师和管理员
            .service(
                web::resource("/teacher")
                    .route(web::get().to(list_teacher_homeworks))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            // 学生作业列表 - 所有登录用户
            .service(web::resource("/student").route(web::get().to(list_student_assignments)))
            // 学生分配详情 - 业务层验证归属
            .service(web::resource("/assignment/{id}").route(web::get().to(get_assignment)))
            // 提交作业 - 业务层验证归属与状态
            .service(web::resource("/submit/{id}").route(web::post().to(submit_assignment)))
            // 评分 - 仅教师和管理员（业务层再验证布置人）
            .service(
                web::resource("/assignments/{id}/grade")
                    .route(web::post().to(grade_assignment))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            .service(
                web::resource("/{id}")
                    // 教师作业详情 - 业务层验证布置人
                    .route(web::get().to(get_homework))
                    // 删除作业 - 仅教师和管理员
                    .route(
                        web::delete()
                            .to(delete_homework)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
