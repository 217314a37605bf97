use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lessons::requests::{CreateLessonRequest, RecentLessonsParams};
use crate::models::users::entities::UserRole;
use crate::services::LessonService;
use crate::utils::SafeLessonIdI64;

// 懒加载的全局 LessonService 实例
static LESSON_SERVICE: Lazy<LessonService> = Lazy::new(LessonService::new_lazy);

// 创建课程
pub async fn create_lesson(
    req: HttpRequest,
    body: web::Json<CreateLessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.create_lesson(&req, body.into_inner()).await
}

// 学生课程列表
pub async fn list_student_lessons(req: HttpRequest) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.list_student_lessons(&req).await
}

// 教师最近课程
pub async fn list_recent_teacher_lessons(
    req: HttpRequest,
    query: web::Query<RecentLessonsParams>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .list_recent_teacher_lessons(&req, query.into_inner())
        .await
}

// 课程详情
pub async fn get_lesson(req: HttpRequest, path: SafeLessonIdI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.get_lesson(&req, path.0).await
}

// 删除课程
pub async fn delete_lesson(req: HttpRequest, path: SafeLessonIdI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.delete_lesson(&req, path.0).await
}

// 配置路由
pub fn configure_lessons_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lessons")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 学生课程列表 - 所有登录用户
                    .route(web::get().to(list_student_lessons))
                    // 创建课程 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_lesson)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 教师最近课程 - 仅教师和管理员
            .service(
                web::resource("/teacher/recent")
                    .route(web::get().to(list_recent_teacher_lessons))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            .service(
                web::resource("/{id}")
                    // 课程详情 - 业务层验证成员资格
                    .route(web::get().to(get_lesson))
                    // 删除课程 - 仅教师和管理员（业务层再验证作者）
                    .route(
                        web::delete()
                            .to(delete_lesson)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
