use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use std::sync::Arc;

use super::LessonService;
use crate::middlewares::RequireJWT;
use crate::models::groups::entities::GroupBrief;
use crate::models::lessons::{entities::Lesson, responses::LessonView};
use crate::models::users::entities::UserBrief;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

// 为一批课程补上小组与作者摘要
pub(crate) async fn build_lesson_views(
    storage: &Arc<dyn Storage>,
    lessons: Vec<Lesson>,
) -> Vec<LessonView> {
    let mut groups: HashMap<i64, GroupBrief> = HashMap::new();
    let mut authors: HashMap<i64, UserBrief> = HashMap::new();

    let mut views = Vec::with_capacity(lessons.len());
    for lesson in lessons {
        if !groups.contains_key(&lesson.group_id)
            && let Ok(Some(group)) = storage.get_group_by_id(lesson.group_id).await
        {
            groups.insert(lesson.group_id, GroupBrief::from(&group));
        }
        if !authors.contains_key(&lesson.created_by)
            && let Ok(Some(user)) = storage.get_user_by_id(lesson.created_by).await
        {
            authors.insert(lesson.created_by, UserBrief::from(&user));
        }

        views.push(LessonView {
            id: lesson.id,
            name: lesson.name,
            content: lesson.content,
            video_url: lesson.video_url,
            group: groups.get(&lesson.group_id).cloned(),
            created_by: authors.get(&lesson.created_by).cloned(),
            created_at: lesson.created_at,
        });
    }
    views
}

/// 列出当前学生所在小组的课程
pub async fn list_student_lessons(
    service: &LessonService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match storage.list_student_lessons(current_user.id).await {
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
