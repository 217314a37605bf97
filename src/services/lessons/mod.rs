pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod recent;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::lessons::requests::{CreateLessonRequest, RecentLessonsParams};
use crate::storage::Storage;

pub struct LessonService {
    storage: Option<Arc<dyn Storage>>,
}

impl LessonService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_lesson(
        &self,
        request: &HttpRequest,
        req: CreateLessonRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_lesson(self, request, req).await
    }

    pub async fn list_student_lessons(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_student_lessons(self, request).await
    }

    pub async fn list_recent_teacher_lessons(
        &self,
        request: &HttpRequest,
        query: RecentLessonsParams,
    ) -> ActixResult<HttpResponse> {
        recent::list_recent_teacher_lessons(self, request, query).await
    }

    pub async fn get_lesson(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_lesson(self, request, lesson_id).await
    }

    pub async fn delete_lesson(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_lesson(self, request, lesson_id).await
    }
}
