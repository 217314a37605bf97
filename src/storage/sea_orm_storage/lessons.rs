//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::group_students::{Column as GroupStudentColumn, Entity as GroupStudents};
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::errors::{Result, StudyHubError};
use crate::models::lessons::{entities::Lesson, requests::CreateLessonRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_lesson_impl(
        &self,
        created_by: i64,
        req: CreateLessonRequest,
    ) -> Result<Lesson> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            group_id: Set(req.group_id),
            created_by: Set(created_by),
            name: Set(req.name),
            content: Set(req.content),
            video_url: Set(req.video_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_lesson())
    }

    /// 通过 ID 获取课程
    pub async fn get_lesson_by_id_impl(&self, lesson_id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(lesson_id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_lesson()))
    }

    /// 列出学生所在小组的全部课程
    pub async fn list_student_lessons_impl(&self, student_id: i64) -> Result<Vec<Lesson>> {
        let group_ids: Vec<i64> = GroupStudents::find()
            .filter(GroupStudentColumn::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询小组成员失败: {e}")))?
            .into_iter()
            .map(|m| m.group_id)
            .collect();

        let lessons = Lessons::find()
            .filter(Column::GroupId.is_in(group_ids))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(lessons.into_iter().map(|m| m.into_lesson()).collect())
    }

    /// 列出教师最近发布的课程
    pub async fn list_recent_teacher_lessons_impl(
        &self,
        teacher_id: i64,
        limit: i64,
    ) -> Result<Vec<Lesson>> {
        let lessons = Lessons::find()
            .filter(Column::CreatedBy.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .limit(limit.clamp(1, 50) as u64)
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(lessons.into_iter().map(|m| m.into_lesson()).collect())
    }

    /// 删除课程
    pub async fn delete_lesson_impl(&self, lesson_id: i64) -> Result<bool> {
        let result = Lessons::delete_by_id(lesson_id)
            .exec(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
