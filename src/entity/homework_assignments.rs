//! 作业分配实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "homework_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub homework_id: i64,
    pub student_id: i64,
    pub status: String,
    pub submit_file_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub submission_text: Option<String>,
    pub submitted_at: Option<i64>,
    pub grade: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub graded_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::homeworks::Entity",
        from = "Column::HomeworkId",
        to = "super::homeworks::Column::Id"
    )]
    Homework,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::homeworks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homework.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
// 状态列必须能解析为 AssignmentStatus；未知状态立即报错，不回退默认值
impl Model {
    pub fn into_assignment(
        self,
    ) -> crate::errors::Result<crate::models::homeworks::entities::HomeworkAssignment> {
        use crate::models::homeworks::entities::HomeworkAssignment;
        use crate::models::homeworks::status::AssignmentStatus;
        use chrono::{DateTime, Utc};

        Ok(HomeworkAssignment {
            id: self.id,
            homework_id: self.homework_id,
            student_id: self.student_id,
            status: self.status.parse::<AssignmentStatus>()?,
            submit_file_url: self.submit_file_url,
            submission_text: self.submission_text,
            submitted_at: self
                .submitted_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            grade: self.grade,
            feedback: self.feedback,
            graded_at: self
                .graded_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        })
    }
}
