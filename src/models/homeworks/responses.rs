use serde::Serialize;
use ts_rs::TS;

use crate::models::homeworks::entities::{Homework, HomeworkAssignment};
use crate::models::homeworks::status::{self, StatusPresentation};
use crate::models::users::entities::UserBrief;

// 嵌在分配视图里的作业摘要
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct HomeworkBrief {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub file_url: Option<String>,
    pub created_by: Option<UserBrief>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl HomeworkBrief {
    pub fn from_homework(homework: Homework, created_by: Option<UserBrief>) -> Self {
        Self {
            id: homework.id,
            title: homework.title,
            description: homework.description,
            due_date: homework.due_date,
            file_url: homework.file_url,
            created_by,
            created_at: homework.created_at,
        }
    }
}

// 学生视角的分配视图：分配记录 + 作业摘要 + 状态引擎输出
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct AssignmentView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: HomeworkAssignment,
    pub homework: HomeworkBrief,
    pub presentation: StatusPresentation,
}

impl AssignmentView {
    /// 组装视图；展示状态在这里统一推导，页面之间不再各算各的
    pub fn build(
        assignment: HomeworkAssignment,
        homework: HomeworkBrief,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        let presentation = status::describe(
            &assignment.status,
            homework.due_date,
            assignment.grade.as_deref(),
            now,
        );
        Self {
            assignment,
            homework,
            presentation,
        }
    }
}

// 教师视角的单个学生分配：学生摘要 + 状态引擎输出
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct TeacherAssignmentView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: HomeworkAssignment,
    pub student: Option<UserBrief>,
    pub presentation: StatusPresentation,
}

// 教师作业列表条目：作业 + 提交统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct TeacherHomeworkSummary {
    #[serde(flatten)]
    #[ts(flatten)]
    pub homework: Homework,
    pub assignment_count: i64,
    pub submitted_count: i64,
    pub graded_count: i64,
}

// 教师作业详情：作业 + 全部学生分配
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct TeacherHomeworkDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub homework: Homework,
    pub assignments: Vec<TeacherAssignmentView>,
}
