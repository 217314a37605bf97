use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::homeworks::status::AssignmentStatus;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct Homework {
    // 唯一 ID
    pub id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: String,
    // 截止时间
    pub due_date: chrono::DateTime<chrono::Utc>,
    // 题目附件引用（外部文件服务的 URL）
    pub file_url: Option<String>,
    // 创建教师 ID
    pub created_by: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 作业分配：每个被指派学生一条，状态由服务端流转
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct HomeworkAssignment {
    pub id: i64,
    pub homework_id: i64,
    pub student_id: i64,
    pub status: AssignmentStatus,
    pub submit_file_url: Option<String>,
    pub submission_text: Option<String>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub grade: Option<String>,
    pub feedback: Option<String>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
