use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

/// 创建作业请求：创建作业并为每个学生生成一条 pending 分配
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct CreateHomeworkRequest {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub student_ids: Vec<i64>,
    pub file_url: Option<String>,
}

/// 提交作业请求：至少带文件引用或文字内容之一
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct SubmitAssignmentRequest {
    pub submit_file_url: Option<String>,
    pub submission_text: Option<String>,
}

/// 评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct GradeAssignmentRequest {
    pub grade: String,
    pub feedback: Option<String>,
}
