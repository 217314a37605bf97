use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程：教师为某个小组发布的学习内容
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct Lesson {
    pub id: i64,
    pub group_id: i64,
    pub name: String,
    pub content: String,
    pub video_url: Option<String>,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
