use crate::models::users::entities::UserBrief;
use serde::Serialize;
use ts_rs::TS;

// 小组列表条目（教师/学生面板共用）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct GroupSummary {
    pub id: i64,
    pub name: String,
    pub student_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 小组详情：成员列表 + 负责教师
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct GroupDetail {
    pub id: i64,
    pub name: String,
    pub teacher: Option<UserBrief>,
    pub students: Vec<UserBrief>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
