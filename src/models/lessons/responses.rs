use crate::models::groups::entities::GroupBrief;
use crate::models::users::entities::UserBrief;
use serde::Serialize;
use ts_rs::TS;

// 课程视图：列表与详情共用，带小组与作者摘要
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct LessonView {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub video_url: Option<String>,
    pub group: Option<GroupBrief>,
    pub created_by: Option<UserBrief>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
