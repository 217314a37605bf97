use serde::Deserialize;
use ts_rs::TS;

/// 创建课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct CreateLessonRequest {
    pub group_id: i64,
    pub name: String,
    pub content: String,
    pub video_url: Option<String>,
}

/// 最近课程查询参数（教师面板）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct RecentLessonsParams {
    pub limit: Option<i64>,
}
