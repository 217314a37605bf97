use serde::Deserialize;
use ts_rs::TS;

/// 创建小组请求：小组名 + 初始成员
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct CreateGroupRequest {
    pub name: String,
    pub student_ids: Vec<i64>,
}
