//! 小组存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::group_students::{
    ActiveModel as GroupStudentActiveModel, Column as GroupStudentColumn, Entity as GroupStudents,
};
use crate::entity::groups::{ActiveModel, Column, Entity as Groups};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, StudyHubError};
use crate::models::{
    groups::{entities::Group, requests::CreateGroupRequest, responses::GroupSummary},
    users::entities::{User, UserRole},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建小组并写入初始成员
    ///
    /// 成员列表里不存在的用户或非学生账号会被忽略；全部无效时报校验错误。
    pub async fn create_group_impl(
        &self,
        teacher_id: i64,
        req: CreateGroupRequest,
    ) -> Result<Group> {
        let now = chrono::Utc::now().timestamp();

        // 只保留真实存在的学生账号
        let mut student_ids: Vec<i64> = req.student_ids;
        student_ids.sort_unstable();
        student_ids.dedup();

        let valid_students: Vec<i64> = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .filter(UserColumn::Role.eq(UserRole::Student.to_string()))
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("校验学生列表失败: {e}")))?
            .into_iter()
            .map(|m| m.id)
            .collect();

        if valid_students.is_empty() {
            return Err(StudyHubError::validation(
                "小组必须至少包含一名有效学生".to_string(),
            ));
        }

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            name: Set(req.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let group = model
            .insert(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("创建小组失败: {e}")))?;

        let memberships: Vec<GroupStudentActiveModel> = valid_students
            .into_iter()
            .map(|student_id| GroupStudentActiveModel {
                group_id: Set(group.id),
                student_id: Set(student_id),
                joined_at: Set(now),
                ..Default::default()
            })
            .collect();

        GroupStudents::insert_many(memberships)
            .exec(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("写入小组成员失败: {e}")))?;

        Ok(group.into_group())
    }

    /// 通过 ID 获取小组
    pub async fn get_group_by_id_impl(&self, group_id: i64) -> Result<Option<Group>> {
        let result = Groups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询小组失败: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 列出教师持有的小组（带成员数）
    pub async fn list_teacher_groups_impl(&self, teacher_id: i64) -> Result<Vec<GroupSummary>> {
        let groups = Groups::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询小组列表失败: {e}")))?;

        self.summarize_groups(groups).await
    }

    /// 列出学生加入的小组（带成员数）
    pub async fn list_student_groups_impl(&self, student_id: i64) -> Result<Vec<GroupSummary>> {
        let group_ids: Vec<i64> = GroupStudents::find()
            .filter(GroupStudentColumn::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询小组成员失败: {e}")))?
            .into_iter()
            .map(|m| m.group_id)
            .collect();

        let groups = Groups::find()
            .filter(Column::Id.is_in(group_ids))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询小组列表失败: {e}")))?;

        self.summarize_groups(groups).await
    }

    // 把小组实体折叠成摘要并补上成员数
    async fn summarize_groups(
        &self,
        groups: Vec<crate::entity::groups::Model>,
    ) -> Result<Vec<GroupSummary>> {
        let ids: Vec<i64> = groups.iter().map(|g| g.id).collect();

        let memberships = GroupStudents::find()
            .filter(GroupStudentColumn::GroupId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("统计小组成员失败: {e}")))?;

        let mut counts: HashMap<i64, i64> = HashMap::new();
        for m in memberships {
            *counts.entry(m.group_id).or_insert(0) += 1;
        }

        Ok(groups
            .into_iter()
            .map(|m| {
                let group = m.into_group();
                GroupSummary {
                    id: group.id,
                    name: group.name,
                    student_count: counts.get(&group.id).copied().unwrap_or(0),
                    created_at: group.created_at,
                }
            })
            .collect())
    }

    /// 列出小组成员
    pub async fn list_group_students_impl(&self, group_id: i64) -> Result<Vec<User>> {
        let student_ids: Vec<i64> = GroupStudents::find()
            .filter(GroupStudentColumn::GroupId.eq(group_id))
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询小组成员失败: {e}")))?
            .into_iter()
            .map(|m| m.student_id)
            .collect();

        let students = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .order_by_asc(UserColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询成员信息失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_user()).collect())
    }

    /// 判断学生是否是小组成员
    pub async fn is_group_member_impl(&self, group_id: i64, student_id: i64) -> Result<bool> {
        let count = GroupStudents::find()
            .filter(GroupStudentColumn::GroupId.eq(group_id))
            .filter(GroupStudentColumn::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询小组成员失败: {e}")))?;

        Ok(count > 0)
    }

    /// 删除小组（成员关系与课程级联删除）
    pub async fn delete_group_impl(&self, group_id: i64) -> Result<bool> {
        let result = Groups::delete_by_id(group_id)
            .exec(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("删除小组失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
