//! 作业与分配存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::homework_assignments::{
    ActiveModel as AssignmentActiveModel, Column as AssignmentColumn,
    Entity as HomeworkAssignments,
};
use crate::entity::homeworks::{ActiveModel, Column, Entity as Homeworks};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, StudyHubError};
use crate::models::homeworks::{
    entities::{Homework, HomeworkAssignment},
    requests::CreateHomeworkRequest,
    responses::TeacherHomeworkSummary,
    status::AssignmentStatus,
};
use crate::models::users::entities::UserRole;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业并为每个学生生成一条 pending 分配
    ///
    /// 学生列表里不存在的用户或非学生账号会被忽略；全部无效时报校验错误。
    pub async fn create_homework_with_assignments_impl(
        &self,
        created_by: i64,
        req: CreateHomeworkRequest,
    ) -> Result<Homework> {
        let now = chrono::Utc::now().timestamp();

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
                "作业必须至少指派给一名有效学生".to_string(),
            ));
        }

        let model = ActiveModel {
            created_by: Set(created_by),
            title: Set(req.title),
            description: Set(req.description),
            due_date: Set(req.due_date.timestamp()),
            file_url: Set(req.file_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let homework = model
            .insert(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("创建作业失败: {e}")))?;

        let assignments: Vec<AssignmentActiveModel> = valid_students
            .into_iter()
            .map(|student_id| AssignmentActiveModel {
                homework_id: Set(homework.id),
                student_id: Set(student_id),
                status: Set(AssignmentStatus::Pending.to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();

        HomeworkAssignments::insert_many(assignments)
            .exec(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("写入作业分配失败: {e}")))?;

        Ok(homework.into_homework())
    }

    /// 通过 ID 获取作业
    pub async fn get_homework_by_id_impl(&self, homework_id: i64) -> Result<Option<Homework>> {
        let result = Homeworks::find_by_id(homework_id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_homework()))
    }

    /// 列出教师创建的作业（带提交统计）
    pub async fn list_teacher_homeworks_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherHomeworkSummary>> {
        let homeworks = Homeworks::find()
            .filter(Column::CreatedBy.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询作业列表失败: {e}")))?;

        let homework_ids: Vec<i64> = homeworks.iter().map(|h| h.id).collect();

        let assignments = HomeworkAssignments::find()
            .filter(AssignmentColumn::HomeworkId.is_in(homework_ids))
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("统计作业分配失败: {e}")))?;

        // (总数, 已提交, 已评分) 按作业分组
        let mut stats: HashMap<i64, (i64, i64, i64)> = HashMap::new();
        for a in assignments {
            let entry = stats.entry(a.homework_id).or_insert((0, 0, 0));
            entry.0 += 1;
            match a.status.as_str() {
                AssignmentStatus::SUBMITTED | AssignmentStatus::LATE => entry.1 += 1,
                AssignmentStatus::GRADED => {
                    entry.1 += 1;
                    entry.2 += 1;
                }
                _ => {}
            }
        }

        Ok(homeworks
            .into_iter()
            .map(|m| {
                let homework = m.into_homework();
                let (assignment_count, submitted_count, graded_count) =
                    stats.get(&homework.id).copied().unwrap_or((0, 0, 0));
                TeacherHomeworkSummary {
                    homework,
                    assignment_count,
                    submitted_count,
                    graded_count,
                }
            })
            .collect())
    }

    /// 删除作业（分配级联删除）
    pub async fn delete_homework_impl(&self, homework_id: i64) -> Result<bool> {
        let result = Homeworks::delete_by_id(homework_id)
            .exec(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出学生的全部分配（附带所属作业）
    pub async fn list_student_assignments_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<(HomeworkAssignment, Homework)>> {
        let rows = HomeworkAssignments::find()
            .filter(AssignmentColumn::StudentId.eq(student_id))
            .find_also_related(Homeworks)
            .order_by_desc(AssignmentColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询分配列表失败: {e}")))?;

        let mut result = Vec::with_capacity(rows.len());
        for (assignment, homework) in rows {
            let homework = homework.ok_or_else(|| {
                StudyHubError::database_operation(format!(
                    "分配 {} 缺少所属作业记录",
                    assignment.id
                ))
            })?;
            result.push((assignment.into_assignment()?, homework.into_homework()));
        }
        Ok(result)
    }

    /// 通过 ID 获取分配
    pub async fn get_assignment_by_id_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<HomeworkAssignment>> {
        let result = HomeworkAssignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询分配失败: {e}")))?;

        result.map(|m| m.into_assignment()).transpose()
    }

    /// 列出某作业的全部分配
    pub async fn list_homework_assignments_impl(
        &self,
        homework_id: i64,
    ) -> Result<Vec<HomeworkAssignment>> {
        let rows = HomeworkAssignments::find()
            .filter(AssignmentColumn::HomeworkId.eq(homework_id))
            .order_by_asc(AssignmentColumn::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询分配列表失败: {e}")))?;

        rows.into_iter().map(|m| m.into_assignment()).collect()
    }

    /// 写入提交：状态由业务层决定（submitted 或 late）
    pub async fn record_submission_impl(
        &self,
        assignment_id: i64,
        status: AssignmentStatus,
        submit_file_url: Option<String>,
        submission_text: Option<String>,
    ) -> Result<HomeworkAssignment> {
        let now = chrono::Utc::now().timestamp();

        let model = HomeworkAssignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询分配失败: {e}")))?
            .ok_or_else(|| StudyHubError::not_found(format!("分配不存在: {assignment_id}")))?;

        let mut active: AssignmentActiveModel = model.into();
        active.status = Set(status.to_string());
        active.submit_file_url = Set(submit_file_url);
        active.submission_text = Set(submission_text);
        active.submitted_at = Set(Some(now));
        active.updated_at = Set(now);

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("写入提交失败: {e}")))?;

        updated.into_assignment()
    }

    /// 写入评分：状态置为 graded
    pub async fn record_grade_impl(
        &self,
        assignment_id: i64,
        grade: String,
        feedback: Option<String>,
    ) -> Result<HomeworkAssignment> {
        let now = chrono::Utc::now().timestamp();

        let model = HomeworkAssignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询分配失败: {e}")))?
            .ok_or_else(|| StudyHubError::not_found(format!("分配不存在: {assignment_id}")))?;

        let mut active: AssignmentActiveModel = model.into();
        active.status = Set(AssignmentStatus::Graded.to_string());
        active.grade = Set(Some(grade));
        active.feedback = Set(feedback);
        active.graded_at = Set(Some(now));
        active.updated_at = Set(now);

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("写入评分失败: {e}")))?;

        updated.into_assignment()
    }
}
