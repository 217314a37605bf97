use std::sync::Arc;

use crate::models::{
    groups::{
        entities::Group,
        requests::CreateGroupRequest,
        responses::GroupSummary,
    },
    homeworks::{
        entities::{Homework, HomeworkAssignment},
        requests::CreateHomeworkRequest,
        responses::TeacherHomeworkSummary,
        status::AssignmentStatus,
    },
    lessons::{entities::Lesson, requests::CreateLessonRequest},
    users::{
        entities::User,
        requests::{NewUser, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;

    /// 小组管理方法
    // 创建小组并写入初始成员
    async fn create_group(&self, teacher_id: i64, group: CreateGroupRequest) -> Result<Group>;
    // 通过ID获取小组信息
    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<Group>>;
    // 列出教师持有的小组
    async fn list_teacher_groups(&self, teacher_id: i64) -> Result<Vec<GroupSummary>>;
    // 列出学生加入的小组
    async fn list_student_groups(&self, student_id: i64) -> Result<Vec<GroupSummary>>;
    // 列出小组成员
    async fn list_group_students(&self, group_id: i64) -> Result<Vec<User>>;
    // 判断学生是否是小组成员
    async fn is_group_member(&self, group_id: i64, student_id: i64) -> Result<bool>;
    // 删除小组
    async fn delete_group(&self, group_id: i64) -> Result<bool>;

    /// 课程管理方法
    // 创建课程
    async fn create_lesson(&self, created_by: i64, lesson: CreateLessonRequest) -> Result<Lesson>;
    // 通过ID获取课程信息
    async fn get_lesson_by_id(&self, lesson_id: i64) -> Result<Option<Lesson>>;
    // 列出学生所在小组的课程
    async fn list_student_lessons(&self, student_id: i64) -> Result<Vec<Lesson>>;
    // 列出教师最近发布的课程
    async fn list_recent_teacher_lessons(
        &self,
        teacher_id: i64,
        limit: i64,
    ) -> Result<Vec<Lesson>>;
    // 删除课程
    async fn delete_lesson(&self, lesson_id: i64) -> Result<bool>;

    /// 作业管理方法
    // 创建作业并为每个学生生成 pending 分配
    async fn create_homework_with_assignments(
        &self,
        created_by: i64,
        homework: CreateHomeworkRequest,
    ) -> Result<Homework>;
    // 通过ID获取作业信息
    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>>;
    // 列出教师创建的作业（带提交统计）
    async fn list_teacher_homeworks(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherHomeworkSummary>>;
    // 删除作业（级联删除分配）
    async fn delete_homework(&self, homework_id: i64) -> Result<bool>;

    /// 作业分配方法
    // 列出学生的全部分配（附带所属作业）
    async fn list_student_assignments(
        &self,
        student_id: i64,
    ) -> Result<Vec<(HomeworkAssignment, Homework)>>;
    // 通过ID获取分配信息
    async fn get_assignment_by_id(&self, assignment_id: i64)
    -> Result<Option<HomeworkAssignment>>;
    // 列出某作业的全部分配
    async fn list_homework_assignments(
        &self,
        homework_id: i64,
    ) -> Result<Vec<HomeworkAssignment>>;
    // 写入提交：状态由业务层决定（submitted 或 late）
    async fn record_submission(
        &self,
        assignment_id: i64,
        status: AssignmentStatus,
        submit_file_url: Option<String>,
        submission_text: Option<String>,
    ) -> Result<HomeworkAssignment>;
    // 写入评分：状态置为 graded
    async fn record_grade(
        &self,
        assignment_id: i64,
        grade: String,
        feedback: Option<String>,
    ) -> Result<HomeworkAssignment>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
