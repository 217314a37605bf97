//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod groups;
mod homeworks;
mod lessons;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, StudyHubError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| StudyHubError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| StudyHubError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| StudyHubError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(StudyHubError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    groups::{entities::Group, requests::CreateGroupRequest, responses::GroupSummary},
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 小组模块
    async fn create_group(&self, teacher_id: i64, group: CreateGroupRequest) -> Result<Group> {
        self.create_group_impl(teacher_id, group).await
    }

    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<Group>> {
        self.get_group_by_id_impl(group_id).await
    }

    async fn list_teacher_groups(&self, teacher_id: i64) -> Result<Vec<GroupSummary>> {
        self.list_teacher_groups_impl(teacher_id).await
    }

    async fn list_student_groups(&self, student_id: i64) -> Result<Vec<GroupSummary>> {
        self.list_student_groups_impl(student_id).await
    }

    async fn list_group_students(&self, group_id: i64) -> Result<Vec<User>> {
        self.list_group_students_impl(group_id).await
    }

    async fn is_group_member(&self, group_id: i64, student_id: i64) -> Result<bool> {
        self.is_group_member_impl(group_id, student_id).await
    }

    async fn delete_group(&self, group_id: i64) -> Result<bool> {
        self.delete_group_impl(group_id).await
    }

    // 课程模块
    async fn create_lesson(&self, created_by: i64, lesson: CreateLessonRequest) -> Result<Lesson> {
        self.create_lesson_impl(created_by, lesson).await
    }

    async fn get_lesson_by_id(&self, lesson_id: i64) -> Result<Option<Lesson>> {
        self.get_lesson_by_id_impl(lesson_id).await
    }

    async fn list_student_lessons(&self, student_id: i64) -> Result<Vec<Lesson>> {
        self.list_student_lessons_impl(student_id).await
    }

    async fn list_recent_teacher_lessons(
        &self,
        teacher_id: i64,
        limit: i64,
    ) -> Result<Vec<Lesson>> {
        self.list_recent_teacher_lessons_impl(teacher_id, limit)
            .await
    }

    async fn delete_lesson(&self, lesson_id: i64) -> Result<bool> {
        self.delete_lesson_impl(lesson_id).await
    }

    // 作业模块
    async fn create_homework_with_assignments(
        &self,
        created_by: i64,
        homework: CreateHomeworkRequest,
    ) -> Result<Homework> {
        self.create_homework_with_assignments_impl(created_by, homework)
            .await
    }

    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>> {
        self.get_homework_by_id_impl(homework_id).await
    }

    async fn list_teacher_homeworks(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherHomeworkSummary>> {
        self.list_teacher_homeworks_impl(teacher_id).await
    }

    async fn delete_homework(&self, homework_id: i64) -> Result<bool> {
        self.delete_homework_impl(homework_id).await
    }

    // 作业分配模块
    async fn list_student_assignments(
        &self,
        student_id: i64,
    ) -> Result<Vec<(HomeworkAssignment, Homework)>> {
        self.list_student_assignments_impl(student_id).await
    }

    async fn get_assignment_by_id(
        &self,
        assignment_id: i64,
    ) -> Result<Option<HomeworkAssignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_homework_assignments(
        &self,
        homework_id: i64,
    ) -> Result<Vec<HomeworkAssignment>> {
        self.list_homework_assignments_impl(homework_id).await
    }

    async fn record_submission(
        &self,
        assignment_id: i64,
        status: AssignmentStatus,
        submit_file_url: Option<String>,
        submission_text: Option<String>,
    ) -> Result<HomeworkAssignment> {
        self.record_submission_impl(assignment_id, status, submit_file_url, submission_text)
            .await
    }

    async fn record_grade(
        &self,
        assignment_id: i64,
        grade: String,
        feedback: Option<String>,
    ) -> Result<HomeworkAssignment> {
        self.record_grade_impl(assignment_id, grade, feedback).await
    }
}
