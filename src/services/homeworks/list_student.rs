use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::HomeworkService;
use crate::middlewares::RequireJWT;
use crate::models::homeworks::responses::{AssignmentView, HomeworkBrief};
use crate::models::users::entities::UserBrief;
use crate::models::{ApiResponse, ErrorCode};

/// 学生作业列表：每条分配都带状态引擎的展示结果
pub async fn list_student_assignments(
    service: &HomeworkService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let rows = match storage.list_student_assignments(current_user.id).await {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业列表失败: {e}"),
                )),
            );
        }
    };

    // 布置教师的摘要信息按 ID 去重查询
    let mut creators: HashMap<i64, UserBrief> = HashMap::new();
    let now = chrono::Utc::now();

    let mut views = Vec::with_capacity(rows.len());
    for (assignment, homework) in rows {
        if !creators.contains_key(&homework.created_by)
            && let Ok(Some(user)) = storage.get_user_by_id(homework.created_by).await
        {
            creators.insert(homework.created_by, UserBrief::from(&user));
        }

        let creator = creators.get(&homework.created_by).cloned();
        let brief = HomeworkBrief::from_homework(homework, creator);
        views.push(AssignmentView::build(assignment, brief, now));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(views, "查询成功")))
}
