use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::HomeworkService;
use crate::middlewares::RequireJWT;
use crate::models::homeworks::responses::{TeacherAssignmentView, TeacherHomeworkDetail};
use crate::models::homeworks::status;
use crate::models::users::entities::{UserBrief, UserRole};
use crate::models::{ApiResponse, ErrorCode};

/// 教师作业详情：全部学生分配，展示状态与学生页共用同一套推导
pub async fn get_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let homework = match storage.get_homework_by_id(homework_id).await {
        Ok(Some(homework)) => homework,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::HomeworkNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    // 权限验证：布置该作业的教师或管理员
    if current_user.role != UserRole::Admin && homework.created_by != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有布置该作业的教师可以查看全部分配",
        )));
    }

    let assignments = match storage.list_homework_assignments(homework_id).await {
        Ok(assignments) => assignments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业分配失败: {e}"),
                )),
            );
        }
    };

    let mut students: HashMap<i64, UserBrief> = HashMap::new();
    let now = chrono::Utc::now();

    let mut views = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        if !students.contains_key(&assignment.student_id)
            && let Ok(Some(user)) = storage.get_user_by_id(assignment.student_id).await
        {
            students.insert(assignment.student_id, UserBrief::from(&user));
        }

        let presentation = status::describe(
            &assignment.status,
            homework.due_date,
            assignment.grade.as_deref(),
            now,
        );
        views.push(TeacherAssignmentView {
            student: students.get(&assignment.student_id).cloned(),
            presentation,
            assignment,
        });
    }

    let detail = TeacherHomeworkDetail {
        homework,
        assignments: views,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功")))
}
