use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码目录：4xxyy/5xxyy 与 HTTP 状态码段对应
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,

    Unauthorized = 40100,
    AuthFailed = 40101,

    Forbidden = 40300,
    GroupPermissionDenied = 40301,

    NotFound = 40400,
    UserNotFound = 40401,
    GroupNotFound = 40402,
    LessonNotFound = 40403,
    HomeworkNotFound = 40404,
    AssignmentNotFound = 40405,

    UserEmailAlreadyExists = 40901,

    AssignmentStateInvalid = 42200,

    RateLimitExceeded = 42900,

    InternalServerError = 50000,
    RegisterFailed = 50001,
    GroupCreationFailed = 50002,
}

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_carries_data() {
        let resp = ApiResponse::success("hello".to_string(), "ok");
        assert_eq!(resp.code, ErrorCode::Success as i32);
        assert_eq!(resp.data.as_deref(), Some("hello"));
    }

    #[test]
    fn test_error_empty_skips_data_field() {
        let resp = ApiResponse::error_empty(ErrorCode::NotFound, "missing");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("\"data\""));
        assert!(json.contains("40400"));
    }
}
