//! 路径参数安全提取器
//!
//! 统一把 `{id}` 路径段解析为正整数，解析失败直接返回 400 JSON 响应，
//! 业务处理函数拿到的一定是合法 ID。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn parse_id_segment(req: &HttpRequest) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get("id").unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let response = actix_web::HttpResponse::BadRequest().json(
                ApiResponse::error_empty(ErrorCode::BadRequest, format!("无效的 ID: '{raw}'")),
            );
            Err(actix_web::error::InternalError::from_response("invalid id", response).into())
        }
    }
}

macro_rules! define_safe_id_extractor {
    ($($name:ident),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    ready(parse_id_segment(req).map($name))
                }
            }
        )*
    };
}

define_safe_id_extractor!(SafeIdI64, SafeGroupIdI64, SafeLessonIdI64, SafeAssignmentIdI64);
