use crate::types::error::AppError;
use actix_web::{http::header::ContentType, HttpResponse, Responder};
use serde::Serialize;

pub enum ApiResponse<T> {
    Ok(T),
    Created(T),
    /// 200 with the body pretty-printed using a four-space indent.
    Pretty(T),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::Created(v) => HttpResponse::Created().json(v),
            ApiResponse::Pretty(v) => match to_pretty_json(&v) {
                Ok(body) => HttpResponse::Ok()
                    .content_type(ContentType::json())
                    .body(body),
                Err(e) => actix_web::ResponseError::error_response(&e),
            },
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| AppError::Internal(format!("serialize failed: {e}")))?;
    String::from_utf8(buf).map_err(|e| AppError::Internal(format!("serialize failed: {e}")))
}

/// Body shared by every mutation route.
#[derive(Serialize, Debug)]
pub struct MessageRes {
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
