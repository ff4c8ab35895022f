//! Web response - Envelope uniforme per tutte le risposte API
//!
//! Ogni endpoint risponde con `{success, message, data}`; `data` viene
//! omesso quando non c'è nulla da restituire.

use crate::core::error::FieldError;
use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct WebResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> WebResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        let message = if message.is_empty() { "Success" } else { message };
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl WebResponse<Vec<FieldError>> {
    pub fn failure(message: String, errors: Option<Vec<FieldError>>) -> Self {
        let message = if message.is_empty() {
            "An error occurred".to_string()
        } else {
            message
        };
        Self {
            success: false,
            message,
            data: errors,
        }
    }
}

/// 200 OK con envelope di successo
pub fn ok<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<WebResponse<T>>) {
    (StatusCode::OK, Json(WebResponse::success(data, message)))
}

/// 201 Created con envelope di successo
pub fn created<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<WebResponse<T>>) {
    (StatusCode::CREATED, Json(WebResponse::success(data, message)))
}
