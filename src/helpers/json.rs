use actix_web::error::{Error, InternalError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Serialize;

/// Envelope of every JSON reply that is not a flow error.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T> {
    pub status: String,
    pub message: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T> {
    id: Option<String>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T: Serialize> JsonResponseBuilder<T> {
    pub fn set_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn to_json_response(self, status: StatusCode, message: String) -> JsonResponse<T> {
        let label = if status.is_success() { "OK" } else { "Error" };
        JsonResponse {
            status: label.to_string(),
            message,
            code: status.as_u16(),
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub fn ok(self, message: impl Into<String>) -> web::Json<JsonResponse<T>> {
        web::Json(self.to_json_response(StatusCode::OK, message.into()))
    }

    pub fn created(self, message: impl Into<String>) -> HttpResponse {
        HttpResponse::Created().json(self.to_json_response(StatusCode::CREATED, message.into()))
    }

    fn to_error(self, status: StatusCode, message: String) -> Error {
        let response = HttpResponse::build(status).json(self.to_json_response(status, message.clone()));
        InternalError::from_response(message, response).into()
    }

    pub fn bad_request(self, message: impl Into<String>) -> Error {
        self.to_error(StatusCode::BAD_REQUEST, message.into())
    }

    /// 400 carrying serde_valid errors.
    pub fn form_error(self, errors: impl Into<String>) -> Error {
        let errors = errors.into();
        tracing::debug!("Invalid data received {}", errors);
        self.to_error(StatusCode::BAD_REQUEST, errors)
    }

    pub fn not_found(self, message: impl Into<String>) -> Error {
        self.to_error(StatusCode::NOT_FOUND, message.into())
    }

    pub fn internal_server_error(self, message: impl Into<String>) -> Error {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Internal error".to_string()
        } else {
            message
        };
        self.to_error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
