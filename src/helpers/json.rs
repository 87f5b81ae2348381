use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde_derive::Serialize;

#[derive(Serialize, Debug)]
pub struct JsonResponse<T> {
    pub status: String,
    pub message: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<i64>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_id(mut self, id: i64) -> Self {
        self.id = Some(id);
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

    fn into_response(self, status: &str, code: StatusCode, message: &str) -> JsonResponse<T> {
        JsonResponse {
            status: status.to_string(),
            message: message.to_string(),
            code: code.as_u16(),
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    fn to_error(self, code: StatusCode, message: &str, fallback: &str) -> actix_web::Error {
        let message = if message.trim().is_empty() {
            fallback
        } else {
            message
        };
        let body = self.into_response("Error", code, message);
        InternalError::from_response(message.to_string(), HttpResponse::build(code).json(body))
            .into()
    }

    pub fn ok(self, message: &str) -> web::Json<JsonResponse<T>> {
        let message = if message.trim().is_empty() {
            "Success"
        } else {
            message
        };
        web::Json(self.into_response("OK", StatusCode::OK, message))
    }

    pub fn created(self, message: &str) -> HttpResponse {
        HttpResponse::Created().json(self.into_response("OK", StatusCode::CREATED, message))
    }

    pub fn form_error(self, message: String) -> actix_web::Error {
        self.to_error(StatusCode::BAD_REQUEST, &message, "Validation error")
    }
}
