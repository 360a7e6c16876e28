use crate::normalize::NormalizeError;
use actix_http::body::BoxBody;
use actix_web::{error, http::StatusCode, HttpResponse};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub struct APIError {
    #[serde(skip)]
    pub code: u16,
    pub msg: String,
}

impl APIError {
    pub fn new(code: u16, msg: &str) -> Self {
        Self {
            code,
            msg: msg.to_string(),
        }
    }

    pub fn bad_request(msg: &str) -> Self {
        Self::new(400, msg)
    }
}

impl error::ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code())
            .content_type("application/json; charset=utf-8")
            .json(self)
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for APIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HTTP {}] {}", self.code, self.msg)
    }
}

impl From<NormalizeError> for APIError {
    fn from(err: NormalizeError) -> Self {
        debug!(exception.message = %err, "The URL could not be normalized");

        Self::bad_request(&err.to_string())
    }
}
