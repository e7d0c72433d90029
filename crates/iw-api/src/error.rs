//! HTTP mapping for failures raised while handling a request.

use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use iw_core::error::AppError;
use iw_ui::ErrorTemplate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::App(AppError::from(err))
    }
}

impl ApiError {
    /// What the visitor sees. Internal details stay in the log.
    fn public_message(&self) -> String {
        match self {
            ApiError::App(AppError::NotFound(_) | AppError::MissingId(_)) => self.to_string(),
            _ => "Something went wrong. Please try again later.".to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::App(AppError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::App(AppError::MissingId(_)) => StatusCode::BAD_REQUEST,
            ApiError::App(AppError::Internal(_)) | ApiError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("request failed: {self}");
        } else {
            log::debug!("request rejected with {status}: {self}");
        }

        let message = self.public_message();
        let page_title = format!("{} - My Diary", status.canonical_reason().unwrap_or("Error"));
        let rendered = ErrorTemplate {
            page_title: &page_title,
            description: &message,
            status: status.as_u16(),
            message: &message,
        }
        .render();

        match rendered {
            Ok(html) => HttpResponse::build(status)
                .content_type(ContentType::html())
                .body(html),
            Err(err) => {
                log::error!("error page rendering failed: {err}");
                HttpResponse::build(status)
                    .content_type(ContentType::plaintext())
                    .body(message)
            }
        }
    }
}
