//! # iw-api Handlers
//!
//! This module coordinates the flow between HTTP requests and Core traits.

use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse};
use askama::Template;
use iw_core::error::AppError;
use iw_core::traits::EntryRepo;
use iw_core::validation::FieldErrors;
use iw_core::RECENT_LIMIT;
use iw_ui::views::{mood_options, prefix, DESCRIPTION_LEN};
use iw_ui::{EntryCard, EntryDetail, EntryTemplate, IndexTemplate, NewEntryTemplate};
use uuid::Uuid;

use crate::error::ApiError;
use crate::forms::NewEntryForm;

/// State shared across all Actix-web workers.
pub struct AppState {
    pub repo: Box<dyn EntryRepo>,
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(header::ContentType::html())
        .body(body)
}

/// Renders the ten most recent entries.
pub async fn index(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let entries = data.repo.find_recent(RECENT_LIMIT).await?;
    let cards: Vec<EntryCard> = entries.iter().map(EntryCard::from).collect();

    let body = IndexTemplate {
        page_title: "My Diary",
        description: "A place to record my thoughts and memories",
        cards: &cards,
    }
    .render()?;

    Ok(html(StatusCode::OK, body))
}

/// Renders one entry (e.g., /entries/<uuid>)
///
/// A malformed id cannot name any entry, so it is answered like an unknown one.
pub async fn view_entry(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let raw_id = path.into_inner();
    let raw_id = raw_id.trim();
    if raw_id.is_empty() {
        return Err(AppError::MissingId("Entry").into());
    }

    let Ok(id) = Uuid::parse_str(raw_id) else {
        return Err(AppError::NotFound("Entry").into());
    };

    let entry = data
        .repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Entry"))?;

    let detail = EntryDetail::from(&entry);
    let page_title = format!("{} - My Diary", entry.title);
    let body = EntryTemplate {
        page_title: &page_title,
        description: prefix(&entry.content, DESCRIPTION_LEN),
        entry: &detail,
    }
    .render()?;

    Ok(html(StatusCode::OK, body))
}

/// `/entries/` without an identifier.
pub async fn missing_entry_id() -> Result<HttpResponse, ApiError> {
    Err(AppError::MissingId("Entry").into())
}

fn render_form(
    status: StatusCode,
    form: &NewEntryForm,
    errors: &FieldErrors,
) -> Result<HttpResponse, ApiError> {
    let moods = mood_options(form.mood.as_deref());
    let body = NewEntryTemplate {
        page_title: "New Entry - My Diary",
        description: "Write a new diary entry",
        title: &form.title,
        content: &form.content,
        tags: form.tags.as_deref().unwrap_or_default(),
        moods: &moods,
        errors,
    }
    .render()?;

    Ok(html(status, body))
}

pub async fn new_entry_form() -> Result<HttpResponse, ApiError> {
    render_form(StatusCode::OK, &NewEntryForm::default(), &FieldErrors::new())
}

/// Validates the submission once, then writes it once.
///
/// Invalid input re-renders the form with 400 and persists nothing.
pub async fn create_entry(
    data: web::Data<AppState>,
    form: web::Form<NewEntryForm>,
) -> Result<HttpResponse, ApiError> {
    let form = form.into_inner();

    let input = match form.parse() {
        Ok(input) => input,
        Err(errors) => {
            log::debug!("rejected new entry: {errors}");
            return render_form(StatusCode::BAD_REQUEST, &form, &errors);
        }
    };

    data.repo.create(input).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish())
}
