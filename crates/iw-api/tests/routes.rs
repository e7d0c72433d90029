use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use async_trait::async_trait;
use iw_api::middleware::security_headers;
use iw_api::{configure_routes, AppState};
use iw_core::models::{DiaryEntry, NewEntry};
use iw_core::traits::EntryRepo;
use iw_db_sqlite::SqliteEntryRepo;
use uuid::Uuid;

async fn sqlite_state() -> web::Data<AppState> {
    let repo = SqliteEntryRepo::new("sqlite::memory:", 1)
        .await
        .expect("in-memory database");
    web::Data::new(AppState {
        repo: Box::new(repo),
    })
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state)
                .wrap(security_headers())
                .configure(configure_routes),
        )
        .await
    };
}

async fn body_text(resp: ServiceResponse<impl MessageBody>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

fn post_entry(fields: &[(&str, &str)]) -> test::TestRequest {
    test::TestRequest::post().uri("/entries/new").set_form(fields)
}

#[actix_web::test]
async fn empty_diary_shows_empty_state() {
    let app = test_app!(sqlite_state().await);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("x-content-type-options").unwrap(), "nosniff");

    let html = body_text(resp).await;
    assert!(html.contains("No diary entries yet"));
}

#[actix_web::test]
async fn create_then_list_shows_card() {
    let state = sqlite_state().await;
    let app = test_app!(state.clone());

    let resp = test::call_service(
        &app,
        post_entry(&[
            ("title", "Day One"),
            ("content", "It was sunny."),
            ("mood", "😊 Happy"),
            ("tags", "sun, park"),
        ])
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let html = body_text(resp).await;
    assert!(html.contains("Day One"));
    assert!(html.contains("😊 Happy"));
    assert!(html.contains("#sun"));
    assert!(html.contains("#park"));

    let stored = state.repo.find_recent(10).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].mood.as_deref(), Some("😊 Happy"));
    assert_eq!(stored[0].tags.as_deref(), Some("sun, park"));
}

#[actix_web::test]
async fn created_entry_is_trimmed_and_optionals_null() {
    let state = sqlite_state().await;
    let app = test_app!(state.clone());

    let resp = test::call_service(
        &app,
        post_entry(&[
            ("title", "  Padded  "),
            ("content", "\n body \n"),
            ("mood", ""),
            ("tags", "   "),
        ])
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let entry = state.repo.find_recent(1).await.unwrap().remove(0);
    let found = state.repo.find_by_id(entry.id).await.unwrap().unwrap();
    assert_eq!(found.title, "Padded");
    assert_eq!(found.content, "body");
    assert!(found.mood.is_none());
    assert!(found.tags.is_none());
}

#[actix_web::test]
async fn invalid_submission_rerenders_form_without_persisting() {
    let state = sqlite_state().await;
    let app = test_app!(state.clone());

    let resp = test::call_service(
        &app,
        post_entry(&[("title", "   "), ("content", "kept text"), ("tags", "x, y")]).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let html = body_text(resp).await;
    assert!(html.contains("Title is required"));
    assert!(!html.contains("Content is required"));
    assert!(html.contains("kept text"));
    assert!(state.repo.find_recent(10).await.unwrap().is_empty());

    let resp = test::call_service(&app, post_entry(&[("title", "only title")]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("Content is required"));
    assert!(state.repo.find_recent(10).await.unwrap().is_empty());
}

#[actix_web::test]
async fn new_entry_form_lists_moods() {
    let app = test_app!(sqlite_state().await);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/entries/new").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("<title>New Entry - My Diary</title>"));
    assert!(html.contains("❤️ Grateful"));
    assert!(!html.contains("field-error\">"));
}

#[actix_web::test]
async fn detail_shows_full_content() {
    let state = sqlite_state().await;
    let app = test_app!(state.clone());

    let long = format!("{}\nsecond line", "w".repeat(250));
    let input = NewEntry::parse("Long one", &long, None, Some("work, family, travel")).unwrap();
    let entry = state.repo.create(input).await.unwrap();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let list = body_text(resp).await;
    assert!(list.contains(&format!("{}...", "w".repeat(200))));
    assert!(!list.contains("second line"));

    let uri = format!("/entries/{}", entry.id);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("<title>Long one - My Diary</title>"));
    assert!(html.contains(&long));
    for tag in ["#work", "#family", "#travel"] {
        assert!(html.contains(tag));
    }
    assert!(!html.contains("Updated"));
}

#[actix_web::test]
async fn list_keeps_ten_newest() {
    let state = sqlite_state().await;
    let app = test_app!(state.clone());

    for i in 0..12 {
        let title = format!("entry-{i:02}");
        let req = post_entry(&[("title", title.as_str()), ("content", "c")]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let html = body_text(resp).await;

    assert!(!html.contains("entry-00"));
    assert!(!html.contains("entry-01"));
    let newest = html.find("entry-11").expect("newest entry listed");
    let oldest = html.find("entry-02").expect("tenth entry listed");
    assert!(newest < oldest);
}

#[actix_web::test]
async fn unknown_entry_is_not_found() {
    let app = test_app!(sqlite_state().await);

    let uri = format!("/entries/{}", Uuid::now_v7());
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("Entry not found"));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/entries/not-a-uuid").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn missing_entry_id_is_bad_request() {
    let app = test_app!(sqlite_state().await);

    for uri in ["/entries/", "/entries", "/entries/%20"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert!(body_text(resp).await.contains("Entry ID is required"));
    }
}

struct BrokenRepo;

#[async_trait]
impl EntryRepo for BrokenRepo {
    async fn create(&self, _input: NewEntry) -> anyhow::Result<DiaryEntry> {
        anyhow::bail!("database is locked")
    }

    async fn find_recent(&self, _limit: i64) -> anyhow::Result<Vec<DiaryEntry>> {
        anyhow::bail!("database is locked")
    }

    async fn find_by_id(&self, _id: Uuid) -> anyhow::Result<Option<DiaryEntry>> {
        anyhow::bail!("database is locked")
    }
}

#[actix_web::test]
async fn storage_failure_is_server_error() {
    let state = web::Data::new(AppState {
        repo: Box::new(BrokenRepo),
    });
    let app = test_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_text(resp).await.contains("database is locked"));

    let resp = test::call_service(&app, post_entry(&[("title", "t"), ("content", "c")]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
