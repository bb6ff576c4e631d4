//! End-to-end tests driving the assembled application over the in-memory
//! word table.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::web;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use wordbook::domain::{CORRELATION_ID_HEADER, SearchSettings};
use wordbook::inbound::http::health::HealthState;
use wordbook::outbound::memory::InMemoryWordTable;
use wordbook::server::{AppDependencies, ServerConfig, build_app, create_server};

#[fixture]
fn table() -> Arc<InMemoryWordTable> {
    Arc::new(InMemoryWordTable::default())
}

async fn init_app(
    table: Arc<InMemoryWordTable>,
    search: SearchSettings,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    let config = ServerConfig::new("127.0.0.1:0".parse().expect("socket address"), table)
        .with_search_settings(search);
    let deps = AppDependencies::from_config(web::Data::new(HealthState::new()), &config);
    test::init_service(build_app(deps)).await
}

async fn send<S, B>(app: &S, req: TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn post_word(value: &str, meaning: &str) -> TestRequest {
    TestRequest::post()
        .uri("/word")
        .set_json(json!({"value": value, "meaning": meaning}))
}

#[rstest]
#[actix_web::test]
async fn word_lifecycle(table: Arc<InMemoryWordTable>) {
    let app = init_app(table, SearchSettings::default()).await;

    let (status, created) = send(&app, post_word("hello", "greeting")).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().expect("id").to_owned();
    assert!(!id.is_empty());

    let (status, fetched) = send(&app, TestRequest::get().uri(&format!("/word/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, deleted) = send(&app, TestRequest::delete().uri(&format!("/word/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!(true));

    let (status, body) = send(&app, TestRequest::get().uri(&format!("/word/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Word not found");
}

#[rstest]
#[actix_web::test]
async fn search_matches_value_case_insensitively(table: Arc<InMemoryWordTable>) {
    let app = init_app(table, SearchSettings::default()).await;
    let (_, alpha) = send(&app, post_word("alpha", "first")).await;
    send(&app, post_word("beta", "second")).await;

    let (status, found) = send(&app, TestRequest::get().uri("/word/search?query=ALPH")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, json!([alpha]));
}

#[rstest]
#[actix_web::test]
async fn search_without_matches_is_an_empty_list(table: Arc<InMemoryWordTable>) {
    let app = init_app(table, SearchSettings::default()).await;
    send(&app, post_word("alpha", "first")).await;

    for uri in ["/word/search?query=zeta", "/word/search?query=", "/word/search"] {
        let (status, found) = send(&app, TestRequest::get().uri(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(found, json!([]), "{uri}");
    }
}

#[rstest]
#[actix_web::test]
async fn search_is_capped(table: Arc<InMemoryWordTable>) {
    let app = init_app(
        table,
        SearchSettings::new(2).with_empty_query_matches_all(true),
    )
    .await;
    for value in ["one", "two", "three"] {
        send(&app, post_word(value, "number")).await;
    }

    let (_, by_meaning) = send(&app, TestRequest::get().uri("/word/search?query=numb")).await;
    let (_, everything) = send(&app, TestRequest::get().uri("/word/search?query=")).await;

    assert_eq!(by_meaning.as_array().map(Vec::len), Some(2));
    assert_eq!(everything.as_array().map(Vec::len), Some(2));
}

#[rstest]
#[actix_web::test]
async fn invalid_create_writes_nothing(table: Arc<InMemoryWordTable>) {
    let app = init_app(Arc::clone(&table), SearchSettings::default()).await;

    let req = TestRequest::post()
        .uri("/word")
        .set_json(json!({"meaning": "greeting"}));
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["errors"][0]["field"], "value");
    assert!(table.is_empty().await);
}

#[rstest]
#[actix_web::test]
async fn update_replaces_the_stored_word(table: Arc<InMemoryWordTable>) {
    let app = init_app(table, SearchSettings::default()).await;
    let (_, created) = send(&app, post_word("colour", "a hue")).await;
    let id = created["id"].as_str().expect("id").to_owned();

    let req = TestRequest::put().uri("/word").set_json(json!({
        "id": id,
        "value": "colour",
        "soundsLike": "kuh-ler",
        "meaning": "a visual hue",
    }));
    let (status, updated) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, TestRequest::get().uri(&format!("/word/{id}"))).await;
    assert_eq!(fetched, updated);
    assert_eq!(fetched["soundsLike"], "kuh-ler");
}

#[rstest]
#[actix_web::test]
async fn update_without_id_is_rejected(table: Arc<InMemoryWordTable>) {
    let app = init_app(Arc::clone(&table), SearchSettings::default()).await;

    let req = TestRequest::put()
        .uri("/word")
        .set_json(json!({"value": "hello", "meaning": "greeting"}));
    let (status, _) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(table.is_empty().await);
}

#[rstest]
#[actix_web::test]
async fn delete_of_unknown_word_is_not_found(table: Arc<InMemoryWordTable>) {
    let app = init_app(table, SearchSettings::default()).await;

    let (status, body) = send(&app, TestRequest::delete().uri("/word/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[rstest]
#[case(Some("client-supplied-7"), true)]
#[case(Some("  "), false)]
#[case(None, false)]
#[actix_web::test]
async fn every_response_carries_a_correlation_id(
    table: Arc<InMemoryWordTable>,
    #[case] inbound: Option<&str>,
    #[case] echoed: bool,
) {
    let app = init_app(table, SearchSettings::default()).await;
    let mut req = TestRequest::get().uri("/word/missing");
    if let Some(value) = inbound {
        req = req.insert_header((CORRELATION_ID_HEADER, value));
    }

    let res = test::call_service(&app, req.to_request()).await;
    let header = res
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("correlation header")
        .to_owned();
    let body = test::read_body(res).await;
    let body: Value = serde_json::from_slice(&body).expect("json body");

    if echoed {
        assert_eq!(Some(header.as_str()), inbound);
    } else {
        assert!(!header.trim().is_empty());
    }
    assert_eq!(body["correlationId"], header.as_str());
}

#[rstest]
#[actix_web::test]
async fn liveness_probe_answers(table: Arc<InMemoryWordTable>) {
    let app = init_app(table, SearchSettings::default()).await;

    let (status, _) = send(&app, TestRequest::get().uri("/health/live")).await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn server_reports_ready_once_bound(table: Arc<InMemoryWordTable>) {
    let health = web::Data::new(HealthState::new());
    assert!(!health.is_ready());
    let config = ServerConfig::new("127.0.0.1:0".parse().expect("socket address"), table);

    let server = create_server(health.clone(), config).expect("server binds");
    assert!(health.is_ready());
    assert!(health.is_alive());

    let handle = server.handle();
    let running = actix_web::rt::spawn(server);
    handle.stop(false).await;
    running
        .await
        .expect("server task joins")
        .expect("server stops cleanly");
}
