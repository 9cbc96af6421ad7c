//! Tests for server assembly, covering readiness signalling and the
//! middleware applied to every response.

use super::*;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::net::SocketAddr;
use taskboard::TraceId;
use taskboard::domain::TRACE_ID_HEADER;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

fn deps(store: Arc<dyn DataStore>) -> AppDependencies {
    AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(HttpState::from_service(TaskBoardService::new(store))),
    }
}

#[rstest]
fn config_keeps_bind_address(bind_address: SocketAddr) {
    assert_eq!(ServerConfig::new(bind_address).bind_addr(), bind_address);
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    bind_address: SocketAddr,
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), ServerConfig::new(bind_address))
        .expect("server should build");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_web::test]
async fn responses_carry_cors_and_trace_headers() {
    let store = InMemoryDataStore::seeded().expect("seed data is valid");
    let app = actix_test::init_service(build_app(deps(Arc::new(store)))).await;

    for uri in ["/health", "/api/users", "/api/tasks/99"] {
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        let headers = response.headers();
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*"),
            "{uri} should allow any origin"
        );
        let trace = headers
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .expect("trace id header");
        trace.parse::<TraceId>().expect("trace id is a UUID");
    }
}

#[rstest]
#[case("/api/users/42", StatusCode::NOT_FOUND)]
#[case("/api/tasks/abc", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn error_body_trace_id_matches_header(#[case] uri: &str, #[case] status: StatusCode) {
    let store = InMemoryDataStore::seeded().expect("seed data is valid");
    let app = actix_test::init_service(build_app(deps(Arc::new(store)))).await;

    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), status);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .expect("trace id header")
        .to_owned();
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["traceId"], json!(header));
}

#[rstest]
#[actix_web::test]
async fn injected_store_replaces_seed() {
    let app =
        actix_test::init_service(build_app(deps(Arc::new(InMemoryDataStore::empty())))).await;

    let request = actix_test::TestRequest::get().uri("/api/stats").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["users"]["total"], 0);
    assert_eq!(body["tasks"]["total"], 0);
}

#[rstest]
fn build_store_prefers_injected_store(bind_address: SocketAddr) {
    let injected: Arc<dyn DataStore> = Arc::new(InMemoryDataStore::empty());
    let config = ServerConfig::new(bind_address).with_store(injected.clone());
    let store = build_store(&config).expect("store resolves");
    assert!(store.list_users().is_empty());

    let seeded = build_store(&ServerConfig::new(bind_address)).expect("seed is valid");
    assert_eq!(seeded.list_users().len(), 3);
}

#[rstest]
#[actix_rt::test]
async fn drain_fails_liveness_and_stops_server(
    health_state: web::Data<HealthState>,
    bind_address: SocketAddr,
) {
    let server = create_server(health_state.clone(), ServerConfig::new(bind_address))
        .expect("server should build");
    let handle = server.handle();
    let running = actix_rt::spawn(server);
    assert!(health_state.is_alive());

    drain(&handle, &health_state).await;

    assert!(!health_state.is_alive(), "draining should fail liveness");
    running
        .await
        .expect("server task joins")
        .expect("server stops cleanly");
}
