// End-to-end tests over the fully assembled router: route groups, static
// files, the 404 fallthrough, and the terminal error-view stage.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::config::Environment;
use crate::modules::users::model::NewUser;
use crate::modules::users::queries as users;
use crate::shell::http::router;
use crate::tests::support::{test_config, test_state};

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn it_should_render_a_404_naming_the_method_and_path() {
    let app = router(test_state(Environment::Development).await);

    let response = app
        .oneshot(
            Request::get("/no/such/route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("GET"));
    assert!(html.contains("/no/such/route"));
}

#[tokio::test]
async fn it_should_reach_the_404_stage_for_non_get_methods_too() {
    let app = router(test_state(Environment::Development).await);

    let response = app
        .oneshot(
            Request::post("/nowhere")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("POST"));
    assert!(html.contains("/nowhere"));
}

#[tokio::test]
async fn it_should_default_handler_errors_to_500_with_detail_in_development() {
    let state = test_state(Environment::Development).await;
    sqlx::query("DROP TABLE users")
        .execute(&state.db)
        .await
        .unwrap();

    let response = router(state)
        .oneshot(Request::get("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(response).await;
    assert!(html.contains("internal server error"));
    // Development exposes the underlying database failure.
    assert!(html.contains("no such table"));
}

#[tokio::test]
async fn it_should_hide_error_detail_in_production() {
    let state = test_state(Environment::Production).await;
    sqlx::query("DROP TABLE users")
        .execute(&state.db)
        .await
        .unwrap();

    let response = router(state)
        .oneshot(Request::get("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(response).await;
    assert!(html.contains("internal server error"));
    assert!(!html.contains("no such table"));
}

#[tokio::test]
async fn it_should_serve_static_files_byte_for_byte() {
    let config = test_config(Environment::Development);
    let expected = std::fs::read(config.public_dir.join("style.css")).unwrap();

    let app = router(test_state(Environment::Development).await);
    let response = app
        .oneshot(Request::get("/style.css").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(bytes.as_ref(), expected.as_slice());
}

#[tokio::test]
async fn it_should_keep_serving_when_the_schema_is_missing() {
    // The shape the server is in when schema synchronization failed at
    // startup: listener up, tables absent.
    let state = test_state(Environment::Development).await;
    sqlx::query("DROP TABLE comments")
        .execute(&state.db)
        .await
        .unwrap();
    sqlx::query("DROP TABLE users")
        .execute(&state.db)
        .await
        .unwrap();
    let app = router(state);

    // Requests that need the schema fail per-request with a rendered 500.
    let broken = app
        .clone()
        .oneshot(Request::get("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(broken.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Requests that do not touch the database still succeed.
    let healthy = app
        .oneshot(Request::get("/style.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(healthy.status(), StatusCode::OK);
}

#[tokio::test]
async fn it_should_carry_a_full_user_and_comment_flow() {
    let state = test_state(Environment::Development).await;
    let app = router(state.clone());

    let created = app
        .clone()
        .oneshot(
            Request::post("/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"zero","age":24,"married":false,"comment":"hi"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let index = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(index.status(), StatusCode::OK);
    assert!(body_text(index).await.contains("zero"));

    let commented = app
        .clone()
        .oneshot(
            Request::post("/comments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"commenter":1,"comment":"first!"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(commented.status(), StatusCode::CREATED);

    let listed = app
        .oneshot(
            Request::get("/users/1/comments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_str(&body_text(listed).await).unwrap();
    assert_eq!(json[0]["comment"], "first!");
}

#[tokio::test]
async fn it_should_not_let_a_route_group_shadow_the_404_inside_its_prefix() {
    let app = router(test_state(Environment::Development).await);

    let response = app
        .oneshot(
            Request::get("/users/1/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("/users/1/unknown"));
}

// Handler-level state and direct query access must see the same pool; the
// inbound tests rely on it.
#[tokio::test]
async fn it_should_share_one_database_between_handlers_and_queries() {
    let state = test_state(Environment::Development).await;
    users::create(
        &state.db,
        &NewUser {
            name: "direct".to_string(),
            age: 30,
            married: true,
            comment: None,
        },
    )
    .await
    .unwrap();

    let response = router(state)
        .oneshot(Request::get("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("direct"));
}
