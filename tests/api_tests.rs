use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use greenroom::config::Config;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let db_path = std::env::temp_dir().join(format!("greenroom-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = greenroom::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    greenroom::api::router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn post(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn create_episode(app: &Router, number: i64) -> i64 {
    let (status, body) = post(
        app,
        "/episodes",
        &json!({
            "title": format!("Episode {number}"),
            "description": "Late night",
            "date": "2024-03-05",
            "number": number,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn create_guest(app: &Router, name: &str) -> i64 {
    let (status, body) = post(
        app,
        "/guests",
        &json!({ "name": name, "occupation": "actor" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_list_episodes_empty_then_populated() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/episodes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    create_episode(&app, 1).await;
    create_episode(&app, 2).await;

    let (status, body) = get(&app, "/episodes").await;
    assert_eq!(status, StatusCode::OK);

    let episodes = body.as_array().unwrap();
    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0]["number"], 1);
    assert_eq!(episodes[1]["number"], 2);

    let first = episodes[0].as_object().unwrap();
    let mut keys: Vec<&str> = first.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["date", "description", "id", "number", "title"]);
    assert_eq!(first["date"], "03/05/24");
}

#[tokio::test]
async fn test_create_episode_validation() {
    let app = spawn_app().await;

    let (status, body) = post(
        &app,
        "/episodes",
        &json!({ "title": "Pilot", "date": "March 5th", "number": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("YYYY-MM-DD"));

    let (status, body) = post(&app, "/episodes", &json!({ "date": "2024-03-05", "number": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: title");

    let (_, body) = get(&app, "/episodes").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_episode_full_view() {
    let app = spawn_app().await;
    let episode_id = create_episode(&app, 7).await;
    let guest_id = create_guest(&app, "Gwyneth Paltrow").await;

    let (status, _) = post(
        &app,
        "/appearances",
        &json!({ "rating": 4, "episode_id": episode_id, "guest_id": guest_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, &format!("/episodes/{episode_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 7);

    let appearance = &body["appearances"][0];
    assert_eq!(appearance["rating"], 4);
    assert_eq!(appearance["guest"]["name"], "Gwyneth Paltrow");
    assert!(appearance.get("episode").is_none());
    assert!(appearance["guest"].get("appearances").is_none());
}

#[tokio::test]
async fn test_get_missing_episode_is_404() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/episodes/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Episode 999 not found" }));
}

#[tokio::test]
async fn test_unparseable_id_is_json_404() {
    let app = spawn_app().await;

    for uri in ["/episodes/abc", "/episodes/99999999999", "/guests/abc"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json",
            "GET {uri}"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].is_string(), "GET {uri}");
    }

    let delete = Request::builder()
        .method("DELETE")
        .uri("/episodes/abc")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, delete).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_delete_episode_cascades() {
    let app = spawn_app().await;
    let episode_id = create_episode(&app, 1).await;
    let guest_id = create_guest(&app, "Tom Hanks").await;

    let (status, _) = post(
        &app,
        "/appearances",
        &json!({ "rating": 5, "episode_id": episode_id, "guest_id": guest_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/episodes/{episode_id}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, delete).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = get(&app, &format!("/episodes/{episode_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Guest survives, its appearance does not.
    let (status, body) = get(&app, &format!("/guests/{guest_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appearances"], json!([]));

    let delete_again = Request::builder()
        .method("DELETE")
        .uri(format!("/episodes/{episode_id}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, delete_again).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_guests_list_and_create() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/guests").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = post(&app, "/guests", &json!({ "name": "Ada Lovelace" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["occupation"], Value::Null);

    let (status, _) = post(&app, "/guests", &json!({ "name": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, "/guests").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = get(&app, "/guests/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_appearance() {
    let app = spawn_app().await;
    let episode_id = create_episode(&app, 3).await;
    let guest_id = create_guest(&app, "Michael J. Fox").await;

    let (status, body) = post(
        &app,
        "/appearances",
        &json!({ "rating": 3, "episode_id": episode_id, "guest_id": guest_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["rating"], 3);
    assert_eq!(body["episode_id"], episode_id);
    assert_eq!(body["guest_id"], guest_id);
    assert_eq!(body["episode"]["date"], "03/05/24");
    assert_eq!(body["guest"]["name"], "Michael J. Fox");
    assert!(body["episode"].get("appearances").is_none());
}

#[tokio::test]
async fn test_create_appearance_rejects_out_of_range_rating() {
    let app = spawn_app().await;
    let episode_id = create_episode(&app, 1).await;
    let guest_id = create_guest(&app, "Bill Murray").await;

    for rating in [0, 6, -1] {
        let (status, body) = post(
            &app,
            "/appearances",
            &json!({ "rating": rating, "episode_id": episode_id, "guest_id": guest_id }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("between 1 and 5"));
    }

    let (_, body) = get(&app, &format!("/episodes/{episode_id}")).await;
    assert_eq!(body["appearances"], json!([]));
}

#[tokio::test]
async fn test_create_appearance_bad_input() {
    let app = spawn_app().await;
    let episode_id = create_episode(&app, 1).await;
    let guest_id = create_guest(&app, "Bill Murray").await;

    let (status, body) = post(
        &app,
        "/appearances",
        &json!({ "episode_id": episode_id, "guest_id": guest_id }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: rating");

    let (status, _) = post(
        &app,
        "/appearances",
        &json!({ "rating": 2, "episode_id": 999, "guest_id": guest_id }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &app,
        "/appearances",
        &json!({ "rating": 2, "episode_id": episode_id, "guest_id": 999 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let malformed = Request::builder()
        .method("POST")
        .uri("/appearances")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"rating\": "))
        .unwrap();
    let (status, body) = send(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, body) = get(&app, &format!("/episodes/{episode_id}")).await;
    assert_eq!(body["appearances"], json!([]));
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
