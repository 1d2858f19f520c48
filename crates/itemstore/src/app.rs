use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::health,
        items::{create_item, delete_item, get_item, list_items, update_item},
        not_found,
        root::root,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let timeout = state.request_timeout;

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppInfo;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_root_reports_backend() {
        let app = create_app(AppState::default());

        let response = send(&app, empty_request("GET", "/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "online");
        assert_eq!(body["storage"], "memory");
        assert_eq!(body["message"], "Welcome to the itemstore");
        assert_eq!(body["name"], "itemstore");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["description"].is_string());
    }

    #[tokio::test]
    async fn test_root_uses_configured_app_info() {
        let info = AppInfo {
            name: "Inventory".to_string(),
            version: "2.1.0".to_string(),
            description: "Warehouse items".to_string(),
        };
        let app = create_app(AppState::default().with_info(info));

        let body = body_json(send(&app, empty_request("GET", "/")).await).await;

        assert_eq!(body["message"], "Welcome to the Inventory");
        assert_eq!(body["name"], "Inventory");
        assert_eq!(body["version"], "2.1.0");
        assert_eq!(body["description"], "Warehouse items");
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_app(AppState::default());

        let response = send(&app, empty_request("GET", "/health")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_list_items_empty() {
        let app = create_app(AppState::default());

        let response = send(&app, empty_request("GET", "/items")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_widget_lifecycle() {
        let app = create_app(AppState::default());

        // Create
        let response = send(
            &app,
            json_request("POST", "/items", json!({ "name": "Widget", "price": 9.99 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["name"], "Widget");
        assert_eq!(created["price"], 9.99);
        assert_eq!(created["description"], Value::Null);
        assert_eq!(created["is_offer"], Value::Null);
        let id = created["id"].as_str().unwrap().to_string();
        let uri = format!("/items/{id}");

        // Read
        let response = send(&app, empty_request("GET", &uri)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);

        // Update
        let response = send(
            &app,
            json_request(
                "PUT",
                &uri,
                json!({ "name": "Widget2", "price": 12.5, "is_offer": true }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["id"], id.as_str());
        assert_eq!(updated["name"], "Widget2");
        assert_eq!(updated["price"], 12.5);
        assert_eq!(updated["is_offer"], true);
        assert_eq!(updated["created_at"], created["created_at"]);

        // Delete
        let response = send(&app, empty_request("DELETE", &uri)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());

        // Gone
        let response = send(&app, empty_request("GET", &uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["detail"], "Item not found");

        let response = send(&app, empty_request("DELETE", &uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_unsupplied_fields() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            json_request(
                "POST",
                "/items",
                json!({ "name": "Lamp", "price": 20.0, "description": "Desk lamp" }),
            ),
        )
        .await;
        let created = body_json(response).await;
        let uri = format!("/items/{}", created["id"].as_str().unwrap());

        let response = send(&app, json_request("PUT", &uri, json!({ "price": 18.0 }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["name"], "Lamp");
        assert_eq!(updated["description"], "Desk lamp");
        assert_eq!(updated["price"], 18.0);

        let response = send(&app, json_request("PUT", &uri, json!({ "description": null }))).await;
        assert_eq!(body_json(response).await["description"], Value::Null);
    }

    #[tokio::test]
    async fn test_update_null_required_field_is_rejected() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            json_request("POST", "/items", json!({ "name": "Widget", "price": 9.99 })),
        )
        .await;
        let created = body_json(response).await;
        let uri = format!("/items/{}", created["id"].as_str().unwrap());

        let response = send(
            &app,
            json_request("PUT", &uri, json!({ "name": null, "price": null })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let detail = body_json(response).await["detail"].as_str().unwrap().to_string();
        assert!(detail.contains("name"), "detail was {detail}");

        let response = send(&app, json_request("PUT", &uri, json!({ "price": null }))).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let detail = body_json(response).await["detail"].as_str().unwrap().to_string();
        assert!(detail.contains("price"), "detail was {detail}");

        let response = send(&app, empty_request("GET", &uri)).await;
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_empty_update_returns_item_unchanged() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            json_request("POST", "/items", json!({ "name": "Widget", "price": 9.99 })),
        )
        .await;
        let created = body_json(response).await;
        let uri = format!("/items/{}", created["id"].as_str().unwrap());

        let response = send(&app, json_request("PUT", &uri, json!({}))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated, created);
        assert_eq!(updated["updated_at"], created["updated_at"]);
    }

    #[tokio::test]
    async fn test_create_missing_price_is_rejected() {
        let app = create_app(AppState::default());

        let response = send(&app, json_request("POST", "/items", json!({ "name": "X" }))).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_json(response).await["detail"].is_string());

        let response = send(&app, empty_request("GET", "/items")).await;
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_non_numeric_price_is_rejected() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            json_request("POST", "/items", json!({ "name": "X", "price": "cheap" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_blank_name_is_rejected() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            json_request("POST", "/items", json!({ "name": "  ", "price": 1.0 })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["detail"],
            "Item name cannot be empty"
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = create_app(AppState::default());

        let request = Request::builder()
            .method("POST")
            .uri("/items")
            .header("Content-Type", "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported() {
        let app = create_app(AppState::default());

        let request = Request::builder()
            .method("POST")
            .uri("/items")
            .body(Body::from(json!({ "name": "X", "price": 1.0 }).to_string()))
            .unwrap();
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_invalid_id_is_unprocessable() {
        let app = create_app(AppState::default());

        for (method, request) in [
            ("GET", empty_request("GET", "/items/not-a-uuid")),
            ("DELETE", empty_request("DELETE", "/items/not-a-uuid")),
            (
                "PUT",
                json_request("PUT", "/items/not-a-uuid", json!({ "price": 1.0 })),
            ),
        ] {
            let response = send(&app, request).await;
            assert_eq!(
                response.status(),
                StatusCode::UNPROCESSABLE_ENTITY,
                "{method} with a malformed id"
            );
        }
    }

    #[tokio::test]
    async fn test_update_missing_item_does_not_create() {
        let app = create_app(AppState::default());
        let uri = format!("/items/{}", uuid::Uuid::new_v4());

        let response = send(
            &app,
            json_request("PUT", &uri, json!({ "name": "Ghost", "price": 1.0 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, empty_request("GET", "/items")).await;
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_list_after_creates_and_deletes() {
        let app = create_app(AppState::default());

        let mut ids = Vec::new();
        for name in ["a", "b", "c"] {
            let response = send(
                &app,
                json_request("POST", "/items", json!({ "name": name, "price": 1.0 })),
            )
            .await;
            ids.push(body_json(response).await["id"].as_str().unwrap().to_string());
        }

        let response = send(&app, empty_request("DELETE", &format!("/items/{}", ids[1]))).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, empty_request("GET", "/items")).await;
        let listed = body_json(response).await;
        let listed_ids: Vec<&str> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap())
            .collect();
        assert_eq!(listed_ids.len(), 2);
        assert!(!listed_ids.contains(&ids[1].as_str()));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = create_app(AppState::default());

        let response = send(&app, empty_request("GET", "/nope")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["detail"], "Not Found");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let app = create_app(AppState::default());

        let request = Request::builder()
            .method("OPTIONS")
            .uri("/items")
            .header("Origin", "http://example.com")
            .header("Access-Control-Request-Method", "POST")
            .body(Body::empty())
            .unwrap();
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
