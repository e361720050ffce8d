use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::Config;
use crate::shared::request_logger::request_logger;

/// Build the application router
pub fn configure_routes(config: &Config) -> Router {
    use axum::http::{header, Method};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/projects",
            get(handlers::a001_project::list_all)
                .head(handlers::a001_project::check_exists)
                .post(handlers::a001_project::create),
        )
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;
    use crate::shared::data::db::initialize_database;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> StatusCode {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        app.clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap()
            .status()
    }

    // The only test in the crate that opens the global connection
    #[tokio::test]
    async fn test_project_endpoints_status_codes() {
        let db_path = std::env::temp_dir().join(format!("projects-{}.db", uuid::Uuid::new_v4()));
        initialize_database(&db_path).await.unwrap();
        let config = parse_config("[database]\npath = \"unused\"\n").unwrap();
        let app = configure_routes(&config);

        let head = |name: &str| format!("/api/projects?project_name={name}");

        assert_eq!(send(&app, Method::HEAD, "/api/projects", None).await, StatusCode::BAD_REQUEST);
        assert_eq!(send(&app, Method::HEAD, &head("library"), None).await, StatusCode::NOT_FOUND);
        assert_eq!(
            send(&app, Method::POST, "/api/projects", Some(r#"{"project_name":"library"}"#)).await,
            StatusCode::CREATED
        );
        assert_eq!(send(&app, Method::HEAD, &head("library"), None).await, StatusCode::OK);
        assert_eq!(
            send(&app, Method::POST, "/api/projects", Some(r#"{"project_name":"library"}"#)).await,
            StatusCode::CONFLICT
        );
        assert_eq!(
            send(&app, Method::POST, "/api/projects", Some(r#"{"project_name":"Bad Name"}"#)).await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(send(&app, Method::GET, "/health", None).await, StatusCode::OK);

        let _ = std::fs::remove_file(&db_path);
    }
}
