use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, status and latency of every request
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::error!(%method, path = uri.path(), status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::info!(%method, path = uri.path(), status = status.as_u16(), elapsed_ms, "request");
    }

    response
}
