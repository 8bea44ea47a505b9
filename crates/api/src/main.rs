use std::time::Duration;

#[tokio::main]
async fn main() {
    showroom_observability::init();

    let addr = std::env::var("SHOWROOM_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let delay_ms: u64 = match std::env::var("CATALOG_DELAY_MS") {
        Ok(v) => v.parse().unwrap_or_else(|_| {
            tracing::warn!("CATALOG_DELAY_MS is not a number; using 500");
            500
        }),
        Err(_) => 500,
    };

    let app = showroom_api::app::build_app(Duration::from_millis(delay_ms))
        .expect("failed to build seeded catalog");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
