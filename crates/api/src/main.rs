#[tokio::main]
async fn main() {
    synergy_observability::init();

    let credentials = synergy_api::credentials::EnvCredentials::from_env();
    let app = synergy_api::app::build_app(credentials).await;

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
