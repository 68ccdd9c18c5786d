use env_logger::Env;
use log::info;
use mock_server::MockNodeAgent;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("trace")).init();
    info!("Starting Mock Node Agent");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080")
        .await
        .expect("Could not bind HTTP server");

    MockNodeAgent::default()
        .serve(listener)
        .await
        .expect("Mock Node Agent failed");
}
