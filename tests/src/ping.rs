use mock_server::MockNodeAgent;
use node_agent_client::NodeAgentClient;

#[tokio::test]
async fn ping_returns_the_server_reply_verbatim() {
    crate::init_logging();

    let addr = MockNodeAgent::default().spawn().await.unwrap();
    let client = NodeAgentClient::new("127.0.0.1", &addr.port().to_string(), "eng", "none")
        .await
        .unwrap();

    assert_eq!(client.ping().await.unwrap(), "ACK");
}

#[tokio::test]
async fn ping_reports_a_not_live_node_agent() {
    let addr = MockNodeAgent {
        ping_reply: "NAK (not live)".to_string(),
        ..Default::default()
    }
    .spawn()
    .await
    .unwrap();

    let client = NodeAgentClient::new("127.0.0.1", &addr.port().to_string(), "eng", "none")
        .await
        .unwrap();

    assert_eq!(client.ping().await.unwrap(), "NAK (not live)");
}

#[tokio::test]
async fn configured_credentials_reach_the_server() {
    let addr = MockNodeAgent {
        username: "u".to_string(),
        password: "p".to_string(),
        ..Default::default()
    }
    .spawn()
    .await
    .unwrap();

    // The mock faults on any credential mismatch, so a successful ping
    // means the Username/Password header carried exactly this pair.
    let client = NodeAgentClient::new("127.0.0.1", &addr.port().to_string(), "u", "p")
        .await
        .unwrap();

    assert_eq!(client.ping().await.unwrap(), "ACK");
}
