use mock_server::MockNodeAgent;
use node_agent_client::{NodeAgentClient, NodeAgentError};

#[tokio::test]
async fn a_wrong_password_surfaces_the_soap_fault() {
    let addr = MockNodeAgent::default().spawn().await.unwrap();
    let client = NodeAgentClient::new("127.0.0.1", &addr.port().to_string(), "eng", "wrong")
        .await
        .unwrap();

    match client.ping().await {
        Err(NodeAgentError::SoapFault { fault_string, .. }) => {
            assert!(fault_string.contains("Password does not match"));
        }
        other => panic!("Expected a SOAP fault, got {other:?}"),
    }
}

#[tokio::test]
async fn an_unknown_username_surfaces_the_soap_fault() {
    let addr = MockNodeAgent::default().spawn().await.unwrap();
    let client = NodeAgentClient::new("127.0.0.1", &addr.port().to_string(), "nobody", "none")
        .await
        .unwrap();

    match client.ping().await {
        Err(NodeAgentError::SoapFault { fault_string, .. }) => {
            assert!(fault_string.contains("Unknown username nobody"));
        }
        other => panic!("Expected a SOAP fault, got {other:?}"),
    }
}

#[tokio::test]
async fn an_unreachable_endpoint_is_a_wsdl_fetch_error() {
    // Nothing listens on port 1 locally, the connection is refused.
    let result = NodeAgentClient::new("127.0.0.1", "1", "eng", "none").await;

    assert!(matches!(result, Err(NodeAgentError::WsdlFetch(_))));
}
