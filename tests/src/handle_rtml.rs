use mock_server::MockNodeAgent;
use node_agent_client::{NodeAgentClient, rtml_file};

async fn echoing_client() -> NodeAgentClient {
    let addr = MockNodeAgent::default().spawn().await.unwrap();
    NodeAgentClient::new("127.0.0.1", &addr.port().to_string(), "eng", "none")
        .await
        .unwrap()
}

#[tokio::test]
async fn echoes_rtml_through_input_and_output_files() {
    crate::init_logging();

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.xml");
    let output = dir.path().join("out.xml");
    rtml_file::save(&input, "<RTML>A</RTML>").unwrap();

    let client = echoing_client().await;
    let document = rtml_file::load(&input).unwrap();
    let returned = client.handle_rtml(&document).await.unwrap();
    rtml_file::save(&output, &returned).unwrap();

    assert_eq!(rtml_file::load(&output).unwrap(), "<RTML>A</RTML>");
}

#[tokio::test]
async fn passes_markup_heavy_rtml_through_unchanged() {
    let document = "<?xml version=\"1.0\"?>\n\
        <RTML mode=\"request\" version=\"3.1a\">\n\
        \t<Target name=\"M&amp;31\"><Coordinates ra=\"00:42:44\" dec=\"+41:16:09\"/></Target>\n\
        </RTML>\n";

    let client = echoing_client().await;

    assert_eq!(client.handle_rtml(document).await.unwrap(), document);
}
