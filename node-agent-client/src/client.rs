use crate::models::credentials::Credentials;
use crate::node_agent_error::NodeAgentError;
use crate::soap::envelope;
use crate::soap::envelope::Operation;
use crate::soap::wsdl;
use log::trace;
use reqwest::header::{CONTENT_TYPE, HeaderValue};

/// Defines the client itself, both Node Agent operations are done through
/// an instance of this struct. One instance per process run, no session
/// is kept between calls.
pub struct NodeAgentClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl NodeAgentClient {
    /// Fetches the service WSDL from
    /// `http://{hostname}:{port_number}/node_agent2/node_agent?wsdl`,
    /// resolves the endpoint address out of it and returns a new instance.
    /// No retry is attempted if the WSDL cannot be fetched or parsed.
    pub async fn new(
        hostname: &str,
        port_number: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, NodeAgentError> {
        let wsdl_url = format!("http://{hostname}:{port_number}/node_agent2/node_agent?wsdl");
        let http = reqwest::Client::new();

        let response = http
            .get(&wsdl_url)
            .send()
            .await
            .map_err(NodeAgentError::WsdlFetch)?
            .error_for_status()
            .map_err(NodeAgentError::WsdlFetch)?;

        let wsdl = response.text().await.map_err(NodeAgentError::WsdlFetch)?;
        let endpoint = wsdl::service_endpoint(&wsdl)?;
        trace!("Service endpoint from WSDL: {endpoint}");

        Ok(Self {
            http,
            endpoint,
            credentials: Credentials {
                username: username.to_string(),
                password: password.to_string(),
            },
        })
    }

    /// Invokes the Node Agent `ping` operation. The deployed server
    /// replies "ACK" when live and "NAK (not live)" otherwise.
    pub async fn ping(&self) -> Result<String, NodeAgentError> {
        self.invoke(Operation::Ping, None).await
    }

    /// Invokes the Node Agent `handle_rtml` operation with an RTML
    /// document, returning the (possibly transformed) reply document.
    /// The RTML is passed through verbatim, nothing is validated here.
    pub async fn handle_rtml(&self, rtml_document: &str) -> Result<String, NodeAgentError> {
        self.invoke(Operation::HandleRtml, Some(rtml_document)).await
    }

    async fn invoke(
        &self,
        operation: Operation,
        argument: Option<&str>,
    ) -> Result<String, NodeAgentError> {
        let envelope = envelope::request(&self.credentials, operation, argument);
        trace!("C: {envelope}");

        // The credentials ride in the SOAP header, and again as plain HTTP
        // headers. The deployed Java server reads the HTTP pair.
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("text/xml; charset=utf-8"))
            .header("SOAPAction", HeaderValue::from_static("\"\""))
            .header("Username", self.credentials.username.as_str())
            .header("Password", self.credentials.password.as_str())
            .body(envelope)
            .send()
            .await
            .map_err(NodeAgentError::Transport)?;

        let xml = response.text().await.map_err(NodeAgentError::Transport)?;
        trace!("S: {xml}");

        envelope::parse_response(&xml, operation)
    }
}
