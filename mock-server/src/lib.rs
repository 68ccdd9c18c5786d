//! A mock Node Agent web service, used by the integration tests and
//! runnable standalone for poking at the client by hand. Serves the
//! service WSDL on GET and dispatches SOAP calls on POST: `ping` returns
//! a configurable acknowledgement and `handle_rtml` echoes its argument.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::get;
use log::{info, trace};
use quick_xml::escape::escape;
use std::net::SocketAddr;
use std::sync::Arc;

mod soap_request;

use soap_request::Call;

/// The credentials the mock expects and the ping reply it gives out.
#[derive(Debug, Clone)]
pub struct MockNodeAgent {
    pub username: String,
    pub password: String,
    /// The production server replies "ACK" when live and
    /// "NAK (not live)" otherwise.
    pub ping_reply: String,
}

impl Default for MockNodeAgent {
    fn default() -> Self {
        Self {
            username: "eng".to_string(),
            password: "none".to_string(),
            ping_reply: "ACK".to_string(),
        }
    }
}

impl MockNodeAgent {
    /// Binds an ephemeral local port, serves in a background task and
    /// returns the bound address.
    pub async fn spawn(self) -> std::io::Result<SocketAddr> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(self.serve(listener));
        Ok(addr)
    }

    /// Serves the mock on an already bound listener.
    pub async fn serve(self, listener: tokio::net::TcpListener) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        info!("Mock Node Agent listening on {addr}");

        let app = Router::new()
            .route("/node_agent2/node_agent", get(wsdl).post(soap_call))
            .with_state(Arc::new(self));

        axum::serve(listener, app).await
    }
}

type SoapReply = (StatusCode, [(header::HeaderName, &'static str); 1], String);

async fn wsdl(headers: HeaderMap) -> SoapReply {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost:8080");

    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <definitions xmlns=\"http://schemas.xmlsoap.org/wsdl/\"\
         xmlns:soap=\"http://schemas.xmlsoap.org/wsdl/soap/\"\
         xmlns:tns=\"http://node_agent2.estar.org/\"\
         targetNamespace=\"http://node_agent2.estar.org/\"\
         name=\"NodeAgentWebServiceImplService\">\
         <service name=\"NodeAgentWebServiceImplService\">\
         <port name=\"NodeAgentWebServiceImplPort\" binding=\"tns:NodeAgentWebServiceImplPortBinding\">\
         <soap:address location=\"http://{host}/node_agent2/node_agent\"/>\
         </port>\
         </service>\
         </definitions>"
    );

    (StatusCode::OK, [(header::CONTENT_TYPE, "text/xml")], body)
}

async fn soap_call(
    State(agent): State<Arc<MockNodeAgent>>,
    headers: HeaderMap,
    body: String,
) -> SoapReply {
    trace!("C: {body}");

    let request = match soap_request::parse(&body) {
        Ok(request) => request,
        Err(reason) => return fault("S:Client", &reason),
    };

    // The SOAP header wins, the HTTP header pair is the fallback. The
    // production server only ever looks at the HTTP pair.
    let username = request
        .username
        .or_else(|| header_value(&headers, "Username"));
    let password = request
        .password
        .or_else(|| header_value(&headers, "Password"));

    let Some(username) = username else {
        return fault("S:Server", "Username not found in request headers.");
    };

    if username != agent.username {
        return fault("S:Server", &format!("Unknown username {username}."));
    }

    if password.as_deref() != Some(agent.password.as_str()) {
        return fault(
            "S:Server",
            &format!("Password does not match for username {username}."),
        );
    }

    let envelope = match request.call {
        Call::Ping => response_envelope("ping", &agent.ping_reply),
        Call::HandleRtml(rtml_document) => response_envelope("handle_rtml", &rtml_document),
    };

    trace!("S: {envelope}");
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/xml")], envelope)
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

fn response_envelope(operation: &str, value: &str) -> String {
    format!(
        "<?xml version=\"1.0\" ?>\
         <S:Envelope xmlns:S=\"http://schemas.xmlsoap.org/soap/envelope/\"><S:Body>\
         <ns2:{operation}Response xmlns:ns2=\"http://node_agent2.estar.org/\">\
         <return>{}</return>\
         </ns2:{operation}Response>\
         </S:Body></S:Envelope>",
        escape(value)
    )
}

fn fault(code: &str, reason: &str) -> SoapReply {
    let envelope = format!(
        "<?xml version=\"1.0\" ?>\
         <S:Envelope xmlns:S=\"http://schemas.xmlsoap.org/soap/envelope/\"><S:Body>\
         <S:Fault>\
         <faultcode>{code}</faultcode>\
         <faultstring>{}</faultstring>\
         </S:Fault>\
         </S:Body></S:Envelope>",
        escape(reason)
    );

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/xml")],
        envelope,
    )
}
