use crate::models::credentials::Credentials;
use crate::node_agent_error::NodeAgentError;
use quick_xml::escape::escape;
use serde::Deserialize;

/// Namespace of the Node Agent RPC operations. The service is published
/// from the Java package `org.estar.node_agent2`.
const OPERATION_NAMESPACE: &str = "http://node_agent2.estar.org/";

/// The two operations the Node Agent exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Ping,
    HandleRtml,
}

impl Operation {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Operation::Ping => "ping",
            Operation::HandleRtml => "handle_rtml",
        }
    }
}

/// Builds the request envelope for an operation. The credentials go into
/// the SOAP header, and the RTML argument, if any, is escaped into the
/// single `arg0` element of the RPC-style call.
pub(crate) fn request(
    credentials: &Credentials,
    operation: Operation,
    argument: Option<&str>,
) -> String {
    let name = operation.name();
    let call = match argument {
        Some(argument) => format!(
            "<tns:{name} xmlns:tns=\"{OPERATION_NAMESPACE}\"><arg0>{}</arg0></tns:{name}>",
            escape(argument)
        ),
        None => format!("<tns:{name} xmlns:tns=\"{OPERATION_NAMESPACE}\"/>"),
    };

    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <soap:Header>\
         <Username>{}</Username>\
         <Password>{}</Password>\
         </soap:Header>\
         <soap:Body>{call}</soap:Body>\
         </soap:Envelope>",
        escape(&credentials.username),
        escape(&credentials.password),
    )
}

/// Extracts the `return` value of an operation from a response envelope,
/// or the SOAP fault the server sent back instead.
pub(crate) fn parse_response(xml: &str, operation: Operation) -> Result<String, NodeAgentError> {
    let envelope: ResponseEnvelope =
        quick_xml::de::from_str(xml).map_err(|err| NodeAgentError::MalformedResponse(err.to_string()))?;

    if let Some(fault) = envelope.body.fault {
        return Err(NodeAgentError::SoapFault {
            fault_code: fault.fault_code,
            fault_string: fault.fault_string,
        });
    }

    let response = match operation {
        Operation::Ping => envelope.body.ping_response,
        Operation::HandleRtml => envelope.body.handle_rtml_response,
    };

    response.map(|response| response.return_value).ok_or_else(|| {
        NodeAgentError::MalformedResponse(format!(
            "no {}Response element in the reply",
            operation.name()
        ))
    })
}

// The aliases cover the prefixes JAX-WS deployments are seen to emit.
#[derive(Deserialize)]
struct ResponseEnvelope {
    #[serde(
        rename = "Body",
        alias = "S:Body",
        alias = "soap:Body",
        alias = "soapenv:Body"
    )]
    body: ResponseBody,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ResponseBody {
    #[serde(
        rename = "pingResponse",
        alias = "ns2:pingResponse",
        alias = "tns:pingResponse"
    )]
    ping_response: Option<OperationResponse>,
    #[serde(
        rename = "handle_rtmlResponse",
        alias = "ns2:handle_rtmlResponse",
        alias = "tns:handle_rtmlResponse"
    )]
    handle_rtml_response: Option<OperationResponse>,
    #[serde(
        rename = "Fault",
        alias = "S:Fault",
        alias = "soap:Fault",
        alias = "soapenv:Fault"
    )]
    fault: Option<Fault>,
}

#[derive(Deserialize)]
struct OperationResponse {
    #[serde(rename = "return")]
    return_value: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Fault {
    #[serde(rename = "faultcode")]
    fault_code: String,
    #[serde(rename = "faultstring")]
    fault_string: String,
}
