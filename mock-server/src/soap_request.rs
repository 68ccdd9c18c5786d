use serde::Deserialize;

/// An incoming SOAP request after decoding: the credential pair found in
/// the SOAP header, if any, and the operation being invoked.
pub(crate) struct SoapRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub call: Call,
}

pub(crate) enum Call {
    Ping,
    HandleRtml(String),
}

/// Decodes a request envelope. The error string becomes the fault string
/// sent back to the caller.
pub(crate) fn parse(xml: &str) -> Result<SoapRequest, String> {
    let envelope: RequestEnvelope =
        quick_xml::de::from_str(xml).map_err(|err| format!("Could not parse the request: {err}"))?;

    let header = envelope.header.unwrap_or_default();

    let call = if envelope.body.ping.is_some() {
        Call::Ping
    } else if let Some(handle_rtml) = envelope.body.handle_rtml {
        Call::HandleRtml(handle_rtml.arg0)
    } else {
        return Err("No known operation in the request body.".to_string());
    };

    Ok(SoapRequest {
        username: header.username,
        password: header.password,
        call,
    })
}

#[derive(Deserialize)]
struct RequestEnvelope {
    #[serde(
        rename = "Header",
        alias = "soap:Header",
        alias = "S:Header",
        alias = "soapenv:Header",
        default
    )]
    header: Option<RequestHeader>,
    #[serde(
        rename = "Body",
        alias = "soap:Body",
        alias = "S:Body",
        alias = "soapenv:Body"
    )]
    body: RequestBody,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RequestHeader {
    #[serde(rename = "Username")]
    username: Option<String>,
    #[serde(rename = "Password")]
    password: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RequestBody {
    #[serde(rename = "ping", alias = "tns:ping", alias = "ns2:ping")]
    ping: Option<PingCall>,
    #[serde(
        rename = "handle_rtml",
        alias = "tns:handle_rtml",
        alias = "ns2:handle_rtml"
    )]
    handle_rtml: Option<HandleRtmlCall>,
}

#[derive(Deserialize)]
struct PingCall {}

#[derive(Deserialize)]
struct HandleRtmlCall {
    #[serde(rename = "arg0")]
    arg0: String,
}
