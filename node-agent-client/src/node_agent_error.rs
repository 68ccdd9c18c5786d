use std::path::PathBuf;

/// Errors the client might return.
#[derive(Debug, thiserror::Error)]
pub enum NodeAgentError {
    #[error("Could not fetch the Node Agent WSDL: {0}")]
    WsdlFetch(#[source] reqwest::Error),
    #[error("Could not parse the Node Agent WSDL: {0}")]
    WsdlParse(String),
    #[error("Could not reach the Node Agent service: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("The Node Agent returned a SOAP fault ({fault_code}): {fault_string}")]
    SoapFault {
        fault_code: String,
        fault_string: String,
    },
    #[error("Could not make sense of the Node Agent reply: {0}")]
    MalformedResponse(String),
    #[error("Could not read RTML file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not write RTML file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
