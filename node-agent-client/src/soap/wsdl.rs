use crate::node_agent_error::NodeAgentError;
use serde::Deserialize;

/// Finds the `soap:address` location of the first service port in a
/// fetched WSDL document. That location is the endpoint calls are
/// posted to.
pub(crate) fn service_endpoint(wsdl: &str) -> Result<String, NodeAgentError> {
    let definitions: Definitions =
        quick_xml::de::from_str(wsdl).map_err(|err| NodeAgentError::WsdlParse(err.to_string()))?;

    definitions
        .services
        .into_iter()
        .flat_map(|service| service.ports)
        .find_map(|port| port.address)
        .map(|address| address.location)
        .ok_or_else(|| NodeAgentError::WsdlParse("no soap:address location in the WSDL".to_string()))
}

#[derive(Deserialize)]
struct Definitions {
    #[serde(rename = "service", alias = "wsdl:service", default)]
    services: Vec<Service>,
}

#[derive(Deserialize)]
struct Service {
    #[serde(rename = "port", alias = "wsdl:port", default)]
    ports: Vec<Port>,
}

#[derive(Deserialize)]
struct Port {
    #[serde(rename = "address", alias = "soap:address", default)]
    address: Option<Address>,
}

#[derive(Deserialize)]
struct Address {
    #[serde(rename = "@location")]
    location: String,
}
