use crate::node_agent_error::NodeAgentError;
use std::fs;
use std::path::Path;

/// Loads an RTML document from a file and returns it as a string,
/// byte for byte.
pub fn load(path: &Path) -> Result<String, NodeAgentError> {
    fs::read_to_string(path).map_err(|source| NodeAgentError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves an RTML document to a file, creating or truncating it.
pub fn save(path: &Path, content: &str) -> Result<(), NodeAgentError> {
    fs::write(path, content).map_err(|source| NodeAgentError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
