#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("no window registered under key: {0}")]
    NotFound(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ToolkitError {
    #[error("window creation failed: {0}")]
    CreateFailed(String),

    #[error("display query failed: {0}")]
    DisplayUnavailable(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Toolkit(#[from] ToolkitError),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("{0}")]
    Other(String),
}

impl BridgeError {
    /// Whether this error maps to the protocol's `NotFound` result.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BridgeError::Registry(RegistryError::NotFound(_)))
    }
}
