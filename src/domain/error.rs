use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperatorError {
    #[error("invalid security group specification: {message}")]
    InvalidSpec { message: String },

    #[error("cloud API call failed with status {status}: {message}")]
    CloudApi { status: u16, message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl OperatorError {
    pub fn cloud_api(status: u16, message: impl Into<String>) -> Self {
        OperatorError::CloudApi {
            status,
            message: message.into(),
        }
    }

    /// True when the cloud control plane reported the resource as missing.
    /// The delete path treats this as success: the desired end state
    /// (absence) already holds.
    pub fn is_resource_not_found(&self) -> bool {
        matches!(self, OperatorError::CloudApi { status: 404, .. })
    }
}
