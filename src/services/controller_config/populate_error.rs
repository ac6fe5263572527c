use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a single attempt to read the local controller configuration can fail.
/// These never leave the crate; callers only see `ConfigUnavailable`.
#[derive(Debug)]
pub enum PopulateError {
    ProcessLaunch(anyhow::Error),
    MalformedOutput(serde_json::Error),
    ShapeMismatch(String),
    NoControllers,
}

impl PopulateError {
    /// Short name of the step that failed, used as a structured log field
    pub fn step(&self) -> &'static str {
        match self {
            PopulateError::ProcessLaunch(_) => "process_launch",
            PopulateError::MalformedOutput(_) => "malformed_output",
            PopulateError::ShapeMismatch(_) => "shape_mismatch",
            PopulateError::NoControllers => "no_controllers",
        }
    }
}

impl Display for PopulateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PopulateError::ProcessLaunch(cause) => write!(f, "Error invoking Juju CLI: {}", cause),
            PopulateError::MalformedOutput(cause) => write!(f, "Error unmarshalling Juju CLI output: {}", cause),
            PopulateError::ShapeMismatch(message) => {
                write!(f, "Unexpected provider configuration from Juju CLI: {}", message)
            }
            PopulateError::NoControllers => write!(f, "Juju CLI reported no controllers"),
        }
    }
}

impl Error for PopulateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PopulateError::ProcessLaunch(cause) => Some(&**cause),
            PopulateError::MalformedOutput(cause) => Some(cause),
            _ => None,
        }
    }
}
