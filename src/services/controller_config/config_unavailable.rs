use std::error::Error;
use std::fmt::{Display, Formatter};

/// The local controller configuration could not be obtained.
/// The cause is only reported through the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigUnavailable;

impl Display for ConfigUnavailable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "the Juju CLI could not be accessed")
    }
}

impl Error for ConfigUnavailable {}
