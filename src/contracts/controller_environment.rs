
use crate::contracts::controller_details::ControllerDetails;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};

pub const CONTROLLER_ADDRESSES_KEY: &str = "JUJU_CONTROLLER_ADDRESSES";
pub const CA_CERT_KEY: &str = "JUJU_CA_CERT";
pub const USERNAME_KEY: &str = "JUJU_USERNAME";
pub const PASSWORD_KEY: &str = "JUJU_PASSWORD";

const REDACTED: &str = "<redacted>";

/// Environment-style settings consumed by components that talk to the controller
pub type ControllerEnvironment = HashMap<String, String>;

pub trait ToControllerEnvironment {
    fn to_controller_environment(&self) -> ControllerEnvironment;
}

impl ToControllerEnvironment for ControllerDetails {
    fn to_controller_environment(&self) -> ControllerEnvironment {
        HashMap::from([
            (
                CONTROLLER_ADDRESSES_KEY.to_string(),
                self.provider_details.api_endpoints.join(","),
            ),
            (CA_CERT_KEY.to_string(), self.provider_details.ca_cert.clone()),
            (USERNAME_KEY.to_string(), self.account.user.clone()),
            (PASSWORD_KEY.to_string(), self.account.password.clone()),
        ])
    }
}

/// Renders a controller environment for diagnostic output, sorted by key.
/// The password is masked unless credentials are explicitly revealed.
pub struct DiagnosticView<'a> {
    environment: &'a ControllerEnvironment,
    reveal_credentials: bool,
}

impl<'a> DiagnosticView<'a> {
    pub fn new(environment: &'a ControllerEnvironment, reveal_credentials: bool) -> Self {
        DiagnosticView {
            environment,
            reveal_credentials,
        }
    }
}

impl Display for DiagnosticView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sorted: BTreeMap<&str, &str> = self
            .environment
            .iter()
            .map(|(key, value)| {
                if key == PASSWORD_KEY && !self.reveal_credentials {
                    (key.as_str(), REDACTED)
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();
        write!(f, "{:?}", sorted)
    }
}
