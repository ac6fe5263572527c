
pub mod config_unavailable;
pub mod populate_error;

use crate::configuration::models::provider_settings::ProviderSettings;
use crate::contracts::controller_details::ControllerDetails;
use crate::contracts::controller_environment::{ControllerEnvironment, DiagnosticView, ToControllerEnvironment};
use crate::services::backends::juju_cli::{ControllerOutputSource, from_command};
use crate::services::configuration_source::ConfigurationSource;
use crate::services::controller_config::config_unavailable::ConfigUnavailable;
use crate::services::controller_config::populate_error::PopulateError;
use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::{self, BoxFuture, FutureExt, Shared};
use log::{debug, error};
use serde_json::Value;
use std::sync::{Arc, LazyLock, OnceLock};
use std::thread;

type PopulateOutcome = Option<Arc<ControllerEnvironment>>;

static LOCAL_CONTROLLER_CONFIG: LazyLock<ControllerConfigProvider> =
    LazyLock::new(|| ControllerConfigProvider::from_settings(ProviderSettings::default()));

/// Runs the locally installed `juju` command, if available, to get the current controller configuration.
/// The command is executed at most once per process, a failed attempt is never retried.
pub async fn get_local_controller_config() -> Result<Arc<ControllerEnvironment>, ConfigUnavailable> {
    LOCAL_CONTROLLER_CONFIG.get_config().await
}

/// Reads the controller configuration from the Juju CLI once and caches it.
///
/// Concurrent first callers wait for the same attempt. The attempt runs on its own thread and
/// runtime, so it completes even if every waiting caller or the caller's runtime is dropped,
/// and it is never started twice. Callers may await it from any executor.
pub struct ControllerConfigProvider {
    settings: ProviderSettings,
    source: Arc<dyn ControllerOutputSource>,
    outcome: OnceLock<Shared<BoxFuture<'static, PopulateOutcome>>>,
}

impl ControllerConfigProvider {
    pub fn new(settings: ProviderSettings, source: Arc<dyn ControllerOutputSource>) -> Self {
        ControllerConfigProvider {
            settings,
            source,
            outcome: OnceLock::new(),
        }
    }

    pub fn from_settings(settings: ProviderSettings) -> Self {
        let source = from_command(settings.cli_path.clone());
        Self::new(settings, source)
    }

    pub async fn get_config(&self) -> Result<Arc<ControllerEnvironment>, ConfigUnavailable> {
        let pending = self.outcome.get_or_init(|| self.start_populate()).clone();
        pending.await.ok_or(ConfigUnavailable)
    }

    fn start_populate(&self) -> Shared<BoxFuture<'static, PopulateOutcome>> {
        let source = self.source.clone();
        let settings = self.settings.clone();
        let cli = source.describe();
        let (sender, receiver) = oneshot::channel();

        let spawned = thread::Builder::new()
            .name("juju-controller-config".to_string())
            .spawn(move || {
                let cli = source.describe();
                let result = run_populate(source.as_ref(), &settings);
                let _ = sender.send(publish(result, &cli, settings.log_credentials));
            });

        if let Err(e) = spawned {
            error!(
                cli = cli.as_str(),
                step = "process_launch";
                "Error starting controller configuration thread: {}", e
            );
            return future::ready(None).boxed().shared();
        }

        receiver
            .map(move |received| {
                received.unwrap_or_else(|_| {
                    error!(
                        cli = cli.as_str(),
                        step = "process_launch";
                        "Controller configuration attempt ended without a result"
                    );
                    None
                })
            })
            .boxed()
            .shared()
    }
}

#[async_trait]
impl ConfigurationSource<Arc<ControllerEnvironment>> for ControllerConfigProvider {
    type Error = ConfigUnavailable;

    async fn get(&self) -> Result<Arc<ControllerEnvironment>, Self::Error> {
        self.get_config().await
    }
}

fn publish(
    result: Result<(String, ControllerEnvironment), PopulateError>,
    cli: &str,
    reveal_credentials: bool,
) -> PopulateOutcome {
    match result {
        Ok((controller, environment)) => {
            debug!(
                controller = controller.as_str(),
                credentials_logged = reveal_credentials;
                "Local provider config was set: {}", DiagnosticView::new(&environment, reveal_credentials)
            );
            Some(Arc::new(environment))
        }
        Err(e) => {
            error!(cli = cli, step = e.step(); "{}", e);
            None
        }
    }
}

fn run_populate(
    source: &dyn ControllerOutputSource,
    settings: &ProviderSettings,
) -> Result<(String, ControllerEnvironment), PopulateError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| PopulateError::ProcessLaunch(e.into()))?;
    runtime.block_on(read_controller_environment(source, settings))
}

async fn read_controller_environment(
    source: &dyn ControllerOutputSource,
    settings: &ProviderSettings,
) -> Result<(String, ControllerEnvironment), PopulateError> {
    let output = source.read().await.map_err(PopulateError::ProcessLaunch)?;
    let cli_output: Value = serde_json::from_slice(&output).map_err(PopulateError::MalformedOutput)?;
    let (controller, details) = select_controller(cli_output, settings.allow_empty_controller_list)?;
    Ok((controller, details.to_controller_environment()))
}

/// The CLI output maps arbitrary controller names to a fixed structure.
/// The first entry in key order is selected, the name itself is only kept for diagnostics.
fn select_controller(
    cli_output: Value,
    allow_empty_controller_list: bool,
) -> Result<(String, ControllerDetails), PopulateError> {
    let controllers = match cli_output {
        Value::Object(controllers) => controllers,
        other => {
            return Err(PopulateError::ShapeMismatch(format!(
                "expected a mapping of controller names, found {}",
                json_kind(&other)
            )));
        }
    };

    match controllers.into_iter().next() {
        Some((name, entry)) => {
            let details = serde_json::from_value(entry)
                .map_err(|e| PopulateError::ShapeMismatch(format!("controller '{}': {}", name, e)))?;
            Ok((name, details))
        }
        None if allow_empty_controller_list => Ok((String::new(), ControllerDetails::default())),
        None => Err(PopulateError::NoControllers),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
