
use anyhow::bail;
use async_trait::async_trait;
use log::{debug, info};
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;

pub const SHOW_CONTROLLER_ARGS: [&str; 3] = ["show-controller", "--show-password", "--format=json"];

pub fn from_command(cli_path: impl Into<String>) -> Arc<dyn ControllerOutputSource> {
    Arc::new(ExecutableControllerOutputSource {
        cli_path: cli_path.into(),
    })
}

#[async_trait]
/// Produces the raw output of `juju show-controller`
pub trait ControllerOutputSource: Send + Sync {
    async fn read(&self) -> anyhow::Result<Vec<u8>>;

    /// Human-readable origin of the output, used in diagnostics
    fn describe(&self) -> String;
}

struct ExecutableControllerOutputSource {
    cli_path: String,
}

#[async_trait]
impl ControllerOutputSource for ExecutableControllerOutputSource {
    async fn read(&self) -> anyhow::Result<Vec<u8>> {
        info!(
            cli = self.cli_path.as_str();
            "Reading controller configuration with command: {} {}",
            self.cli_path,
            SHOW_CONTROLLER_ARGS.join(" ")
        );
        let output = Command::new(&self.cli_path)
            .args(SHOW_CONTROLLER_ARGS)
            .stdin(Stdio::null())
            .output()
            .await?;
        if !output.status.success() {
            bail!(
                "Failed to execute command ({}): {:?}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        debug!("Controller command returned {} bytes", output.stdout.len());
        Ok(output.stdout)
    }

    fn describe(&self) -> String {
        self.cli_path.clone()
    }
}
