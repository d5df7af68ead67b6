//! Child-process transport for the vendor CLI.

use tokio::process::Command;
use tracing::{debug, error};

use crate::areca::parser;
use crate::areca::types::{ControllerInfo, RaidSetRecord};

/// Sub-command printing the controller identity report.
pub const SYS_INFO: &str = "sys info";

/// Sub-command printing the raid-set table.
pub const RSF_INFO: &str = "rsf info";

/// Handle to a locally installed `areca.cli64` binary.
///
/// Each query spawns a fresh child process; the utility holds no state
/// between invocations and its licensing forbids linking against it, so
/// stdout capture is the only integration surface available.
pub struct ArecaCli {
    path: String,
}

impl ArecaCli {
    /// A handle for the binary at `path`. The path is not checked here; a
    /// missing or broken binary surfaces as empty output at query time.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Path this handle spawns, for log messages.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Run one sub-command and return whatever the CLI wrote to stdout.
    ///
    /// The sub-command is passed as a single argument, embedded space and
    /// all; that is the argument convention the vendor binary expects.
    /// Exit status is advisory only: the utility has been observed exiting
    /// non-zero while still printing a usable report, so captured bytes are
    /// returned either way. A process that cannot be spawned at all yields
    /// an empty buffer.
    pub async fn run(&self, subcommand: &str) -> Vec<u8> {
        match Command::new(&self.path).arg(subcommand).output().await {
            Ok(output) => {
                if !output.status.success() {
                    error!(
                        "{} `{}` exited with {}",
                        self.path, subcommand, output.status
                    );
                }
                debug!(
                    "{} `{}` wrote {} bytes to stdout",
                    self.path,
                    subcommand,
                    output.stdout.len()
                );
                output.stdout
            }
            Err(e) => {
                error!("Failed to spawn {} `{}`: {}", self.path, subcommand, e);
                Vec::new()
            }
        }
    }

    /// Controller identity labels from `sys info`.
    pub async fn sys_info(&self) -> ControllerInfo {
        parser::parse_sys_info(&self.run(SYS_INFO).await)
    }

    /// Current raid-set snapshot from `rsf info`.
    pub async fn rsf_info(&self) -> Vec<RaidSetRecord> {
        parser::parse_rsf_info(&self.run(RSF_INFO).await)
    }
}
