//! The ordered provisioning sequence and its fail-fast runner.
//!
//! Steps form a hard dependency chain: the engine must exist before
//! containers start, containers must answer before the proxy fronts
//! them, and the HTTP vhost must exist before certbot can rewrite it.

pub mod containers;
pub mod engine;
pub mod files;
pub mod firewall;
pub mod proxy;
pub mod ready;
pub mod system;
pub mod tls;
pub mod verify;

use crate::config::DeploymentConfig;
use crate::error::{Result, Severity};
use crate::ui;

/// How safe a step is to execute again on a rerun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idempotency {
    /// Reapplying converges to the same outcome.
    SafeToRerun,
    /// The first application creates durable state (named volumes);
    /// reruns rely on the engine to reconcile, not on this step.
    DestructiveOnce,
}

/// One side-effecting unit of work against an external tool.
pub trait Step {
    /// Short stable name, used in the run report.
    fn name(&self) -> &'static str;

    /// One-line description shown before the step runs.
    fn description(&self) -> String;

    fn idempotency(&self) -> Idempotency {
        Idempotency::SafeToRerun
    }

    fn run(&self, config: &DeploymentConfig) -> Result<()>;
}

/// Outcome of a full sequence run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub completed: usize,
    /// (step name, message) for every warning-severity failure.
    pub warnings: Vec<(String, String)>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// The provisioning sequence in dependency order.
pub fn provisioning_steps() -> Vec<Box<dyn Step>> {
    vec![
        Box::new(system::SystemPreparation),
        Box::new(firewall::Firewall),
        Box::new(engine::ContainerEngine),
        Box::new(files::WriteArtifacts),
        Box::new(containers::StartContainers),
        Box::new(ready::WaitForApplication),
        Box::new(proxy::ConfigureProxy),
        Box::new(tls::AcquireCertificate),
        Box::new(verify::VerifyDeployment),
    ]
}

/// Execute steps in order. A fatal error aborts the sequence with no
/// compensation; warning severity is recorded and the run continues.
pub fn execute(steps: &[Box<dyn Step>], config: &DeploymentConfig) -> Result<RunReport> {
    let total = steps.len();
    let mut report = RunReport::default();

    for (index, step) in steps.iter().enumerate() {
        ui::step(index + 1, total, &step.description());

        match step.run(config) {
            Ok(()) => {
                report.completed += 1;
                ui::success(step.name());
            }
            Err(e) if e.severity() == Severity::Warning => {
                ui::warn(&e.to_string());
                ui::dim(e.advice());
                report.warnings.push((step.name().to_string(), e.to_string()));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
