use log::debug;
use log::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::cluster::resolve_command;
use crate::cluster::SchedulerCommand;
use crate::cluster::TargetSystem;
use crate::constants::DEFAULT_NODES;
use crate::constants::DEFAULT_TASKS_PER_NODE;
use crate::constants::DEFAULT_WALLTIME;
use crate::error::SchedulerError;
use crate::submit::args::JobArgs;

/// A Torque job request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TorqueJob {
    /// The job name, shown by `qstat` and matched when listing running
    /// jobs.
    pub job_name: String,

    /// The job script handed to `qsub`.
    pub script_name: String,

    /// The system the job is aimed at.
    pub target_system: TargetSystem,

    /// The number of nodes requested.
    #[serde(default = "DEFAULT_NODES")]
    pub nodes: u32,

    /// The number of processors per node.
    #[serde(default = "DEFAULT_TASKS_PER_NODE")]
    pub ppn: u32,

    /// The wall clock limit, `HH:MM:SS`.
    #[serde(default = "DEFAULT_WALLTIME")]
    pub walltime: String,

    /// The arguments handed through to the job script.
    #[serde(default)]
    pub args: JobArgs,
}

impl TorqueJob {
    /// A job with the Woody-sized resource defaults: one node, four
    /// processors, 24 hours.
    pub fn new(
        job_name: impl Into<String>,
        script_name: impl Into<String>,
        target_system: TargetSystem,
    ) -> Self {
        Self {
            job_name: job_name.into(),
            script_name: script_name.into(),
            target_system,
            nodes: DEFAULT_NODES(),
            ppn: DEFAULT_TASKS_PER_NODE(),
            walltime: DEFAULT_WALLTIME(),
            args: JobArgs::new(),
        }
    }
}

/// Build the `qsub` invocation submitting `job`.
///
/// Fails with [SchedulerError::UnsupportedScheduler] on systems without
/// Torque. On [TargetSystem::TinyGpu] Torque still works but is a legacy
/// path, so a deprecation warning is logged and a valid command is
/// returned anyway.
///
/// The result is meant to be executed as-is through the shell, e.g. via
/// [crate::jobs::submit_job].
pub fn build_job_submit_torque(job: &TorqueJob) -> Result<String, SchedulerError> {
    let qsub = resolve_command(SchedulerCommand::TorqueSubmit, job.target_system)?;

    if job.target_system.torque_deprecated() {
        warn!(
            "Torque on {} is deprecated, submit through Slurm instead",
            job.target_system
        );
    }

    let mut command = format!(
        "{} -N {} -l nodes={}:ppn={},walltime={} -m abe",
        qsub, job.job_name, job.nodes, job.ppn, job.walltime
    );

    let fragment = job.args.encode_torque();
    if !fragment.is_empty() {
        command.push(' ');
        command.push_str(&fragment);
    }

    command.push(' ');
    command.push_str(&job.script_name);

    debug!("Built Torque submission: {command}");

    Ok(command)
}

#[cfg(test)]
#[path = "tests/torque.rs"]
mod tests;
