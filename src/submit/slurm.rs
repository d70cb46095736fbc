use std::fmt;

use log::debug;
use serde::Deserialize;
use serde::Serialize;

use crate::cluster::resolve_command;
use crate::cluster::SchedulerCommand;
use crate::cluster::TargetSystem;
use crate::constants::DEFAULT_NODES;
use crate::constants::DEFAULT_TASKS_PER_NODE;
use crate::constants::DEFAULT_WALLTIME;
use crate::constants::GPU_TYPED_PARTITIONS;
use crate::error::SchedulerError;
use crate::submit::args::JobArgs;

/// The job events Slurm notifies the submitter about by mail.
///
/// Slurm itself knows more values; these are the ones allowed for batch
/// jobs on the clusters here. Being a closed enum, an invalid mail type is
/// unrepresentable and needs no runtime validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MailType {
    /// Mail when the job starts.
    Begin,
    /// Mail when the job ends.
    End,
    /// Mail when the job fails.
    Fail,
    /// Mail on all of the above.
    #[default]
    All,
}

impl fmt::Display for MailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailType::Begin => write!(f, "BEGIN"),
            MailType::End => write!(f, "END"),
            MailType::Fail => write!(f, "FAIL"),
            MailType::All => write!(f, "ALL"),
        }
    }
}

/// A Slurm job request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlurmJob {
    /// The job name, shown by `squeue` and matched when listing running
    /// jobs.
    pub job_name: String,

    /// The job script handed to `sbatch`.
    pub script_name: String,

    /// The system the job is aimed at.
    pub target_system: TargetSystem,

    /// The number of nodes requested. Ignored on TinyGPU, where the gres
    /// request sizes the job.
    #[serde(default = "DEFAULT_NODES")]
    pub nodes: u32,

    /// The number of tasks per node. Ignored on TinyGPU.
    #[serde(default = "DEFAULT_TASKS_PER_NODE")]
    pub tasks_per_node: u32,

    /// The wall clock limit, `HH:MM:SS`.
    #[serde(default = "DEFAULT_WALLTIME")]
    pub walltime: String,

    /// The GPU request on TinyGPU, e.g. `gpu:a100:2`. `None` falls back to
    /// the system default of a single GPU of any type.
    #[serde(default)]
    pub gres: Option<String>,

    /// The partition to submit to, only meaningful on TinyGPU.
    #[serde(default)]
    pub partition: Option<String>,

    /// The mail notification mode.
    #[serde(default)]
    pub mail_type: MailType,

    /// The arguments handed through to the job script.
    #[serde(default)]
    pub args: JobArgs,
}

impl SlurmJob {
    /// A job with the default resource requests: one node, four tasks per
    /// node, 24 hours, mail on all events.
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
            tasks_per_node: DEFAULT_TASKS_PER_NODE(),
            walltime: DEFAULT_WALLTIME(),
            gres: None,
            partition: None,
            mail_type: MailType::All,
            args: JobArgs::new(),
        }
    }
}

/// Build the `sbatch` invocation submitting `job`.
///
/// Fails with [SchedulerError::UnsupportedScheduler] on systems without
/// Slurm. On [TargetSystem::TinyGpu] the node and task flags are replaced
/// by a `--gres` request, and a requested GPU-typed partition (`a100`,
/// `v100`) must agree with the gres string, otherwise the build fails with
/// [SchedulerError::InvalidConfiguration].
///
/// The result is meant to be executed as-is through the shell, e.g. via
/// [crate::jobs::submit_job].
pub fn build_job_submit_slurm(job: &SlurmJob) -> Result<String, SchedulerError> {
    let sbatch = resolve_command(SchedulerCommand::SlurmSubmit, job.target_system)?;

    let mut command = format!("{} --job-name {}", sbatch, job.job_name);

    if job.target_system == TargetSystem::TinyGpu {
        let gres = job
            .gres
            .as_deref()
            .unwrap_or(job.target_system.default_gres());

        if let Some(partition) = &job.partition {
            // GPU-typed partitions pin one GPU type, so the gres string
            // has to mention it. A raw substring test; the default gres
            // `gpu:1` names no type and fails for typed partitions.
            if GPU_TYPED_PARTITIONS.contains(&partition.as_str())
                && !gres.contains(partition.as_str())
            {
                return Err(SchedulerError::InvalidConfiguration(format!(
                    "partition `{partition}` was requested but the gres string \
                     `{gres}` asks for a different GPU type"
                )));
            }
            command.push_str(&format!(" --partition={partition}"));
        }

        command.push_str(&format!(" --gres={gres}"));
    } else {
        command.push_str(&format!(
            " --nodes={} --ntasks-per-node={}",
            job.nodes, job.tasks_per_node
        ));
    }

    command.push_str(&format!(" --time={} --mail-type={}", job.walltime, job.mail_type));

    command.push(' ');
    command.push_str(&job.script_name);

    let fragment = job.args.encode_slurm();
    if !fragment.is_empty() {
        command.push(' ');
        command.push_str(&fragment);
    }

    debug!("Built Slurm submission: {command}");

    Ok(command)
}

#[cfg(test)]
#[path = "tests/slurm.rs"]
mod tests;
