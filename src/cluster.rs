use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_GRES;
use crate::constants::TINYGPU_COMMAND_SUFFIX;
use crate::error::SchedulerError;

/// The batch scheduler families running on the cluster systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheduler {
    /// Torque/PBS, the `qsub`/`qstat` family.
    Torque,
    /// Slurm, the `sbatch`/`squeue` family.
    Slurm,
}

impl fmt::Display for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheduler::Torque => write!(f, "Torque"),
            Scheduler::Slurm => write!(f, "Slurm"),
        }
    }
}

/// The CLI entry points of the two scheduler families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulerCommand {
    /// `qstat`, the Torque job listing.
    TorqueStatus,
    /// `qsub`, the Torque job submission.
    TorqueSubmit,
    /// `squeue`, the Slurm job listing.
    SlurmStatus,
    /// `sbatch`, the Slurm job submission.
    SlurmSubmit,
}

impl SchedulerCommand {
    /// The scheduler family this command belongs to.
    pub fn scheduler(&self) -> Scheduler {
        match self {
            SchedulerCommand::TorqueStatus | SchedulerCommand::TorqueSubmit => Scheduler::Torque,
            SchedulerCommand::SlurmStatus | SchedulerCommand::SlurmSubmit => Scheduler::Slurm,
        }
    }

    /// The binary name before any system-specific suffix.
    pub fn base_name(&self) -> &'static str {
        match self {
            SchedulerCommand::TorqueStatus => "qstat",
            SchedulerCommand::TorqueSubmit => "qsub",
            SchedulerCommand::SlurmStatus => "squeue",
            SchedulerCommand::SlurmSubmit => "sbatch",
        }
    }
}

/// The FAU cluster systems this crate knows how to submit to.
///
/// Each system carries, as static facts, which schedulers it accepts and
/// its resource defaults. The registry is never consulted for anything
/// dynamic; scheduling state lives with the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetSystem {
    /// The general-purpose throughput cluster.
    Woody,
    /// The GPU cluster. All scheduler binaries carry a `.tinygpu` suffix
    /// here, and Torque is a legacy path kept only for old scripts.
    TinyGpu,
    /// The large-memory cluster, Slurm only.
    TinyFat,
    /// The parallel computing cluster.
    Emmy,
    /// The successor of Emmy, Slurm only.
    Meggie,
}

impl TargetSystem {
    /// Whether jobs can be submitted to this system through `scheduler`.
    pub fn supports(&self, scheduler: Scheduler) -> bool {
        match scheduler {
            Scheduler::Torque => matches!(
                self,
                TargetSystem::Woody | TargetSystem::TinyGpu | TargetSystem::Emmy
            ),
            Scheduler::Slurm => !matches!(self, TargetSystem::Woody),
        }
    }

    /// Whether Torque still works here but is scheduled for removal.
    pub fn torque_deprecated(&self) -> bool {
        matches!(self, TargetSystem::TinyGpu)
    }

    /// The default number of tasks (processors) per node for jobs on this
    /// system.
    pub fn default_tasks_per_node(&self) -> u32 {
        4
    }

    /// The default gres string for jobs on this system.
    pub fn default_gres(&self) -> &'static str {
        DEFAULT_GRES
    }
}

impl fmt::Display for TargetSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSystem::Woody => write!(f, "woody"),
            TargetSystem::TinyGpu => write!(f, "tinygpu"),
            TargetSystem::TinyFat => write!(f, "tinyfat"),
            TargetSystem::Emmy => write!(f, "emmy"),
            TargetSystem::Meggie => write!(f, "meggie"),
        }
    }
}

/// Resolve a scheduler command to the binary that runs it on `target`.
///
/// Fails when the target does not accept the command's scheduler family.
/// On [TargetSystem::TinyGpu] the resolved binary carries the `.tinygpu`
/// suffix for both families.
pub fn resolve_command(
    command: SchedulerCommand,
    target: TargetSystem,
) -> Result<String, SchedulerError> {
    let scheduler = command.scheduler();
    if !target.supports(scheduler) {
        return Err(SchedulerError::UnsupportedScheduler { scheduler, target });
    }

    let mut binary = command.base_name().to_string();
    if target == TargetSystem::TinyGpu {
        binary.push_str(TINYGPU_COMMAND_SUFFIX);
    }

    Ok(binary)
}

#[cfg(test)]
#[path = "tests/cluster.rs"]
mod tests;
