/// The scheduler-specific encoding of job-script arguments.
pub mod args;

/// The Slurm submission command builder.
pub mod slurm;

/// The Torque submission command builder.
pub mod torque;

pub use args::JobArgs;
pub use slurm::build_job_submit_slurm;
pub use slurm::MailType;
pub use slurm::SlurmJob;
pub use torque::build_job_submit_torque;
pub use torque::TorqueJob;
