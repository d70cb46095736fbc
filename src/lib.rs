//! Helpers for scripting batch jobs on the FAU High Performance Cluster.
//!
//! The crate builds `qsub`/`sbatch` submission command lines for the five
//! cluster systems, encodes job-script arguments into the schedulers'
//! environment-injection syntax, and coordinates completion of many
//! independently submitted jobs through `hpc_status` sentinel files.

/// The target systems and scheduler command resolution.
pub mod cluster;

/// Constant values.
pub mod constants;

/// Checks that code runs in the environment it was written for.
pub mod deploy;

/// The error handling for `hpc-helper`.
pub mod error;

/// Submitting jobs and listing the ones already running.
pub mod jobs;

/// The `hpc_status` sentinel files marking job completion.
pub mod status;

/// Building job submission command lines.
pub mod submit;
