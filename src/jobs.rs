use std::path::Path;
use std::process::Command;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use log::debug;
use regex_lite::Regex;

use crate::cluster::resolve_command;
use crate::cluster::SchedulerCommand;
use crate::cluster::TargetSystem;
use crate::error::ctx;
use crate::error::Ctx;
use crate::status::check_hpc_status_file;

/// Run a built submission command through the shell.
///
/// The command is one produced by
/// [crate::submit::build_job_submit_torque] or
/// [crate::submit::build_job_submit_slurm]. Returns the exit code the
/// scheduler CLI reported.
pub fn submit_job(command: &str) -> Result<i32> {
    debug!("Submitting: {command}");

    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .output()
        .with_context(ctx!(
          "Failed to run the submission command `{command}`", ;
          "Ensure that the scheduler CLI is installed and in the PATH",
        ))?;

    if !output.status.success() {
        return Err(anyhow!("The scheduler rejected the job")).with_context(ctx!(
          "The submission printed: {}", String::from_utf8_lossy(&output.stderr);
          "Ensure that you are on the correct cluster frontend",
        ));
    }

    Ok(output.status.code().unwrap_or(0))
}

/// Submit a job unless its folder already records a successful run.
///
/// Returns `true` when the job was submitted and `false` when the
/// `hpc_status` sentinel of `folder_path` already shows exit code 0.
pub fn submit_job_if_needed(command: &str, folder_path: &Path) -> Result<bool> {
    if check_hpc_status_file(folder_path)? {
        debug!("Skipping {folder_path:?}, already completed");
        return Ok(false);
    }

    submit_job(command)?;
    Ok(true)
}

/// List the currently running Torque jobs whose names match `job_pattern`.
///
/// `job_pattern` is a regex over job names and must contain one capture
/// group, e.g. `(VP_\w+)`. The resolved `qstat` for `target` is executed
/// and its plain-text table scraped for rows in the running state.
pub fn get_running_jobs_torque(job_pattern: &str, target: TargetSystem) -> Result<Vec<String>> {
    let qstat = resolve_command(SchedulerCommand::TorqueStatus, target)?;
    let listing = scheduler_listing(&qstat)?;
    parse_running_jobs(job_pattern, &listing)
}

/// List the currently running Slurm jobs whose names match `job_pattern`.
///
/// The Slurm counterpart of [get_running_jobs_torque], scraping the
/// resolved `squeue` for `target`.
pub fn get_running_jobs_slurm(job_pattern: &str, target: TargetSystem) -> Result<Vec<String>> {
    let squeue = resolve_command(SchedulerCommand::SlurmStatus, target)?;
    let listing = scheduler_listing(&squeue)?;
    parse_running_jobs(job_pattern, &listing)
}

/// Run a status-query binary and return its raw text output.
fn scheduler_listing(binary: &str) -> Result<String> {
    let output = Command::new(binary).output().with_context(ctx!(
      "Failed to run `{binary}`", ;
      "Ensure that the scheduler CLI is installed and in the PATH",
    ))?;

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Extract the names of running jobs from a scheduler's listing output.
///
/// A row counts as running when its state column holds `R`. Returns the
/// contents of the pattern's capture group, one entry per running job.
fn parse_running_jobs(job_pattern: &str, listing: &str) -> Result<Vec<String>> {
    let row = Regex::new(&format!(r"\S* {job_pattern}\s*\w+\s*\S*\s*R")).with_context(ctx!(
      "`{job_pattern}` is not a valid job name pattern", ;
      "The pattern must be a regex containing one capture group",
    ))?;

    Ok(row
        .captures_iter(listing)
        .filter_map(|caps| caps.get(1).map(|name| name.as_str().to_string()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const QSTAT_LISTING: &str = "\
Job ID           Name      User     Time Use S Queue
---------------- --------- -------- -------- - -----
1364728.woody    VP_01     iwso01   01:20:11 R work
1364729.woody    VP_02     iwso01   00:00:00 Q work
1364730.woody    VP_03     iwso01   02:03:44 R work
1364731.woody    Other_Job iwso01   00:10:00 R work
";

    #[test]
    fn running_jobs_are_filtered_by_state_and_pattern() {
        let jobs = parse_running_jobs(r"(VP_\w+)", QSTAT_LISTING).unwrap();
        assert_eq!(jobs, vec!["VP_01".to_string(), "VP_03".to_string()]);
    }

    #[test]
    fn no_matches_yields_an_empty_list() {
        let jobs = parse_running_jobs(r"(XY_\w+)", QSTAT_LISTING).unwrap();
        assert!(jobs.is_empty());
    }

    #[test]
    fn an_invalid_pattern_is_reported() {
        assert!(parse_running_jobs(r"(VP_\w+", QSTAT_LISTING).is_err());
    }
}
