use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::info;

use crate::constants::STATUS_FILE_NAME;
use crate::error::ctx;
use crate::error::Ctx;

/// Read the exit status recorded in the `hpc_status` file of
/// `folder_path`.
///
/// Returns `None` when the file is absent or still empty, i.e. the job
/// has not finished yet.
pub fn read_hpc_status(folder_path: &Path) -> Result<Option<i32>> {
    let status_path = folder_path.join(STATUS_FILE_NAME);
    if !status_path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&status_path).with_context(ctx!(
      "Could not read the status file {status_path:?}", ;
      "Ensure that the file is accessible and valid UTF-8",
    ))?;

    let status = contents.trim();
    if status.is_empty() {
        return Ok(None);
    }

    let code = status.parse::<i32>().with_context(ctx!(
      "The status file {status_path:?} does not hold an exit code", ;
      "The file should contain a single integer, as written by `write_hpc_status_file`",
    ))?;

    Ok(Some(code))
}

/// Check whether the job in `folder_path` already completed successfully.
///
/// `true` iff an `hpc_status` file exists and records exit code `0`.
pub fn check_hpc_status_file(folder_path: &Path) -> Result<bool> {
    Ok(read_hpc_status(folder_path)? == Some(0))
}

/// Record a job's exit status in the `hpc_status` file of `folder_path`,
/// creating or truncating the file.
pub fn write_hpc_status_file(folder_path: &Path, exit_status: i32) -> Result<()> {
    let status_path = folder_path.join(STATUS_FILE_NAME);
    debug!("Recording exit status {exit_status} in {status_path:?}");

    fs::write(&status_path, format!("{exit_status}\n")).with_context(ctx!(
      "Could not write the status file {status_path:?}", ;
      "Ensure that you have permissions to write to the job folder",
    ))
}

/// Remove the `hpc_status` files from a list of job folders after all jobs
/// completed.
///
/// Folders without a status file are skipped.
pub fn cleanup_hpc_status_files(dir_list: &[PathBuf]) -> Result<()> {
    for dir_path in dir_list {
        let status_path = dir_path.join(STATUS_FILE_NAME);
        if status_path.exists() {
            fs::remove_file(&status_path).with_context(ctx!(
              "Could not remove the status file {status_path:?}", ;
              "Ensure that you have permissions to modify the job folder",
            ))?;
        }
    }

    info!("Done with cleanup!");
    Ok(())
}

#[cfg(test)]
#[path = "tests/status.rs"]
mod tests;
