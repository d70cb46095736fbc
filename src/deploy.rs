use std::env;

use anyhow::Context;
use anyhow::Result;
use log::info;

use crate::bailc;
use crate::constants::CLUSTER_PATH_MARKER;
use crate::error::ctx;
use crate::error::Ctx;

/// Where a job script is meant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployType {
    /// On the cluster.
    Hpc,
    /// An alias for [DeployType::Hpc].
    Remote,
    /// On the user's own machine.
    Local,
    /// An alias for [DeployType::Local].
    Develop,
}

impl DeployType {
    /// Whether this deploy type expects the cluster environment.
    fn on_cluster(&self) -> bool {
        matches!(self, DeployType::Hpc | DeployType::Remote)
    }
}

/// Check that the running executable matches the intended deploy type.
///
/// The cluster environment is recognized by the `woody` marker in the
/// executable's path, the convention of the cluster-provided toolchains.
/// Scripts guard themselves with this before touching paths that only
/// exist on one side.
pub fn check_deploy_type(deploy_type: DeployType) -> Result<()> {
    let executable = env::current_exe().with_context(ctx!(
      "Could not determine the running executable", ;
      "",
    ))?;

    check_executable(deploy_type, &executable.to_string_lossy())?;

    info!("Running on {}...", executable.display());
    Ok(())
}

/// The pure part of [check_deploy_type]: compare a deploy type against an
/// executable path.
pub fn check_executable(deploy_type: DeployType, executable: &str) -> Result<()> {
    let on_cluster = executable.contains(CLUSTER_PATH_MARKER);

    if deploy_type.on_cluster() && !on_cluster {
        bailc!(
            "Deploy type is {:?} but this is not a cluster environment", deploy_type;
            "The executable `{}` is not a cluster path", executable;
            "Run this from a cluster frontend, or switch to DeployType::Local",
        );
    }

    if !deploy_type.on_cluster() && on_cluster {
        bailc!(
            "Deploy type is {:?} but this runs on the cluster", deploy_type;
            "The executable `{}` is a cluster path", executable;
            "Submit through the scheduler, or switch to DeployType::Hpc",
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLUSTER_EXECUTABLE: &str = "/home/woody/iwso/python3";
    const LOCAL_EXECUTABLE: &str = "/usr/bin/python3";

    #[test]
    fn hpc_deploy_types_require_a_cluster_path() {
        for deploy_type in [DeployType::Hpc, DeployType::Remote] {
            assert!(check_executable(deploy_type, CLUSTER_EXECUTABLE).is_ok());
            assert!(check_executable(deploy_type, LOCAL_EXECUTABLE).is_err());
        }
    }

    #[test]
    fn local_deploy_types_reject_a_cluster_path() {
        for deploy_type in [DeployType::Local, DeployType::Develop] {
            assert!(check_executable(deploy_type, LOCAL_EXECUTABLE).is_ok());
            assert!(check_executable(deploy_type, CLUSTER_EXECUTABLE).is_err());
        }
    }
}
