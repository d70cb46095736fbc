use crate::cluster::Scheduler;

use super::*;

fn test_job(target_system: TargetSystem) -> SlurmJob {
    SlurmJob::new("Test_Job", "jobscript.sh", target_system)
}

#[test]
fn tinygpu_defaults_to_a_single_gpu() {
    assert_eq!(
        build_job_submit_slurm(&test_job(TargetSystem::TinyGpu)),
        Ok("sbatch.tinygpu --job-name Test_Job --gres=gpu:1 \
            --time=24:00:00 --mail-type=ALL jobscript.sh"
            .to_string())
    );
}

#[test]
fn non_gpu_systems_request_nodes_and_tasks() {
    assert_eq!(
        build_job_submit_slurm(&test_job(TargetSystem::Emmy)),
        Ok("sbatch --job-name Test_Job --nodes=1 --ntasks-per-node=4 \
            --time=24:00:00 --mail-type=ALL jobscript.sh"
            .to_string())
    );

    let mut job = test_job(TargetSystem::Meggie);
    job.nodes = 4;
    job.tasks_per_node = 8;
    assert_eq!(
        build_job_submit_slurm(&job),
        Ok("sbatch --job-name Test_Job --nodes=4 --ntasks-per-node=8 \
            --time=24:00:00 --mail-type=ALL jobscript.sh"
            .to_string())
    );
}

#[test]
fn args_go_after_the_script_name() {
    let mut job = test_job(TargetSystem::TinyGpu);
    job.args = JobArgs::new()
        .positional("path1")
        .positional("")
        .named("SUBJECT_DIR", "path3");

    assert_eq!(
        build_job_submit_slurm(&job),
        Ok("sbatch.tinygpu --job-name Test_Job --gres=gpu:1 \
            --time=24:00:00 --mail-type=ALL jobscript.sh \
            --export=PARAMS=\"path1\",SUBJECT_DIR=\"path3\""
            .to_string())
    );
}

#[test]
fn partition_is_emitted_before_the_gres_flag() {
    let mut job = test_job(TargetSystem::TinyGpu);
    job.partition = Some("a100".to_string());
    job.gres = Some("gpu:a100:1".to_string());

    assert_eq!(
        build_job_submit_slurm(&job),
        Ok("sbatch.tinygpu --job-name Test_Job --partition=a100 --gres=gpu:a100:1 \
            --time=24:00:00 --mail-type=ALL jobscript.sh"
            .to_string())
    );
}

#[test]
fn gpu_typed_partition_must_match_the_gres_string() {
    let mut job = test_job(TargetSystem::TinyGpu);
    job.partition = Some("a100".to_string());
    job.gres = Some("gpu:v100:4".to_string());

    assert!(matches!(
        build_job_submit_slurm(&job),
        Err(SchedulerError::InvalidConfiguration(_))
    ));

    job.partition = Some("v100".to_string());
    job.gres = Some("gpu:v100:4".to_string());
    assert!(build_job_submit_slurm(&job).is_ok());
}

#[test]
fn untyped_partitions_skip_the_gres_cross_check() {
    let mut job = test_job(TargetSystem::TinyGpu);
    job.partition = Some("broadwell256".to_string());
    job.gres = Some("gpu:v100:4".to_string());

    assert_eq!(
        build_job_submit_slurm(&job),
        Ok("sbatch.tinygpu --job-name Test_Job --partition=broadwell256 --gres=gpu:v100:4 \
            --time=24:00:00 --mail-type=ALL jobscript.sh"
            .to_string())
    );
}

#[test]
fn typed_partition_without_explicit_gres_fails_the_cross_check() {
    // The default gres `gpu:1` does not mention a GPU type.
    let mut job = test_job(TargetSystem::TinyGpu);
    job.partition = Some("a100".to_string());

    assert!(matches!(
        build_job_submit_slurm(&job),
        Err(SchedulerError::InvalidConfiguration(_))
    ));
}

#[test]
fn mail_type_is_rendered_uppercase() {
    let mut job = test_job(TargetSystem::TinyFat);
    job.mail_type = MailType::Fail;

    let command = build_job_submit_slurm(&job).unwrap();
    assert!(command.contains("--mail-type=FAIL"));

    assert_eq!(MailType::Begin.to_string(), "BEGIN");
    assert_eq!(MailType::End.to_string(), "END");
    assert_eq!(MailType::All.to_string(), "ALL");
}

#[test]
fn woody_is_rejected() {
    assert_eq!(
        build_job_submit_slurm(&test_job(TargetSystem::Woody)),
        Err(SchedulerError::UnsupportedScheduler {
            scheduler: Scheduler::Slurm,
            target: TargetSystem::Woody,
        })
    );
}
