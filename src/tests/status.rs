use tempdir::TempDir;

use super::*;

#[test]
fn missing_status_file_reads_as_not_done() {
    let temp = TempDir::new("hpc-helper").unwrap();

    assert_eq!(read_hpc_status(temp.path()).unwrap(), None);
    assert!(!check_hpc_status_file(temp.path()).unwrap());
}

#[test]
fn empty_status_file_reads_as_not_done() {
    let temp = TempDir::new("hpc-helper").unwrap();
    fs::write(temp.path().join(STATUS_FILE_NAME), "").unwrap();

    assert_eq!(read_hpc_status(temp.path()).unwrap(), None);
    assert!(!check_hpc_status_file(temp.path()).unwrap());
}

#[test]
fn zero_exit_status_means_done() {
    let temp = TempDir::new("hpc-helper").unwrap();
    write_hpc_status_file(temp.path(), 0).unwrap();

    assert_eq!(read_hpc_status(temp.path()).unwrap(), Some(0));
    assert!(check_hpc_status_file(temp.path()).unwrap());
}

#[test]
fn nonzero_exit_status_means_failed() {
    let temp = TempDir::new("hpc-helper").unwrap();
    write_hpc_status_file(temp.path(), 1).unwrap();

    assert_eq!(read_hpc_status(temp.path()).unwrap(), Some(1));
    assert!(!check_hpc_status_file(temp.path()).unwrap());
}

#[test]
fn writing_again_overwrites_the_previous_status() {
    let temp = TempDir::new("hpc-helper").unwrap();
    write_hpc_status_file(temp.path(), 1).unwrap();
    write_hpc_status_file(temp.path(), 0).unwrap();

    assert!(check_hpc_status_file(temp.path()).unwrap());
}

#[test]
fn garbage_in_the_status_file_is_an_error() {
    let temp = TempDir::new("hpc-helper").unwrap();
    fs::write(temp.path().join(STATUS_FILE_NAME), "not a number").unwrap();

    assert!(read_hpc_status(temp.path()).is_err());
}

#[test]
fn cleanup_removes_status_files_and_skips_missing_ones() {
    let done = TempDir::new("hpc-helper").unwrap();
    let never_ran = TempDir::new("hpc-helper").unwrap();
    write_hpc_status_file(done.path(), 0).unwrap();

    cleanup_hpc_status_files(&[done.path().to_path_buf(), never_ran.path().to_path_buf()])
        .unwrap();

    assert!(!done.path().join(STATUS_FILE_NAME).exists());
}
