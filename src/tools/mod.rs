// mod.rs - External tool orchestration: hmmbuild, hmmsearch, FastTree

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// All intermediate file paths of one run, derived from the working
/// directory and the job name prefix.
#[derive(Debug, Clone)]
pub struct JobPaths {
    pub single_hmm: PathBuf,
    pub double_first_hmm: PathBuf,
    pub double_second_hmm: PathBuf,

    pub double_first_msa: PathBuf,
    pub double_second_msa: PathBuf,

    pub tree_out: PathBuf,

    pub single_tbl: PathBuf,
    pub double_first_tbl: PathBuf,
    pub double_second_tbl: PathBuf,

    pub hmmbuild_single_log: PathBuf,
    pub hmmbuild_first_log: PathBuf,
    pub hmmbuild_second_log: PathBuf,

    pub hmmsearch_single_log: PathBuf,
    pub hmmsearch_first_log: PathBuf,
    pub hmmsearch_second_log: PathBuf,
}

impl JobPaths {
    pub fn new(workdir: &Path, job_name: &str) -> Self {
        let name = |suffix: &str| workdir.join(format!("{job_name}.{suffix}"));
        Self {
            single_hmm: name("single_hmm"),
            double_first_hmm: name("double_first_hmm"),
            double_second_hmm: name("double_second_hmm"),
            double_first_msa: name("double_first_msa"),
            double_second_msa: name("double_second_msa"),
            tree_out: name("fasttree.out"),
            single_tbl: name("single_search_out"),
            double_first_tbl: name("double_first_search_out"),
            double_second_tbl: name("double_second_search_out"),
            hmmbuild_single_log: name("hmmbuild_single.stdout"),
            hmmbuild_first_log: name("hmmbuild_first_double.stdout"),
            hmmbuild_second_log: name("hmmbuild_second_double.stdout"),
            hmmsearch_single_log: name("hmmsearch_single.stdout"),
            hmmsearch_first_log: name("hmmsearch_first_double.stdout"),
            hmmsearch_second_log: name("hmmsearch_second_double.stdout"),
        }
    }
}

/// Build a profile HMM from an aligned FASTA file with hmmbuild.
pub fn hmmbuild_job(
    binary: &str,
    symfrac: &str,
    input: &Path,
    output: &Path,
    log: &Path,
) -> Result<(), String> {
    let mut command = Command::new(binary);
    command
        .arg("--dna")
        .arg("--symfrac")
        .arg(symfrac)
        .arg(output)
        .arg(input)
        .stdout(log_redirect(log, "hmmbuild")?);
    run_command(command, "hmmbuild")
}

/// Score an alignment's sequences against a profile HMM with hmmsearch,
/// writing per-sequence bitscores to `tblout`.
pub fn hmmsearch_job(
    binary: &str,
    hmm: &Path,
    sequences: &Path,
    tblout: &Path,
    log: &Path,
) -> Result<(), String> {
    let mut command = Command::new(binary);
    command
        .arg("--noali")
        .arg("--max")
        .arg("-E")
        .arg("Infinity")
        .arg("--tblout")
        .arg(tblout)
        .arg(hmm)
        .arg(sequences)
        .stdout(log_redirect(log, "hmmsearch")?);
    run_command(command, "hmmsearch")
}

/// Infer a maximum-likelihood tree with FastTree; the Newick output goes to
/// `output` (FastTree writes the tree to stdout).
pub fn fasttree_job(binary: &str, input: &Path, output: &Path) -> Result<(), String> {
    let mut command = Command::new(binary);
    command
        .arg("-gtr")
        .arg("-nt")
        .arg("-nosupport")
        .arg(input)
        .stdout(log_redirect(output, "fasttree")?);
    run_command(command, "fasttree")
}

fn log_redirect(path: &Path, stage: &str) -> Result<Stdio, String> {
    let file = File::create(path)
        .map_err(|e| format!("{}: failed to create '{}': {}", stage, path.display(), e))?;
    Ok(Stdio::from(file))
}

/// Fire-and-forget execution: launch, wait, check the exit status. No
/// retries; a failed job aborts the run.
fn run_command(mut command: Command, stage: &str) -> Result<(), String> {
    let status = command
        .status()
        .map_err(|e| format!("{stage}: failed to launch '{:?}': {e}", command.get_program()))?;
    if !status.success() {
        return Err(format!("{stage}: command exited with {status}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_paths_use_prefix() {
        let paths = JobPaths::new(Path::new("/tmp/work"), "myjob");
        assert_eq!(paths.single_hmm, Path::new("/tmp/work/myjob.single_hmm"));
        assert_eq!(paths.tree_out, Path::new("/tmp/work/myjob.fasttree.out"));
        assert_eq!(
            paths.double_second_tbl,
            Path::new("/tmp/work/myjob.double_second_search_out")
        );
    }

    #[test]
    fn test_run_command_reports_failure() {
        assert!(run_command(Command::new("true"), "probe").is_ok());
        let err = run_command(Command::new("false"), "probe").unwrap_err();
        assert!(err.starts_with("probe:"), "unexpected error: {err}");
    }

    #[test]
    fn test_missing_binary_is_a_launch_error() {
        let err = run_command(Command::new("no-such-binary-hopefully"), "probe").unwrap_err();
        assert!(err.contains("failed to launch"), "unexpected error: {err}");
    }
}
