// validation.rs - Input validation utilities

use std::path::PathBuf;

use crate::cli::args::Args;
use crate::tools::JobPaths;

/// Validated run parameters derived from [`Args`].
#[derive(Debug)]
pub struct ValidationResult {
    pub input: PathBuf,
    pub symfrac: String,
    pub max_tree_nodes: usize,
    pub paths: JobPaths,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let input = args
        .input
        .as_ref()
        .ok_or("--input is required (aligned FASTA file)")?;
    let input = PathBuf::from(input);
    if !input.is_file() {
        return Err(format!("Input file does not exist: {}", input.display()));
    }

    // symfrac is handed to hmmbuild verbatim, but catch nonsense early
    let symfrac_value: f64 = args
        .symfrac
        .parse()
        .map_err(|_| format!("Invalid --symfrac value '{}': not a number", args.symfrac))?;
    if !(0.0..=1.0).contains(&symfrac_value) {
        return Err(format!(
            "Invalid --symfrac value '{}': must be between 0.0 and 1.0",
            args.symfrac
        ));
    }

    // The smallest decomposable tree (two leaves) already has three nodes
    if args.max_tree_nodes < 3 {
        return Err(format!(
            "--max-tree-nodes {} is too small to hold any decomposable tree",
            args.max_tree_nodes
        ));
    }

    let workdir = PathBuf::from(&args.workdir);
    std::fs::create_dir_all(&workdir)
        .map_err(|e| format!("Failed to create workdir '{}': {}", workdir.display(), e))?;

    if args.job_name.is_empty() || args.job_name.contains('/') {
        return Err(format!(
            "Invalid --job-name '{}': must be a non-empty file name prefix",
            args.job_name
        ));
    }

    Ok(ValidationResult {
        input,
        symfrac: args.symfrac.clone(),
        max_tree_nodes: args.max_tree_nodes,
        paths: JobPaths::new(&workdir, &args.job_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::DEFAULT_NODE_CAPACITY;
    use std::io::Write;
    use tempfile::TempDir;

    fn args_with_input(dir: &TempDir) -> Args {
        let input = dir.path().join("aln.fasta");
        let mut file = std::fs::File::create(&input).unwrap();
        file.write_all(b">A\nACGT\n>B\nACGA\n").unwrap();
        Args {
            input: Some(input.to_string_lossy().into_owned()),
            output: None,
            json: None,
            symfrac: "0.0".to_string(),
            workdir: dir.path().join("work").to_string_lossy().into_owned(),
            job_name: "testjob".to_string(),
            max_tree_nodes: DEFAULT_NODE_CAPACITY,
            hmmbuild_path: "hmmbuild".to_string(),
            hmmsearch_path: "hmmsearch".to_string(),
            fasttree_path: "FastTree".to_string(),
            config: None,
            generate_config: false,
        }
    }

    #[test]
    fn test_valid_args() {
        let dir = TempDir::new().unwrap();
        let result = validate_args(&args_with_input(&dir)).unwrap();
        assert!(result.input.is_file());
        // The workdir was created and the job paths live inside it
        assert!(result.paths.single_hmm.parent().unwrap().is_dir());
    }

    #[test]
    fn test_missing_input_rejected() {
        let dir = TempDir::new().unwrap();
        let mut args = args_with_input(&dir);
        args.input = None;
        assert!(validate_args(&args).unwrap_err().contains("--input"));

        let mut args = args_with_input(&dir);
        args.input = Some(dir.path().join("absent.fasta").to_string_lossy().into_owned());
        assert!(validate_args(&args).unwrap_err().contains("does not exist"));
    }

    #[test]
    fn test_symfrac_range_checked() {
        let dir = TempDir::new().unwrap();
        let mut args = args_with_input(&dir);
        args.symfrac = "1.5".to_string();
        assert!(validate_args(&args).unwrap_err().contains("symfrac"));

        let mut args = args_with_input(&dir);
        args.symfrac = "abc".to_string();
        assert!(validate_args(&args).unwrap_err().contains("not a number"));
    }

    #[test]
    fn test_tiny_node_capacity_rejected() {
        let dir = TempDir::new().unwrap();
        let mut args = args_with_input(&dir);
        args.max_tree_nodes = 2;
        assert!(validate_args(&args).unwrap_err().contains("max-tree-nodes"));
    }

    #[test]
    fn test_job_name_must_be_a_prefix() {
        let dir = TempDir::new().unwrap();
        let mut args = args_with_input(&dir);
        args.job_name = "a/b".to_string();
        assert!(validate_args(&args).unwrap_err().contains("job-name"));
    }
}
