// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,
    pub json: Option<String>,

    // Model building
    pub symfrac: Option<String>,

    // Intermediate files
    pub workdir: Option<String>,
    pub job_name: Option<String>,

    // Parser limits
    pub max_tree_nodes: Option<usize>,

    // External tools
    pub hmmbuild_path: Option<String>,
    pub hmmsearch_path: Option<String>,
    pub fasttree_path: Option<String>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            json: None,
            symfrac: None,
            workdir: None,
            job_name: None,
            max_tree_nodes: None,
            hmmbuild_path: None,
            hmmsearch_path: None,
            fasttree_path: None,
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# hmmdecomp.toml - Configuration file for hmmdecomp
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Path to the aligned FASTA input
input = "/path/to/alignment.fasta"

# File to write the decision report to (omit for stdout only)
output = "decision.txt"

# Also write the decision report as JSON
# json = "decision.json"

# =============================================================================
# MODEL BUILDING
# =============================================================================

# hmmbuild --symfrac value
symfrac = "0.0"

# =============================================================================
# INTERMEDIATE FILES
# =============================================================================

# Directory for intermediate files
workdir = "."

# Prefix for intermediate file names
job_name = "defaultjob"

# =============================================================================
# PARSER LIMITS
# =============================================================================

# Maximum number of tree nodes accepted by the Newick parser
max_tree_nodes = 10000

# =============================================================================
# EXTERNAL TOOLS
# =============================================================================

# hmmbuild_path = "hmmbuild"
# hmmsearch_path = "hmmsearch"
# fasttree_path = "FastTree"
"#
        .to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.input.as_deref(), Some("/path/to/alignment.fasta"));
        assert_eq!(config.max_tree_nodes, Some(10000));
        assert!(config.hmmbuild_path.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str("symfrac = \"0.5\"\n").unwrap();
        assert_eq!(config.symfrac.as_deref(), Some("0.5"));
        assert!(config.input.is_none());
    }
}
