// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::core::tree::DEFAULT_NODE_CAPACITY;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input.is_none() {
            self.input = config.input;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.json.is_none() {
            self.json = config.json;
        }

        // Model building (only override defaults, not explicit CLI values)
        if self.symfrac == "0.0" && config.symfrac.is_some() {
            self.symfrac = config.symfrac.unwrap();
        }

        // Intermediate files
        if self.workdir == "." && config.workdir.is_some() {
            self.workdir = config.workdir.unwrap();
        }
        if self.job_name == "defaultjob" && config.job_name.is_some() {
            self.job_name = config.job_name.unwrap();
        }

        // Parser limits
        if self.max_tree_nodes == DEFAULT_NODE_CAPACITY && config.max_tree_nodes.is_some() {
            self.max_tree_nodes = config.max_tree_nodes.unwrap();
        }

        // External tools
        if self.hmmbuild_path == "hmmbuild" && config.hmmbuild_path.is_some() {
            self.hmmbuild_path = config.hmmbuild_path.unwrap();
        }
        if self.hmmsearch_path == "hmmsearch" && config.hmmsearch_path.is_some() {
            self.hmmsearch_path = config.hmmsearch_path.unwrap();
        }
        if self.fasttree_path == "FastTree" && config.fasttree_path.is_some() {
            self.fasttree_path = config.fasttree_path.unwrap();
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
