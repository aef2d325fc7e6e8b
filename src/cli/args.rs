// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// hmmdecomp - decide between one profile HMM and a centroid-decomposed pair by BIC
pub struct Args {
    /// path to the aligned FASTA input
    #[argh(option, short = 'i')]
    pub input: Option<String>,

    /// file to write the decision report to (default: stdout only)
    #[argh(option, short = 'o')]
    pub output: Option<String>,

    /// also write the decision report as JSON to this path
    #[argh(option)]
    pub json: Option<String>,

    /// hmmbuild --symfrac value (default: 0.0)
    #[argh(option, default = "String::from(\"0.0\")")]
    pub symfrac: String,

    /// directory for intermediate files (default: .)
    #[argh(option, default = "String::from(\".\")")]
    pub workdir: String,

    /// prefix for intermediate file names (default: defaultjob)
    #[argh(option, default = "String::from(\"defaultjob\")")]
    pub job_name: String,

    /// maximum number of tree nodes accepted by the Newick parser (default: 10000)
    #[argh(option, default = "crate::core::tree::DEFAULT_NODE_CAPACITY")]
    pub max_tree_nodes: usize,

    /// hmmbuild executable (default: hmmbuild)
    #[argh(option, default = "String::from(\"hmmbuild\")")]
    pub hmmbuild_path: String,

    /// hmmsearch executable (default: hmmsearch)
    #[argh(option, default = "String::from(\"hmmsearch\")")]
    pub hmmsearch_path: String,

    /// path to the FastTree executable (default: FastTree)
    #[argh(option, default = "String::from(\"FastTree\")")]
    pub fasttree_path: String,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// print a sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
