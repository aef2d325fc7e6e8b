// main.rs - CLI entry point

use std::time::Instant;

use hmmdecomp::cli::Config;
use hmmdecomp::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let run = validate_args(&args)?;

    println!("🚀 hmmdecomp v{}", env!("CARGO_PKG_VERSION"));
    let total_start = Instant::now();

    println!("Parsing input alignment..");
    let msa = read_msa(&run.input)?;
    println!("   {} sequences of length {}", msa.num_seqs(), msa.seq_len());

    println!("Building single model HMM..");
    hmmbuild_job(
        &args.hmmbuild_path,
        &run.symfrac,
        &run.input,
        &run.paths.single_hmm,
        &run.paths.hmmbuild_single_log,
    )?;

    println!("Building tree..");
    fasttree_job(&args.fasttree_path, &run.input, &run.paths.tree_out)?;

    let newick = std::fs::read_to_string(&run.paths.tree_out).map_err(|e| {
        format!(
            "Failed to read tree file '{}': {}",
            run.paths.tree_out.display(),
            e
        )
    })?;
    let tree = parse_newick_with_capacity(&newick, run.max_tree_nodes)
        .map_err(|e| format!("parse: {}", e))?;

    println!("Doing centroid decomposition..");
    let edge = centroid_edge(&tree).map_err(|e| format!("decompose: {}", e))?;
    let (first, second) = partition_msa(&tree, edge, &msa).map_err(|e| format!("partition: {}", e))?;
    println!(
        "   split {} leaves into {} + {}",
        msa.num_seqs(),
        first.num_seqs(),
        second.num_seqs()
    );
    write_msa(&first, &run.paths.double_first_msa)?;
    write_msa(&second, &run.paths.double_second_msa)?;

    println!("Building decomposed model HMMs..");
    hmmbuild_job(
        &args.hmmbuild_path,
        &run.symfrac,
        &run.paths.double_first_msa,
        &run.paths.double_first_hmm,
        &run.paths.hmmbuild_first_log,
    )?;
    hmmbuild_job(
        &args.hmmbuild_path,
        &run.symfrac,
        &run.paths.double_second_msa,
        &run.paths.double_second_hmm,
        &run.paths.hmmbuild_second_log,
    )?;

    println!("Computing likelihood for both models..");
    hmmsearch_job(
        &args.hmmsearch_path,
        &run.paths.single_hmm,
        &run.input,
        &run.paths.single_tbl,
        &run.paths.hmmsearch_single_log,
    )?;
    hmmsearch_job(
        &args.hmmsearch_path,
        &run.paths.double_first_hmm,
        &run.paths.double_first_msa,
        &run.paths.double_first_tbl,
        &run.paths.hmmsearch_first_log,
    )?;
    hmmsearch_job(
        &args.hmmsearch_path,
        &run.paths.double_second_hmm,
        &run.paths.double_second_msa,
        &run.paths.double_second_tbl,
        &run.paths.hmmsearch_second_log,
    )?;

    let single_scores = read_tblout_scores(&run.paths.single_tbl, &msa)?;
    let first_scores = read_tblout_scores(&run.paths.double_first_tbl, &first)?;
    let second_scores = read_tblout_scores(&run.paths.double_second_tbl, &second)?;

    let model_length = read_model_length(&run.paths.single_hmm)?;
    let delta_k = free_param_delta(model_length);

    println!("Performing BIC model selection..");
    let selection = select_model(&single_scores, &first_scores, &second_scores, delta_k)
        .map_err(|e| format!("select: {}", e))?;

    let report = DecisionReport::new(
        &run.input,
        &msa,
        &first,
        &second,
        model_length,
        delta_k,
        selection,
    );
    report.print_summary();

    if let Some(output) = &args.output {
        write_text(&report, std::path::Path::new(output))?;
    }
    if let Some(json) = &args.json {
        write_json(&report, std::path::Path::new(json))?;
    }

    println!("✅ Finished in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}
