// mod.rs - Decision report writers

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::selection::{ModelChoice, Selection};
use crate::data::msa::Msa;

/// Everything the run decided, ready for reporting.
#[derive(Debug, Serialize)]
pub struct DecisionReport {
    pub version: String,
    pub generated: String,
    pub input: String,
    pub num_seqs: usize,
    pub alignment_length: usize,
    pub model_length: usize,
    pub free_param_delta: usize,
    pub first_partition: Vec<String>,
    pub second_partition: Vec<String>,
    pub log_odds_single: f64,
    pub log_odds_decomposed: f64,
    pub delta_bic: f64,
    pub best_model: ModelChoice,
}

impl DecisionReport {
    pub fn new(
        input: &Path,
        msa: &Msa,
        first: &Msa,
        second: &Msa,
        model_length: usize,
        free_param_delta: usize,
        selection: Selection,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated: chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            input: input.display().to_string(),
            num_seqs: msa.num_seqs(),
            alignment_length: msa.seq_len(),
            model_length,
            free_param_delta,
            first_partition: first.names().to_vec(),
            second_partition: second.names().to_vec(),
            log_odds_single: selection.log_odds_single,
            log_odds_decomposed: selection.log_odds_decomposed,
            delta_bic: selection.delta_bic,
            best_model: selection.choice,
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# hmmdecomp v{}\n", self.version));
        out.push_str(&format!("# Generated: {}\n", self.generated));
        out.push_str(&format!("# Input: {}\n", self.input));
        out.push_str(&format!("sequences\t{}\n", self.num_seqs));
        out.push_str(&format!("alignment_length\t{}\n", self.alignment_length));
        out.push_str(&format!("model_length\t{}\n", self.model_length));
        out.push_str(&format!("free_param_delta\t{}\n", self.free_param_delta));
        out.push_str(&format!(
            "first_partition\t{}\n",
            self.first_partition.join(",")
        ));
        out.push_str(&format!(
            "second_partition\t{}\n",
            self.second_partition.join(",")
        ));
        out.push_str(&format!("log_odds_single\t{}\n", self.log_odds_single));
        out.push_str(&format!(
            "log_odds_decomposed\t{}\n",
            self.log_odds_decomposed
        ));
        out.push_str(&format!("delta_bic\t{}\n", self.delta_bic));
        out.push_str(&format!("best_model\t{}\n", self.best_model));
        out
    }

    /// Print the decision summary to stdout.
    pub fn print_summary(&self) {
        println!(
            "Delta BIC is {:.4}, log odds of decomposed model is {:.4}, log odds of single model is {:.4}",
            self.delta_bic, self.log_odds_decomposed, self.log_odds_single
        );
        println!("The best model according to BIC is: {}", self.best_model);
    }
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

/// Write the decision report as tab-separated text with a commented header.
pub fn write_text(report: &DecisionReport, file_path: &Path) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create report file '{}': {}", file_path.display(), e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(report.render_text().as_bytes())
        .map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Decision report written to: {}", file_path.display());
    Ok(())
}

/// Write the decision report as JSON.
pub fn write_json(report: &DecisionReport, file_path: &Path) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let content = serde_json::to_string_pretty(report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    std::fs::write(file_path, content)
        .map_err(|e| format!("Failed to write JSON report '{}': {}", file_path.display(), e))?;
    println!("✅ JSON report written to: {}", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_report() -> DecisionReport {
        let msa = Msa::from_records(vec![
            ("A".to_string(), "ACGT".to_string()),
            ("B".to_string(), "ACGA".to_string()),
            ("C".to_string(), "TCGA".to_string()),
            ("D".to_string(), "TCGT".to_string()),
        ])
        .unwrap();
        let first = Msa::from_records(vec![
            ("C".to_string(), "TCGA".to_string()),
            ("D".to_string(), "TCGT".to_string()),
        ])
        .unwrap();
        let second = Msa::from_records(vec![
            ("A".to_string(), "ACGT".to_string()),
            ("B".to_string(), "ACGA".to_string()),
        ])
        .unwrap();
        let selection = Selection {
            delta_bic: 12.0,
            log_odds_single: -32.0,
            log_odds_decomposed: -24.0,
            choice: ModelChoice::Decomposed,
        };
        DecisionReport::new(Path::new("aln.fasta"), &msa, &first, &second, 4, 28, selection)
    }

    #[test]
    fn test_text_report_fields() {
        let text = sample_report().render_text();
        assert!(text.contains("sequences\t4"));
        assert!(text.contains("first_partition\tC,D"));
        assert!(text.contains("best_model\tdecomposed"));
        assert!(text.contains("delta_bic\t12"));
    }

    #[test]
    fn test_json_report_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports/decision.json");
        write_json(&sample_report(), &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["best_model"], "decomposed");
        assert_eq!(value["num_seqs"], 4);
        assert_eq!(value["second_partition"][0], "A");
    }

    #[test]
    fn test_write_text_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deep/nested/decision.txt");
        write_text(&sample_report(), &path).unwrap();
        assert!(path.is_file());
    }
}
