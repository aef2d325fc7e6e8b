// hmmer.rs - Readers for HMMER output: tblout bitscores and model length

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::msa::Msa;

/// Read per-sequence full-sequence bitscores from an hmmsearch `--tblout`
/// file, returned in `msa` alignment order.
///
/// tblout is whitespace-delimited with `#` comment lines; column 1 is the
/// target sequence name and column 6 the full-sequence bitscore. Every
/// sequence of the alignment must appear exactly once, so a truncated
/// search (or a search against the wrong alignment) is caught here instead
/// of skewing the likelihood sums downstream.
pub fn read_tblout_scores(path: &Path, msa: &Msa) -> Result<Vec<f64>, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open tblout file '{}': {}", path.display(), e))?;
    let reader = BufReader::new(file);

    let mut scores: std::collections::HashMap<String, f64> = std::collections::HashMap::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line
            .map_err(|e| format!("Failed to read '{}' line {}: {}", path.display(), line_num + 1, e))?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 {
            return Err(format!(
                "Malformed tblout line {} in '{}': expected at least 6 columns, got {}",
                line_num + 1,
                path.display(),
                fields.len()
            ));
        }
        let name = fields[0].to_string();
        let score: f64 = fields[5].parse().map_err(|_| {
            format!(
                "Malformed bitscore '{}' on line {} of '{}'",
                fields[5],
                line_num + 1,
                path.display()
            )
        })?;
        if scores.insert(name.clone(), score).is_some() {
            return Err(format!(
                "Duplicate target '{}' in tblout file '{}'",
                name,
                path.display()
            ));
        }
    }

    msa.names()
        .iter()
        .map(|name| {
            scores.get(name).copied().ok_or_else(|| {
                format!(
                    "No bitscore for sequence '{}' in tblout file '{}'",
                    name,
                    path.display()
                )
            })
        })
        .collect()
}

/// Read the match-state count of a profile HMM from the `LENG` line of an
/// hmmbuild-produced `.hmm` file.
pub fn read_model_length(path: &Path) -> Result<usize, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open HMM file '{}': {}", path.display(), e))?;
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line.map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
        let mut fields = line.split_whitespace();
        if fields.next() == Some("LENG") {
            let value = fields
                .next()
                .ok_or_else(|| format!("LENG line without a value in '{}'", path.display()))?;
            return value
                .parse()
                .map_err(|_| format!("Malformed LENG value '{}' in '{}'", value, path.display()));
        }
    }
    Err(format!("No LENG line found in HMM file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const TBLOUT: &str = "\
#                                                               --- full sequence ---- --- best 1 domain ---- --- domain number estimation ----
# target name        accession  query name           accession    E-value  score  bias   E-value  score  bias   exp reg clu  ov env dom rep inc description of target
#------------------- ---------- -------------------- ---------- --------- ------ ----- --------- ------ -----   --- --- --- --- --- --- --- --- ---------------------
B                    -          job.single_hmm       -            1.2e-20   61.5   0.0   1.4e-20   61.3   0.0   1.0   1   0   0   1   1   1   1 -
A                    -          job.single_hmm       -            3.1e-18   54.2   0.0   3.4e-18   54.0   0.0   1.0   1   0   0   1   1   1   1 -
#
# Program:         hmmsearch
";

    fn msa_ab() -> Msa {
        Msa::from_records(vec![
            ("A".to_string(), "ACGT".to_string()),
            ("B".to_string(), "ACGA".to_string()),
        ])
        .unwrap()
    }

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_scores_follow_alignment_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "search.tbl", TBLOUT);
        // File order is B then A; output must follow the alignment (A, B).
        let scores = read_tblout_scores(&path, &msa_ab()).unwrap();
        assert_eq!(scores, vec![54.2, 61.5]);
    }

    #[test]
    fn test_missing_sequence_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "search.tbl", TBLOUT);
        let msa = Msa::from_records(vec![
            ("A".to_string(), "ACGT".to_string()),
            ("Z".to_string(), "ACGT".to_string()),
        ])
        .unwrap();
        let err = read_tblout_scores(&path, &msa).unwrap_err();
        assert!(err.contains("'Z'"), "unexpected error: {err}");
    }

    #[test]
    fn test_malformed_score_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.tbl", "A - q - 1e-3 not_a_number 0.0\n");
        let err = read_tblout_scores(&path, &msa_ab()).unwrap_err();
        assert!(err.contains("Malformed bitscore"), "unexpected error: {err}");
    }

    #[test]
    fn test_read_model_length() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "model.hmm",
            "HMMER3/f [3.3.2 | Nov 2020]\nNAME  job.single_hmm\nLENG  124\nALPH  DNA\n",
        );
        assert_eq!(read_model_length(&path).unwrap(), 124);
    }

    #[test]
    fn test_hmm_without_leng_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "model.hmm", "HMMER3/f\nNAME x\n");
        let err = read_model_length(&path).unwrap_err();
        assert!(err.contains("No LENG line"), "unexpected error: {err}");
    }
}
