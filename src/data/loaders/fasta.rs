// fasta.rs - Aligned FASTA reader/writer backed by the bio crate

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bio::io::fasta;

use crate::data::msa::Msa;

/// Read an aligned FASTA file into an [`Msa`].
///
/// Multi-line sequences are concatenated by the reader; ragged lengths,
/// duplicate names and empty files are reported as errors since downstream
/// stages rely on the alignment invariants.
pub fn read_msa(path: &Path) -> Result<Msa, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open FASTA file '{}': {}", path.display(), e))?;
    let reader = fasta::Reader::new(BufReader::new(file));

    let mut records = Vec::new();
    for record_result in reader.records() {
        let record = record_result
            .map_err(|e| format!("Invalid FASTA record in '{}': {}", path.display(), e))?;
        let sequence = String::from_utf8(record.seq().to_vec()).map_err(|_| {
            format!(
                "Sequence '{}' in '{}' is not valid UTF-8",
                record.id(),
                path.display()
            )
        })?;
        records.push((record.id().to_string(), sequence));
    }

    Msa::from_records(records)
        .map_err(|e| format!("Invalid alignment in '{}': {}", path.display(), e))
}

/// Write an [`Msa`] as FASTA, one record per sequence in alignment order.
pub fn write_msa(msa: &Msa, path: &Path) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|e| format!("Failed to create FASTA file '{}': {}", path.display(), e))?;
    let mut writer = fasta::Writer::new(file);
    for (name, sequence) in msa.iter() {
        writer
            .write(name, None, sequence.as_bytes())
            .map_err(|e| format!("Failed to write FASTA record '{}': {}", name, e))?;
    }
    Ok(())
}
