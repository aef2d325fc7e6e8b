// msa.rs - Multiple sequence alignment container

use std::collections::HashMap;

use thiserror::Error;

/// Shape violations detected when assembling an alignment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MsaError {
    #[error("alignment contains no sequences")]
    Empty,

    /// All sequences in one alignment must share the same length.
    #[error("sequence '{name}' has length {got}, expected {expected}")]
    RaggedSequence {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("duplicate sequence name '{name}'")]
    DuplicateName { name: String },
}

/// An in-memory multiple sequence alignment: an ordered list of named,
/// equal-length sequences with unique names.
///
/// Order is preserved from the source (FASTA record order, or leaf visit
/// order for partitioned halves); a name index gives O(1) lookup.
#[derive(Debug, Clone)]
pub struct Msa {
    names: Vec<String>,
    sequences: Vec<String>,
    index: HashMap<String, usize>,
    seq_len: usize,
}

impl Msa {
    /// Build an alignment from `(name, sequence)` records, validating the
    /// equal-length and unique-name invariants.
    pub fn from_records(records: Vec<(String, String)>) -> Result<Self, MsaError> {
        let Some(seq_len) = records.first().map(|(_, seq)| seq.len()) else {
            return Err(MsaError::Empty);
        };

        let mut names = Vec::with_capacity(records.len());
        let mut sequences = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());

        for (name, sequence) in records {
            if sequence.len() != seq_len {
                return Err(MsaError::RaggedSequence {
                    name,
                    expected: seq_len,
                    got: sequence.len(),
                });
            }
            if index.insert(name.clone(), names.len()).is_some() {
                return Err(MsaError::DuplicateName { name });
            }
            names.push(name);
            sequences.push(sequence);
        }

        Ok(Self {
            names,
            sequences,
            index,
            seq_len,
        })
    }

    /// Number of sequences.
    pub fn num_seqs(&self) -> usize {
        self.names.len()
    }

    /// Common length of every sequence.
    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Sequence content for `name`, if present.
    pub fn sequence(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.sequences[i].as_str())
    }

    /// Iterate `(name, sequence)` pairs in alignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.sequences.iter().map(String::as_str))
    }
}
