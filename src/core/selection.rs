// selection.rs - BIC comparison of the single model against the decomposed pair

use serde::Serialize;
use thiserror::Error;

/// The discrete outcome of model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelChoice {
    Single,
    Decomposed,
}

impl std::fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelChoice::Single => write!(f, "single"),
            ModelChoice::Decomposed => write!(f, "decomposed"),
        }
    }
}

/// Full result of the BIC comparison, in log2 (bitscore) units.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Selection {
    pub delta_bic: f64,
    pub log_odds_single: f64,
    pub log_odds_decomposed: f64,
    pub choice: ModelChoice,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Every model needs at least one per-sequence score to sum.
    #[error("no {model} model scores supplied")]
    EmptyScores { model: &'static str },

    /// The two partition score vectors must jointly cover every sequence
    /// scored under the single model.
    #[error("partition scores cover {part_a} + {part_b} sequences, single model scored {total}")]
    CountMismatch {
        part_a: usize,
        part_b: usize,
        total: usize,
    },
}

/// Compare the single model against the decomposed pair by delta BIC.
///
/// Scores are per-sequence log2 bitscores, one per sequence in alignment
/// order; `part_a`/`part_b` are the scores of the two halves against their
/// own models. Mixture priors are the halves' sequence fractions, and the
/// comparison is
///
/// `delta_bic = log2(n) * delta_k - 2 * (log_odds_decomposed - log_odds_single)`
///
/// with `n` the total sequence count and `delta_k = free_param_delta` the
/// extra free parameters of the doubled model. The whole expression stays in
/// log2 units to match the bitscores. Positive delta favors the decomposed
/// model; the sign convention is pinned by test.
pub fn select_model(
    single: &[f64],
    part_a: &[f64],
    part_b: &[f64],
    free_param_delta: usize,
) -> Result<Selection, SelectionError> {
    if single.is_empty() {
        return Err(SelectionError::EmptyScores { model: "single" });
    }
    if part_a.is_empty() {
        return Err(SelectionError::EmptyScores { model: "first decomposed" });
    }
    if part_b.is_empty() {
        return Err(SelectionError::EmptyScores { model: "second decomposed" });
    }
    let total = single.len();
    if part_a.len() + part_b.len() != total {
        return Err(SelectionError::CountMismatch {
            part_a: part_a.len(),
            part_b: part_b.len(),
            total,
        });
    }

    let prior_a = part_a.len() as f64 / total as f64;
    let prior_b = 1.0 - prior_a;

    let log_odds_single: f64 = single.iter().sum();
    let log_odds_decomposed: f64 = part_a.iter().map(|s| s + prior_a.log2()).sum::<f64>()
        + part_b.iter().map(|s| s + prior_b.log2()).sum::<f64>();

    let delta_bic = (total as f64).log2() * free_param_delta as f64
        - 2.0 * (log_odds_decomposed - log_odds_single);

    let choice = if delta_bic > 0.0 {
        ModelChoice::Decomposed
    } else {
        ModelChoice::Single
    };

    Ok(Selection {
        delta_bic,
        log_odds_single,
        log_odds_decomposed,
        choice,
    })
}

/// Free-parameter difference between the decomposed pair and the single
/// model: 7 per match state (4 transition + 3 emission parameters), the
/// doubled model carrying one whole extra set plus its mixture prior.
pub fn free_param_delta(match_states: usize) -> usize {
    7 * match_states
}
