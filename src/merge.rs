//! Deduplication and ranking
//!
//! Stored and freshly parsed records are concatenated, deduplicated by the
//! lowercased (paper_year, model) pair with the earlier occurrence winning,
//! then stably sorted descending by reported AUC with F1 as the tie-break.

use crate::Record;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::LazyLock;

/// First decimal-number-shaped substring, wherever it sits in the text
static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]*\.?[0-9]+").expect("Invalid number regex"));

/// Extract a sortable score from a metric field
///
/// "Avg AUC 0.89" scores as 0.89; text with no number scores as `None`, which
/// ranks below every numeric score.
pub fn metric_score(text: &str) -> Option<f64> {
    NUMBER_REGEX
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// Merge stored records with newly parsed ones
///
/// Concatenates `existing` then `incoming`, keeps the first occurrence of
/// each dedup key, and sorts descending by (AUC score, F1 score). The sort is
/// stable, so records with equal scores keep their post-dedup order.
pub fn merge(existing: Vec<Record>, incoming: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::new();
    let mut records: Vec<Record> = existing
        .into_iter()
        .chain(incoming)
        .filter(|r| seen.insert(r.dedup_key()))
        .collect();

    records.sort_by(|a, b| {
        cmp_scores_desc(metric_score(&a.reported_auc), metric_score(&b.reported_auc)).then_with(
            || cmp_scores_desc(metric_score(&a.reported_f1), metric_score(&b.reported_f1)),
        )
    });
    records
}

/// Descending order over optional scores, `None` last
fn cmp_scores_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
