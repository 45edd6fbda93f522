//! Per-source distance weighting.
//!
//! The matching pipeline ranks candidates by summing weighted distance terms
//! from several contributors; lower totals win. External catalog sources add
//! a flat penalty to their own candidates so that, all else equal, records
//! already confirmed against the library rank ahead of fresh lookups. This
//! module holds the generic term shared by album and track ranking.

/// Distance contribution for a candidate's declared data source.
///
/// Returns `weight` when the candidate was produced by `source`, and zero
/// (no contribution) for candidates from anywhere else.
pub fn source_distance(candidate_source: &str, source: &str, weight: f64) -> f64 {
    if candidate_source == source { weight } else { 0.0 }
}
