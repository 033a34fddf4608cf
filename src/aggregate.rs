//! Grouping of observations and ρ finalization.
//!
//! Each (season, lake, year) combination that actually occurs in the data
//! gets one accumulator; the full lake × year cross-product is never
//! materialized, since the lakes were surveyed over different year ranges.

use crate::circular::VectorSum;
use crate::data::{Observation, Season};
use std::collections::BTreeMap;

/// Aggregation bucket identity: one ρ value per key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKey {
    pub season: Season,
    pub lake: String,
    pub year: String,
}

/// ρ for one group, plus the number of observations behind it.
#[derive(Debug, Clone)]
pub struct GroupResult {
    pub key: GroupKey,
    /// Mean resultant vector length, in [0, 1].
    pub rho: f64,
    pub count: usize,
}

/// Mean ρ across years for one (season, lake) series — the figures reported
/// in the publication.
#[derive(Debug, Clone)]
pub struct SeriesMean {
    pub season: Season,
    pub lake: String,
    pub mean_rho: f64,
    pub n_years: usize,
}

/// Compute ρ per (season, lake, year) group.
///
/// Keys come only from combinations present in the data, so every
/// accumulator holds at least one vector and finalization never divides by
/// zero. The `BTreeMap` ordering yields results sorted by season, then lake,
/// then year label.
pub fn aggregate(observations: &[Observation]) -> Vec<GroupResult> {
    let mut groups: BTreeMap<GroupKey, VectorSum> = BTreeMap::new();
    for obs in observations {
        let key = GroupKey {
            season: obs.season,
            lake: obs.lake.clone(),
            year: obs.year.clone(),
        };
        groups.entry(key).or_default().push(obs.angle);
    }

    groups
        .into_iter()
        .filter_map(|(key, sum)| {
            let count = sum.count();
            sum.rho().map(|rho| GroupResult { key, rho, count })
        })
        .collect()
}

/// Mean ρ over years for each (season, lake) series, in group order.
pub fn series_means(results: &[GroupResult]) -> Vec<SeriesMean> {
    let mut sums: BTreeMap<(Season, String), (f64, usize)> = BTreeMap::new();
    for result in results {
        let entry = sums
            .entry((result.key.season, result.key.lake.clone()))
            .or_insert((0.0, 0));
        entry.0 += result.rho;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|((season, lake), (sum, n_years))| SeriesMean {
            season,
            lake,
            mean_rho: sum / n_years as f64,
            n_years,
        })
        .collect()
}
