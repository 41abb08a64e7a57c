use std::collections::BTreeMap;
use std::fmt;

use super::model::{LaunchDataset, LaunchRecord, Outcome, PayloadRange};

// ---------------------------------------------------------------------------
// SiteFilter – "ALL" or one exact launch site
// ---------------------------------------------------------------------------

/// Value the site dropdown uses for "no site filter".
pub const ALL_SITES: &str = "ALL";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    /// Interpret a dropdown value. The sentinel `ALL` disables filtering,
    /// anything else is taken as an exact site name.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => site == launch_site,
        }
    }

    /// Human readable dropdown label.
    pub fn label(&self) -> &str {
        match self {
            SiteFilter::All => "All Sites",
            SiteFilter::Site(site) => site,
        }
    }
}

impl From<&str> for SiteFilter {
    fn from(value: &str) -> Self {
        SiteFilter::parse(value)
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => f.write_str(ALL_SITES),
            SiteFilter::Site(site) => f.write_str(site),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome aggregation
// ---------------------------------------------------------------------------

/// Count failures and successes among the records matching `site`.
///
/// Result is ordered `Failure` then `Success`. A class with no matching
/// records is left out entirely, so an unknown site yields an empty vec.
pub fn aggregate_outcomes(dataset: &LaunchDataset, site: &SiteFilter) -> Vec<(&'static str, usize)> {
    let mut counts: BTreeMap<Outcome, usize> = BTreeMap::new();
    for rec in dataset
        .records
        .iter()
        .filter(|rec| site.matches(&rec.launch_site))
    {
        *counts.entry(rec.outcome).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(outcome, n)| (outcome.label(), n))
        .collect()
}

// ---------------------------------------------------------------------------
// Payload + site filtering
// ---------------------------------------------------------------------------

/// Indices of records with payload inside `range` (inclusive) and a site
/// matching `site`, in dataset order. No clamping is applied; an inverted
/// range matches nothing.
pub fn filtered_indices(dataset: &LaunchDataset, range: PayloadRange, site: &SiteFilter) -> Vec<usize> {
    if range.is_empty() {
        return Vec::new();
    }
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg) && site.matches(&rec.launch_site))
        .map(|(i, _)| i)
        .collect()
}

/// Records with `min_kg <= payload <= max_kg` at the given site.
pub fn filter_by_payload_and_site<'a>(
    dataset: &'a LaunchDataset,
    min_kg: f64,
    max_kg: f64,
    site: &SiteFilter,
) -> Vec<&'a LaunchRecord> {
    filtered_indices(dataset, PayloadRange::new(min_kg, max_kg), site)
        .into_iter()
        .map(|i| &dataset.records[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, mass: f64, class: i64) -> LaunchRecord {
        LaunchRecord::from_parts(0, site.to_string(), mass, class, "FT".to_string()).unwrap()
    }

    fn three_launches() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 500.0, 1),
            record("A", 1500.0, 0),
            record("B", 3000.0, 1),
        ])
    }

    fn mixed() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 0.0, 0),
            record("CCAFS LC-40", 525.0, 0),
            record("CCAFS LC-40", 2296.0, 1),
            record("VAFB SLC-4E", 500.0, 0),
            record("VAFB SLC-4E", 9600.0, 0),
            record("KSC LC-39A", 2490.0, 1),
            record("KSC LC-39A", 5300.0, 1),
            record("KSC LC-39A", 4600.0, 1),
            record("CCAFS SLC-40", 3669.0, 1),
            record("CCAFS SLC-40", 1952.0, 0),
        ])
    }

    #[test]
    fn site_filter_parsing() {
        assert_eq!(SiteFilter::parse("ALL"), SiteFilter::All);
        assert_eq!(SiteFilter::from("KSC LC-39A"), SiteFilter::Site("KSC LC-39A".into()));
        assert_eq!(SiteFilter::All.label(), "All Sites");
        assert_eq!(SiteFilter::All.to_string(), "ALL");
        // Exact match only.
        assert!(!SiteFilter::parse("ksc lc-39a").matches("KSC LC-39A"));
    }

    #[test]
    fn aggregate_single_site() {
        let ds = three_launches();
        assert_eq!(
            aggregate_outcomes(&ds, &SiteFilter::parse("A")),
            vec![("Failure", 1), ("Success", 1)]
        );
    }

    #[test]
    fn aggregate_all_sites() {
        let ds = three_launches();
        assert_eq!(
            aggregate_outcomes(&ds, &SiteFilter::All),
            vec![("Failure", 1), ("Success", 2)]
        );
    }

    #[test]
    fn aggregate_omits_absent_class() {
        let ds = three_launches();
        assert_eq!(aggregate_outcomes(&ds, &SiteFilter::parse("B")), vec![("Success", 1)]);
    }

    #[test]
    fn aggregate_unknown_site_is_empty() {
        let ds = three_launches();
        assert!(aggregate_outcomes(&ds, &SiteFilter::parse("Nowhere")).is_empty());
    }

    #[test]
    fn aggregate_counts_sum_to_site_totals() {
        let ds = mixed();
        for site in &ds.sites {
            let total: usize = aggregate_outcomes(&ds, &SiteFilter::parse(site))
                .iter()
                .map(|(_, n)| n)
                .sum();
            let expected = ds.records.iter().filter(|r| &r.launch_site == site).count();
            assert_eq!(total, expected, "site {site}");
        }
        let all: usize = aggregate_outcomes(&ds, &SiteFilter::All)
            .iter()
            .map(|(_, n)| n)
            .sum();
        assert_eq!(all, ds.len());
    }

    #[test]
    fn payload_filter_scenario() {
        let ds = three_launches();
        let hits = filter_by_payload_and_site(&ds, 1000.0, 2000.0, &SiteFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].payload_mass_kg, 1500.0);
    }

    #[test]
    fn payload_filter_has_no_false_positives_or_negatives() {
        let ds = mixed();
        let ranges = [(0.0, 0.0), (0.0, 2500.0), (500.0, 525.0), (2490.0, 9600.0), (6000.0, 9000.0)];
        for (lo, hi) in ranges {
            let hits = filter_by_payload_and_site(&ds, lo, hi, &SiteFilter::All);
            assert!(hits.iter().all(|r| lo <= r.payload_mass_kg && r.payload_mass_kg <= hi));
            let expected = ds
                .records
                .iter()
                .filter(|r| lo <= r.payload_mass_kg && r.payload_mass_kg <= hi)
                .count();
            assert_eq!(hits.len(), expected, "range [{lo}, {hi}]");
        }
    }

    #[test]
    fn payload_filter_full_range_returns_everything() {
        let ds = mixed();
        let bounds = ds.payload_bounds.unwrap();
        let hits = filter_by_payload_and_site(&ds, bounds.low, bounds.high, &SiteFilter::All);
        assert_eq!(hits.len(), ds.len());
        assert!(hits.iter().zip(&ds.records).all(|(a, b)| *a == b));
    }

    #[test]
    fn payload_filter_intersects_site() {
        let ds = mixed();
        let hits = filter_by_payload_and_site(&ds, 0.0, 3000.0, &SiteFilter::parse("CCAFS LC-40"));
        let masses: Vec<f64> = hits.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(masses, vec![0.0, 525.0, 2296.0]);
        assert!(filter_by_payload_and_site(&ds, 0.0, 10_000.0, &SiteFilter::parse("Nowhere")).is_empty());
    }

    #[test]
    fn payload_filter_inverted_range_is_empty() {
        let ds = mixed();
        assert!(filter_by_payload_and_site(&ds, 5000.0, 1000.0, &SiteFilter::All).is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let ds = mixed();
        let site = SiteFilter::parse("KSC LC-39A");
        assert_eq!(aggregate_outcomes(&ds, &site), aggregate_outcomes(&ds, &site));
        assert_eq!(
            filter_by_payload_and_site(&ds, 1000.0, 5000.0, &site),
            filter_by_payload_and_site(&ds, 1000.0, 5000.0, &site)
        );
    }
}
