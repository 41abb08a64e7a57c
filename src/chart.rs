//! Chart-ready views of the dataset: what the pie and the scatter plot draw.

use std::collections::BTreeMap;

use crate::data::filter::{SiteFilter, aggregate_outcomes, filtered_indices};
use crate::data::model::{LaunchDataset, PayloadRange};

// ---------------------------------------------------------------------------
// Pie chart: success vs. failure counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChartSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChartSpec {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Share of `slice` in the whole pie, `0.0` for an empty pie.
    pub fn fraction(&self, slice: &PieSlice) -> f64 {
        match self.total() {
            0 => 0.0,
            total => slice.count as f64 / total as f64,
        }
    }
}

pub fn pie_chart(dataset: &LaunchDataset, site: &SiteFilter) -> PieChartSpec {
    let title = match site {
        SiteFilter::All => "Total Successful vs. Failed Launches for All Sites".to_string(),
        SiteFilter::Site(name) => format!("Launch Success Rate for Site: {name}"),
    };
    let slices = aggregate_outcomes(dataset, site)
        .into_iter()
        .map(|(label, count)| PieSlice { label, count })
        .collect();
    PieChartSpec { title, slices }
}

// ---------------------------------------------------------------------------
// Scatter chart: payload mass vs. outcome class, one series per booster
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub booster_category: String,
    /// `[payload_mass_kg, class]` pairs.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChartSpec {
    pub title: String,
    /// Sorted by booster category.
    pub series: Vec<ScatterSeries>,
}

impl ScatterChartSpec {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Build the scatter from already filtered record indices.
pub fn scatter_from_indices(dataset: &LaunchDataset, indices: &[usize], site: &SiteFilter) -> ScatterChartSpec {
    let title = match site {
        SiteFilter::All => "Payload vs. Launch Outcome for All Sites".to_string(),
        SiteFilter::Site(name) => format!("Payload vs. Launch Outcome for Site: {name}"),
    };

    let mut grouped: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in indices {
        let rec = &dataset.records[idx];
        grouped
            .entry(rec.booster_category.as_str())
            .or_default()
            .push([rec.payload_mass_kg, f64::from(rec.outcome.class())]);
    }

    let series = grouped
        .into_iter()
        .map(|(category, points)| ScatterSeries {
            booster_category: category.to_string(),
            points,
        })
        .collect();
    ScatterChartSpec { title, series }
}

pub fn scatter_chart(dataset: &LaunchDataset, range: PayloadRange, site: &SiteFilter) -> ScatterChartSpec {
    let indices = filtered_indices(dataset, range, site);
    scatter_from_indices(dataset, &indices, site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn dataset() -> LaunchDataset {
        let rec = |site: &str, mass: f64, class: i64, cat: &str| {
            LaunchRecord::from_parts(0, site.into(), mass, class, cat.into()).unwrap()
        };
        LaunchDataset::from_records(vec![
            rec("A", 500.0, 1, "v1.1"),
            rec("A", 1500.0, 0, "FT"),
            rec("B", 3000.0, 1, "FT"),
            rec("B", 4000.0, 1, "B4"),
        ])
    }

    #[test]
    fn pie_titles_and_slices() {
        let ds = dataset();
        let all = pie_chart(&ds, &SiteFilter::All);
        assert_eq!(all.title, "Total Successful vs. Failed Launches for All Sites");
        assert_eq!(
            all.slices,
            vec![
                PieSlice { label: "Failure", count: 1 },
                PieSlice { label: "Success", count: 3 },
            ]
        );
        assert_eq!(all.total(), 4);
        assert_eq!(all.fraction(&all.slices[1]), 0.75);

        let site_b = pie_chart(&ds, &SiteFilter::parse("B"));
        assert_eq!(site_b.title, "Launch Success Rate for Site: B");
        assert_eq!(site_b.slices, vec![PieSlice { label: "Success", count: 2 }]);
    }

    #[test]
    fn empty_pie_has_zero_fractions() {
        let ds = dataset();
        let pie = pie_chart(&ds, &SiteFilter::parse("Nowhere"));
        assert!(pie.slices.is_empty());
        assert_eq!(pie.fraction(&PieSlice { label: "Success", count: 0 }), 0.0);
    }

    #[test]
    fn scatter_groups_by_booster_category() {
        let ds = dataset();
        let chart = scatter_chart(&ds, PayloadRange::new(0.0, 3500.0), &SiteFilter::All);
        assert_eq!(chart.title, "Payload vs. Launch Outcome for All Sites");
        let categories: Vec<&str> = chart.series.iter().map(|s| s.booster_category.as_str()).collect();
        assert_eq!(categories, vec!["FT", "v1.1"]);
        assert_eq!(chart.series[0].points, vec![[1500.0, 0.0], [3000.0, 1.0]]);
        assert_eq!(chart.point_count(), 3);
    }

    #[test]
    fn scatter_for_site() {
        let ds = dataset();
        let chart = scatter_chart(&ds, PayloadRange::new(0.0, 10_000.0), &SiteFilter::parse("B"));
        assert_eq!(chart.title, "Payload vs. Launch Outcome for Site: B");
        assert_eq!(chart.point_count(), 2);

        let none = scatter_chart(&ds, PayloadRange::new(5000.0, 6000.0), &SiteFilter::All);
        assert!(none.series.is_empty());
    }
}
