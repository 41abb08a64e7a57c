use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – the binary launch result
// ---------------------------------------------------------------------------

/// Outcome class of a launch. Ordered so that `Failure` (class 0) sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Map the numeric `class` column onto an outcome (0 → failure, 1 → success).
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Row validation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("row {row}: no value in column '{column}'")]
    MissingValue { row: usize, column: &'static str },
    #[error("row {row}: launch site is empty")]
    EmptySite { row: usize },
    #[error("row {row}: payload mass {value} kg is not a non-negative number")]
    InvalidPayload { row: usize, value: f64 },
    #[error("row {row}: class {value} is not 0 or 1")]
    InvalidClass { row: usize, value: i64 },
}

// ---------------------------------------------------------------------------
// PayloadRange – inclusive bounds on payload mass
// ---------------------------------------------------------------------------

/// Inclusive payload-mass interval in kilograms.
///
/// A range with `low > high` is empty: it contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_nan() || self.high.is_nan() || self.low > self.high
    }

    /// Pull both ends inside `bounds`. Never panics, even for inverted input.
    pub fn clamp_to(self, bounds: PayloadRange) -> Self {
        Self {
            low: self.low.max(bounds.low).min(bounds.high),
            high: self.high.max(bounds.low).min(bounds.high),
        }
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} – {:.0} kg", self.low, self.high)
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub flight_number: Option<u32>,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version: Option<String>,
    /// Used only to colour the scatter plot.
    pub booster_category: String,
}

impl LaunchRecord {
    /// Build a record from raw column values, enforcing the row invariants.
    /// `row` is only used for error messages.
    pub fn from_parts(
        row: usize,
        launch_site: String,
        payload_mass_kg: f64,
        class: i64,
        booster_category: String,
    ) -> Result<Self, DatasetError> {
        if launch_site.trim().is_empty() {
            return Err(DatasetError::EmptySite { row });
        }
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidPayload {
                row,
                value: payload_mass_kg,
            });
        }
        let outcome =
            Outcome::from_class(class).ok_or(DatasetError::InvalidClass { row, value: class })?;

        Ok(Self {
            flight_number: None,
            launch_site,
            payload_mass_kg,
            outcome,
            booster_version: None,
            booster_category,
        })
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All launch records plus the indices derived from them at load time.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    pub sites: Vec<String>,
    /// Sorted distinct booster categories.
    pub booster_categories: BTreeSet<String>,
    /// Observed `[min, max]` payload mass; `None` for an empty dataset.
    pub payload_bounds: Option<PayloadRange>,
}

impl LaunchDataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories = BTreeSet::new();
        let mut payload_bounds: Option<PayloadRange> = None;

        for rec in &records {
            if !sites.iter().any(|s| s == &rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            booster_categories.insert(rec.booster_category.clone());

            let mass = rec.payload_mass_kg;
            payload_bounds = Some(match payload_bounds {
                Some(b) => PayloadRange::new(b.low.min(mass), b.high.max(mass)),
                None => PayloadRange::new(mass, mass),
            });
        }

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, mass: f64, class: i64, category: &str) -> LaunchRecord {
        LaunchRecord::from_parts(0, site.to_string(), mass, class, category.to_string()).unwrap()
    }

    #[test]
    fn outcome_maps_class_values() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert!(Outcome::Failure < Outcome::Success);
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }

    #[test]
    fn from_parts_rejects_invalid_rows() {
        assert_eq!(
            LaunchRecord::from_parts(3, " ".into(), 10.0, 1, "FT".into()),
            Err(DatasetError::EmptySite { row: 3 })
        );
        assert_eq!(
            LaunchRecord::from_parts(4, "A".into(), -1.0, 1, "FT".into()),
            Err(DatasetError::InvalidPayload { row: 4, value: -1.0 })
        );
        assert!(matches!(
            LaunchRecord::from_parts(5, "A".into(), f64::NAN, 1, "FT".into()),
            Err(DatasetError::InvalidPayload { row: 5, .. })
        ));
        assert_eq!(
            LaunchRecord::from_parts(6, "A".into(), 10.0, 7, "FT".into()),
            Err(DatasetError::InvalidClass { row: 6, value: 7 })
        );
    }

    #[test]
    fn dataset_indices() {
        let ds = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 2500.0, 1, "FT"),
            record("CCAFS LC-40", 0.0, 0, "v1.0"),
            record("KSC LC-39A", 9600.0, 1, "B4"),
            record("VAFB SLC-4E", 500.0, 0, "v1.1"),
        ]);

        assert_eq!(ds.len(), 4);
        assert_eq!(ds.sites, vec!["KSC LC-39A", "CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(
            ds.booster_categories.iter().collect::<Vec<_>>(),
            vec!["B4", "FT", "v1.0", "v1.1"]
        );
        assert_eq!(ds.payload_bounds, Some(PayloadRange::new(0.0, 9600.0)));
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.sites.is_empty());
        assert_eq!(ds.payload_bounds, None);
    }

    #[test]
    fn payload_range_semantics() {
        let r = PayloadRange::new(1000.0, 2000.0);
        assert!(r.contains(1000.0));
        assert!(r.contains(2000.0));
        assert!(!r.contains(999.9));
        assert!(!r.is_empty());

        let inverted = PayloadRange::new(2000.0, 1000.0);
        assert!(inverted.is_empty());
        assert!(!inverted.contains(1500.0));

        let clamped = PayloadRange::new(-500.0, 12_000.0).clamp_to(PayloadRange::new(0.0, 10_000.0));
        assert_eq!(clamped, PayloadRange::new(0.0, 10_000.0));
    }
}
