use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::data::model::PayloadRange;

/// Dataset read when no path is given on the command line.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

// ---------------------------------------------------------------------------
// Payload slider
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
        }
    }
}

impl SliderConfig {
    pub fn domain(&self) -> PayloadRange {
        PayloadRange::new(self.min, self.max)
    }

    /// Widen the slider so the observed payload bounds stay reachable.
    pub fn covering(self, bounds: Option<PayloadRange>) -> Self {
        match bounds {
            Some(b) => Self {
                min: self.min.min(b.low),
                max: self.max.max(b.high),
                ..self
            },
            None => self,
        }
    }
}

// ---------------------------------------------------------------------------
// Process configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashConfig {
    pub data_path: PathBuf,
    pub slider: SliderConfig,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            slider: SliderConfig::default(),
            window_size: [1280.0, 860.0],
            min_window_size: [720.0, 480.0],
        }
    }
}

impl DashConfig {
    /// Build from the process arguments (program name already skipped).
    /// Accepts at most one positional argument: the dataset path.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        if let Some(path) = args.next() {
            config.data_path = PathBuf::from(path);
        }
        if let Some(extra) = args.next() {
            bail!("unexpected argument: {}", extra.to_string_lossy());
        }
        Ok(config)
    }
}
