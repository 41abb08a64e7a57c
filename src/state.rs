use crate::chart::{PieChartSpec, ScatterChartSpec, pie_chart, scatter_from_indices};
use crate::color::ColorMap;
use crate::config::SliderConfig;
use crate::data::filter::{SiteFilter, filtered_indices};
use crate::data::model::{LaunchDataset, PayloadRange};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Widget changes go through [`AppState::set_site`] and
/// [`AppState::set_payload_range`], which recompute the affected charts.
/// Rendering only reads the cached specs.
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub dataset: LaunchDataset,

    /// Slider domain, widened to cover the dataset.
    pub slider: SliderConfig,

    /// Current dropdown selection.
    pub site: SiteFilter,

    /// Current slider value.
    pub payload_range: PayloadRange,

    /// Indices of records shown in the scatter plot (cached).
    pub visible_indices: Vec<usize>,

    pub pie: PieChartSpec,
    pub scatter: ScatterChartSpec,

    /// Booster category colours for the scatter plot.
    pub color_map: ColorMap,

    /// Whether the record table below the charts is shown.
    pub show_table: bool,
}

impl AppState {
    pub fn new(dataset: LaunchDataset, slider: SliderConfig) -> Self {
        let slider = slider.covering(dataset.payload_bounds);
        // Slider starts at the observed payload bounds.
        let payload_range = dataset.payload_bounds.unwrap_or_else(|| slider.domain());
        let site = SiteFilter::All;

        let visible_indices = filtered_indices(&dataset, payload_range, &site);
        let pie = pie_chart(&dataset, &site);
        let scatter = scatter_from_indices(&dataset, &visible_indices, &site);
        let color_map = ColorMap::new(&dataset.booster_categories);

        Self {
            dataset,
            slider,
            site,
            payload_range,
            visible_indices,
            pie,
            scatter,
            color_map,
            show_table: false,
        }
    }

    /// Dropdown entries: "All Sites" followed by every site in the data.
    pub fn site_options(&self) -> Vec<SiteFilter> {
        std::iter::once(SiteFilter::All)
            .chain(self.dataset.sites.iter().map(|s| SiteFilter::Site(s.clone())))
            .collect()
    }

    /// Dropdown changed: both charts depend on the site.
    pub fn set_site(&mut self, site: SiteFilter) {
        if self.site == site {
            return;
        }
        log::debug!("site filter → {site}");
        self.site = site;
        self.pie = pie_chart(&self.dataset, &self.site);
        self.refilter();
    }

    /// Slider changed: only the scatter depends on the payload range.
    /// The value is clamped to the slider domain before filtering.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        let range = range.clamp_to(self.slider.domain());
        if self.payload_range == range {
            return;
        }
        log::debug!("payload range → {range}");
        self.payload_range = range;
        self.refilter();
    }

    /// Recompute `visible_indices` and the scatter after a filter change.
    fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, self.payload_range, &self.site);
        self.scatter = scatter_from_indices(&self.dataset, &self.visible_indices, &self.site);
    }
}
