use serde::{Deserialize, Serialize};

use crate::emissions::UnitSystem;
use crate::models::{Category, FootprintResult};

/// Smallest slice value handed to a pie chart so zero-valued categories
/// stay visible. Display-only; the stored result keeps the true zeros.
pub const MIN_VISIBLE_SLICE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Pie,
    Bar,
}

/// Everything the rendering collaborator needs to present one result:
/// the raw result, the chart selection, and display lines already
/// formatted for the current language and unit system.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub result: FootprintResult,
    pub chart_kind: ChartKind,
    pub unit_system: UnitSystem,
    pub progress: f64,
    pub total_line: String,
    pub offset_line: String,
    pub category_lines: Vec<String>,
}

/// Narrow interface of the windowed shell that draws results and surfaces
/// transient notifications. The crate never depends on a UI toolkit; the
/// shell implements this and hands it to the session controller.
pub trait RenderSink {
    fn present(&mut self, view: &ResultView);
    fn clear(&mut self);
    fn notify(&mut self, message: &str);
}

/// Slice values for pie rendering, with zeros bumped to a minimum visible
/// size. Leaves the result untouched.
pub fn chart_slices(result: &FootprintResult) -> Vec<(Category, f64)> {
    result
        .per_category
        .iter()
        .map(|&(category, value)| (category, value.max(MIN_VISIBLE_SLICE)))
        .collect()
}
