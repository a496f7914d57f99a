// Engine module - pure dashboard computations
// Sits between fetched post rows (types) and CLI presentation. No I/O.

pub mod metrics;
pub mod navigation;
pub mod summary;

pub use metrics::{MetricCard, MetricFormat, Trend, percent_change};
pub use navigation::Navigation;
pub use summary::{DashboardSummary, TypeBreakdown, TypeStats};
