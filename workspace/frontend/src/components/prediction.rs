mod breakdown;
mod summary;
mod view;

pub use breakdown::CategoryBreakdown;
pub use summary::SeveritySummary;
pub use view::PredictionReport;
