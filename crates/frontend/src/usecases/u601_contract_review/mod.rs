//! u601 — upload one or two PDF contracts and submit them for AI analysis.

pub mod analysis;
pub mod api;
pub mod model;
pub mod preview;
pub mod state;
pub mod view;

pub use analysis::AnalysisPage;
pub use view::{CompareReviewPage, SingleReviewPage};
