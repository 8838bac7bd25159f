mod analysis_store;
mod home_store;
mod session_store;

pub use analysis_store::AnalysisStore;
pub use home_store::{HomeState, HomeStore};
pub use session_store::SessionStore;
