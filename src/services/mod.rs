mod analysis_service;
mod auth_service;

pub use analysis_service::AnalysisService;
pub use auth_service::AuthService;
