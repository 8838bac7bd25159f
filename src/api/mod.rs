pub mod analysis;
pub mod auth;
pub mod client;
pub mod error;
pub mod home;

pub use analysis::AnalysisApi;
pub use auth::{AuthApi, LoginResponse};
pub use client::ApiClient;
pub use error::ApiError;
pub use home::HomeApi;
