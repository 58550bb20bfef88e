pub mod api;
pub mod assistant;
pub mod config;
pub mod deck;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod state;
pub mod study;
pub mod subscription;
pub mod tracing;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
