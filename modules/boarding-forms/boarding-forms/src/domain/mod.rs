pub mod applier;
pub mod counts;
pub mod error;
pub mod logo;
pub mod notify;
pub mod presets;
pub mod repo;
pub mod schema;
pub mod service;
pub mod session;
pub mod validation;
