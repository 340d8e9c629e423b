pub use errors::{ServiceError, ServiceResult};

pub mod analytics;
pub mod errors;
pub mod main;
pub mod sync;
pub mod tenants;
