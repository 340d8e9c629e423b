pub mod analytics;
pub mod customer;
pub mod money;
pub mod order;
pub mod product;
pub mod sync;
pub mod tenant;
