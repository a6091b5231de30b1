pub mod listings;
pub mod schemas;
pub mod search;
