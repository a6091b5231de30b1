pub mod schemas;
pub mod utilities;
