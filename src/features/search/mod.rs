pub mod category;
pub mod geo;
pub mod normalize;
pub mod paginate;
pub mod pipeline;
pub mod query_string;
pub mod range;
pub mod sort;
