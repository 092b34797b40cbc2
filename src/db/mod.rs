pub mod error;
pub mod model;
pub mod pagination;
pub mod query;

pub use error::*;
pub use model::*;
pub use pagination::*;
pub use query::*;
