pub mod initialize;
pub mod submit;
pub mod resolve;
pub mod queries;
pub mod admin;

pub use initialize::*;
pub use submit::*;
pub use resolve::*;
pub use queries::*;
pub use admin::*;
