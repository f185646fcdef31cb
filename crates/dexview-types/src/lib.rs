pub mod domain;
pub mod error;
mod util;

pub use domain::*;
pub use error::ErrorInfo;
pub use util::*;
