pub mod page;
pub mod record;
pub mod view;

pub use page::*;
pub use record::*;
pub use view::*;
