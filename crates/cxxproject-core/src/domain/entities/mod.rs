pub mod context;
pub mod file_set;
pub mod render_context;

pub use context::*;
pub use file_set::*;
pub use render_context::*;
