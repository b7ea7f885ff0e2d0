mod context;
mod update;

pub use context::*;
pub use update::*;
