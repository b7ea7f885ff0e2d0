mod builtin;
mod provider;
mod translator;

pub use builtin::*;
pub use provider::*;
pub use translator::*;
