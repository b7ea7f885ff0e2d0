mod batch;
mod column_modification;
mod expression;
mod modification_command;
mod result_set;
mod table_ref;
mod translate;
mod util;
mod value;
mod writer;

pub use batch::*;
pub use column_modification::*;
pub use expression::*;
pub use modification_command::*;
pub use result_set::*;
pub use table_ref::*;
pub use translate::*;
pub use util::*;
pub use value::*;
pub use writer::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
