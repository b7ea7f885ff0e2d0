mod binary_op;
mod sql_expr;
mod unary_op;

pub use binary_op::*;
pub use sql_expr::*;
pub use unary_op::*;
