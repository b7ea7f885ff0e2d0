use crate::{BinaryOpType, UnaryOpType, Value};

/// A translated SQL expression tree.
///
/// Produced by method-call translation and rendered into text by an
/// [`UpdateSqlWriter`](crate::UpdateSqlWriter) with precedence-driven
/// parenthesization.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlExpr {
    /// Column identifier, quoted on output.
    Column(String),
    /// Literal value.
    Literal(Value),
    /// Bound parameter reference.
    Parameter(String),
    Unary(UnaryOpType, Box<SqlExpr>),
    Binary(BinaryOpType, Box<SqlExpr>, Box<SqlExpr>),
    /// Function call rendered as `NAME(arg, ..)`.
    Function(String, Vec<SqlExpr>),
}

impl SqlExpr {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter(name.into())
    }

    pub fn unary(op: UnaryOpType, operand: SqlExpr) -> Self {
        Self::Unary(op, Box::new(operand))
    }

    pub fn binary(op: BinaryOpType, lhs: SqlExpr, rhs: SqlExpr) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn function(name: impl Into<String>, arguments: Vec<SqlExpr>) -> Self {
        Self::Function(name.into(), arguments)
    }

    pub fn equal(lhs: SqlExpr, rhs: SqlExpr) -> Self {
        Self::binary(BinaryOpType::Equal, lhs, rhs)
    }

    pub fn and(lhs: SqlExpr, rhs: SqlExpr) -> Self {
        Self::binary(BinaryOpType::And, lhs, rhs)
    }

    pub fn or(lhs: SqlExpr, rhs: SqlExpr) -> Self {
        Self::binary(BinaryOpType::Or, lhs, rhs)
    }

    pub fn is_null(operand: SqlExpr) -> Self {
        Self::binary(BinaryOpType::Is, operand, Self::Literal(Value::Null))
    }
}
