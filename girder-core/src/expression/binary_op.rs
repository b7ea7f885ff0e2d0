#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOpType {
    Multiplication,
    Division,
    Remainder,
    Addition,
    Subtraction,
    Concat,
    BitwiseAnd,
    BitwiseOr,
    Is,
    IsNot,
    Like,
    NotLike,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    And,
    Or,
}
