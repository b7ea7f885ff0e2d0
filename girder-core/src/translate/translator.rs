use crate::SqlExpr;

/// Identity of a method call submitted for translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    /// Logical type owning the method (`str`, `Option`, an enum, ..).
    pub declaring_type: String,
    pub name: String,
}

impl MethodSignature {
    pub fn new(declaring_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            name: name.into(),
        }
    }
}

/// One translation strategy mapping a method call onto a SQL
/// expression.
///
/// Implementations must be pure: the result depends only on the
/// arguments, with no cross-call state. Returning `None` is the
/// expected miss that lets the caller fall through to a more generic
/// strategy; it is not an error.
pub trait MethodCallTranslator: Send + Sync {
    fn translate(
        &self,
        receiver: Option<&SqlExpr>,
        method: &MethodSignature,
        arguments: &[SqlExpr],
    ) -> Option<SqlExpr>;
}
