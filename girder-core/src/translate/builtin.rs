use crate::{BinaryOpType, MethodCallTranslator, MethodSignature, SqlExpr, Value};

/// `eq` on any receiver, or the static two-argument form.
pub struct EqualsTranslator;

impl MethodCallTranslator for EqualsTranslator {
    fn translate(
        &self,
        receiver: Option<&SqlExpr>,
        method: &MethodSignature,
        arguments: &[SqlExpr],
    ) -> Option<SqlExpr> {
        if method.name != "eq" {
            return None;
        }
        match (receiver, arguments) {
            (Some(lhs), [rhs]) => Some(SqlExpr::equal(lhs.clone(), rhs.clone())),
            (None, [lhs, rhs]) => Some(SqlExpr::equal(lhs.clone(), rhs.clone())),
            _ => None,
        }
    }
}

/// Static `str::is_null_or_empty(x)` becomes `x IS NULL OR x = ''`.
pub struct IsNullOrEmptyTranslator;

impl MethodCallTranslator for IsNullOrEmptyTranslator {
    fn translate(
        &self,
        receiver: Option<&SqlExpr>,
        method: &MethodSignature,
        arguments: &[SqlExpr],
    ) -> Option<SqlExpr> {
        if receiver.is_some()
            || method.declaring_type != "str"
            || method.name != "is_null_or_empty"
        {
            return None;
        }
        let [argument] = arguments else {
            return None;
        };
        Some(SqlExpr::or(
            SqlExpr::is_null(argument.clone()),
            SqlExpr::equal(argument.clone(), SqlExpr::literal("")),
        ))
    }
}

/// `str::contains` becomes a LIKE match. A constant argument folds into
/// a `%..%` pattern literal; anything else concatenates the wildcards
/// around the argument.
pub struct ContainsTranslator;

impl MethodCallTranslator for ContainsTranslator {
    fn translate(
        &self,
        receiver: Option<&SqlExpr>,
        method: &MethodSignature,
        arguments: &[SqlExpr],
    ) -> Option<SqlExpr> {
        if method.declaring_type != "str" || method.name != "contains" {
            return None;
        }
        let (Some(receiver), [argument]) = (receiver, arguments) else {
            return None;
        };
        let pattern = match argument {
            SqlExpr::Literal(Value::Varchar(Some(v))) => {
                SqlExpr::literal(format!("%{}%", v))
            }
            other => SqlExpr::binary(
                BinaryOpType::Concat,
                SqlExpr::binary(BinaryOpType::Concat, SqlExpr::literal("%"), other.clone()),
                SqlExpr::literal("%"),
            ),
        };
        Some(SqlExpr::binary(
            BinaryOpType::Like,
            receiver.clone(),
            pattern,
        ))
    }
}

/// `like` with a receiver and pattern, or the static two-argument form.
pub struct LikeTranslator;

impl MethodCallTranslator for LikeTranslator {
    fn translate(
        &self,
        receiver: Option<&SqlExpr>,
        method: &MethodSignature,
        arguments: &[SqlExpr],
    ) -> Option<SqlExpr> {
        if method.name != "like" {
            return None;
        }
        match (receiver, arguments) {
            (Some(lhs), [pattern]) => Some(SqlExpr::binary(
                BinaryOpType::Like,
                lhs.clone(),
                pattern.clone(),
            )),
            (None, [lhs, pattern]) => Some(SqlExpr::binary(
                BinaryOpType::Like,
                lhs.clone(),
                pattern.clone(),
            )),
            _ => None,
        }
    }
}

/// `has_flag` becomes `receiver & flag = flag`.
pub struct EnumHasFlagTranslator;

impl MethodCallTranslator for EnumHasFlagTranslator {
    fn translate(
        &self,
        receiver: Option<&SqlExpr>,
        method: &MethodSignature,
        arguments: &[SqlExpr],
    ) -> Option<SqlExpr> {
        if method.name != "has_flag" {
            return None;
        }
        let (Some(receiver), [flag]) = (receiver, arguments) else {
            return None;
        };
        Some(SqlExpr::equal(
            SqlExpr::binary(BinaryOpType::BitwiseAnd, receiver.clone(), flag.clone()),
            flag.clone(),
        ))
    }
}

/// `Option::unwrap_or(d)` becomes `COALESCE(receiver, d)`;
/// `unwrap_or_default` substitutes zero.
pub struct GetValueOrDefaultTranslator;

impl MethodCallTranslator for GetValueOrDefaultTranslator {
    fn translate(
        &self,
        receiver: Option<&SqlExpr>,
        method: &MethodSignature,
        arguments: &[SqlExpr],
    ) -> Option<SqlExpr> {
        if method.declaring_type != "Option" {
            return None;
        }
        let receiver = receiver?;
        let fallback = match (method.name.as_str(), arguments) {
            ("unwrap_or", [fallback]) => fallback.clone(),
            ("unwrap_or_default", []) => SqlExpr::literal(0),
            _ => return None,
        };
        Some(SqlExpr::function(
            "COALESCE",
            vec![receiver.clone(), fallback],
        ))
    }
}
