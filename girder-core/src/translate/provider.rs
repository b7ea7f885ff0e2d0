use crate::{
    ContainsTranslator, EnumHasFlagTranslator, EqualsTranslator, GetValueOrDefaultTranslator,
    IsNullOrEmptyTranslator, LikeTranslator, MethodCallTranslator, MethodSignature, SqlExpr,
};

/// Ordered dispatch over method-call translation strategies.
///
/// Plugins always get first refusal, then the built-in translators are
/// consulted in their fixed registration order; the first `Some` wins
/// and later translators are never consulted. Strategies prepended via
/// [`prepend_translators`](Self::prepend_translators) rank ahead of the
/// built-ins but behind every plugin.
pub struct MethodCallTranslatorProvider {
    plugins: Vec<Box<dyn MethodCallTranslator>>,
    translators: Vec<Box<dyn MethodCallTranslator>>,
}

impl MethodCallTranslatorProvider {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            translators: vec![
                Box::new(EqualsTranslator),
                Box::new(IsNullOrEmptyTranslator),
                Box::new(ContainsTranslator),
                Box::new(LikeTranslator),
                Box::new(EnumHasFlagTranslator),
                Box::new(GetValueOrDefaultTranslator),
            ],
        }
    }

    /// Registers a plugin translator, consulted before every built-in.
    pub fn register_plugin(&mut self, translator: Box<dyn MethodCallTranslator>) {
        self.plugins.push(translator);
    }

    /// Inserts translators ahead of the existing built-ins, preserving
    /// their relative order.
    pub fn prepend_translators(&mut self, translators: Vec<Box<dyn MethodCallTranslator>>) {
        self.translators.splice(0..0, translators);
    }

    /// Dispatches one method call to the first matching strategy.
    /// `None` means no translator recognized the call and the caller
    /// should fall back to generic expression translation.
    pub fn translate(
        &self,
        receiver: Option<&SqlExpr>,
        method: &MethodSignature,
        arguments: &[SqlExpr],
    ) -> Option<SqlExpr> {
        self.plugins
            .iter()
            .chain(self.translators.iter())
            .find_map(|translator| translator.translate(receiver, method, arguments))
    }
}

impl Default for MethodCallTranslatorProvider {
    fn default() -> Self {
        Self::new()
    }
}
