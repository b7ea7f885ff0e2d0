/// Reference to a table, optionally schema qualified.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: String,
    /// Schema name (may be empty).
    pub schema: String,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: String::new(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn full_name(&self) -> String {
        let mut result = String::new();
        if !self.schema.is_empty() {
            result.push_str(&self.schema);
            result.push('.');
        }
        result.push_str(&self.name);
        result
    }
}
