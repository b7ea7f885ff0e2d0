use crate::Value;

/// One column's participation in a single row modification.
///
/// A column combines up to four independent roles: written (part of the
/// SET or VALUES list), read (server-generated, retrieved after
/// execution), condition (part of the WHERE clause) and key (identity /
/// optimistic-concurrency match). At least one of write/read/condition
/// is always set; the constructors make any other state unrepresentable.
/// Immutable once the owning command is built.
#[derive(Debug, Clone)]
pub struct ColumnModification {
    column_name: String,
    parameter_name: String,
    /// Type prototype used to derive the scratch-variable store type.
    value: Value,
    /// Explicit store type (empty means infer from the prototype).
    column_type: String,
    is_read: bool,
    is_write: bool,
    is_condition: bool,
    is_key: bool,
}

impl ColumnModification {
    fn new(column_name: impl Into<String>, parameter_name: impl Into<String>, value: Value) -> Self {
        Self {
            column_name: column_name.into(),
            parameter_name: parameter_name.into(),
            value,
            column_type: String::new(),
            is_read: false,
            is_write: false,
            is_condition: false,
            is_key: false,
        }
    }

    /// A column whose value is written by the statement.
    pub fn write(
        column_name: impl Into<String>,
        parameter_name: impl Into<String>,
        value: Value,
    ) -> Self {
        let mut column = Self::new(column_name, parameter_name, value);
        column.is_write = true;
        column
    }

    /// A server-generated column whose final value must be retrieved
    /// after execution.
    pub fn read(
        column_name: impl Into<String>,
        parameter_name: impl Into<String>,
        value: Value,
    ) -> Self {
        let mut column = Self::new(column_name, parameter_name, value);
        column.is_read = true;
        column
    }

    /// A column matched in the WHERE clause.
    pub fn condition(
        column_name: impl Into<String>,
        parameter_name: impl Into<String>,
        value: Value,
    ) -> Self {
        let mut column = Self::new(column_name, parameter_name, value);
        column.is_condition = true;
        column
    }

    /// A key column matched in the WHERE clause (condition + key).
    pub fn key(
        column_name: impl Into<String>,
        parameter_name: impl Into<String>,
        value: Value,
    ) -> Self {
        Self::condition(column_name, parameter_name, value).and_key()
    }

    pub fn and_read(mut self) -> Self {
        self.is_read = true;
        self
    }

    pub fn and_condition(mut self) -> Self {
        self.is_condition = true;
        self
    }

    pub fn and_key(mut self) -> Self {
        self.is_key = true;
        self
    }

    /// Override the store type used for scratch declarations.
    pub fn with_store_type(mut self, column_type: impl Into<String>) -> Self {
        self.column_type = column_type.into();
        self
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Explicit store type override, if any.
    pub fn store_type(&self) -> Option<&str> {
        (!self.column_type.is_empty()).then_some(self.column_type.as_str())
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    pub fn is_write(&self) -> bool {
        self.is_write
    }

    pub fn is_condition(&self) -> bool {
        self.is_condition
    }

    pub fn is_key(&self) -> bool {
        self.is_key
    }
}
