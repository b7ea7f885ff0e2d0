use girder_core::{UpdateSqlWriter, Value};
use std::fmt::Write;

pub struct OracleUpdateSqlWriter;

impl OracleUpdateSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl UpdateSqlWriter for OracleUpdateSqlWriter {
    fn as_dyn(&self) -> &dyn UpdateSqlWriter {
        self
    }

    fn write_column_type(&self, out: &mut String, value: &Value) {
        match value {
            Value::Boolean(..) => out.push_str("NUMBER(1)"),
            Value::Int8(..) => out.push_str("NUMBER(3)"),
            Value::Int16(..) => out.push_str("NUMBER(5)"),
            Value::Int32(..) => out.push_str("NUMBER(10)"),
            Value::Int64(..) => out.push_str("NUMBER(19)"),
            Value::UInt8(..) => out.push_str("NUMBER(3)"),
            Value::UInt16(..) => out.push_str("NUMBER(5)"),
            Value::UInt32(..) => out.push_str("NUMBER(10)"),
            Value::UInt64(..) => out.push_str("NUMBER(20)"),
            Value::Float32(..) => out.push_str("BINARY_FLOAT"),
            Value::Float64(..) => out.push_str("BINARY_DOUBLE"),
            Value::Decimal(.., precision, scale) => {
                out.push_str("NUMBER");
                if (precision, scale) != (&0, &0) {
                    let _ = write!(out, "({},{})", precision, scale);
                }
            }
            Value::Varchar(..) => out.push_str("NVARCHAR2(2000)"),
            Value::Blob(..) => out.push_str("BLOB"),
            Value::Date(..) => out.push_str("DATE"),
            Value::Time(..) => out.push_str("INTERVAL DAY(0) TO SECOND"),
            Value::Timestamp(..) => out.push_str("TIMESTAMP"),
            Value::TimestampWithTimezone(..) => out.push_str("TIMESTAMP WITH TIME ZONE"),
            Value::Uuid(..) => out.push_str("RAW(16)"),
            Value::Null => log::error!("Cannot derive an Oracle store type from a Null prototype"),
        };
    }

    // Oracle has no boolean literal.
    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str(["0", "1"][value as usize]);
    }
}
