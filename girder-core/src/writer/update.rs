use crate::{
    BatchContext, BinaryOpType, ColumnModification, ModificationCommand, ModificationKind, Result,
    ResultSetMapping, SqlExpr, TableRef, UnaryOpType, Value, possibly_parenthesized, separated_by,
};
use anyhow::ensure;
use std::fmt::Write;
use time::{Date, Time};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($this:ident, $out:ident, $value:expr) => {{
        if $value.is_infinite() {
            $this.write_value_infinity($out, $value.is_sign_negative());
        } else if $value.is_nan() {
            $this.write_value_nan($out);
        } else {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format($value));
        }
    }};
}

/// Dialect printer turning modification commands and translated
/// expressions into concrete SQL text.
///
/// The default methods implement the output-binding style: generated
/// values travel through scratch variables and are handed back through
/// numbered cursors whose ordinals follow generation order. Generation
/// is pure text assembly; no statement is validated against a schema,
/// and only caller contract violations produce errors.
pub trait UpdateSqlWriter {
    fn as_dyn(&self) -> &dyn UpdateSqlWriter;

    /// Terminator appended after every complete statement.
    fn statement_terminator(&self) -> &'static str {
        ";"
    }

    fn write_statement_terminator(&self, out: &mut String) {
        out.push_str(self.statement_terminator());
        out.push('\n');
    }

    /// Escape occurrences of `search` with `replace` while copying into
    /// the buffer.
    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + 1;
            }
        }
        out.push_str(&value[position..]);
    }

    /// Quote identifiers ("name") doubling inner quotes.
    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(out, value, '"', "\"\"");
        out.push('"');
    }

    /// Render a table reference, schema qualified when present.
    fn write_table_ref(&self, out: &mut String, value: &TableRef) {
        if !value.schema.is_empty() {
            self.write_identifier_quoted(out, &value.schema);
            out.push('.');
        }
        self.write_identifier_quoted(out, &value.name);
    }

    /// Render a bound parameter marker.
    fn write_parameter(&self, out: &mut String, name: &str) {
        out.push(':');
        out.push_str(name);
    }

    /// Render the store type for a `Value` prototype.
    fn write_column_type(&self, out: &mut String, value: &Value) {
        match value {
            Value::Boolean(..) => out.push_str("BOOLEAN"),
            Value::Int8(..) => out.push_str("TINYINT"),
            Value::Int16(..) => out.push_str("SMALLINT"),
            Value::Int32(..) => out.push_str("INTEGER"),
            Value::Int64(..) => out.push_str("BIGINT"),
            Value::UInt8(..) => out.push_str("UTINYINT"),
            Value::UInt16(..) => out.push_str("USMALLINT"),
            Value::UInt32(..) => out.push_str("UINTEGER"),
            Value::UInt64(..) => out.push_str("UBIGINT"),
            Value::Float32(..) => out.push_str("FLOAT"),
            Value::Float64(..) => out.push_str("DOUBLE"),
            Value::Decimal(.., precision, scale) => {
                out.push_str("DECIMAL");
                if (precision, scale) != (&0, &0) {
                    let _ = write!(out, "({},{})", precision, scale);
                }
            }
            Value::Varchar(..) => out.push_str("VARCHAR"),
            Value::Blob(..) => out.push_str("BLOB"),
            Value::Date(..) => out.push_str("DATE"),
            Value::Time(..) => out.push_str("TIME"),
            Value::Timestamp(..) => out.push_str("TIMESTAMP"),
            Value::TimestampWithTimezone(..) => out.push_str("TIMESTAMP WITH TIME ZONE"),
            Value::Uuid(..) => out.push_str("UUID"),
            Value::Null => {
                log::error!("Cannot derive a store type from a Null prototype")
            }
        };
    }

    /// Render a literal value with proper quoting and escaping.
    fn write_value(&self, out: &mut String, value: &Value) {
        match value {
            v if v.is_null() => self.write_value_none(out),
            Value::Boolean(Some(v)) => self.write_value_bool(out, *v),
            Value::Int8(Some(v)) => write_integer!(out, *v),
            Value::Int16(Some(v)) => write_integer!(out, *v),
            Value::Int32(Some(v)) => write_integer!(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::UInt8(Some(v)) => write_integer!(out, *v),
            Value::UInt16(Some(v)) => write_integer!(out, *v),
            Value::UInt32(Some(v)) => write_integer!(out, *v),
            Value::UInt64(Some(v)) => write_integer!(out, *v),
            Value::Float32(Some(v)) => write_float!(self, out, *v),
            Value::Float64(Some(v)) => write_float!(self, out, *v),
            Value::Decimal(Some(v), ..) => drop(write!(out, "{}", v)),
            Value::Varchar(Some(v)) => self.write_value_string(out, v),
            Value::Blob(Some(v)) => self.write_value_blob(out, v.as_ref()),
            Value::Date(Some(v)) => {
                out.push('\'');
                self.write_value_date(out, v);
                out.push('\'');
            }
            Value::Time(Some(v)) => {
                out.push('\'');
                self.write_value_time(out, v);
                out.push('\'');
            }
            Value::Timestamp(Some(v)) => {
                out.push('\'');
                self.write_value_date(out, &v.date());
                out.push('T');
                self.write_value_time(out, &v.time());
                out.push('\'');
            }
            Value::TimestampWithTimezone(Some(v)) => {
                out.push('\'');
                self.write_value_date(out, &v.date());
                out.push('T');
                self.write_value_time(out, &v.time());
                let offset = v.offset();
                out.push(if offset.is_negative() { '-' } else { '+' });
                let _ = write!(
                    out,
                    "{:02}:{:02}",
                    offset.whole_hours().abs(),
                    (offset.whole_minutes() % 60).abs(),
                );
                out.push('\'');
            }
            Value::Uuid(Some(v)) => drop(write!(out, "'{}'", v)),
            _ => unreachable!(),
        };
    }

    fn write_value_none(&self, out: &mut String) {
        out.push_str("NULL");
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize]);
    }

    /// Render +/- INF via CAST for dialect portability.
    fn write_value_infinity(&self, out: &mut String, negative: bool) {
        out.push_str(if negative {
            "CAST('-Infinity' AS DOUBLE)"
        } else {
            "CAST('Infinity' AS DOUBLE)"
        });
    }

    fn write_value_nan(&self, out: &mut String) {
        out.push_str("CAST('NaN' AS DOUBLE)");
    }

    /// Render and escape a string literal using single quotes.
    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == '\'' {
                out.push_str(&value[position..i]);
                out.push_str("''");
                position = i + 1;
            } else if c == '\n' {
                out.push_str(&value[position..i]);
                out.push_str("\\n");
                position = i + 1;
            }
        }
        out.push_str(&value[position..]);
        out.push('\'');
    }

    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push('\'');
        for b in value {
            let _ = write!(out, "\\x{:02X}", b);
        }
        out.push('\'');
    }

    fn write_value_date(&self, out: &mut String, value: &Date) {
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    fn write_value_time(&self, out: &mut String, value: &Time) {
        let mut subsecond = value.nanosecond();
        let mut width = 9;
        while width > 1 && subsecond % 10 == 0 {
            subsecond /= 10;
            width -= 1;
        }
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}.{:0width$}",
            value.hour(),
            value.minute(),
            value.second(),
            subsecond
        );
    }

    fn unary_op_precedence(&self, value: &UnaryOpType) -> i32 {
        match value {
            UnaryOpType::Negative => 1250,
            UnaryOpType::Not => 250,
        }
    }

    fn binary_op_precedence(&self, value: &BinaryOpType) -> i32 {
        match value {
            BinaryOpType::Or => 100,
            BinaryOpType::And => 200,
            BinaryOpType::Equal => 300,
            BinaryOpType::NotEqual => 300,
            BinaryOpType::Less => 300,
            BinaryOpType::Greater => 300,
            BinaryOpType::LessEqual => 300,
            BinaryOpType::GreaterEqual => 300,
            BinaryOpType::Is => 400,
            BinaryOpType::IsNot => 400,
            BinaryOpType::Like => 400,
            BinaryOpType::NotLike => 400,
            BinaryOpType::BitwiseOr => 500,
            BinaryOpType::BitwiseAnd => 600,
            BinaryOpType::Concat => 750,
            BinaryOpType::Subtraction => 800,
            BinaryOpType::Addition => 800,
            BinaryOpType::Multiplication => 900,
            BinaryOpType::Division => 900,
            BinaryOpType::Remainder => 900,
        }
    }

    fn expression_precedence(&self, value: &SqlExpr) -> i32 {
        match value {
            SqlExpr::Unary(op, ..) => self.unary_op_precedence(op),
            SqlExpr::Binary(op, ..) => self.binary_op_precedence(op),
            _ => 1_000_000,
        }
    }

    /// Render a translated expression tree.
    fn write_expression(&self, out: &mut String, value: &SqlExpr) {
        match value {
            SqlExpr::Column(name) => self.write_identifier_quoted(out, name),
            SqlExpr::Literal(v) => self.write_value(out, v),
            SqlExpr::Parameter(name) => self.write_parameter(out, name),
            SqlExpr::Unary(op, operand) => self.write_expression_unary_op(out, op, operand),
            SqlExpr::Binary(op, lhs, rhs) => self.write_expression_binary_op(out, op, lhs, rhs),
            SqlExpr::Function(name, arguments) => {
                out.push_str(name);
                out.push('(');
                separated_by(
                    out,
                    arguments,
                    |out, v| self.write_expression(out, v),
                    ", ",
                );
                out.push(')');
            }
        }
    }

    fn write_expression_unary_op(&self, out: &mut String, op: &UnaryOpType, operand: &SqlExpr) {
        match op {
            UnaryOpType::Negative => out.push('-'),
            UnaryOpType::Not => out.push_str("NOT "),
        };
        possibly_parenthesized!(
            out,
            self.expression_precedence(operand) <= self.unary_op_precedence(op),
            self.write_expression(out, operand)
        );
    }

    fn write_expression_binary_op(
        &self,
        out: &mut String,
        op: &BinaryOpType,
        lhs: &SqlExpr,
        rhs: &SqlExpr,
    ) {
        let infix = match op {
            BinaryOpType::Multiplication => " * ",
            BinaryOpType::Division => " / ",
            BinaryOpType::Remainder => " % ",
            BinaryOpType::Addition => " + ",
            BinaryOpType::Subtraction => " - ",
            BinaryOpType::Concat => " || ",
            BinaryOpType::BitwiseAnd => " & ",
            BinaryOpType::BitwiseOr => " | ",
            BinaryOpType::Is => " IS ",
            BinaryOpType::IsNot => " IS NOT ",
            BinaryOpType::Like => " LIKE ",
            BinaryOpType::NotLike => " NOT LIKE ",
            BinaryOpType::Equal => " = ",
            BinaryOpType::NotEqual => " != ",
            BinaryOpType::Less => " < ",
            BinaryOpType::LessEqual => " <= ",
            BinaryOpType::Greater => " > ",
            BinaryOpType::GreaterEqual => " >= ",
            BinaryOpType::And => " AND ",
            BinaryOpType::Or => " OR ",
        };
        let precedence = self.binary_op_precedence(op);
        possibly_parenthesized!(
            out,
            self.expression_precedence(lhs) < precedence,
            self.write_expression(out, lhs)
        );
        out.push_str(infix);
        possibly_parenthesized!(
            out,
            self.expression_precedence(rhs) <= precedence,
            self.write_expression(out, rhs)
        );
    }

    /// Deterministic name of the scalar scratch variable carrying a
    /// read column's value out of a statement.
    fn scratch_variable_name(&self, column: &ColumnModification) -> String {
        format!("v{}_{}", column.parameter_name(), column.column_name())
    }

    /// Declared type of a scratch variable: the explicit store type when
    /// present, otherwise inferred from the column's prototype.
    fn write_scratch_variable_type(&self, out: &mut String, column: &ColumnModification) {
        if let Some(store_type) = column.store_type() {
            out.push_str(store_type);
        } else {
            self.write_column_type(out, column.value());
        }
    }

    fn declare_scratch_variable(&self, ctx: &mut BatchContext, column: &ColumnModification) {
        let name = self.scratch_variable_name(column);
        let declarations = &mut ctx.declarations;
        declarations.push_str(&name);
        declarations.push(' ');
        self.write_scratch_variable_type(declarations, column);
        declarations.push_str(self.statement_terminator());
        declarations.push('\n');
    }

    /// `<quoted column> = <scratch variable>` fragment used when a WHERE
    /// clause matches a previously retrieved identity value.
    fn write_identity_condition(&self, out: &mut String, column: &ColumnModification) {
        self.write_identifier_quoted(out, column.column_name());
        out.push_str(" = ");
        out.push_str(&self.scratch_variable_name(column));
    }

    fn write_where_condition(&self, out: &mut String, column: &ColumnModification) {
        self.write_identifier_quoted(out, column.column_name());
        out.push_str(" = ");
        self.write_parameter(out, column.parameter_name());
    }

    fn write_where_clause(&self, out: &mut String, conditions: &[&ColumnModification]) {
        out.push_str("\nWHERE ");
        separated_by(
            out,
            conditions,
            |out, c| self.write_where_condition(out, c),
            " AND ",
        );
    }

    fn write_insert_header(&self, out: &mut String, table: &TableRef, writes: &[&ColumnModification]) {
        out.push_str("INSERT INTO ");
        self.write_table_ref(out, table);
        if !writes.is_empty() {
            out.push_str(" (");
            separated_by(
                out,
                writes,
                |out, c| self.write_identifier_quoted(out, c.column_name()),
                ", ",
            );
            out.push(')');
        }
    }

    fn write_values(&self, out: &mut String, operations: &[&ColumnModification]) {
        out.push_str("\nVALUES (");
        separated_by(
            out,
            operations,
            |out, c| self.write_parameter(out, c.parameter_name()),
            ", ",
        );
        out.push(')');
    }

    /// Capture the dialect's native affected-row count into the local
    /// counter verified by the row-count cursor.
    fn write_rows_affected_capture(&self, out: &mut String) {
        out.push_str("v_RowCount := SQL%ROWCOUNT");
        self.write_statement_terminator(out);
    }

    fn write_rows_affected_condition(&self, out: &mut String, expected: u32) {
        out.push_str("v_RowCount = ");
        write_integer!(out, expected);
    }

    fn write_open_cursor(&self, out: &mut String, position: u32) {
        out.push_str("OPEN :cur");
        write_integer!(out, position);
        out.push_str(" FOR");
    }

    /// Cursor over the read columns' scratch variables, filtered so the
    /// row only appears when exactly one row was affected.
    fn write_select_affected(
        &self,
        out: &mut String,
        ctx: &mut BatchContext,
        reads: &[&ColumnModification],
    ) -> ResultSetMapping {
        self.write_rows_affected_capture(out);
        self.write_open_cursor(out, ctx.open_cursor());
        out.push_str("\nSELECT ");
        separated_by(
            out,
            reads,
            |out, c| out.push_str(&self.scratch_variable_name(c)),
            ", ",
        );
        out.push_str("\nFROM DUAL\nWHERE ");
        self.write_rows_affected_condition(out, 1);
        self.write_statement_terminator(out);
        ResultSetMapping::LastInResultSet
    }

    /// Cursor over the bare affected-row count.
    fn write_select_affected_count(
        &self,
        out: &mut String,
        ctx: &mut BatchContext,
    ) -> ResultSetMapping {
        self.write_rows_affected_capture(out);
        self.write_open_cursor(out, ctx.open_cursor());
        out.push_str(" SELECT v_RowCount FROM DUAL");
        self.write_statement_terminator(out);
        ResultSetMapping::LastInResultSet
    }

    /// Single-row INSERT.
    ///
    /// Read columns are returned through pre-declared scratch variables
    /// and one cursor; without reads the statement stands alone and
    /// nothing is read back. When the command has no write columns the
    /// read columns feed the value list, matching how rows made solely
    /// of server-generated columns are inserted.
    fn write_insert(
        &self,
        out: &mut String,
        ctx: &mut BatchContext,
        command: &ModificationCommand,
    ) -> Result<ResultSetMapping> {
        ensure!(
            command.kind() == ModificationKind::Insert,
            "Expected an insert command for table `{}`, found {:?}",
            command.table().full_name(),
            command.kind(),
        );
        let writes: Vec<_> = command.write_operations().collect();
        let reads: Vec<_> = command.read_operations().collect();
        for column in &reads {
            self.declare_scratch_variable(ctx, column);
        }
        self.write_insert_header(out, command.table(), &writes);
        self.write_values(out, if writes.is_empty() { &reads } else { &writes });
        if reads.is_empty() {
            self.write_statement_terminator(out);
            return Ok(ResultSetMapping::NoResultSet);
        }
        out.push_str("\nRETURNING ");
        separated_by(
            out,
            &reads,
            |out, c| self.write_identifier_quoted(out, c.column_name()),
            ", ",
        );
        out.push_str(" INTO ");
        separated_by(
            out,
            &reads,
            |out, c| out.push_str(&self.scratch_variable_name(c)),
            ", ",
        );
        self.write_statement_terminator(out);
        self.write_open_cursor(out, ctx.open_cursor());
        out.push_str(" SELECT ");
        separated_by(
            out,
            &reads,
            |out, c| out.push_str(&self.scratch_variable_name(c)),
            ", ",
        );
        out.push_str(" FROM DUAL");
        self.write_statement_terminator(out);
        Ok(ResultSetMapping::LastInResultSet)
    }

    /// Batched INSERT over commands sharing one table and read-column
    /// shape.
    ///
    /// A composite record/collection pair is declared once per
    /// `<table>_<batch position>` key; each row's RETURNING clause lands
    /// in its 1-based slot of the collection, and one cursor per row
    /// with reads hands the slot back in row order.
    fn write_batch_insert(
        &self,
        out: &mut String,
        ctx: &mut BatchContext,
        commands: &[ModificationCommand],
        command_position: usize,
    ) -> Result<ResultSetMapping> {
        ensure!(
            !commands.is_empty(),
            "Cannot generate a batched insert from an empty command group"
        );
        let table = commands[0].table();
        for command in commands {
            ensure!(
                command.kind() == ModificationKind::Insert,
                "Expected insert commands, found {:?} for table `{}`",
                command.kind(),
                command.table().full_name(),
            );
            ensure!(
                command.table() == table,
                "Batched insert commands must share one table, found `{}` and `{}`",
                table.full_name(),
                command.table().full_name(),
            );
        }
        let reads: Vec<_> = commands[0].read_operations().collect();
        let key = format!("{}_{}", table.name, command_position);
        let mut mapping = ResultSetMapping::NoResultSet;
        if !reads.is_empty() {
            if !ctx.scratch.contains_key(&key) {
                let mut declaration = String::new();
                let _ = writeln!(declaration, "TYPE efRow{} IS RECORD", key);
                declaration.push_str("(\n");
                separated_by(
                    &mut declaration,
                    &reads,
                    |decl, c| {
                        decl.push_str(c.column_name());
                        decl.push(' ');
                        self.write_scratch_variable_type(decl, c);
                    },
                    ",\n",
                );
                declaration.push_str("\n)");
                self.write_statement_terminator(&mut declaration);
                let _ = write!(declaration, "TYPE ef{} IS TABLE OF efRow{}", key, key);
                self.write_statement_terminator(&mut declaration);
                let _ = write!(declaration, "list{} ef{}", key, key);
                self.write_statement_terminator(&mut declaration);
                ctx.scratch.insert(key.clone(), declaration);
            }
            let _ = write!(out, "list{} := ef{}()", key, key);
            self.write_statement_terminator(out);
            let _ = write!(out, "list{}.extend({})", key, commands.len());
            self.write_statement_terminator(out);
        }
        for (row, command) in commands.iter().enumerate() {
            let writes: Vec<_> = command.write_operations().collect();
            let row_reads: Vec<_> = command.read_operations().collect();
            self.write_insert_header(out, table, &writes);
            self.write_values(out, if writes.is_empty() { &row_reads } else { &writes });
            if !row_reads.is_empty() {
                out.push_str("\nRETURNING ");
                separated_by(
                    out,
                    &row_reads,
                    |out, c| self.write_identifier_quoted(out, c.column_name()),
                    ", ",
                );
                let _ = write!(out, " INTO list{}({})", key, row + 1);
            }
            self.write_statement_terminator(out);
        }
        for (row, command) in commands.iter().enumerate() {
            let row_reads: Vec<_> = command.read_operations().collect();
            if row_reads.is_empty() {
                continue;
            }
            self.write_open_cursor(out, ctx.open_cursor());
            out.push_str(" SELECT ");
            separated_by(
                out,
                &row_reads,
                |out, c| {
                    let _ = write!(out, "list{}({}).{}", key, row + 1, c.column_name());
                },
                ", ",
            );
            out.push_str(" FROM DUAL");
            self.write_statement_terminator(out);
            mapping = ResultSetMapping::LastInResultSet;
        }
        Ok(mapping)
    }

    /// UPDATE with row-count verification.
    ///
    /// Always ends with one cursor: over the read columns' scratch
    /// variables filtered on `rowcount = 1` when reads exist, over the
    /// bare count otherwise. A count other than one signals a
    /// concurrency conflict to the caller; the generator only makes the
    /// count observable.
    fn write_update(
        &self,
        out: &mut String,
        ctx: &mut BatchContext,
        command: &ModificationCommand,
    ) -> Result<ResultSetMapping> {
        ensure!(
            command.kind() == ModificationKind::Update,
            "Expected an update command for table `{}`, found {:?}",
            command.table().full_name(),
            command.kind(),
        );
        let writes: Vec<_> = command.write_operations().collect();
        let conditions: Vec<_> = command.condition_operations().collect();
        let reads: Vec<_> = command.read_operations().collect();
        for column in &reads {
            self.declare_scratch_variable(ctx, column);
        }
        out.push_str("UPDATE ");
        self.write_table_ref(out, command.table());
        out.push_str(" SET ");
        separated_by(
            out,
            &writes,
            |out, c| {
                self.write_identifier_quoted(out, c.column_name());
                out.push_str(" = ");
                self.write_parameter(out, c.parameter_name());
            },
            ", ",
        );
        self.write_where_clause(out, &conditions);
        if !reads.is_empty() {
            out.push_str("\nRETURN ");
            separated_by(
                out,
                &reads,
                |out, c| self.write_identifier_quoted(out, c.column_name()),
                ", ",
            );
            out.push_str(" INTO ");
            separated_by(
                out,
                &reads,
                |out, c| out.push_str(&self.scratch_variable_name(c)),
                ", ",
            );
        }
        self.write_statement_terminator(out);
        if reads.is_empty() {
            Ok(self.write_select_affected_count(out, ctx))
        } else {
            Ok(self.write_select_affected(out, ctx, &reads))
        }
    }

    /// DELETE with row-count verification through the count cursor.
    fn write_delete(
        &self,
        out: &mut String,
        ctx: &mut BatchContext,
        command: &ModificationCommand,
    ) -> Result<ResultSetMapping> {
        ensure!(
            command.kind() == ModificationKind::Delete,
            "Expected a delete command for table `{}`, found {:?}",
            command.table().full_name(),
            command.kind(),
        );
        let conditions: Vec<_> = command.condition_operations().collect();
        out.push_str("DELETE FROM ");
        self.write_table_ref(out, command.table());
        self.write_where_clause(out, &conditions);
        self.write_statement_terminator(out);
        Ok(self.write_select_affected_count(out, ctx))
    }

    /// Single-row fetch of a sequence's next value.
    fn write_next_sequence_value(&self, out: &mut String, name: &str, schema: &str) {
        out.push_str("SELECT ");
        if !schema.is_empty() {
            self.write_identifier_quoted(out, schema);
            out.push('.');
        }
        self.write_identifier_quoted(out, name);
        out.push_str(".NEXTVAL FROM DUAL");
    }
}

pub struct GenericUpdateSqlWriter;

impl GenericUpdateSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl UpdateSqlWriter for GenericUpdateSqlWriter {
    fn as_dyn(&self) -> &dyn UpdateSqlWriter {
        self
    }
}
