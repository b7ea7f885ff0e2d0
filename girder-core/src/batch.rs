use crate::{
    BatchContext, ModificationCommand, ModificationKind, Result, ResultSetMapping, UpdateSqlWriter,
};
use anyhow::ensure;

/// An ordered group of modification commands generated as one block,
/// sharing scratch declarations and cursor numbering.
///
/// Maximal runs of consecutive inserts into the same table with the
/// same read-column shape are generated through the batched-insert
/// path; everything else is generated singly, strictly in input order.
/// Cursor ordinals therefore follow generation order and the executor
/// must read result sets back in that same order.
#[derive(Default, Debug)]
pub struct ModificationCommandBatch {
    commands: Vec<ModificationCommand>,
}

impl ModificationCommandBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: ModificationCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[ModificationCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Generates the batch into `out` and returns one result-set
    /// mapping per command, aligned with input order.
    pub fn write(
        &self,
        writer: &dyn UpdateSqlWriter,
        out: &mut String,
    ) -> Result<Vec<ResultSetMapping>> {
        ensure!(!self.commands.is_empty(), "Cannot generate an empty batch");
        let mut ctx = BatchContext::new();
        let mut body = String::new();
        let mut mappings = Vec::with_capacity(self.commands.len());
        let mut position = 0;
        while position < self.commands.len() {
            let command = &self.commands[position];
            match command.kind() {
                ModificationKind::Insert => {
                    let group_end = self.insert_group_end(position);
                    let group = &self.commands[position..group_end];
                    if group.len() == 1 {
                        mappings.push(writer.write_insert(&mut body, &mut ctx, command)?);
                    } else {
                        writer.write_batch_insert(&mut body, &mut ctx, group, position)?;
                        mappings.extend(group.iter().map(|c| {
                            if c.has_reads() {
                                ResultSetMapping::LastInResultSet
                            } else {
                                ResultSetMapping::NoResultSet
                            }
                        }));
                    }
                    position = group_end;
                }
                ModificationKind::Update => {
                    mappings.push(writer.write_update(&mut body, &mut ctx, command)?);
                    position += 1;
                }
                ModificationKind::Delete => {
                    mappings.push(writer.write_delete(&mut body, &mut ctx, command)?);
                    position += 1;
                }
            }
        }
        out.push_str("DECLARE\n");
        if self
            .commands
            .iter()
            .any(|c| c.kind() != ModificationKind::Insert)
        {
            out.push_str("v_RowCount INTEGER");
            out.push_str(writer.statement_terminator());
            out.push('\n');
        }
        for declaration in ctx.scratch.values() {
            out.push_str(declaration);
        }
        out.push_str(&ctx.declarations);
        out.push_str("BEGIN\n");
        out.push_str(&body);
        out.push_str("END");
        out.push_str(writer.statement_terminator());
        out.push('\n');
        log::debug!(
            "Generated batch of {} commands, {} cursors",
            self.commands.len(),
            ctx.cursor_position(),
        );
        Ok(mappings)
    }

    /// End of the maximal batched-insert run starting at `position`.
    fn insert_group_end(&self, position: usize) -> usize {
        let first = &self.commands[position];
        let mut end = position + 1;
        while end < self.commands.len() {
            let next = &self.commands[end];
            if next.kind() != ModificationKind::Insert
                || next.table() != first.table()
                || !same_read_shape(first, next)
            {
                break;
            }
            end += 1;
        }
        end
    }
}

fn same_read_shape(lhs: &ModificationCommand, rhs: &ModificationCommand) -> bool {
    let mut lhs = lhs.read_operations();
    let mut rhs = rhs.read_operations();
    loop {
        match (lhs.next(), rhs.next()) {
            (Some(l), Some(r)) => {
                if l.column_name() != r.column_name() || !l.value().same_type(r.value()) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}
