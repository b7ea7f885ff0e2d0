use crate::{ColumnModification, Result, TableRef};
use anyhow::ensure;

/// Logical operation performed by a [`ModificationCommand`], derived
/// from the role flags present on its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModificationKind {
    Insert,
    Update,
    Delete,
}

/// One logical row-level operation against a single table.
///
/// Column order is significant: it determines generated variable and
/// column ordering. The command is read-only during SQL generation.
#[derive(Debug, Clone)]
pub struct ModificationCommand {
    table: TableRef,
    columns: Vec<ColumnModification>,
}

impl ModificationCommand {
    pub fn new(table: TableRef, columns: Vec<ColumnModification>) -> Result<Self> {
        ensure!(
            !columns.is_empty(),
            "Modification command for table `{}` has no columns",
            table.full_name(),
        );
        Ok(Self { table, columns })
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    pub fn columns(&self) -> &[ColumnModification] {
        &self.columns
    }

    pub fn write_operations(&self) -> impl Iterator<Item = &ColumnModification> {
        self.columns.iter().filter(|c| c.is_write())
    }

    pub fn read_operations(&self) -> impl Iterator<Item = &ColumnModification> {
        self.columns.iter().filter(|c| c.is_read())
    }

    pub fn condition_operations(&self) -> impl Iterator<Item = &ColumnModification> {
        self.columns.iter().filter(|c| c.is_condition())
    }

    pub fn key_operations(&self) -> impl Iterator<Item = &ColumnModification> {
        self.columns.iter().filter(|c| c.is_key())
    }

    pub fn has_reads(&self) -> bool {
        self.read_operations().next().is_some()
    }

    /// Pure writes are an insert, writes with conditions an update,
    /// conditions alone a delete. A command carrying only read columns
    /// is an insert of a fully server-generated row.
    pub fn kind(&self) -> ModificationKind {
        let writes = self.write_operations().next().is_some();
        let conditions = self.condition_operations().next().is_some();
        match (writes, conditions) {
            (_, false) => ModificationKind::Insert,
            (true, true) => ModificationKind::Update,
            (false, true) => ModificationKind::Delete,
        }
    }
}
