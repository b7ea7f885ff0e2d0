use std::collections::BTreeMap;

/// Mutable generation state shared by every command of one batch.
///
/// Owned by the batch orchestrator and passed explicitly into each
/// per-command generation call; one instance per logical batch, never
/// shared across concurrent batches.
#[derive(Default, Debug)]
pub struct BatchContext {
    /// Scalar scratch-variable declarations, one per read column of the
    /// update and single-insert paths.
    pub declarations: String,
    /// Composite record/collection declarations for batched inserts,
    /// memoized by `<table>_<batch position>`.
    pub scratch: BTreeMap<String, String>,
    cursor_position: u32,
}

impl BatchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordinal the next opened cursor will receive.
    pub fn cursor_position(&self) -> u32 {
        self.cursor_position
    }

    /// Claims the next cursor ordinal and advances the counter.
    ///
    /// Must be called exactly once per cursor so ordinals stay aligned
    /// with the executor's read-back order.
    pub fn open_cursor(&mut self) -> u32 {
        let position = self.cursor_position;
        self.cursor_position += 1;
        position
    }
}
