/// What the executor should expect to read back for one generated
/// command.
///
/// The executor must open as many result-set cursors as there are
/// `LastInResultSet` entries, in emission order; a row-count cursor's
/// single value drives update/delete verification.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSetMapping {
    /// Nothing to read back.
    #[default]
    NoResultSet,
    /// The command's values arrive in a result set that is followed by
    /// another one belonging to the same statement group.
    NotLastInResultSet,
    /// The command's result set is consumable and closes its group.
    LastInResultSet,
}
