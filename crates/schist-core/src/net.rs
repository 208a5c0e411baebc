//! Named electrical connection points within a subcircuit.

/// A net, identified by its index within the owning subcircuit.
///
/// Nets are created on first reference by name and never deleted, so
/// indices stay stable for the life of an import pass.
#[derive(Debug, Clone)]
pub struct Net {
    /// External (decoded) name.
    pub name: String,
    /// Whether this net is exposed as a subcircuit port.
    pub is_io: bool,
    /// Gate-terminal connection counts, indexed by [`crate::MosType`].
    pub gates: [u32; 2],
    /// Source/drain-terminal connection counts, indexed by [`crate::MosType`].
    pub diffs: [u32; 2],
}

impl Net {
    pub fn new(name: impl Into<String>, is_io: bool) -> Self {
        Self {
            name: name.into(),
            is_io,
            gates: [0, 0],
            diffs: [0, 0],
        }
    }
}
