//! Structured import diagnostics.
//!
//! Per-device and per-polygon failures are local: an importer records what
//! it had to skip and keeps going, so a malformed netlist yields a sparser
//! model plus a list of reasons rather than an error. Callers pass a
//! [`Diagnostics`] sink explicitly and decide their own pass/fail policy
//! from its contents.

use thiserror::Error;

/// One recoverable problem found while importing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The upstream parser already marked this record invalid.
    #[error("device {name}: invalid record")]
    InvalidRecord { name: String },

    /// Device kind other than transistor or subcircuit instance.
    #[error("device {name}: unsupported device kind '{kind}'")]
    UnsupportedDevice { name: String, kind: char },

    /// Type name matches neither a technology model nor a known subcircuit.
    #[error("device {name}: unknown type '{ty}'")]
    UnknownType { name: String, ty: String },

    /// Transistor record without exactly four terminals.
    #[error("device {name}: expected 4 terminals, found {found}")]
    TerminalCount { name: String, found: usize },

    /// An encoded name ends in an escape character with no code digit.
    #[error("name '{name}' ends in a dangling escape")]
    DanglingEscape { name: String },

    /// Non-rectangular polygons encountered during layout import.
    #[error("cell {cell}: skipped {count} non-rectangular polygons")]
    SkippedPolygons { cell: String, count: usize },
}

/// An accumulating sink for [`Diagnostic`] values.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, also emitting it on the `log` facade.
    pub fn push(&mut self, diag: Diagnostic) {
        log::warn!("{}", diag);
        self.items.push(diag);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates() {
        let mut diag = Diagnostics::new();
        assert!(diag.is_empty());

        diag.push(Diagnostic::UnsupportedDevice {
            name: "r1".to_string(),
            kind: 'r',
        });
        diag.push(Diagnostic::TerminalCount {
            name: "m0".to_string(),
            found: 3,
        });

        assert_eq!(diag.len(), 2);
        assert!(matches!(
            diag.iter().next(),
            Some(Diagnostic::UnsupportedDevice { .. })
        ));
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::UnknownType {
            name: "x3".to_string(),
            ty: "nand9".to_string(),
        };
        assert_eq!(d.to_string(), "device x3: unknown type 'nand9'");
    }
}
