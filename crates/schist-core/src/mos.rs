//! Transistor devices.

use indexmap::IndexMap;

use crate::tech::MosType;

/// A four-terminal MOS transistor.
///
/// Terminals and geometry are stored as net indices and integer database
/// units; the free-form parameter map keeps whatever the netlist carried
/// beyond the geometry the interpreter understands, in insertion order.
#[derive(Debug, Clone)]
pub struct Mos {
    /// Model index into [`crate::Tech::models`].
    pub model: usize,
    /// Electrical type, derived from the model.
    pub mos_type: MosType,
    /// Drain net index.
    pub drain: usize,
    /// Gate net index.
    pub gate: usize,
    /// Source net index.
    pub source: usize,
    /// Bulk net index.
    pub base: usize,
    /// Channel width in database units.
    pub width: i64,
    /// Channel length in database units.
    pub length: i64,
    /// Drain diffusion area in square database units.
    pub drain_area: i64,
    /// Source diffusion area in square database units.
    pub source_area: i64,
    /// Drain diffusion perimeter in database units.
    pub drain_perim: i64,
    /// Source diffusion perimeter in database units.
    pub source_perim: i64,
    /// Uninterpreted parameters, name to parsed values.
    pub params: IndexMap<String, Vec<f64>>,
}

impl Mos {
    pub fn new(
        model: usize,
        mos_type: MosType,
        drain: usize,
        gate: usize,
        source: usize,
        base: usize,
    ) -> Self {
        Self {
            model,
            mos_type,
            drain,
            gate,
            source,
            base,
            width: 0,
            length: 0,
            drain_area: 0,
            source_area: 0,
            drain_perim: 0,
            source_perim: 0,
            params: IndexMap::new(),
        }
    }
}
