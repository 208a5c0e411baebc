//! Parsed netlist record shapes exchanged with the external SPICE parser.
//!
//! These mirror what the upstream tokenizer/parser produces and what the
//! exporter hands back for serialization. The interpreter never touches
//! netlist text itself.

use serde::{Deserialize, Serialize};

/// A name/value parameter pair, value still in textual form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub value: String,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One device line.
///
/// The first character of `name` encodes the device kind; the remainder is
/// the instance name. `ty` refers to a transistor model or a subcircuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub ty: String,
    /// Terminal net names, in positional order.
    pub ports: Vec<String>,
    pub params: Vec<Param>,
    /// Cleared by the parser when the line failed to parse.
    pub valid: bool,
}

impl Device {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ports: Vec::new(),
            params: Vec::new(),
            valid: true,
        }
    }
}

/// One subcircuit definition block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subckt {
    pub name: String,
    /// Declared IO port names, in declared order.
    pub ports: Vec<String>,
    pub devices: Vec<Device>,
    pub valid: bool,
}

impl Subckt {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ports: Vec::new(),
            devices: Vec::new(),
            valid: true,
        }
    }
}

/// A whole netlist file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Netlist {
    pub subckts: Vec<Subckt>,
    pub valid: bool,
}

impl Netlist {
    pub fn new() -> Self {
        Self {
            subckts: Vec::new(),
            valid: true,
        }
    }
}

impl Default for Netlist {
    fn default() -> Self {
        Self::new()
    }
}
