//! SPICE netlist import and export for the Schist circuit model.
//!
//! This crate maps between the record shapes an external SPICE-family
//! parser produces ([`syntax`]) and the semantic model in `schist-core`:
//! importing resolves device records into transistors and subcircuit
//! instances, exporting walks the model back out. Parsing netlist text is
//! not done here.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use schist_core::{Diagnostics, MosType, Tech};
//! use schist_spice::{export_netlist, import_netlist, syntax};
//!
//! let mut tech = Tech::new(0.005, 1.0);
//! tech.add_model("nfet", MosType::Nmos);
//!
//! let mut dev = syntax::Device::new("m0", "nfet");
//! dev.ports = vec!["out".into(), "in".into(), "gnd".into(), "gnd".into()];
//! dev.params.push(syntax::Param::new("w", "1u"));
//! dev.params.push(syntax::Param::new("l", "0.5u"));
//!
//! let mut sub = syntax::Subckt::new("inv");
//! sub.ports = vec!["in".into(), "out".into(), "gnd".into()];
//! sub.devices.push(dev);
//!
//! let mut rec = syntax::Netlist::new();
//! rec.subckts.push(sub);
//!
//! let mut diag = Diagnostics::new();
//! let lib = import_netlist(&rec, Arc::new(tech), &mut diag);
//! assert!(diag.is_empty());
//! assert_eq!(lib.subckts[0].mos.len(), 1);
//!
//! let out = export_netlist(&lib);
//! assert_eq!(out.subckts[0].name, "inv");
//! ```

pub mod export;
pub mod import;
pub mod name;
pub mod syntax;

pub use export::{export_device, export_instance, export_netlist, export_subckt};
pub use import::{DeviceClass, classify_device, import_device, import_netlist, import_subckt};
pub use name::{escape_name, has_dangling_escape, unescape_name};
