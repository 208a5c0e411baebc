//! Semantic circuit model for Schist.
//!
//! This crate provides the in-memory representation that the netlist
//! interpreter and layout importer build into: a library of subcircuits
//! composed of transistors, sub-instances, and named nets, together with
//! the shared read-only technology context (transistor models, database
//! unit, scale factor) and the engineering-unit value codec.
//!
//! Nets and subcircuits are identified by dense, zero-based indices into
//! their owning containers; nothing here holds references across container
//! boundaries, so partial libraries can be passed around freely while an
//! import is still in flight.

pub mod diag;
pub mod instance;
pub mod mos;
pub mod net;
pub mod netlist;
pub mod subckt;
pub mod tech;
pub mod units;

pub use diag::{Diagnostic, Diagnostics};
pub use instance::Instance;
pub use mos::Mos;
pub use net::Net;
pub use netlist::Netlist;
pub use subckt::Subckt;
pub use tech::{Model, MosType, Paint, Tech};
