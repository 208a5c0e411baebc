//! Subcircuits: nets, transistors, and nested instances under one name.

use crate::instance::Instance;
use crate::mos::Mos;
use crate::net::Net;

/// A named, reusable circuit block.
///
/// The name may stay empty through an import; the exporter assigns a
/// positional placeholder to anonymous subcircuits when writing out.
#[derive(Debug, Clone, Default)]
pub struct Subckt {
    pub name: String,
    /// Nets in creation order. The first nets are the declared IO ports,
    /// in declared order.
    pub nets: Vec<Net>,
    /// Transistors in import order.
    pub mos: Vec<Mos>,
    /// Nested instances in import order.
    pub insts: Vec<Instance>,
}

impl Subckt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Look up a net by name.
    pub fn find_net(&self, name: &str) -> Option<usize> {
        self.nets.iter().position(|n| n.name == name)
    }

    /// Look up a net by name, creating a non-IO net on first reference.
    pub fn resolve_net(&mut self, name: &str) -> usize {
        match self.find_net(name) {
            Some(i) => i,
            None => {
                self.nets.push(Net::new(name, false));
                self.nets.len() - 1
            }
        }
    }

    /// Seed a declared IO port net.
    ///
    /// Must be called once per port, in declared order, before any device
    /// is added: the exporter and positional instance binding both rely on
    /// the first net indices matching the external port order.
    pub fn push_io_net(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        let i = self.resolve_net(&name);
        self.nets[i].is_io = true;
        i
    }

    /// Append a transistor, bumping the terminal counters of its nets.
    pub fn push_mos(&mut self, mos: Mos) {
        let t = mos.mos_type.index();
        self.nets[mos.gate].gates[t] += 1;
        self.nets[mos.drain].diffs[t] += 1;
        self.nets[mos.source].diffs[t] += 1;
        self.mos.push(mos);
    }

    /// Append a nested instance.
    pub fn push_instance(&mut self, inst: Instance) {
        self.insts.push(inst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tech::MosType;

    #[test]
    fn test_resolve_net_dedupes() {
        let mut ckt = Subckt::new();
        let a = ckt.resolve_net("a");
        let b = ckt.resolve_net("b");
        assert_ne!(a, b);
        assert_eq!(ckt.resolve_net("a"), a);
        assert_eq!(ckt.nets.len(), 2);
        assert!(!ckt.nets[a].is_io);
    }

    #[test]
    fn test_io_nets_claim_first_indices() {
        let mut ckt = Subckt::new();
        ckt.push_io_net("in");
        ckt.push_io_net("out");
        let internal = ckt.resolve_net("mid");

        assert_eq!(ckt.find_net("in"), Some(0));
        assert_eq!(ckt.find_net("out"), Some(1));
        assert_eq!(internal, 2);
        assert!(ckt.nets[0].is_io);
        assert!(ckt.nets[1].is_io);
        assert!(!ckt.nets[2].is_io);
    }

    #[test]
    fn test_push_mos_counts_terminals() {
        let mut ckt = Subckt::new();
        let out = ckt.resolve_net("out");
        let inp = ckt.resolve_net("in");
        let gnd = ckt.resolve_net("gnd");

        ckt.push_mos(Mos::new(0, MosType::Nmos, out, inp, gnd, gnd));

        assert_eq!(ckt.nets[inp].gates, [1, 0]);
        assert_eq!(ckt.nets[out].diffs, [1, 0]);
        // Source and bulk share gnd; only the source terminal counts.
        assert_eq!(ckt.nets[gnd].diffs, [1, 0]);
        assert_eq!(ckt.nets[gnd].gates, [0, 0]);
    }
}
