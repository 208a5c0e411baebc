//! Export: the semantic model back into syntax records.

use schist_core::units::format_value;
use schist_core::{Instance, Mos, Netlist, Subckt, Tech};

use crate::name::escape_name;
use crate::syntax;

/// Name a subcircuit for export, substituting a positional placeholder
/// for an anonymous one. Deterministic: the placeholder is tied to the
/// subcircuit's index in the library.
fn subckt_name(lib: &Netlist, index: usize) -> String {
    let name = &lib.subckts[index].name;
    if name.is_empty() {
        format!("process_{}", index)
    } else {
        name.clone()
    }
}

fn net_name(ckt: &Subckt, net: usize) -> String {
    escape_name(&ckt.nets[net].name)
}

/// Emit one transistor as a device record.
///
/// Terminals go out in drain/gate/source/bulk order. Width and length are
/// always emitted; diffusion areas and perimeters only when nonzero; the
/// free-form parameters follow with their first stored value.
pub fn export_device(tech: &Tech, ckt: &Subckt, mos: &Mos, index: usize) -> syntax::Device {
    let mut dev = syntax::Device::new(
        format!("m{}", index),
        tech.models[mos.model].name.clone(),
    );
    dev.ports.push(net_name(ckt, mos.drain));
    dev.ports.push(net_name(ckt, mos.gate));
    dev.ports.push(net_name(ckt, mos.source));
    dev.ports.push(net_name(ckt, mos.base));

    let lu = tech.length_unit();
    let au = tech.area_unit();
    dev.params
        .push(syntax::Param::new("w", format_value(mos.width as f64 * lu)));
    dev.params
        .push(syntax::Param::new("l", format_value(mos.length as f64 * lu)));
    if mos.drain_area > 0 {
        dev.params.push(syntax::Param::new(
            "ad",
            format_value(mos.drain_area as f64 * au),
        ));
    }
    if mos.source_area > 0 {
        dev.params.push(syntax::Param::new(
            "as",
            format_value(mos.source_area as f64 * au),
        ));
    }
    if mos.drain_perim > 0 {
        dev.params.push(syntax::Param::new(
            "pd",
            format_value(mos.drain_perim as f64 * lu),
        ));
    }
    if mos.source_perim > 0 {
        dev.params.push(syntax::Param::new(
            "ps",
            format_value(mos.source_perim as f64 * lu),
        ));
    }
    for (name, values) in &mos.params {
        if let Some(&v) = values.first() {
            dev.params.push(syntax::Param::new(name.clone(), format_value(v)));
        }
    }

    dev
}

/// Emit one subcircuit instantiation as a device record.
pub fn export_instance(
    lib: &Netlist,
    ckt: &Subckt,
    inst: &Instance,
    index: usize,
) -> syntax::Device {
    let mut dev = syntax::Device::new(format!("x{}", index), subckt_name(lib, inst.subckt));
    for &port in &inst.ports {
        dev.ports.push(net_name(ckt, port));
    }
    dev
}

/// Emit one subcircuit as a subckt record.
///
/// IO ports go out in net-index order, which is declaration order; no
/// canonical reordering is applied.
pub fn export_subckt(lib: &Netlist, ckt: &Subckt) -> syntax::Subckt {
    let mut rec = syntax::Subckt::new(ckt.name.clone());

    for (i, inst) in ckt.insts.iter().enumerate() {
        rec.devices.push(export_instance(lib, ckt, inst, i));
    }
    for (i, mos) in ckt.mos.iter().enumerate() {
        rec.devices.push(export_device(&lib.tech, ckt, mos, i));
    }

    for net in &ckt.nets {
        if net.is_io {
            rec.ports.push(escape_name(&net.name));
        }
    }

    rec
}

/// Emit a whole library as a netlist record.
pub fn export_netlist(lib: &Netlist) -> syntax::Netlist {
    let mut rec = syntax::Netlist::new();
    for (i, ckt) in lib.subckts.iter().enumerate() {
        let mut sub = export_subckt(lib, ckt);
        sub.name = subckt_name(lib, i);
        rec.subckts.push(sub);
    }
    rec
}

#[cfg(test)]
mod tests {
    use super::*;
    use schist_core::MosType;
    use std::sync::Arc;

    fn test_lib() -> Netlist {
        let mut tech = Tech::new(0.005, 1.0);
        tech.add_model("nfet", MosType::Nmos);
        Netlist::new(Arc::new(tech))
    }

    #[test]
    fn test_export_device_params() {
        let mut lib = test_lib();
        let mut ckt = Subckt::named("inv");
        let out = ckt.resolve_net("out");
        let inp = ckt.resolve_net("in");
        let gnd = ckt.resolve_net("gnd");
        let mut mos = Mos::new(0, MosType::Nmos, out, inp, gnd, gnd);
        mos.width = 200;
        mos.length = 100;
        mos.drain_area = 1000;
        mos.params.insert("nf".to_string(), vec![2.0]);
        ckt.push_mos(mos);
        lib.push_subckt(ckt);

        let dev = export_device(&lib.tech, &lib.subckts[0], &lib.subckts[0].mos[0], 0);
        assert_eq!(dev.name, "m0");
        assert_eq!(dev.ty, "nfet");
        assert_eq!(dev.ports, vec!["out", "in", "gnd", "gnd"]);

        let params: Vec<(&str, &str)> = dev
            .params
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(
            params,
            vec![("w", "1u"), ("l", "500n"), ("ad", "25f"), ("nf", "2")]
        );
    }

    #[test]
    fn test_export_zero_size_still_emits_w_l() {
        let mut lib = test_lib();
        let mut ckt = Subckt::new();
        let a = ckt.resolve_net("a");
        ckt.push_mos(Mos::new(0, MosType::Nmos, a, a, a, a));
        lib.push_subckt(ckt);

        let dev = export_device(&lib.tech, &lib.subckts[0], &lib.subckts[0].mos[0], 0);
        let names: Vec<&str> = dev.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["w", "l"]);
        assert_eq!(dev.params[0].value, "0.0");
    }

    #[test]
    fn test_export_anonymous_subckt_name() {
        let mut lib = test_lib();
        for _ in 0..3 {
            lib.push_subckt(Subckt::named("named"));
        }
        lib.push_subckt(Subckt::new());

        let rec = export_netlist(&lib);
        assert_eq!(rec.subckts[3].name, "process_3");
    }

    #[test]
    fn test_export_instance_of_anonymous_subckt() {
        let mut lib = test_lib();
        let mut top = Subckt::named("top");
        let a = top.resolve_net("a");
        let mut inst = Instance::new("u0", 1);
        inst.ports.push(a);
        top.push_instance(inst);
        lib.push_subckt(top);
        lib.push_subckt(Subckt::new());

        let rec = export_netlist(&lib);
        // The instance's type matches the placeholder given to the target.
        assert_eq!(rec.subckts[0].devices[0].ty, "process_1");
        assert_eq!(rec.subckts[1].name, "process_1");
    }

    #[test]
    fn test_export_ports_in_declaration_order() {
        let mut lib = test_lib();
        let mut ckt = Subckt::named("blk");
        ckt.push_io_net("z");
        ckt.push_io_net("a");
        ckt.resolve_net("mid");
        ckt.push_io_net("q.r");
        lib.push_subckt(ckt);

        let rec = export_subckt(&lib, &lib.subckts[0]);
        assert_eq!(rec.ports, vec!["z", "a", "q_0r"]);
    }
}
