//! Import: syntax records into the semantic model.

use std::sync::Arc;

use schist_core::units::{parse_value, quantize};
use schist_core::{Diagnostic, Diagnostics, Instance, Mos, Netlist, Subckt, Tech};

use crate::name::{has_dangling_escape, unescape_name};
use crate::syntax;

/// What a device record turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// A transistor, with its model index.
    Mos(usize),
    /// A subcircuit instantiation, with the subcircuit index.
    Instance(usize),
}

/// Decide what a device record is, validating its shape.
///
/// The kind character is the first character of the record name. `m` is
/// always a transistor; `x` is a transistor when its type resolves in the
/// model table (some naming conventions instantiate raw transistor models
/// through subckt syntax) and otherwise an instantiation of a registered
/// subcircuit. Anything else is rejected: only transistors and structural
/// instantiation are modeled.
pub fn classify_device(dev: &syntax::Device, lib: &Netlist) -> Result<DeviceClass, Diagnostic> {
    if !dev.valid {
        return Err(Diagnostic::InvalidRecord {
            name: dev.name.clone(),
        });
    }

    let kind = match dev.name.chars().next() {
        Some(c) => c.to_ascii_lowercase(),
        None => {
            return Err(Diagnostic::InvalidRecord {
                name: dev.name.clone(),
            });
        }
    };

    match kind {
        'm' => match lib.tech.find_model(&dev.ty) {
            Some(model) => mos_class(dev, model),
            None => Err(Diagnostic::UnknownType {
                name: dev.name.clone(),
                ty: dev.ty.clone(),
            }),
        },
        'x' => match lib.tech.find_model(&dev.ty) {
            Some(model) => mos_class(dev, model),
            None => match lib.find_subckt(&dev.ty) {
                Some(subckt) => Ok(DeviceClass::Instance(subckt)),
                None => Err(Diagnostic::UnknownType {
                    name: dev.name.clone(),
                    ty: dev.ty.clone(),
                }),
            },
        },
        _ => Err(Diagnostic::UnsupportedDevice {
            name: dev.name.clone(),
            kind,
        }),
    }
}

fn mos_class(dev: &syntax::Device, model: usize) -> Result<DeviceClass, Diagnostic> {
    if dev.ports.len() != 4 {
        return Err(Diagnostic::TerminalCount {
            name: dev.name.clone(),
            found: dev.ports.len(),
        });
    }
    Ok(DeviceClass::Mos(model))
}

/// Decode an encoded name, reporting a dangling escape if present.
fn import_name(raw: &str, diag: &mut Diagnostics) -> String {
    if has_dangling_escape(raw) {
        diag.push(Diagnostic::DanglingEscape {
            name: raw.to_string(),
        });
    }
    unescape_name(raw)
}

/// Import one device record into subcircuit `ckt` of `lib`.
///
/// Appends exactly one transistor or instance on success, creating nets as
/// terminals reference them. On rejection, pushes one diagnostic, appends
/// nothing, and returns false so the caller can continue with the next
/// record.
pub fn import_device(
    dev: &syntax::Device,
    lib: &mut Netlist,
    ckt: usize,
    diag: &mut Diagnostics,
) -> bool {
    let class = match classify_device(dev, lib) {
        Ok(class) => class,
        Err(d) => {
            diag.push(d);
            return false;
        }
    };

    let tech = lib.tech.clone();
    let sub = &mut lib.subckts[ckt];

    match class {
        DeviceClass::Mos(model) => {
            let drain = sub.resolve_net(&import_name(&dev.ports[0], diag));
            let gate = sub.resolve_net(&import_name(&dev.ports[1], diag));
            let source = sub.resolve_net(&import_name(&dev.ports[2], diag));
            let base = sub.resolve_net(&import_name(&dev.ports[3], diag));

            let mut mos = Mos::new(model, tech.models[model].mos_type, drain, gate, source, base);
            fill_mos_params(&mut mos, &dev.params, &tech);
            sub.push_mos(mos);
        }
        DeviceClass::Instance(subckt) => {
            let name: String = dev.name.chars().skip(1).collect();
            let mut inst = Instance::new(unescape_name(&name), subckt);
            for port in &dev.ports {
                inst.ports.push(sub.resolve_net(&import_name(port, diag)));
            }
            sub.push_instance(inst);
        }
    }
    true
}

/// Unit-parse a transistor's parameters into its geometry fields,
/// quantizing to the nearest database unit; anything the interpreter does
/// not understand lands in the free-form map.
fn fill_mos_params(mos: &mut Mos, params: &[syntax::Param], tech: &Tech) {
    let lu = tech.length_unit();
    let au = tech.area_unit();
    for param in params {
        let value = parse_value(&param.value);
        match param.name.to_ascii_lowercase().as_str() {
            "w" => mos.width = quantize(value, lu),
            "l" => mos.length = quantize(value, lu),
            "ad" => mos.drain_area = quantize(value, au),
            "as" => mos.source_area = quantize(value, au),
            "pd" => mos.drain_perim = quantize(value, lu),
            "ps" => mos.source_perim = quantize(value, lu),
            _ => mos
                .params
                .entry(param.name.clone())
                .or_default()
                .push(value),
        }
    }
}

/// Import one subcircuit body into the pre-registered slot `ckt`.
///
/// Seeds the declared IO nets first, in declared order, so they claim the
/// lowest net indices; then runs every device record through
/// [`import_device`]. Rejected devices are skipped, never fatal.
pub fn import_subckt(
    rec: &syntax::Subckt,
    lib: &mut Netlist,
    ckt: usize,
    diag: &mut Diagnostics,
) {
    {
        let sub = &mut lib.subckts[ckt];
        sub.name = rec.name.clone();
        for port in &rec.ports {
            sub.push_io_net(import_name(port, diag));
        }
    }
    for dev in &rec.devices {
        import_device(dev, lib, ckt, diag);
    }
}

/// Import a whole netlist.
///
/// Runs a pre-registration pass that reserves a slot and assigns a name
/// for every subcircuit before any body is imported, so a subcircuit can
/// instantiate one defined later in the same file.
pub fn import_netlist(
    rec: &syntax::Netlist,
    tech: Arc<Tech>,
    diag: &mut Diagnostics,
) -> Netlist {
    let mut lib = Netlist::new(tech);
    for sub in &rec.subckts {
        lib.push_subckt(Subckt::named(sub.name.clone()));
    }
    for (i, sub) in rec.subckts.iter().enumerate() {
        import_subckt(sub, &mut lib, i, diag);
    }
    lib
}
