//! Technology context shared by every subcircuit of a library.

/// Electrical type of a transistor, derived from its model.
///
/// Also used as the index into the per-type connection counters on [`crate::Net`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MosType {
    Nmos,
    Pmos,
}

impl MosType {
    /// Counter-array index for this type.
    pub fn index(self) -> usize {
        match self {
            MosType::Nmos => 0,
            MosType::Pmos => 1,
        }
    }
}

/// A transistor model known to the technology database.
#[derive(Debug, Clone)]
pub struct Model {
    /// Model name as it appears in netlists (e.g. "sky130_fd_pr__nfet_01v8").
    pub name: String,
    /// Electrical type of devices built from this model.
    pub mos_type: MosType,
}

/// A drawable layer, identified by its GDS layer/datatype pair.
#[derive(Debug, Clone)]
pub struct Paint {
    pub name: String,
    /// GDS layer number.
    pub major: i16,
    /// GDS datatype number.
    pub minor: i16,
}

/// Read-only technology data shared by all subcircuits in a library.
///
/// Import and export never mutate a `Tech`; callers typically hand one to a
/// library behind an `Arc` and may share it across independent libraries.
#[derive(Debug, Clone)]
pub struct Tech {
    /// Physical length of one integer database unit, in micrometers.
    pub dbunit: f64,
    /// Scale factor applied on top of the database unit.
    pub scale: f64,
    /// Transistor model table.
    pub models: Vec<Model>,
    /// Drawable layer table.
    pub paints: Vec<Paint>,
}

impl Tech {
    /// Create a technology context with an empty model and paint table.
    pub fn new(dbunit: f64, scale: f64) -> Self {
        Self {
            dbunit,
            scale,
            models: Vec::new(),
            paints: Vec::new(),
        }
    }

    /// Register a transistor model, returning its index.
    pub fn add_model(&mut self, name: impl Into<String>, mos_type: MosType) -> usize {
        self.models.push(Model {
            name: name.into(),
            mos_type,
        });
        self.models.len() - 1
    }

    /// Register a drawable layer, returning its index.
    pub fn add_paint(&mut self, name: impl Into<String>, major: i16, minor: i16) -> usize {
        self.paints.push(Paint {
            name: name.into(),
            major,
            minor,
        });
        self.paints.len() - 1
    }

    /// Look up a model by netlist name.
    pub fn find_model(&self, name: &str) -> Option<usize> {
        self.models.iter().position(|m| m.name == name)
    }

    /// Look up a paint by GDS layer/datatype pair.
    pub fn find_paint(&self, major: i16, minor: i16) -> Option<usize> {
        self.paints
            .iter()
            .position(|p| p.major == major && p.minor == minor)
    }

    /// Physical length of one database unit, in meters.
    pub fn length_unit(&self) -> f64 {
        self.dbunit * self.scale * 1e-6
    }

    /// Physical area of one square database unit, in square meters.
    pub fn area_unit(&self) -> f64 {
        let u = self.length_unit();
        u * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_model() {
        let mut tech = Tech::new(0.005, 1.0);
        let n = tech.add_model("nfet", MosType::Nmos);
        let p = tech.add_model("pfet", MosType::Pmos);

        assert_eq!(tech.find_model("nfet"), Some(n));
        assert_eq!(tech.find_model("pfet"), Some(p));
        assert_eq!(tech.find_model("res"), None);
    }

    #[test]
    fn test_find_paint() {
        let mut tech = Tech::new(0.005, 1.0);
        let diff = tech.add_paint("diff", 65, 20);
        tech.add_paint("poly", 66, 20);

        assert_eq!(tech.find_paint(65, 20), Some(diff));
        assert_eq!(tech.find_paint(65, 44), None);
    }

    #[test]
    fn test_units() {
        let tech = Tech::new(0.005, 1.0);
        assert!((tech.length_unit() - 5e-9).abs() < 1e-20);
        assert!((tech.area_unit() - 25e-18).abs() < 1e-28);
    }

    #[test]
    fn test_mos_type_index() {
        assert_eq!(MosType::Nmos.index(), 0);
        assert_eq!(MosType::Pmos.index(), 1);
    }
}
