//! GDS layout import for Schist.
//!
//! Reads a cell's geometry out of a GDSII library (via [`gds21`]) into a
//! flat rectangle list on the technology's paint layers. Only axis-aligned
//! rectangles are modeled: boundaries with any other outline are counted
//! and reported through the diagnostics sink, not imported. Coordinates
//! are kept as raw integers and assumed to be expressed in the technology
//! database unit; structure references are not flattened.

use std::path::Path;

use gds21::{GdsElement, GdsLibrary};
use log::debug;
use schist_core::{Diagnostic, Diagnostics, Tech};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cell not found: {0}")]
    CellNotFound(String),

    #[error(transparent)]
    Gds(#[from] gds21::GdsError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A point in database units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// An axis-aligned rectangle on one paint layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Paint index into [`Tech::paints`].
    pub layer: usize,
    /// Lower-left corner.
    pub ll: Point,
    /// Upper-right corner.
    pub ur: Point,
}

/// Flat rectangle geometry of one cell.
#[derive(Debug, Clone)]
pub struct Layout {
    pub name: String,
    pub rects: Vec<Rect>,
}

/// Import one cell from an already-loaded GDS library.
///
/// Boundary outlines with exactly four corners (a closing point equal to
/// the first is dropped) are imported as their bounding box; anything else
/// is tallied into a single [`Diagnostic::SkippedPolygons`] for the cell.
/// Boundaries on layer/datatype pairs the technology does not paint are
/// skipped quietly.
pub fn import_cell(
    gds: &GdsLibrary,
    cell: &str,
    tech: &Tech,
    diag: &mut Diagnostics,
) -> Result<Layout> {
    let strukt = gds
        .structs
        .iter()
        .find(|s| s.name == cell)
        .ok_or_else(|| Error::CellNotFound(cell.to_string()))?;

    let mut layout = Layout {
        name: cell.to_string(),
        rects: Vec::new(),
    };
    let mut skipped = 0usize;

    for elem in &strukt.elems {
        let GdsElement::GdsBoundary(boundary) = elem else {
            continue;
        };

        let mut pts: &[gds21::GdsPoint] = &boundary.xy;
        if pts.len() >= 2 && pts.first() == pts.last() {
            pts = &pts[..pts.len() - 1];
        }
        if pts.len() != 4 {
            skipped += 1;
            continue;
        }

        let layer = match tech.find_paint(boundary.layer, boundary.datatype) {
            Some(p) => p,
            None => {
                debug!(
                    "cell {}: no paint for layer {} datatype {}",
                    cell, boundary.layer, boundary.datatype
                );
                continue;
            }
        };

        let mut ll = Point {
            x: i64::MAX,
            y: i64::MAX,
        };
        let mut ur = Point {
            x: i64::MIN,
            y: i64::MIN,
        };
        for p in pts {
            ll.x = ll.x.min(p.x as i64);
            ll.y = ll.y.min(p.y as i64);
            ur.x = ur.x.max(p.x as i64);
            ur.y = ur.y.max(p.y as i64);
        }
        layout.rects.push(Rect { layer, ll, ur });
    }

    if skipped > 0 {
        diag.push(Diagnostic::SkippedPolygons {
            cell: cell.to_string(),
            count: skipped,
        });
    }

    Ok(layout)
}

/// Load a GDS file and import one cell from it.
pub fn import_gds(
    path: impl AsRef<Path>,
    cell: &str,
    tech: &Tech,
    diag: &mut Diagnostics,
) -> Result<Layout> {
    let gds = GdsLibrary::load(path)?;
    import_cell(&gds, cell, tech, diag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gds21::{GdsBoundary, GdsPoint, GdsStruct};

    fn boundary(layer: i16, datatype: i16, pts: &[(i32, i32)]) -> GdsElement {
        GdsElement::GdsBoundary(GdsBoundary {
            layer,
            datatype,
            xy: pts.iter().map(|&(x, y)| GdsPoint::new(x, y)).collect(),
            ..Default::default()
        })
    }

    fn test_tech() -> Tech {
        let mut tech = Tech::new(0.005, 1.0);
        tech.add_paint("diff", 65, 20);
        tech
    }

    fn test_gds() -> GdsLibrary {
        let mut lib = GdsLibrary::new("test");
        let mut cell = GdsStruct::new("inv");
        // Closed rectangle: five points, last repeats the first.
        cell.elems.push(boundary(
            65,
            20,
            &[(0, 0), (200, 0), (200, 130), (0, 130), (0, 0)],
        ));
        // L-shaped polygon: not a rectangle.
        cell.elems.push(boundary(
            65,
            20,
            &[(0, 0), (100, 0), (100, 50), (50, 50), (50, 100), (0, 100)],
        ));
        // Unknown layer: no paint registered.
        cell.elems
            .push(boundary(99, 0, &[(0, 0), (10, 0), (10, 10), (0, 10)]));
        lib.structs.push(cell);
        lib
    }

    #[test]
    fn test_import_rectangles() {
        let tech = test_tech();
        let mut diag = Diagnostics::new();
        let layout = import_cell(&test_gds(), "inv", &tech, &mut diag).unwrap();

        assert_eq!(layout.rects.len(), 1);
        let rect = layout.rects[0];
        assert_eq!(rect.layer, 0);
        assert_eq!(rect.ll, Point { x: 0, y: 0 });
        assert_eq!(rect.ur, Point { x: 200, y: 130 });
    }

    #[test]
    fn test_non_rectangles_are_counted() {
        let tech = test_tech();
        let mut diag = Diagnostics::new();
        import_cell(&test_gds(), "inv", &tech, &mut diag).unwrap();

        assert_eq!(diag.len(), 1);
        assert!(matches!(
            diag.iter().next(),
            Some(Diagnostic::SkippedPolygons { count: 1, .. })
        ));
    }

    #[test]
    fn test_missing_cell() {
        let tech = test_tech();
        let mut diag = Diagnostics::new();
        let err = import_cell(&test_gds(), "nand2", &tech, &mut diag).unwrap_err();
        assert!(matches!(err, Error::CellNotFound(name) if name == "nand2"));
    }
}
