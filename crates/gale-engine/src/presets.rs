//! Disc-shaped source injection and canned starting states.

use gale_core::FieldName;

/// Field a [`DiscSource`] adds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceTarget {
    /// Pressure.
    Pressure,
    /// First-axis wind component.
    VelocityU,
    /// Second-axis wind component.
    VelocityV,
}

impl SourceTarget {
    /// The targeted field.
    pub fn field_name(self) -> FieldName {
        match self {
            Self::Pressure => FieldName::Pressure,
            Self::VelocityU => FieldName::VelocityU,
            Self::VelocityV => FieldName::VelocityV,
        }
    }
}

/// A value added over a disc of cells, scaled by `dt` when applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscSource {
    /// Field receiving the source.
    pub target: SourceTarget,
    /// Amount added per unit time.
    pub value: f64,
    /// Centre in grid coordinates `(i, j)`.
    pub centre: (f64, f64),
    /// Cells strictly closer than this to the centre are affected.
    pub radius: f64,
}

/// Canned starting states for demonstrations and regression runs.
///
/// Positions and radius scale with the grid; on a 100-cell grid the
/// centres sit at rows/columns 25, 50 and 75 with radius 5. Row 50 is the
/// equator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// A pressure high in the southern hemisphere mirrored by a low in the north.
    A,
    /// A high and a low in each hemisphere, arranged as a checkerboard.
    B,
    /// Wind hotspots: two `u` sources in the south, two `v` sources in the north.
    C,
}

impl Preset {
    /// The sources this preset applies on an `n × n` grid.
    pub fn sources(self, n: usize) -> Vec<DiscSource> {
        let n = n as f64;
        let (low, mid, high) = (n / 4.0, n / 2.0, 3.0 * n / 4.0);
        let radius = (n / 20.0).max(1.0);
        let disc = |target, value, centre| DiscSource {
            target,
            value,
            centre,
            radius,
        };
        match self {
            Self::A => vec![
                disc(SourceTarget::Pressure, 5.0, (low, mid)),
                disc(SourceTarget::Pressure, -5.0, (high, mid)),
            ],
            Self::B => vec![
                disc(SourceTarget::Pressure, 5.0, (low, low)),
                disc(SourceTarget::Pressure, -5.0, (high, low)),
                disc(SourceTarget::Pressure, -5.0, (low, high)),
                disc(SourceTarget::Pressure, 5.0, (high, high)),
            ],
            Self::C => vec![
                disc(SourceTarget::VelocityU, 0.002, (low, low)),
                disc(SourceTarget::VelocityU, 0.002, (high, low)),
                disc(SourceTarget::VelocityV, 0.002, (low, high)),
                disc(SourceTarget::VelocityV, 0.002, (high, high)),
            ],
        }
    }
}
