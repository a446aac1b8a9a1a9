//! Field classification for boundary handling.

/// How a field's halo ring is derived from its interior.
///
/// Scalars mirror the adjacent interior value into the halo. Velocity
/// components additionally negate the mirrored value on the edges normal
/// to their own axis, which gives a reflective (no-flow) wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Plain copy on every edge (pressure, scratch fields).
    Scalar,
    /// First-axis velocity component: negated on the `i = 0` and `i = N+1` edges.
    XComponent,
    /// Second-axis velocity component: negated on the `j = 0` and `j = N+1` edges.
    YComponent,
}

impl BoundaryKind {
    /// Sign applied when mirroring into the `i` edges.
    pub fn x_edge_sign(self) -> f64 {
        match self {
            Self::XComponent => -1.0,
            Self::Scalar | Self::YComponent => 1.0,
        }
    }

    /// Sign applied when mirroring into the `j` edges.
    pub fn y_edge_sign(self) -> f64 {
        match self {
            Self::YComponent => -1.0,
            Self::Scalar | Self::XComponent => 1.0,
        }
    }
}
