//! Strongly-typed identifiers: [`TickId`] and [`FieldName`].

use std::fmt;
use std::str::FromStr;

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step. Tick 0 is the
/// state before any tick has run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Names of the grid fields owned by a simulation's field store.
///
/// The string form (`"velocity-u"`, `"pressure"`, ...) is the key used by
/// persistence adapters and by snapshot consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    /// Wind velocity component along the first grid axis.
    VelocityU,
    /// Wind velocity component along the second grid axis.
    VelocityV,
    /// Air pressure.
    Pressure,
    /// First-axis component of the pressure-gradient forcing.
    PressureGradientU,
    /// Second-axis component of the pressure-gradient forcing.
    PressureGradientV,
    /// Coriolis acceleration added to `u` on the last tick (diagnostic).
    CoriolisU,
    /// Coriolis acceleration added to `v` on the last tick (diagnostic).
    CoriolisV,
}

impl FieldName {
    /// Every field name, in canonical order.
    pub const ALL: [FieldName; 7] = [
        FieldName::VelocityU,
        FieldName::VelocityV,
        FieldName::Pressure,
        FieldName::PressureGradientU,
        FieldName::PressureGradientV,
        FieldName::CoriolisU,
        FieldName::CoriolisV,
    ];

    /// The fields that make up the persisted world state.
    ///
    /// Includes the previous tick's pressure gradient, which the next
    /// sustained-forcing tick removes from the wind.
    pub const PERSISTED: [FieldName; 5] = [
        FieldName::VelocityU,
        FieldName::VelocityV,
        FieldName::Pressure,
        FieldName::PressureGradientU,
        FieldName::PressureGradientV,
    ];

    /// Stable string key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VelocityU => "velocity-u",
            Self::VelocityV => "velocity-v",
            Self::Pressure => "pressure",
            Self::PressureGradientU => "pressure-gradient-u",
            Self::PressureGradientV => "pressure-gradient-v",
            Self::CoriolisU => "coriolis-u",
            Self::CoriolisV => "coriolis-v",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised field name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFieldName(pub String);

impl fmt::Display for UnknownFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field name '{}'", self.0)
    }
}

impl std::error::Error for UnknownFieldName {}

impl FromStr for FieldName {
    type Err = UnknownFieldName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownFieldName(s.to_string()))
    }
}
