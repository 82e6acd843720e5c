//! Per-field policy knobs for schema configuration.

/// Whether a field must be submitted for validation to pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldPresence {
    Required,
    #[default]
    Optional,
}

impl FieldPresence {
    pub fn is_required(self) -> bool {
        matches!(self, FieldPresence::Required)
    }
}

/// The lower bound an amount field accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AmountFloor {
    /// Zero and anything above it.
    #[default]
    ZeroAllowed,
    /// Strictly positive amounts only.
    PositiveOnly,
}

impl AmountFloor {
    /// Does this floor admit the given amount?
    pub fn admits(self, amount: f64) -> bool {
        match self {
            AmountFloor::ZeroAllowed => amount >= 0.0,
            AmountFloor::PositiveOnly => amount > 0.0,
        }
    }
}
