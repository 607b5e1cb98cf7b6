use serde::{Deserialize, Serialize};

/// Visual weight of a tick, ordered from lightest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TickType {
    Pixel,
    StdTick,
    BigTick,
    StdLabel,
    BigLabel,
}

impl TickType {
    pub const ALL: [TickType; 5] = [
        TickType::Pixel,
        TickType::StdTick,
        TickType::BigTick,
        TickType::StdLabel,
        TickType::BigLabel,
    ];

    /// Label tiers carry text on the ruler.
    #[must_use]
    pub fn is_label(self) -> bool {
        matches!(self, TickType::StdLabel | TickType::BigLabel)
    }
}

/// One generated tick, valid for a single rendering pass.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualTick<V> {
    pub value: V,
    pub pixel_position: f64,
    pub tick_type: TickType,
    /// Empty when the tier has no format or its spacing is too dense to label.
    pub text: String,
}

impl<V> VisualTick<V> {
    #[must_use]
    pub fn has_label(&self) -> bool {
        !self.text.is_empty()
    }
}
