//! Display colours assigned to compared monitors.

/// Presentation-only colour tag. Has no effect on any calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DisplayColor {
    /// Human-readable colour name.
    pub name: &'static str,
    /// Fill colour as a hex string.
    pub fill: &'static str,
    /// Border colour as a hex string.
    pub border: &'static str,
}

/// Colours cycled through as monitors are added to a comparison.
pub const PALETTE: [DisplayColor; 6] = [
    DisplayColor {
        name: "Red",
        fill: "#dc2626",
        border: "#ef4444",
    },
    DisplayColor {
        name: "Green",
        fill: "#16a34a",
        border: "#22c55e",
    },
    DisplayColor {
        name: "Yellow",
        fill: "#ca8a04",
        border: "#eab308",
    },
    DisplayColor {
        name: "Blue",
        fill: "#2563eb",
        border: "#3b82f6",
    },
    DisplayColor {
        name: "Purple",
        fill: "#9333ea",
        border: "#a855f7",
    },
    DisplayColor {
        name: "Cyan",
        fill: "#0891b2",
        border: "#06b6d4",
    },
];

/// Colour for the monitor at `index` in a comparison, wrapping around the palette.
#[must_use]
pub fn color_for_index(index: usize) -> DisplayColor {
    PALETTE[index % PALETTE.len()]
}
