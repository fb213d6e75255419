//! Single labeled cell of the pleasure/energy grid.

use serde::{Deserialize, Serialize};

/// Number of cells along each grid axis.
pub const GRID_SIZE: u8 = 5;

/// One labeled point in the grid.
///
/// `x` runs along the pleasure axis (0 = lowest), `y` along the energy axis
/// (0 = highest). Labels are not validated here; callers decide what an
/// acceptable label is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emotion {
    pub x: u8,
    pub y: u8,
    pub label: String,
    /// Display color, hex (`#rrggbb`) or a named color.
    pub color: String,
}

impl Emotion {
    pub fn new(x: u8, y: u8, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            color: color.into(),
        }
    }

    /// Returns whether this emotion sits at the given coordinate.
    pub fn is_at(&self, x: u8, y: u8) -> bool {
        self.x == x && self.y == y
    }
}

/// Returns whether `(x, y)` addresses a cell inside the grid.
pub fn in_grid(x: u8, y: u8) -> bool {
    x < GRID_SIZE && y < GRID_SIZE
}
