//! Emotion grid model and built-in default.
//!
//! # Responsibility
//! - Hold the 25 labeled cells plus the two axis captions.
//! - Validate grid shape for snapshots coming from storage.
//!
//! # Invariants
//! - Cell coordinates are never reassigned; edits touch label/color only.
//! - `EmotionMatrix::builtin()` is the only way to obtain a reset grid.

use crate::model::emotion::{in_grid, Emotion, GRID_SIZE};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

// Tables are row-major by energy (y), high energy first.
const ENGLISH_CELLS: [(&str, &str); CELL_COUNT] = [
    ("Stressed", "#e11d48"),
    ("Angry", "#dc2626"),
    ("Excited", "#f59e0b"),
    ("Enthusiastic", "#16a34a"),
    ("Elated", "#059669"),
    ("Anxious", "#ef4444"),
    ("Frustrated", "#f97316"),
    ("Energetic", "#84cc16"),
    ("Motivated", "#22c55e"),
    ("Joyful", "#10b981"),
    ("Worried", "#f97316"),
    ("Uneasy", "#eab308"),
    ("Neutral", "#6b7280"),
    ("Content", "#3b82f6"),
    ("Happy", "#06b6d4"),
    ("Sad", "#6366f1"),
    ("Disappointed", "#8b5cf6"),
    ("Relaxed", "#0ea5e9"),
    ("Satisfied", "#0284c7"),
    ("Pleased", "#0369a1"),
    ("Depressed", "#7c3aed"),
    ("Bored", "#8b5cf6"),
    ("Calm", "#6366f1"),
    ("Peaceful", "#4f46e5"),
    ("Serene", "#4338ca"),
];

const SPANISH_CELLS: [(&str, &str); CELL_COUNT] = [
    ("Estresado", "#e11d48"),
    ("Enfurecido", "#dc2626"),
    ("Nervioso", "#f59e0b"),
    ("Entusiasmado", "#16a34a"),
    ("Eufórico", "#059669"),
    ("Tenso", "#ef4444"),
    ("Irritado", "#f97316"),
    ("Indignado", "#84cc16"),
    ("Alegre", "#22c55e"),
    ("Encantado", "#10b981"),
    ("Molesto", "#f97316"),
    ("Confuso", "#eab308"),
    ("Neutral", "#6b7280"),
    ("Contento", "#3b82f6"),
    ("Feliz", "#06b6d4"),
    ("Triste", "#6366f1"),
    ("Decepcionado", "#8b5cf6"),
    ("Desganado", "#0ea5e9"),
    ("Satisfecho", "#0284c7"),
    ("Realizado", "#0369a1"),
    ("Deprimido", "#7c3aed"),
    ("Miserable", "#8b5cf6"),
    ("Desanimado", "#6366f1"),
    ("Confortable", "#4f46e5"),
    ("Tranquilo", "#4338ca"),
];

/// Which built-in table seeds and resets the grid.
///
/// The mobile build ships the Spanish grid, the browser build the English
/// one. Stored grids carry no tag, so switching UI language never swaps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultGrid {
    #[default]
    Spanish,
    English,
}

impl DefaultGrid {
    fn axes(self) -> (&'static str, &'static str) {
        match self {
            Self::Spanish => ("Placer", "Energía"),
            Self::English => ("Pleasure", "Energy"),
        }
    }

    fn cells(self) -> &'static [(&'static str, &'static str); CELL_COUNT] {
        match self {
            Self::Spanish => &SPANISH_CELLS,
            Self::English => &ENGLISH_CELLS,
        }
    }
}

/// Shape violations found when validating a grid snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixShapeError {
    WrongCellCount(usize),
    OutOfRange { x: u8, y: u8 },
    DuplicateCell { x: u8, y: u8 },
}

impl Display for MatrixShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongCellCount(count) => {
                write!(f, "grid must hold {CELL_COUNT} cells, found {count}")
            }
            Self::OutOfRange { x, y } => write!(f, "cell ({x}, {y}) is outside the grid"),
            Self::DuplicateCell { x, y } => write!(f, "cell ({x}, {y}) appears more than once"),
        }
    }
}

impl Error for MatrixShapeError {}

/// The 5x5 emotion grid with its axis captions.
///
/// Serialized as `{xAxis, yAxis, emotions}`; `xAxisLabel`/`yAxisLabel` are
/// accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionMatrix {
    #[serde(rename = "xAxis", alias = "xAxisLabel")]
    pub x_axis: String,
    #[serde(rename = "yAxis", alias = "yAxisLabel")]
    pub y_axis: String,
    pub emotions: Vec<Emotion>,
}

impl EmotionMatrix {
    /// Builds the built-in grid selected by `grid`.
    pub fn builtin(grid: DefaultGrid) -> Self {
        let (x_axis, y_axis) = grid.axes();
        let emotions = grid
            .cells()
            .iter()
            .enumerate()
            .map(|(index, (label, color))| {
                let x = (index % GRID_SIZE as usize) as u8;
                let y = (index / GRID_SIZE as usize) as u8;
                Emotion::new(x, y, *label, *color)
            })
            .collect();

        Self {
            x_axis: x_axis.to_string(),
            y_axis: y_axis.to_string(),
            emotions,
        }
    }

    /// Returns the cell at `(x, y)`, if any.
    pub fn emotion_at(&self, x: u8, y: u8) -> Option<&Emotion> {
        self.emotions.iter().find(|emotion| emotion.is_at(x, y))
    }

    /// Replaces label and color of the cell at `(x, y)`.
    ///
    /// Returns `false` when no cell matches; the grid is left untouched.
    pub fn set_cell(&mut self, x: u8, y: u8, label: String, color: String) -> bool {
        match self.emotions.iter_mut().find(|emotion| emotion.is_at(x, y)) {
            Some(cell) => {
                cell.label = label;
                cell.color = color;
                true
            }
            None => false,
        }
    }

    /// Checks full coverage: one cell for each of the 25 coordinates.
    pub fn validate(&self) -> Result<(), MatrixShapeError> {
        if self.emotions.len() != CELL_COUNT {
            return Err(MatrixShapeError::WrongCellCount(self.emotions.len()));
        }

        let mut seen = [false; CELL_COUNT];
        for emotion in &self.emotions {
            if !in_grid(emotion.x, emotion.y) {
                return Err(MatrixShapeError::OutOfRange {
                    x: emotion.x,
                    y: emotion.y,
                });
            }
            let slot = emotion.y as usize * GRID_SIZE as usize + emotion.x as usize;
            if seen[slot] {
                return Err(MatrixShapeError::DuplicateCell {
                    x: emotion.x,
                    y: emotion.y,
                });
            }
            seen[slot] = true;
        }

        Ok(())
    }
}

impl Default for EmotionMatrix {
    fn default() -> Self {
        Self::builtin(DefaultGrid::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultGrid, EmotionMatrix, MatrixShapeError};
    use crate::model::emotion::Emotion;

    #[test]
    fn builtin_grids_cover_every_cell_once() {
        for grid in [DefaultGrid::Spanish, DefaultGrid::English] {
            let grid = EmotionMatrix::builtin(grid);
            assert_eq!(grid.validate(), Ok(()));
            for y in 0..5 {
                for x in 0..5 {
                    let matches = grid.emotions.iter().filter(|e| e.is_at(x, y)).count();
                    assert_eq!(matches, 1, "cell ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn english_grid_places_known_labels() {
        let grid = EmotionMatrix::builtin(DefaultGrid::English);
        assert_eq!(grid.emotion_at(2, 2).unwrap().label, "Neutral");
        assert_eq!(grid.emotion_at(0, 0).unwrap().label, "Stressed");
        assert_eq!(grid.emotion_at(4, 4).unwrap().label, "Serene");
        assert_eq!(grid.emotion_at(4, 0).unwrap().color, "#059669");
        assert_eq!(grid.x_axis, "Pleasure");
        assert_eq!(grid.y_axis, "Energy");
    }

    #[test]
    fn spanish_grid_is_the_default() {
        let grid = EmotionMatrix::default();
        assert_eq!(grid, EmotionMatrix::builtin(DefaultGrid::Spanish));
        assert_eq!(grid.emotion_at(0, 0).unwrap().label, "Estresado");
        assert_eq!(grid.emotion_at(1, 0).unwrap().label, "Enfurecido");
        assert_eq!(grid.emotion_at(2, 2).unwrap().label, "Neutral");
        assert_eq!(grid.emotion_at(4, 4).unwrap().label, "Tranquilo");
        assert_eq!(grid.x_axis, "Placer");
        assert_eq!(grid.y_axis, "Energía");
    }

    #[test]
    fn builtin_grids_share_colors() {
        let spanish = EmotionMatrix::builtin(DefaultGrid::Spanish);
        let english = EmotionMatrix::builtin(DefaultGrid::English);
        for (es, en) in spanish.emotions.iter().zip(english.emotions.iter()) {
            assert_eq!((es.x, es.y, &es.color), (en.x, en.y, &en.color));
        }
    }

    #[test]
    fn set_cell_outside_grid_is_a_no_op() {
        let mut grid = EmotionMatrix::default();
        assert!(!grid.set_cell(7, 1, "Lost".to_string(), "#000000".to_string()));
        assert_eq!(grid, EmotionMatrix::default());
    }

    #[test]
    fn validate_reports_duplicates_and_gaps() {
        let mut grid = EmotionMatrix::default();
        grid.emotions[1] = Emotion::new(0, 0, "Again", "#fff");
        assert_eq!(
            grid.validate(),
            Err(MatrixShapeError::DuplicateCell { x: 0, y: 0 })
        );

        grid.emotions.pop();
        assert_eq!(grid.validate(), Err(MatrixShapeError::WrongCellCount(24)));
    }

    #[test]
    fn deserializes_long_axis_field_names() {
        let mut value = serde_json::to_value(EmotionMatrix::default()).unwrap();
        let object = value.as_object_mut().unwrap();
        let x_axis = object.remove("xAxis").unwrap();
        let y_axis = object.remove("yAxis").unwrap();
        object.insert("xAxisLabel".to_string(), x_axis);
        object.insert("yAxisLabel".to_string(), y_axis);

        let parsed: EmotionMatrix = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, EmotionMatrix::default());
    }
}
