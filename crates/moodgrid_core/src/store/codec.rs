//! JSON document codec for persisted snapshots.

use crate::model::matrix::{EmotionMatrix, MatrixShapeError};
use crate::model::record::EmotionRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a persisted document could not be used.
#[derive(Debug)]
pub enum DecodeError {
    Json(serde_json::Error),
    Shape(MatrixShapeError),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed json: {err}"),
            Self::Shape(err) => write!(f, "malformed grid: {err}"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Shape(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<MatrixShapeError> for DecodeError {
    fn from(value: MatrixShapeError) -> Self {
        Self::Shape(value)
    }
}

/// Parses a grid snapshot and checks full 25-cell coverage.
pub fn decode_matrix(raw: &str) -> Result<EmotionMatrix, DecodeError> {
    let matrix: EmotionMatrix = serde_json::from_str(raw)?;
    matrix.validate()?;
    Ok(matrix)
}

/// Parses a newest-first record list.
pub fn decode_records(raw: &str) -> Result<Vec<EmotionRecord>, DecodeError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode_matrix(matrix: &EmotionMatrix) -> Result<String, serde_json::Error> {
    serde_json::to_string(matrix)
}

pub fn encode_records(records: &[EmotionRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(records)
}
