use std::collections::BTreeMap;

use log::debug;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use super::Position;
use crate::core::*;

/******************************************\
|==========================================|
|            Validate Position             |
|==========================================|
\******************************************/

impl Position {
    /// Builds a position from square/code string pairs, checking every entry
    ///
    /// Keys must match `^[a-h][1-8]$`, values `^[bw][KQRNBP]$` or one of the
    /// placeholder glyphs. A later pair for the same square overwrites an earlier one.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, PositionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut position = Position::new();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());

            let square = key
                .parse::<Square>()
                .map_err(|_| PositionError::InvalidSquare(key.to_string()))?;
            let code = value
                .parse::<PieceCode>()
                .map_err(|_| PositionError::InvalidPieceCode {
                    square: key.to_string(),
                    code: value.to_string(),
                })?;

            position.set(square, code);
        }

        Ok(position)
    }

    /// Builds a position from a JSON object such as `{"e4": "wP"}`
    pub fn from_value(value: &Value) -> Result<Self, PositionError> {
        let Value::Object(map) = value else {
            return Err(PositionError::NotAMapping);
        };

        let mut pairs = Vec::with_capacity(map.len());
        for (key, code) in map {
            let code = code.as_str().ok_or_else(|| PositionError::InvalidPieceCode {
                square: key.clone(),
                code: code.to_string(),
            })?;
            pairs.push((key.as_str(), code));
        }

        Self::from_pairs(pairs)
    }
}

pub fn is_valid_position(value: &Value) -> bool {
    match Position::from_value(value) {
        Ok(_) => true,
        Err(err) => {
            debug!("rejected position object: {err}");
            false
        }
    }
}

/******************************************\
|==========================================|
|                  Serde                   |
|==========================================|
\******************************************/

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (square, code) in self.iter() {
            map.serialize_entry(&square, &code)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = BTreeMap::<String, String>::deserialize(deserializer)?;
        Position::from_pairs(pairs).map_err(serde::de::Error::custom)
    }
}

/******************************************\
|==========================================|
|          Position Parse Errors           |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Position must be a mapping from squares to piece codes")]
    NotAMapping,

    #[error("Invalid square in position: '{0}', expected 'a1'-'h8'")]
    InvalidSquare(String),

    #[error("Invalid piece code on {square}: {code}")]
    InvalidPieceCode { square: String, code: String },
}
