use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::DataError;

/// Direction the bands of a flag run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A color, written as an `[r, g, b]` triple in the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A glyph drawn over the center of the field (disc, star, cross, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Emblem {
    pub symbol: char,
    pub color: Rgb,
}

/// Banded rendition of one flag, as the terminal draws it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlagArt {
    pub orientation: Orientation,
    pub bands: Vec<Rgb>,
    #[serde(default)]
    pub emblem: Option<Emblem>,
}

/// All flag art, keyed by country code
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FlagStore {
    flags: BTreeMap<String, FlagArt>,
}

impl FlagStore {
    /// Parse a store from a JSON object of the form `{"FR": {...}, ...}`
    pub fn from_json_str(raw: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Art for a code. Failing here is this game's version of a flag
    /// image that would not load.
    pub fn art_for(&self, code: &str) -> Result<&FlagArt, DataError> {
        self.flags
            .get(code)
            .ok_or_else(|| DataError::MissingFlagError(code.to_string()))
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_store() {
        let raw = r#"{
            "FR": {"orientation": "vertical", "bands": [[0,85,164], [255,255,255], [239,65,53]]},
            "JP": {"orientation": "horizontal", "bands": [[255,255,255]],
                   "emblem": {"symbol": "●", "color": [188,0,45]}}
        }"#;
        let store = FlagStore::from_json_str(raw).unwrap();
        assert_eq!(store.len(), 2);

        let fr = store.art_for("FR").unwrap();
        assert_eq!(fr.orientation, Orientation::Vertical);
        assert_eq!(fr.bands.len(), 3);
        assert_eq!(fr.bands[0], Rgb(0, 85, 164));
        assert!(fr.emblem.is_none());

        let jp = store.art_for("JP").unwrap();
        assert_eq!(jp.orientation, Orientation::Horizontal);
        let emblem = jp.emblem.unwrap();
        assert_eq!(emblem.symbol, '\u{25cf}');
        assert_eq!(emblem.color, Rgb(188, 0, 45));
    }

    #[test]
    fn test_missing_code_is_an_error() {
        let store = FlagStore::from_json_str("{}").unwrap();
        assert!(matches!(
            store.art_for("FR"),
            Err(DataError::MissingFlagError(code)) if code == "FR"
        ));
    }
}
