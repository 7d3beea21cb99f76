use serde::{Deserialize, Deserializer, Serialize, de};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Black,
    Numeric(u16),
}

impl FontWeight {
    /// Returns the numeric weight value (100-900 scale).
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
            FontWeight::Numeric(n) => *n,
        }
    }
}

impl FromStr for FontWeight {
    type Err = String;

    /// Parse a font weight from a string (e.g., "bold", "400")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "thin" => Ok(FontWeight::Thin),
            "light" => Ok(FontWeight::Light),
            "regular" | "normal" => Ok(FontWeight::Regular),
            "medium" => Ok(FontWeight::Medium),
            "bold" => Ok(FontWeight::Bold),
            "black" => Ok(FontWeight::Black),
            _ => s
                .parse::<u16>()
                .map(FontWeight::Numeric)
                .map_err(|_| format!("Invalid font weight: '{}'", s)),
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => s.parse().map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::Numeric(n)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// The font a generated label or title is set in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Helvetica".to_string(),
            size: 12.0,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
        }
    }
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            ..Default::default()
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_weight_from_keyword_and_number() {
        assert_eq!("bold".parse::<FontWeight>(), Ok(FontWeight::Bold));
        assert_eq!("Normal".parse::<FontWeight>(), Ok(FontWeight::Regular));
        assert_eq!("650".parse::<FontWeight>(), Ok(FontWeight::Numeric(650)));
        assert!("heavy-ish".parse::<FontWeight>().is_err());
        assert_eq!(FontWeight::Numeric(650).numeric_value(), 650);
    }

    #[test]
    fn test_font_spec_deserializes_partial_json() {
        let spec: FontSpec = serde_json::from_str(r#"{"family": "Symbol", "weight": 700}"#).unwrap();
        assert_eq!(spec.family, "Symbol");
        assert_eq!(spec.size, 12.0);
        assert_eq!(spec.weight, FontWeight::Numeric(700));
        assert_eq!(spec.style, FontStyle::Normal);
    }
}
