//! Tab stop declarations.
use crate::parsers::{parse_tab_stop, run_parser};
use serde::{Deserialize, Deserializer, Serialize, de};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum TabAlignment {
    #[default]
    Left,
    Right,
    Center,
    /// Aligns the first occurrence of the anchor character with the stop.
    Anchor,
}

/// The pattern drawn across the gap a tab leaves behind.
///
/// Layout never interprets a leader; it is carried along with the stop for the renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Leader {
    Dots,
    Dashes,
    Line,
    Glyph(char),
}

pub const DEFAULT_ANCHOR_CHAR: char = '.';

fn default_anchor_char() -> char {
    DEFAULT_ANCHOR_CHAR
}

/// A parsed tab stop declaration such as `"144pt anchor ','"`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabStopSpec {
    pub position: f32,
    pub alignment: TabAlignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader: Option<Leader>,
    pub anchor_char: char,
}

impl TabStopSpec {
    pub fn new(position: f32, alignment: TabAlignment) -> Self {
        Self {
            position,
            alignment,
            leader: None,
            anchor_char: DEFAULT_ANCHOR_CHAR,
        }
    }
}

impl<'de> Deserialize<'de> for TabStopSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum TabStopDef {
            Str(String),
            #[serde(rename_all = "camelCase")]
            Map {
                position: f32,
                #[serde(default)]
                alignment: TabAlignment,
                #[serde(default)]
                leader: Option<Leader>,
                #[serde(default = "default_anchor_char")]
                anchor_char: char,
            },
        }

        match TabStopDef::deserialize(deserializer)? {
            TabStopDef::Str(s) => run_parser(parse_tab_stop, &s).map_err(de::Error::custom),
            TabStopDef::Map {
                position,
                alignment,
                leader,
                anchor_char,
            } => Ok(TabStopSpec {
                position,
                alignment,
                leader,
                anchor_char,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_string_and_map_forms() {
        let stops: Vec<TabStopSpec> = serde_json::from_str(
            r#"["1in right", {"position": 144, "alignment": "anchor", "anchorChar": ","}]"#,
        )
        .unwrap();

        assert_eq!(stops[0], TabStopSpec::new(72.0, TabAlignment::Right));
        assert_eq!(stops[1].position, 144.0);
        assert_eq!(stops[1].alignment, TabAlignment::Anchor);
        assert_eq!(stops[1].anchor_char, ',');
        assert_eq!(stops[1].leader, None);
    }

    #[test]
    fn test_deserialize_rejects_bad_declaration() {
        let result: Result<TabStopSpec, _> = serde_json::from_str(r#""far right""#);
        assert!(result.is_err());
    }
}
