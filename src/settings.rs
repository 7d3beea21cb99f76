// src/settings.rs
use crate::error::Error;
use lectern_layout::{LayoutConfig, NumberedList, TabSettings};
use lectern_style::ListStyle;
use serde::Deserialize;
use std::collections::HashMap;

// Everything a document needs to resolve tabs and label lists, loaded as one JSON object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypesetSettings {
    pub layout: LayoutConfig,
    /// Explicit tab stops. When absent, the grid from `layout.tabInterval` is used.
    pub tabs: Option<TabSettings>,
    pub list_styles: HashMap<String, ListStyle>,
}

impl TypesetSettings {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings: TypesetSettings = serde_json::from_str(json)?;
        log::debug!(
            "Loaded settings with {} list styles and {} tab stops",
            settings.list_styles.len(),
            settings.tabs.as_ref().map_or(0, |tabs| tabs.stops().len())
        );
        Ok(settings)
    }

    pub fn tab_settings(&self) -> Result<TabSettings, Error> {
        match &self.tabs {
            Some(tabs) => Ok(tabs.clone()),
            None => Ok(TabSettings::from_config(&self.layout)?),
        }
    }

    /// A new, empty list configured by the named list style.
    pub fn list(&self, name: &str) -> Result<NumberedList, Error> {
        let style = self
            .list_styles
            .get(name)
            .ok_or_else(|| Error::UnknownListStyle(name.to_string()))?;
        Ok(NumberedList::from_style(style)?)
    }
}
