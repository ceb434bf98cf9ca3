//! Declarative widget configuration.
//!
//! A [`SelectConfig`] describes one widget instance: its mode, placeholder,
//! options and initial value. It loads from TOML or JSON:
//!
//! ```toml
//! multiple = true
//! placeholder = "Pick some"
//! value = [1]
//!
//! [[options]]
//! label = "First"
//! value = 1
//!
//! [[options]]
//! label = "Second"
//! value = "second"
//! ```
//!
//! Initial values are given by key and resolved against the options when
//! the widget is built.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use horizon_select_core::PerfSpan;
use horizon_select_core::logging::targets;

use crate::error::{Result, SelectError};
use crate::option::{OptionKey, SelectOption, position_of};
use crate::selection::{SelectedValue, SelectionMode};
use crate::widget::Select;

/// Configuration for one widget instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Allow more than one selection.
    pub multiple: bool,
    /// Text shown when nothing is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Keys of the initially selected options, in selection order.
    pub value: Vec<OptionKey>,
    /// The options offered.
    pub options: Vec<SelectOption>,
}

impl SelectConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| SelectError::config_parse("TOML", e.to_string()))
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| SelectError::config_parse("JSON", e.to_string()))
    }

    /// Read a configuration file, choosing the format by extension
    /// (`.toml` or `.json`).
    #[tracing::instrument(
        target = "horizon_select::config",
        level = "debug",
        skip_all,
        fields(path = %path.as_ref().display())
    )]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(SelectError::UnsupportedConfigFormat(path.to_path_buf())),
        };

        let content = std::fs::read_to_string(path).map_err(|e| SelectError::io(path, e))?;
        let config = parse(&content)?;
        tracing::debug!(
            target: targets::CONFIG,
            options = config.options.len(),
            multiple = config.multiple,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| SelectError::config_parse("TOML", e.to_string()))
    }

    /// The configured mode.
    pub fn mode(&self) -> SelectionMode {
        SelectionMode::from_multiple(self.multiple)
    }

    /// Resolve the configured value keys against the options.
    pub fn initial_value(&self) -> Result<SelectedValue> {
        let mode = self.mode();
        if mode == SelectionMode::Single && self.value.len() > 1 {
            return Err(SelectError::mode_mismatch(
                SelectionMode::Single,
                SelectionMode::Multiple,
            ));
        }

        let selected = self
            .value
            .iter()
            .map(|key| {
                position_of(&self.options, key)
                    .map(|index| self.options[index].clone())
                    .ok_or_else(|| SelectError::UnknownOptionKey(key.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(match mode {
            SelectionMode::Single => SelectedValue::Single(selected.into_iter().next()),
            SelectionMode::Multiple => SelectedValue::multiple(selected),
        })
    }

    /// Build a widget from this configuration.
    ///
    /// Options sharing a key are kept but logged, since they are the same
    /// option for selection purposes.
    pub fn build(&self) -> Result<Select> {
        let _perf = PerfSpan::new("config_build");
        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(&option.value) {
                tracing::warn!(
                    target: targets::CONFIG,
                    key = %option.value,
                    label = %option.label,
                    "duplicate option key"
                );
            }
        }

        let mut select = Select::new(self.mode())
            .with_options(self.options.clone())
            .with_value(self.initial_value()?)?;
        if let Some(placeholder) = &self.placeholder {
            select.set_placeholder(placeholder.clone());
        }
        Ok(select)
    }
}
