//! Configuration management for the cuetint host layer.
//!
//! The engine itself is stateless; the only persisted state is this small
//! host-layer configuration with display and scanning defaults. It is
//! stored as JSON in the platform application data directory (see
//! [`crate::libs::data_storage`]) and every field is optional: a missing
//! file or a missing field falls back to built-in defaults, and CLI flags
//! override whatever the file says.
//!
//! ## Fields
//!
//! - `time_format` - default preset name (`"clock"` or `"verbose"`)
//! - `template` - custom three-slot template; takes precedence over the
//!   preset when present
//! - `strict` - report malformed timestamp ranges instead of skipping them
//!
//! `cuetint init` runs a small interactive wizard (dialoguer) that writes
//! this file.

use crate::libs::data_storage::DataStorage;
use crate::libs::formatter::TimeFormat;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Preset choices offered by the init wizard, in display order.
const FORMAT_CHOICES: [&str; 3] = ["clock", "verbose", "custom"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

impl Config {
    /// Reads the configuration file, returning defaults when it is absent.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        serde_json::to_writer_pretty(File::create(path)?, self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Interactive configuration wizard.
    pub fn init() -> Result<Self> {
        let theme = ColorfulTheme::default();

        let choice = Select::with_theme(&theme)
            .with_prompt(Message::PromptTimeFormat.to_string())
            .items(&FORMAT_CHOICES)
            .default(0)
            .interact()?;

        let (time_format, template) = if FORMAT_CHOICES[choice] == "custom" {
            let template: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptCustomTemplate.to_string())
                .with_initial_text("{h}:{m}:{s}")
                .interact_text()?;
            (None, Some(template))
        } else {
            (Some(FORMAT_CHOICES[choice].to_string()), None)
        };

        let strict = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptStrictMode.to_string())
            .default(false)
            .interact()?;

        Ok(Self {
            time_format,
            template,
            strict: Some(strict),
        })
    }

    /// Resolves the effective time format from CLI arguments and config.
    ///
    /// Precedence: CLI template, CLI preset, config template, config
    /// preset, built-in clock format. An unknown preset name in the config
    /// file produces a warning and falls through to the default.
    pub fn resolve_format(&self, cli_format: Option<TimeFormat>, cli_template: Option<String>) -> TimeFormat {
        if let Some(template) = cli_template {
            return TimeFormat::Custom(template);
        }
        if let Some(format) = cli_format {
            return format;
        }
        if let Some(template) = &self.template {
            return TimeFormat::Custom(template.clone());
        }
        if let Some(preset) = &self.time_format {
            return TimeFormat::from_preset(preset).unwrap_or_else(|| {
                msg_warning!(Message::UnknownFormatPreset(preset.clone()));
                TimeFormat::default()
            });
        }
        TimeFormat::default()
    }

    /// Effective strict flag: the CLI switch wins, then the config value.
    pub fn resolve_strict(&self, cli_strict: bool) -> bool {
        cli_strict || self.strict.unwrap_or(false)
    }
}
