use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

pub const ATTR_BOT_ID: &str = "data-bot-id";
pub const ATTR_API_URL: &str = "data-api-url";
pub const ATTR_POSITION: &str = "data-position";
pub const ATTR_COLOR: &str = "data-color";

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_COLOR: &str = "#3b82f6";

const MAX_COLOR_LEN: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("data-bot-id attribute is required")]
    MissingBotId,
    #[error("unknown position: {0}")]
    UnknownPosition(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom-right" => Ok(Position::BottomRight),
            "bottom-left" => Ok(Position::BottomLeft),
            "top-right" => Ok(Position::TopRight),
            "top-left" => Ok(Position::TopLeft),
            other => Err(ConfigError::UnknownPosition(other.to_string())),
        }
    }
}

/// Widget settings read once from the embedding tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub bot_id: String,
    pub api_url: String,
    pub position: Position,
    pub color: String,
}

impl WidgetConfig {
    pub fn new(bot_id: impl Into<String>) -> WidgetConfig {
        WidgetConfig {
            bot_id: bot_id.into(),
            api_url: DEFAULT_API_URL.to_string(),
            position: Position::default(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Empty attributes count as absent.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Result<WidgetConfig, ConfigError> {
        let get = |name: &str| {
            attrs
                .get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let bot_id = get(ATTR_BOT_ID).ok_or(ConfigError::MissingBotId)?;
        let mut config = WidgetConfig::new(bot_id);

        if let Some(api_url) = get(ATTR_API_URL) {
            config.api_url = api_url.trim_end_matches('/').to_string();
        }

        if let Some(position) = get(ATTR_POSITION) {
            match position.parse() {
                Ok(position) => config.position = position,
                Err(err) => warn!("{err}, using {}", config.position),
            }
        }

        if let Some(color) = get(ATTR_COLOR) {
            if is_safe_color(color) {
                config.color = color.to_string();
            } else {
                warn!("ignoring unsafe color value {color:?}");
            }
        }

        Ok(config)
    }

    pub fn ask_url(&self) -> String {
        format!("{}/api/bots/widget/ask", self.api_url)
    }
}

/// The color lands inside a `style` declaration, so it must not be able to end it.
fn is_safe_color(color: &str) -> bool {
    color.len() <= MAX_COLOR_LEN
        && !color
            .chars()
            .any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\'' | '\\') || c.is_control())
}
