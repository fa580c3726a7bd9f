mod client;
mod config;
mod controller;
mod history;
mod types;

pub use client::{AskError, BotClient};
pub use config::{
    ConfigError, Position, WidgetConfig, ATTR_API_URL, ATTR_BOT_ID, ATTR_COLOR,
    ATTR_POSITION, DEFAULT_API_URL, DEFAULT_COLOR,
};
pub use controller::{Controller, FALLBACK_REPLY, GREETING};
pub use history::{History, HISTORY_LIMIT, MAX_EXCHANGES};
pub use types::{AskRequest, Message, Role};
