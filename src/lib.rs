//! Embeddable chat widget served over dioxus liveview.
//!
//! Host pages add `<script src="{origin}/widget.js" data-bot-id="...">` and the
//! widget relays each message to `{apiUrl}/api/bots/widget/ask`.

mod frontend;
mod settings;
mod utils;
pub mod widget_core;

pub use frontend::server_liveview::{router, serve, start_server};
pub use settings::Settings;
