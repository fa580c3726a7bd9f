mod app;
mod components;
mod page;
pub mod server_liveview;
