use std::net::SocketAddr;

use anyhow::{anyhow, Result};
use dotenvy::dotenv;

use crate::widget_core::DEFAULT_API_URL;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3030";

/// Widget host server settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub listen_addr: SocketAddr,
    /// Public `host:port` browsers use to reach this server.
    pub reachable_addr: String,
    /// Bot API base URLs widgets may relay to. The relay runs on this server,
    /// so anything else is refused.
    pub allowed_api_urls: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        dotenv().ok();
        Settings::from_vars(
            std::env::var("LISTEN_ADDR").ok(),
            std::env::var("REACHABLE_ADDR").ok(),
            std::env::var("ALLOWED_API_URLS").ok(),
        )
    }

    fn from_vars(
        listen_addr: Option<String>,
        reachable_addr: Option<String>,
        allowed_api_urls: Option<String>,
    ) -> Result<Settings> {
        let listen_addr = listen_addr
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen: SocketAddr = listen_addr
            .trim()
            .parse()
            .map_err(|err| anyhow!("LISTEN_ADDR {listen_addr:?} is not a socket address: {err}"))?;

        let reachable_addr = reachable_addr
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| listen.to_string());

        // comma separated, defaults to the widget's own default API
        let mut allowed: Vec<String> = allowed_api_urls
            .unwrap_or_default()
            .split(',')
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .collect();
        if allowed.is_empty() {
            allowed.push(DEFAULT_API_URL.to_string());
        }

        Ok(Settings {
            listen_addr: listen,
            reachable_addr,
            allowed_api_urls: allowed,
        })
    }

    pub fn origin(&self) -> String {
        format!("http://{}", self.reachable_addr)
    }

    pub fn socket_origin(&self) -> String {
        format!("ws://{}", self.reachable_addr)
    }

    /// Exact match against a normalized (no trailing `/`) base URL.
    pub fn allows_api_url(&self, api_url: &str) -> bool {
        self.allowed_api_urls.iter().any(|allowed| allowed == api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_vars(None, None, None).unwrap();
        assert_eq!(settings.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
        assert_eq!(settings.reachable_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(settings.origin(), "http://127.0.0.1:3030");
        assert_eq!(settings.socket_origin(), "ws://127.0.0.1:3030");
        assert_eq!(settings.allowed_api_urls, vec![DEFAULT_API_URL.to_string()]);
    }

    #[test]
    fn test_reachable_override() {
        let settings = Settings::from_vars(
            Some("0.0.0.0:8000".into()),
            Some("chat.example.com/".into()),
            None,
        )
        .unwrap();
        assert_eq!(settings.listen_addr.port(), 8000);
        assert_eq!(settings.origin(), "http://chat.example.com");
    }

    #[test]
    fn test_allowed_api_urls() {
        let settings = Settings::from_vars(
            None,
            None,
            Some(" https://bots.example.com/ , ,http://10.0.0.2:8080".into()),
        )
        .unwrap();
        assert_eq!(
            settings.allowed_api_urls,
            vec!["https://bots.example.com", "http://10.0.0.2:8080"]
        );
        assert!(settings.allows_api_url("https://bots.example.com"));
        assert!(!settings.allows_api_url(DEFAULT_API_URL));
        assert!(!settings.allows_api_url("https://bots.example.com.evil.net"));
    }

    #[test]
    fn test_bad_listen_addr() {
        let err = Settings::from_vars(Some("nowhere".into()), None, None).unwrap_err();
        assert!(err.to_string().contains("LISTEN_ADDR"));
    }
}
