use indoc::formatdoc;
use url::form_urlencoded;

use crate::utils::escape_html;
use crate::widget_core::{
    WidgetConfig, ATTR_API_URL, ATTR_BOT_ID, ATTR_COLOR, ATTR_POSITION,
};

static LOADER_JS: &str = include_str!("./loader.js");
static SHIM_JS: &str = include_str!("./shim.js");

/// The script host pages embed with `<script src=".../widget.js" data-bot-id=...>`.
pub fn loader_script(origin: &str) -> String {
    // a JSON string is a valid JS string literal
    let origin = serde_json::Value::from(origin).to_string();
    LOADER_JS.replace("__WIDGET_ORIGIN__", &origin)
}

/// Query string carrying a parsed config back to the server.
pub fn forward_query(config: &WidgetConfig) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(ATTR_BOT_ID, &config.bot_id)
        .append_pair(ATTR_API_URL, &config.api_url)
        .append_pair(ATTR_POSITION, config.position.as_str())
        .append_pair(ATTR_COLOR, &config.color)
        .finish()
}

/// Document loaded inside the embedding iframe.
pub fn widget_page(config: &WidgetConfig, socket_origin: &str) -> String {
    let socket_url = format!("{socket_origin}/ws?{}", forward_query(config));
    formatdoc!(
        r#"
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8">
                <title>{title} · Talkateeve</title>
                <meta name="viewport"
                content="width=device-width,
                initial-scale=1,
                minimum-scale=1,
                maximum-scale=1,
                user-scalable=no">
                <style>html, body {{ margin: 0; background: transparent; overflow: hidden; }}</style>
            </head>
            <body> <div id="main"></div> </body>
            {glue}
            <script>{shim}</script>
        </html>
        "#,
        title = escape_html(&config.bot_id),
        glue = dioxus_liveview::interpreter_glue(&socket_url),
        shim = SHIM_JS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget_core::Position;

    #[test]
    fn test_loader_origin_is_js_literal() {
        let script = loader_script("http://chat.example.com");
        assert!(script.contains(r#"var origin = "http://chat.example.com";"#));
        assert!(!script.contains("__WIDGET_ORIGIN__"));

        let hostile = loader_script(r#"x";alert(1);//"#);
        assert!(hostile.contains(r#"var origin = "x\";alert(1);//";"#));
    }

    #[test]
    fn test_forward_query_encodes() {
        let mut config = WidgetConfig::new("a b&c");
        config.position = Position::TopRight;
        let query = forward_query(&config);
        assert_eq!(
            query,
            "data-bot-id=a+b%26c&data-api-url=http%3A%2F%2Flocalhost%3A8080\
             &data-position=top-right&data-color=%233b82f6"
        );
    }

    #[test]
    fn test_widget_page_escapes_bot_id() {
        let config = WidgetConfig::new(r#"<script>alert("x")</script>"#);
        let page = widget_page(&config, "ws://127.0.0.1:3030");

        assert!(page.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; · Talkateeve"));
        assert!(!page.contains(r#"<script>alert("x")</script>"#));
        assert!(page.contains("ws://127.0.0.1:3030/ws?data-bot-id=%3Cscript%3E"));
        assert!(page.contains(r#"<div id="main"></div>"#));
        assert!(page.contains("MutationObserver"));
    }
}
