use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{ws::WebSocketUpgrade, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{error, info, warn};

use super::app::app;
use super::page;
use crate::settings::Settings;
use crate::widget_core::WidgetConfig;

struct WidgetServer {
    view: dioxus_liveview::LiveViewPool,
    settings: Settings,
}

type Shared = State<Arc<WidgetServer>>;
type Attributes = Query<HashMap<String, String>>;

pub fn router(settings: Settings) -> Router {
    let server = Arc::new(WidgetServer {
        view: dioxus_liveview::LiveViewPool::new(),
        settings,
    });

    Router::new()
        .route("/widget.js", get(loader))
        .route("/widget", get(widget_page))
        .route("/ws", get(widget_socket))
        .with_state(server)
}

async fn loader(State(server): Shared) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        page::loader_script(&server.settings.origin()),
    )
}

impl WidgetServer {
    /// Parses the forwarded attributes and refuses bot APIs outside the allowlist.
    fn admit(&self, attrs: &HashMap<String, String>) -> Result<WidgetConfig, Response> {
        let config = WidgetConfig::from_attributes(attrs).map_err(|err| {
            error!("widget refused: {err}");
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        })?;

        if !self.settings.allows_api_url(&config.api_url) {
            error!("widget refused: api url {} is not allowed", config.api_url);
            return Err((StatusCode::BAD_REQUEST, "data-api-url is not allowed").into_response());
        }

        Ok(config)
    }
}

async fn widget_page(State(server): Shared, Query(attrs): Attributes) -> Response {
    match server.admit(&attrs) {
        Ok(config) => {
            Html(page::widget_page(&config, &server.settings.socket_origin())).into_response()
        }
        Err(response) => response,
    }
}

async fn widget_socket(
    State(server): Shared,
    Query(attrs): Attributes,
    ws: WebSocketUpgrade,
) -> Response {
    let config = match server.admit(&attrs) {
        Ok(config) => config,
        Err(response) => return response,
    };

    info!("widget session for bot {}", config.bot_id);
    ws.on_upgrade(move |socket| async move {
        let launched = server
            .view
            .launch_with_props(dioxus_liveview::axum_socket(socket), app, config)
            .await;
        if let Err(err) = launched {
            warn!("widget session ended: {err:?}");
        }
    })
}

pub async fn serve(listener: TcpListener, settings: Settings) -> Result<()> {
    let app = router(settings);
    axum::Server::from_tcp(listener)?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn start_server() -> Result<()> {
    let settings = Settings::from_env()?;
    let listener = TcpListener::bind(settings.listen_addr)?;

    info!("Listening on http://{}", settings.listen_addr);
    info!(
        "Embed with <script src=\"{}/widget.js\" data-bot-id=\"...\"></script>",
        settings.origin()
    );

    serve(listener, settings).await
}
