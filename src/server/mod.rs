//! HTTP server rendering the routed pages

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::loader::{LoadState, RouteLoader, View};
use crate::render::Renderer;
use crate::routes::Route;
use crate::KnowledgeHub;

/// Server state
pub struct ServerState {
    loader: RouteLoader,
    renderer: Renderer,
}

impl ServerState {
    pub fn new(loader: RouteLoader, renderer: Renderer) -> Self {
        Self { loader, renderer }
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    let root = state.renderer.config().root.trim_end_matches('/').to_string();

    let pages = Router::new()
        .route("/", get(index_handler))
        .route("/articles", get(list_handler))
        .route("/articles/", get(list_handler))
        .route("/articles/:slug", get(detail_handler))
        .fallback(fallback_handler);

    let app = if root.is_empty() {
        pages
    } else {
        Router::new().nest(&root, pages).fallback(fallback_handler)
    };

    app.with_state(state).layer(TraceLayer::new_for_http())
}

/// Start the server
pub async fn start(hub: &KnowledgeHub, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::new(
        RouteLoader::new(hub.client()?),
        Renderer::new(hub.config.clone()),
    ));
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!(
        "http://{}:{}{}",
        ip,
        port,
        Route::ArticleList.href(&hub.config)
    );
    println!("Server running at {}", url);
    println!("Fetching content from {}", hub.config.api_url);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(state): State<Arc<ServerState>>) -> Redirect {
    Redirect::to(&Route::ArticleList.href(state.renderer.config()))
}

async fn list_handler(State(state): State<Arc<ServerState>>) -> Response {
    render_route(&state, &Route::ArticleList).await
}

async fn detail_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    render_route(&state, &Route::detail(slug)).await
}

async fn fallback_handler(State(state): State<Arc<ServerState>>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(state.renderer.render_unknown_route()),
    )
        .into_response()
}

/// Run the route's loader and render whatever it settled into
///
/// The response waits for the loader so its status reflects the outcome.
/// The pending view is only ever shown through [`Navigator`](crate::loader::Navigator).
async fn render_route(state: &ServerState, route: &Route) -> Response {
    let view = state.loader.load(route).await;
    let status = status_for(&view);
    (status, Html(state.renderer.render(&view))).into_response()
}

fn status_for(view: &View) -> StatusCode {
    let (not_found, error) = match view {
        View::List { state } => (
            matches!(state, LoadState::NotFound),
            matches!(state, LoadState::Error(_)),
        ),
        View::Detail { state, .. } => (
            matches!(state, LoadState::NotFound),
            matches!(state, LoadState::Error(_)),
        ),
    };

    if error {
        StatusCode::BAD_GATEWAY
    } else if not_found {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}
