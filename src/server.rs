//! HTTP server for the site.
//!
//! # Routes
//!
//! - `GET /` - Redirect to the default locale
//! - `GET /health` - Health check
//! - `GET /{locale}` - Home page
//! - `GET /{locale}/{tools,about,faq,privacy,terms}` - Static pages
//! - `GET /{locale}/contact` - Contact page (`?qr=slug` opens a QR overlay)
//! - `POST /{locale}/contact` - Contact form submission (urlencoded)
//! - `POST /api/contact` - Contact form submission (JSON)
//!
//! Unknown locales and paths render the not-found page.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::contact::{
    self, contact_methods, find_qr, ContactForm, ContactView, FormData, FormError, FormNotice,
    FormStatus, FormSubmitRelay, MailRelay, QrOverlay,
};
use crate::i18n::Locale;
use crate::in_app::InAppDetector;
use crate::pages::StaticPage;
use crate::scroll_lock::BodyScroll;
use crate::shell::{self, PageContext};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    relay: Arc<dyn MailRelay>,
    detector: Arc<InAppDetector>,
}

impl AppState {
    /// State with the formsubmit relay and the WeChat detector.
    pub fn new(config: Config) -> Result<Self> {
        let relay = FormSubmitRelay::from_config(&config)?;
        info!("Contact relay endpoint: {}", relay.url());
        Ok(Self::with_relay(config, Arc::new(relay)))
    }

    pub fn with_relay(config: Config, relay: Arc<dyn MailRelay>) -> Self {
        Self {
            config: Arc::new(config),
            relay,
            detector: Arc::new(InAppDetector::default()),
        }
    }

    pub fn with_detector(mut self, detector: InAppDetector) -> Self {
        self.detector = Arc::new(detector);
        self
    }

    fn page_context(&self, locale: &str, headers: &HeaderMap) -> Option<PageContext> {
        PageContext::resolve(locale)
            .ok()
            .map(|ctx| ctx.with_user_agent(&self.detector, user_agent(headers)))
    }

    fn not_found(&self, locale: &str, headers: &HeaderMap) -> Response {
        (
            StatusCode::NOT_FOUND,
            shell::render_not_found(locale, &self.detector, user_agent(headers)),
        )
            .into_response()
    }
}

fn user_agent(headers: &HeaderMap) -> Option<&str> {
    headers.get(USER_AGENT).and_then(|value| value.to_str().ok())
}

// ============================================================================
// Page Handlers
// ============================================================================

async fn root_redirect() -> Redirect {
    Redirect::temporary(&format!("/{}", Locale::default_locale().code()))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn static_page(
    state: &AppState,
    locale: &str,
    headers: &HeaderMap,
    page: StaticPage,
) -> Response {
    let Some(ctx) = state.page_context(locale, headers) else {
        return state.not_found(locale, headers);
    };
    let meta = page.meta(&ctx);
    let body = BodyScroll::new();
    shell::render(&ctx, &state.detector, &meta, &body, page.content(&ctx)).into_response()
}

async fn home_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    headers: HeaderMap,
) -> Response {
    static_page(&state, &locale, &headers, StaticPage::Home)
}

async fn tools_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    headers: HeaderMap,
) -> Response {
    static_page(&state, &locale, &headers, StaticPage::Tools)
}

async fn about_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    headers: HeaderMap,
) -> Response {
    static_page(&state, &locale, &headers, StaticPage::About)
}

async fn faq_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    headers: HeaderMap,
) -> Response {
    static_page(&state, &locale, &headers, StaticPage::Faq)
}

async fn privacy_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    headers: HeaderMap,
) -> Response {
    static_page(&state, &locale, &headers, StaticPage::Privacy)
}

async fn terms_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    headers: HeaderMap,
) -> Response {
    static_page(&state, &locale, &headers, StaticPage::Terms)
}

#[derive(Debug, Default, Deserialize)]
struct ContactQuery {
    qr: Option<String>,
}

async fn contact_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    Query(query): Query<ContactQuery>,
    headers: HeaderMap,
) -> Response {
    let Some(ctx) = state.page_context(&locale, &headers) else {
        return state.not_found(&locale, &headers);
    };

    let methods = contact_methods(&state.config, ctx.messages);
    let mut overlay = QrOverlay::new();
    if let Some(method) = query.qr.as_deref().and_then(|slug| find_qr(&methods, slug)) {
        overlay.open_method(method);
    }

    let form = ContactForm::new();
    let view = ContactView {
        methods: &methods,
        form: &form,
        overlay: &overlay,
        notice: None,
    };
    contact::render_contact(&ctx, &state.detector, &view).into_response()
}

async fn contact_submit(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    headers: HeaderMap,
    Form(data): Form<FormData>,
) -> Response {
    let Some(ctx) = state.page_context(&locale, &headers) else {
        return state.not_found(&locale, &headers);
    };

    let mut form = ContactForm::with_data(data);
    let (status, notice) = match contact::submit_form(&mut form, state.relay.as_ref()).await {
        Ok(FormStatus::Success) => (StatusCode::OK, None),
        Ok(_) => (StatusCode::BAD_GATEWAY, None),
        Err(_) => (StatusCode::UNPROCESSABLE_ENTITY, Some(FormNotice::MissingFields)),
    };

    let methods = contact_methods(&state.config, ctx.messages);
    let overlay = QrOverlay::new();
    let view = ContactView {
        methods: &methods,
        form: &form,
        overlay: &overlay,
        notice,
    };
    (status, contact::render_contact(&ctx, &state.detector, &view)).into_response()
}

// ============================================================================
// JSON API
// ============================================================================

#[derive(Debug, Serialize)]
struct SubmitResponse {
    status: FormStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<&'static str>,
}

async fn api_contact(State(state): State<AppState>, Json(data): Json<FormData>) -> Response {
    let mut form = ContactForm::with_data(data);
    match contact::submit_form(&mut form, state.relay.as_ref()).await {
        Ok(FormStatus::Success) => Json(SubmitResponse {
            status: FormStatus::Success,
            missing: None,
        })
        .into_response(),
        Ok(status) => (
            StatusCode::BAD_GATEWAY,
            Json(SubmitResponse { status, missing: None }),
        )
            .into_response(),
        Err(FormError::MissingField(field)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubmitResponse {
                status: form.status(),
                missing: Some(field.as_str()),
            }),
        )
            .into_response(),
        Err(_) => (
            StatusCode::CONFLICT,
            Json(SubmitResponse {
                status: form.status(),
                missing: None,
            }),
        )
            .into_response(),
    }
}

async fn fallback(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    state.not_found(first_segment(uri.path()), &headers)
}

fn first_segment(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or_default()
}

// ============================================================================
// Router Setup
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health_check))
        .route("/api/contact", post(api_contact))
        .route("/:locale", get(home_page))
        .route("/:locale/tools", get(tools_page))
        .route("/:locale/about", get(about_page))
        .route("/:locale/faq", get(faq_page))
        .route("/:locale/privacy", get(privacy_page))
        .route("/:locale/terms", get(terms_page))
        .route("/:locale/contact", get(contact_page).post(contact_submit))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_router(AppState::new(config)?);

    info!("Starting PDFCraft site on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(user_agent(&headers), None);

        headers.insert(USER_AGENT, "MicroMessenger/8.0".parse().unwrap());
        assert_eq!(user_agent(&headers), Some("MicroMessenger/8.0"));
    }

    #[test]
    fn test_first_segment() {
        assert_eq!(first_segment("/zh/pricing"), "zh");
        assert_eq!(first_segment("/en"), "en");
        assert_eq!(first_segment("/"), "");
    }

    #[test]
    fn test_submit_response_serialization() {
        let json = serde_json::to_value(SubmitResponse {
            status: FormStatus::Idle,
            missing: Some("email"),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"status": "idle", "missing": "email"}));

        let json = serde_json::to_value(SubmitResponse {
            status: FormStatus::Error,
            missing: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"status": "error"}));
    }
}
