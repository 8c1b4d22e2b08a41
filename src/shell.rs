//! Locale-aware page shell.
//!
//! Every page goes through `PageContext::resolve`, which is the routing
//! boundary for locales: unsupported codes become `ShellError::NotFound`
//! and never reach content rendering. The shell then wraps page content
//! with the document head, navigation, footer and the in-app browser guard.

use chrono::Datelike;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use thiserror::Error;
use tracing::debug;

use crate::i18n::{Locale, Messages, TextDirection, UnsupportedLocale};
use crate::in_app::{self, InAppDetector};
use crate::metadata::{self, PageMeta};
use crate::scroll_lock::BodyScroll;
use crate::site::{locale_href, NAV, SITE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("no pages for locale '{0}'")]
    NotFound(String),
}

impl From<UnsupportedLocale> for ShellError {
    fn from(err: UnsupportedLocale) -> Self {
        ShellError::NotFound(err.0)
    }
}

/// Everything page content needs for one render.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    pub locale: Locale,
    pub direction: TextDirection,
    pub messages: &'static Messages,
    /// Request came from a detected in-app browser
    pub in_app: bool,
}

impl PageContext {
    /// Validate a locale path segment.
    pub fn resolve(locale_param: &str) -> Result<Self, ShellError> {
        let locale = Locale::from_code(locale_param).map_err(|e| {
            debug!("Rejected locale segment: {}", e);
            ShellError::from(e)
        })?;
        Ok(Self::for_locale(locale))
    }

    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            direction: locale.direction(),
            messages: locale.messages(),
            in_app: false,
        }
    }

    /// Mark the context when the client identifies as an in-app browser.
    pub fn with_user_agent(mut self, detector: &InAppDetector, user_agent: Option<&str>) -> Self {
        self.in_app = user_agent.is_some_and(|ua| detector.is_in_app(ua));
        self
    }

    pub fn href(&self, path: &str) -> String {
        locale_href(self.locale, path)
    }
}

/// Render a full document around `content`.
///
/// When the in-app overlay is shown the body stays scroll-locked for the
/// duration of the render, so the emitted `<body>` carries the lock style.
pub fn render(
    ctx: &PageContext,
    detector: &InAppDetector,
    meta: &PageMeta,
    body: &BodyScroll,
    content: Markup,
) -> Markup {
    let _in_app_lock = ctx.in_app.then(|| body.lock());
    let messages = ctx.messages;
    let year = chrono::Utc::now().year();

    html! {
        (DOCTYPE)
        html lang=(ctx.locale.code()) dir=(ctx.direction.as_str()) {
            head {
                (metadata::head(ctx.locale, meta))
                style { (PreEscaped(SITE_CSS)) }
            }
            body style=[body.style()] {
                div class="shell" lang=(ctx.locale.code()) dir=(ctx.direction.as_str()) {
                    a class="skip-link" href="#main-content" { (messages.common.skip_link) }
                    (header(ctx, meta.path))
                    main id="main-content" class="main" {
                        (content)
                    }
                    (footer(ctx, year))
                    @if ctx.in_app {
                        (in_app::overlay_markup(&messages.in_app))
                    }
                    (in_app::guard_script(detector, &messages.in_app))
                }
            }
        }
    }
}

/// Not-found page.
///
/// Rendered in `locale_param` when it is supported and in the default
/// locale otherwise, the same fallback the home metadata uses.
pub fn render_not_found(
    locale_param: &str,
    detector: &InAppDetector,
    user_agent: Option<&str>,
) -> Markup {
    let (locale, home) = PageMeta::home(locale_param);
    let ctx = PageContext::for_locale(locale).with_user_agent(detector, user_agent);
    let strings = &ctx.messages.common;
    let meta = PageMeta {
        title: strings.not_found_title.to_string(),
        ..home
    };

    let content = html! {
        section class="hero" {
            div class="container narrow center" {
                h1 { (strings.not_found_title) }
                p class="muted" { (strings.not_found_body) }
                a class="button outline" href=(ctx.href("/")) { (strings.not_found_link) }
            }
        }
    };

    render(&ctx, detector, &meta, &BodyScroll::new(), content)
}

fn header(ctx: &PageContext, path: &str) -> Markup {
    let messages = ctx.messages;
    html! {
        header class="site-header" {
            div class="container header-row" {
                a class="brand" href=(ctx.href("/")) { (messages.common.brand) }
                nav class="main-nav" {
                    @for item in NAV.main_nav {
                        a href=(item.href_for(ctx.locale)) { (item.title(messages)) }
                    }
                }
                nav class="locale-switch" aria-label=(messages.common.language_label) {
                    @for locale in Locale::all() {
                        @if locale == ctx.locale {
                            span aria-current="true" { (locale.native_name()) }
                        } @else {
                            a href=(locale_href(locale, path)) hreflang=(locale.code())
                                title=(locale.name()) {
                                (locale.native_name())
                            }
                        }
                    }
                }
            }
        }
    }
}

fn footer(ctx: &PageContext, year: i32) -> Markup {
    let messages = ctx.messages;
    html! {
        footer class="site-footer" {
            div class="container footer-row" {
                nav class="footer-nav" {
                    @for item in NAV.footer_nav {
                        a href=(item.href_for(ctx.locale)) { (item.title(messages)) }
                    }
                }
                div class="social" {
                    a href=(SITE.links.github) rel="noopener" { "GitHub" }
                    a href=(SITE.links.twitter) rel="noopener" { "Twitter" }
                }
                p class="muted" { (messages.footer_rights(year)) }
            }
        }
    }
}

const SITE_CSS: &str = r#"
*,*::before,*::after{box-sizing:border-box}
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,Helvetica,Arial,sans-serif;color:#0f172a;background:#fff;line-height:1.5}
a{color:inherit}
.shell{min-height:100vh;display:flex;flex-direction:column}
.skip-link{position:absolute;left:-9999px}
.skip-link:focus{left:1rem;top:1rem;background:#fff;padding:.5rem 1rem;z-index:100}
.container{max-width:64rem;margin:0 auto;padding:0 1rem}
.narrow{max-width:42rem}
.center{text-align:center}
.muted{color:#64748b}
.main{flex:1}
.site-header,.site-footer{border-color:#e2e8f0;border-style:solid;border-width:0}
.site-header{border-bottom-width:1px}
.site-footer{border-top-width:1px;padding:2rem 0}
.header-row,.footer-row{display:flex;flex-wrap:wrap;gap:1rem;align-items:center;justify-content:space-between;padding-top:1rem;padding-bottom:1rem}
.brand{font-weight:700;font-size:1.25rem;text-decoration:none}
.main-nav a,.footer-nav a,.social a,.locale-switch a,.locale-switch span{margin-inline-end:1rem;text-decoration:none}
.locale-switch span{font-weight:600}
.hero{background:#f8fafc;padding:3rem 0}
.section{padding:3rem 0}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:1.5rem}
.card{display:flex;flex-direction:column;align-items:center;text-align:center;padding:1.5rem;border:1px solid #e2e8f0;border-radius:.75rem;background:#fff;text-decoration:none;font:inherit;color:inherit;cursor:pointer;width:100%}
.card .icon{width:1.5rem;height:1.5rem;color:#2563eb}
.card .action{margin-top:auto;color:#2563eb;font-weight:500}
.panel{border:1px solid #e2e8f0;border-radius:.75rem;background:#fff;padding:2rem}
.field{margin-bottom:1.5rem}
.field label{display:block;font-weight:500;margin-bottom:.5rem}
.field input,.field select,.field textarea{width:100%;padding:.5rem 1rem;border:1px solid #e2e8f0;border-radius:.5rem;font:inherit}
.field textarea{resize:none}
.field-row{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:1.5rem}
.button{display:inline-flex;align-items:center;justify-content:center;gap:.5rem;padding:.6rem 1.2rem;border-radius:.5rem;border:1px solid #2563eb;background:#2563eb;color:#fff;font:inherit;text-decoration:none;cursor:pointer}
.button.outline{background:transparent;color:#2563eb}
.button.full{width:100%}
.button[disabled]{opacity:.6;cursor:not-allowed}
.button .icon{width:1rem;height:1rem}
.alert{display:flex;gap:.5rem;align-items:center;padding:1rem;border-radius:.5rem;margin-bottom:1.5rem}
.alert.error{background:#fef2f2;border:1px solid #fecaca;color:#b91c1c}
.alert.warning{background:#fffbeb;border:1px solid #fde68a;color:#92400e}
.alert .icon{width:1.25rem;height:1.25rem;flex-shrink:0}
.success .icon{width:2rem;height:2rem;color:#16a34a}
.qr-layer{position:fixed;inset:0;z-index:50;display:flex;align-items:center;justify-content:center;padding:1rem}
.qr-backdrop{position:absolute;inset:0;background:rgba(0,0,0,.6)}
.qr-panel{position:relative;background:#fff;border-radius:.75rem;max-width:24rem;width:100%;padding:1.5rem;text-align:center}
.qr-close{position:absolute;top:1rem;inset-inline-end:1rem;color:#64748b}
.qr-close .icon{width:1.5rem;height:1.5rem}
.qr-image{width:12rem;height:12rem;object-fit:contain;border:1px solid #e2e8f0;border-radius:.5rem;padding:.5rem}
.faq-icon{width:3rem;height:3rem;color:#64748b}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const WECHAT_UA: &str = "Mozilla/5.0 (Linux; Android 13) MicroMessenger/8.0.40";
    const CHROME_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Chrome/120.0 Safari/537.36";

    fn render_simple(ctx: &PageContext) -> String {
        let meta = PageMeta::new("Test", "Test page", "/about");
        let content = html! { p { "content" } };
        render(ctx, &InAppDetector::wechat(), &meta, &BodyScroll::new(), content).into_string()
    }

    // ==================== Resolve Tests ====================

    #[test]
    fn test_resolve_supported_locale() {
        let ctx = PageContext::resolve("zh").expect("zh is supported");
        assert_eq!(ctx.locale, Locale::CHINESE);
        assert_eq!(ctx.direction, TextDirection::Ltr);
        assert_eq!(ctx.messages.common.nav_home, "首页");
        assert!(!ctx.in_app);
    }

    #[test]
    fn test_resolve_rtl_locale() {
        let ctx = PageContext::resolve("ar").unwrap();
        assert_eq!(ctx.direction, TextDirection::Rtl);
    }

    #[test]
    fn test_resolve_unsupported_is_not_found() {
        assert_eq!(
            PageContext::resolve("de").unwrap_err(),
            ShellError::NotFound("de".to_string())
        );
    }

    #[test]
    fn test_with_user_agent() {
        let detector = InAppDetector::wechat();
        let ctx = PageContext::for_locale(Locale::ENGLISH);

        assert!(ctx.with_user_agent(&detector, Some(WECHAT_UA)).in_app);
        assert!(!ctx.with_user_agent(&detector, Some(CHROME_UA)).in_app);
        assert!(!ctx.with_user_agent(&detector, None).in_app);
    }

    // ==================== Render Tests ====================

    #[test]
    fn test_render_sets_lang_and_dir() {
        let html = render_simple(&PageContext::for_locale(Locale::ARABIC));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains(r#"class="shell" lang="ar" dir="rtl""#));
    }

    #[test]
    fn test_render_includes_navigation_and_skip_link() {
        let html = render_simple(&PageContext::for_locale(Locale::ENGLISH));
        assert!(html.contains(r##"href="#main-content""##));
        assert!(html.contains(r#"id="main-content""#));
        assert!(html.contains(r#"href="/en/faq""#));
        assert!(html.contains(r#"href="/en/contact""#));
        assert!(html.contains(r#"href="/zh/about""#));
        assert!(html.contains("<p>content</p>"));
    }

    #[test]
    fn test_render_always_emits_guard_script() {
        let html = render_simple(&PageContext::for_locale(Locale::ENGLISH));
        assert!(html.contains("micromessenger"));
        assert!(!html.contains(r#"<div id="in-app-guard""#));
        assert!(!html.contains("overflow:hidden\""));
    }

    #[test]
    fn test_render_in_app_overlay_locks_body() {
        let ctx = PageContext::for_locale(Locale::CHINESE)
            .with_user_agent(&InAppDetector::wechat(), Some(WECHAT_UA));
        let body = BodyScroll::new();
        let meta = PageMeta::new("Test", "Test page", "/");

        let html = render(&ctx, &InAppDetector::wechat(), &meta, &body, html! {}).into_string();
        assert!(html.contains(r#"<body style="overflow:hidden">"#));
        assert!(html.contains(r#"<div id="in-app-guard""#));
        assert!(html.contains("如果您看到此页面"));
        // Lock released once rendering is done
        assert!(!body.is_locked());
    }

    #[test]
    fn test_not_found_page_unknown_locale_uses_default() {
        let html = render_not_found("fr", &InAppDetector::wechat(), None).into_string();
        assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
        assert!(html.contains("<title>Page not found | PDFCraft</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://pdf.iaas.eu.cc/en">"#));
    }

    #[test]
    fn test_not_found_page_keeps_supported_locale() {
        let html = render_not_found("ar", &InAppDetector::wechat(), None).into_string();
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains("الصفحة غير موجودة"));
    }
}
