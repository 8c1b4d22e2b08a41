//! Document `<head>` metadata: title template, description, keywords,
//! canonical and alternate links, Open Graph and Twitter cards.

use maud::{html, Markup};

use crate::i18n::Locale;
use crate::site::{locale_href, SITE};

/// Per-page metadata input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Page title before the site template is applied
    pub title: String,
    pub description: String,
    /// Locale-relative path ("/" for the locale home)
    pub path: &'static str,
}

impl PageMeta {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        path: &'static str,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            path,
        }
    }

    /// Home page metadata for a raw locale parameter.
    ///
    /// Unlike page routing, an unknown locale falls back to the default
    /// locale here instead of failing.
    pub fn home(locale_param: &str) -> (Locale, PageMeta) {
        let locale = Locale::from_code_or_default(locale_param);
        let strings = &locale.messages().metadata;
        let meta = PageMeta::new(strings.home_title, strings.home_description, "/");
        (locale, meta)
    }

    pub fn full_title(&self) -> String {
        SITE.page_title(&self.title)
    }
}

pub fn head(locale: Locale, meta: &PageMeta) -> Markup {
    let title = meta.full_title();
    let canonical = SITE.canonical_url(&locale_href(locale, meta.path));
    let og_image = SITE.canonical_url(SITE.og_image);

    html! {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=5";
        meta name="theme-color" media="(prefers-color-scheme: light)" content="#ffffff";
        meta name="theme-color" media="(prefers-color-scheme: dark)" content="#0f172a";
        title { (title) }
        meta name="description" content=(meta.description);
        meta name="keywords" content=(SITE.keywords_meta());
        meta name="author" content=(SITE.creator);
        link rel="canonical" href=(canonical);
        @for alternate in Locale::all() {
            link rel="alternate" hreflang=(alternate.code())
                href=(SITE.canonical_url(&locale_href(alternate, meta.path)));
        }
        link rel="alternate" hreflang="x-default"
            href=(SITE.canonical_url(&locale_href(Locale::default_locale(), meta.path)));
        meta property="og:type" content="website";
        meta property="og:site_name" content=(SITE.name);
        meta property="og:title" content=(title);
        meta property="og:description" content=(meta.description);
        meta property="og:url" content=(canonical);
        meta property="og:image" content=(og_image);
        meta property="og:locale" content=(locale.og_locale());
        meta name="twitter:card" content="summary_large_image";
        meta name="twitter:site" content=(SITE.seo.twitter_handle);
        meta name="twitter:title" content=(title);
        meta name="twitter:description" content=(meta.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_meta_known_locale() {
        let (locale, meta) = PageMeta::home("zh");
        assert_eq!(locale, Locale::CHINESE);
        assert_eq!(meta.title, "免费在线 PDF 工具");
        assert_eq!(meta.path, "/");
    }

    #[test]
    fn test_home_meta_unknown_locale_falls_back() {
        let (locale, meta) = PageMeta::home("xx");
        assert_eq!(locale, Locale::ENGLISH);
        assert_eq!(meta.title, "Free Online PDF Tools");
    }

    #[test]
    fn test_full_title_uses_template() {
        let meta = PageMeta::new("Contact us", "desc", "/contact");
        assert_eq!(meta.full_title(), "Contact us | PDFCraft");
    }

    #[test]
    fn test_head_contains_seo_tags() {
        let meta = PageMeta::new("Contact us", "Get in touch", "/contact");
        let html = head(Locale::ARABIC, &meta).into_string();

        assert!(html.contains("<title>Contact us | PDFCraft</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://pdf.iaas.eu.cc/ar/contact">"#));
        assert!(html.contains(r#"hreflang="zh" href="https://pdf.iaas.eu.cc/zh/contact""#));
        assert!(html.contains(r#"hreflang="x-default" href="https://pdf.iaas.eu.cc/en/contact""#));
        assert!(html.contains(r#"content="ar_AR""#));
        assert!(html.contains(r#"content="@pdfcraft""#));
    }
}
