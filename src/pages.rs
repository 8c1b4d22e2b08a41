//! Localized static pages.

use maud::{html, Markup};

use crate::i18n::{Messages, StaticPageStrings};
use crate::metadata::PageMeta;
use crate::shell::PageContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticPage {
    Home,
    Tools,
    About,
    Faq,
    Privacy,
    Terms,
}

impl StaticPage {
    pub const ALL: [StaticPage; 6] = [
        StaticPage::Home,
        StaticPage::Tools,
        StaticPage::About,
        StaticPage::Faq,
        StaticPage::Privacy,
        StaticPage::Terms,
    ];

    /// Locale-relative path.
    pub fn path(&self) -> &'static str {
        match self {
            StaticPage::Home => "/",
            StaticPage::Tools => "/tools",
            StaticPage::About => "/about",
            StaticPage::Faq => "/faq",
            StaticPage::Privacy => "/privacy",
            StaticPage::Terms => "/terms",
        }
    }

    pub fn strings<'a>(&self, messages: &'a Messages) -> &'a StaticPageStrings {
        let pages = &messages.pages;
        match self {
            StaticPage::Home => &pages.home,
            StaticPage::Tools => &pages.tools,
            StaticPage::About => &pages.about,
            StaticPage::Faq => &pages.faq,
            StaticPage::Privacy => &pages.privacy,
            StaticPage::Terms => &pages.terms,
        }
    }

    pub fn meta(&self, ctx: &PageContext) -> PageMeta {
        match self {
            StaticPage::Home => {
                let strings = &ctx.messages.metadata;
                PageMeta::new(strings.home_title, strings.home_description, self.path())
            }
            _ => {
                let strings = self.strings(ctx.messages);
                PageMeta::new(strings.title, strings.description, self.path())
            }
        }
    }

    pub fn content(&self, ctx: &PageContext) -> Markup {
        let strings = self.strings(ctx.messages);
        let common = &ctx.messages.common;

        html! {
            section class="hero" {
                div class="container narrow center" {
                    h1 { (strings.title) }
                    p class="muted" { (strings.description) }
                }
            }
            section class="section" {
                div class="container narrow" {
                    @for paragraph in strings.body {
                        p { (paragraph) }
                    }
                    @if *self == StaticPage::Home {
                        p class="center" {
                            a class="button" href=(ctx.href("/tools")) { (common.nav_tools) }
                            " "
                            a class="button outline" href=(ctx.href("/contact")) { (common.nav_contact) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = StaticPage::ALL.iter().map(|p| p.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), StaticPage::ALL.len());
    }

    #[test]
    fn test_home_meta_uses_metadata_strings() {
        let ctx = PageContext::for_locale(Locale::ENGLISH);
        let meta = StaticPage::Home.meta(&ctx);
        assert_eq!(meta.title, "Free Online PDF Tools");
        assert_eq!(meta.path, "/");
    }

    #[test]
    fn test_static_page_meta() {
        let ctx = PageContext::for_locale(Locale::CHINESE);
        let meta = StaticPage::Privacy.meta(&ctx);
        assert_eq!(meta.title, "隐私政策");
        assert_eq!(meta.path, "/privacy");
    }

    #[test]
    fn test_every_page_has_content_in_every_locale() {
        for locale in Locale::all() {
            let ctx = PageContext::for_locale(locale);
            for page in StaticPage::ALL {
                let strings = page.strings(ctx.messages);
                assert!(!strings.title.is_empty(), "{} {:?}", locale, page);
                assert!(!strings.body.is_empty(), "{} {:?}", locale, page);
            }
        }
    }

    #[test]
    fn test_home_links_are_locale_prefixed() {
        let ctx = PageContext::for_locale(Locale::ARABIC);
        let html = StaticPage::Home.content(&ctx).into_string();
        assert!(html.contains(r#"href="/ar/tools""#));
        assert!(html.contains(r#"href="/ar/contact""#));
    }
}
