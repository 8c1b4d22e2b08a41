//! In-app browser guard.
//!
//! Some embedded browsers (WeChat's in particular) cannot run the site's
//! tools. The guard detects them from the user-agent string and covers the
//! page with instructions for reopening it in an external browser.
//!
//! Detection is a standalone predicate (`InAppDetector`) so the rules can be
//! tested and swapped without touching the overlay markup. The same rules
//! drive both the server-side check on the `User-Agent` header and the
//! inline script emitted into every page.

use std::sync::OnceLock;

use maud::{html, Markup, PreEscaped};
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::i18n::InAppStrings;

/// DOM id of the overlay; the inline script skips pages that already have it.
pub const OVERLAY_ID: &str = "in-app-guard";

/// A named user-agent signature.
///
/// `pattern` is matched case-insensitively and must stay within the regex
/// subset shared by Rust's `regex` crate and JavaScript's `RegExp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InAppRule {
    pub name: &'static str,
    pub pattern: &'static str,
}

pub const WECHAT: InAppRule = InAppRule {
    name: "wechat",
    pattern: "micromessenger",
};

#[derive(Debug, Clone)]
pub struct InAppDetector {
    rules: Vec<(InAppRule, Regex)>,
}

impl InAppDetector {
    pub fn new(rules: &[InAppRule]) -> Result<Self, regex::Error> {
        let compiled = rules
            .iter()
            .map(|rule| {
                RegexBuilder::new(rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| (*rule, regex))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules: compiled })
    }

    /// Detector for the WeChat in-app browser.
    pub fn wechat() -> Self {
        Self {
            rules: vec![(WECHAT, wechat_regex())],
        }
    }

    /// Name of the first matching rule, if any.
    pub fn detect(&self, user_agent: &str) -> Option<&'static str> {
        let hit = self
            .rules
            .iter()
            .find(|(_, regex)| regex.is_match(user_agent))
            .map(|(rule, _)| rule.name);
        if let Some(name) = hit {
            debug!("In-app browser detected: {}", name);
        }
        hit
    }

    pub fn is_in_app(&self, user_agent: &str) -> bool {
        self.detect(user_agent).is_some()
    }

    pub fn rules(&self) -> impl Iterator<Item = &InAppRule> {
        self.rules.iter().map(|(rule, _)| rule)
    }
}

impl Default for InAppDetector {
    fn default() -> Self {
        Self::wechat()
    }
}

fn wechat_regex() -> Regex {
    static WECHAT_REGEX: OnceLock<Regex> = OnceLock::new();
    WECHAT_REGEX
        .get_or_init(|| {
            RegexBuilder::new(WECHAT.pattern)
                .case_insensitive(true)
                .build()
                .expect("literal pattern")
        })
        .clone()
}

/// Full-screen instructional overlay.
pub fn overlay_markup(strings: &InAppStrings) -> Markup {
    html! {
        div id=(OVERLAY_ID) role="dialog" aria-modal="true"
            style="position:fixed;top:0;left:0;width:100%;height:100%;background:rgba(0,0,0,0.85);z-index:99999;display:flex;flex-direction:column;align-items:center;justify-content:flex-start;color:#fff;text-align:center;padding-top:60px;font-family:-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;" {
            div style="position:absolute;top:15px;right:20px;" {
                (PreEscaped(ARROW_SVG))
            }
            h3 style="font-size:22px;font-weight:600;margin-bottom:15px;" { (strings.heading) }
            p style="font-size:16px;line-height:1.6;opacity:0.9;padding:0 30px;" {
                @for (i, line) in strings.body.iter().enumerate() {
                    @if i > 0 { br; }
                    (line)
                }
            }
            div style="margin-top:40px;background:rgba(255,255,255,0.1);padding:20px 30px;border-radius:12px;text-align:left;display:inline-block;" {
                p style="font-size:18px;font-weight:bold;color:#4ade80;margin-bottom:10px;" { (strings.steps_title) }
                ol style="margin:0;padding-left:25px;text-align:left;font-size:15px;line-height:1.8;" {
                    @for step in strings.steps {
                        li { (step) }
                    }
                }
            }
            p style="margin-top:60px;font-size:14px;opacity:0.5;" { (strings.footer) }
        }
    }
}

/// Inline script that runs the detector rules in the browser.
///
/// On a match it appends the overlay and disables background scrolling.
/// The check is one-shot per page load and does nothing when the server
/// already rendered the overlay.
pub fn guard_script(detector: &InAppDetector, strings: &InAppStrings) -> Markup {
    let patterns: Vec<&str> = detector.rules().map(|rule| rule.pattern).collect();
    let patterns_js = js_literal(&serde_json::json!(patterns).to_string());
    let overlay_json = serde_json::json!(overlay_markup(strings).into_string()).to_string();
    let overlay_js = js_literal(&overlay_json);

    let script = format!(
        r#"(function() {{
  var ua = navigator.userAgent || "";
  var patterns = {patterns};
  var matched = patterns.some(function(p) {{ return new RegExp(p, "i").test(ua); }});
  if (!matched || document.getElementById("{id}")) return;
  var holder = document.createElement("div");
  holder.innerHTML = {overlay};
  document.body.appendChild(holder.firstElementChild);
  document.body.style.overflow = "hidden";
}})();"#,
        patterns = patterns_js,
        id = OVERLAY_ID,
        overlay = overlay_js,
    );

    html! {
        script { (PreEscaped(script)) }
    }
}

/// Make a JSON literal safe to embed inside a `<script>` element.
fn js_literal(json: &str) -> String {
    json.replace("</", "<\\/")
}

const ARROW_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="60" height="60" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" style="transform:rotate(-15deg);opacity:0.8;"><line x1="7" y1="17" x2="17" y2="7"></line><polyline points="7 7 17 7 17 17"></polyline></svg>"##;
