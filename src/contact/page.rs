//! Contact page markup.

use maud::{html, Markup};

use crate::contact::{
    ContactForm, ContactMethod, ContactTarget, Field, FormStatus, QrOverlay, Subject,
};
use crate::i18n::FormStrings;
use crate::icons::Icon;
use crate::in_app::InAppDetector;
use crate::metadata::PageMeta;
use crate::scroll_lock::BodyScroll;
use crate::shell::{self, PageContext};

pub const CONTACT_PATH: &str = "/contact";

/// Banner shown above the form when a submission never left the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormNotice {
    MissingFields,
}

pub struct ContactView<'a> {
    pub methods: &'a [ContactMethod],
    pub form: &'a ContactForm,
    pub overlay: &'a QrOverlay,
    pub notice: Option<FormNotice>,
}

/// Full contact page document.
///
/// Background scrolling is locked while the QR overlay is open.
pub fn render_contact(
    ctx: &PageContext,
    detector: &InAppDetector,
    view: &ContactView<'_>,
) -> Markup {
    let strings = &ctx.messages.contact;
    let meta = PageMeta::new(strings.title, strings.description, CONTACT_PATH);

    let body = BodyScroll::new();
    let _qr_lock = view.overlay.is_open().then(|| body.lock());

    shell::render(ctx, detector, &meta, &body, content(ctx, view))
}

fn content(ctx: &PageContext, view: &ContactView<'_>) -> Markup {
    let strings = &ctx.messages.contact;
    html! {
        section class="hero" {
            div class="container narrow center" {
                h1 { (strings.hero_title) }
                p class="muted" { (strings.hero_description) }
            }
        }
        section class="section" id="contact-methods" {
            div class="container grid" {
                @for method in view.methods {
                    (method_card(ctx, method))
                }
            }
            @if let Some(active) = view.overlay.active() {
                (qr_overlay(ctx, &active.title, &active.image))
            }
        }
        section class="hero" id="contact-form" {
            div class="container narrow" {
                div class="center" {
                    h2 { (strings.form.title) }
                    p class="muted" { (strings.form.description) }
                }
                @if view.form.status() == FormStatus::Success {
                    (success_card(ctx, &strings.form))
                } @else {
                    (form_card(ctx, view))
                }
            }
        }
        section class="section" {
            div class="container narrow center" {
                (Icon::MessageSquare.render("faq-icon"))
                h2 { (strings.faq_title) }
                p class="muted" { (ctx.messages.contact_faq_description()) }
                a class="button outline" href=(ctx.href("/faq")) { (strings.faq_button) }
            }
        }
    }
}

fn method_card(ctx: &PageContext, method: &ContactMethod) -> Markup {
    let href = match &method.target {
        ContactTarget::Mail(uri) => uri.clone(),
        ContactTarget::Qr(_) => format!(
            "{}?qr={}#contact-methods",
            ctx.href(CONTACT_PATH),
            method.slug
        ),
    };
    let role = match method.target {
        ContactTarget::Mail(_) => None,
        ContactTarget::Qr(_) => Some("button"),
    };

    html! {
        a class="card" href=(href) role=[role] data-method=(method.slug) {
            (method.icon.render("icon"))
            h3 { (method.title) }
            p class="muted" { (method.description) }
            span class="action" { (method.action) }
        }
    }
}

/// The backdrop and close control link back to the page without `qr`.
/// The panel is a sibling of the backdrop, so clicks inside it go nowhere.
fn qr_overlay(ctx: &PageContext, title: &str, image: &str) -> Markup {
    let strings = &ctx.messages.contact;
    let close_href = format!("{}#contact-methods", ctx.href(CONTACT_PATH));

    html! {
        div class="qr-layer" role="dialog" aria-modal="true" aria-label=(title) {
            a class="qr-backdrop" href=(close_href) aria-label=(strings.qr_close) data-qr="backdrop" {}
            div class="qr-panel" data-qr="panel" {
                a class="qr-close" href=(close_href) aria-label=(strings.qr_close) data-qr="close" {
                    (Icon::Close.render("icon"))
                }
                h3 { (title) }
                img class="qr-image" src=(image) alt=(strings.qr_alt);
                p class="muted" { (strings.qr_scan_hint) }
            }
        }
    }
}

fn success_card(ctx: &PageContext, strings: &FormStrings) -> Markup {
    html! {
        div class="panel center success" {
            (Icon::CheckCircle.render("icon"))
            h3 { (strings.success_title) }
            p class="muted" { (strings.success_description) }
            a class="button outline" href=(format!("{}#contact-form", ctx.href(CONTACT_PATH))) {
                (strings.success_button)
            }
        }
    }
}

fn form_card(ctx: &PageContext, view: &ContactView<'_>) -> Markup {
    let strings = &ctx.messages.contact.form;
    let data = view.form.data();
    let submitting = view.form.status() == FormStatus::Submitting;

    html! {
        div class="panel" {
            form method="post" action=(format!("{}#contact-form", ctx.href(CONTACT_PATH)))
                onsubmit="var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent=b.dataset.loadingLabel;" {
                div class="field-row" {
                    div class="field" {
                        label for="name" { (strings.name_label) }
                        input type="text" id="name" name=(Field::Name.as_str()) value=(data.name)
                            required placeholder=(strings.name_placeholder);
                    }
                    div class="field" {
                        label for="email" { (strings.email_label) }
                        input type="email" id="email" name=(Field::Email.as_str()) value=(data.email)
                            required placeholder=(strings.email_placeholder);
                    }
                }
                div class="field" {
                    label for="subject" { (strings.subject_label) }
                    select id="subject" name=(Field::Subject.as_str()) required {
                        option value="" selected[data.subject.is_empty()] { (strings.subject_placeholder) }
                        @for subject in Subject::ALL {
                            option value=(subject.value()) selected[data.subject == subject.value()] {
                                (subject.label(strings))
                            }
                        }
                    }
                }
                div class="field" {
                    label for="message" { (strings.message_label) }
                    textarea id="message" name=(Field::Message.as_str()) rows="6"
                        required placeholder=(strings.message_placeholder) { (data.message) }
                }
                @if view.form.status() == FormStatus::Error {
                    div class="alert error" role="alert" {
                        (Icon::AlertCircle.render("icon"))
                        p { (strings.error) }
                    }
                }
                @if view.notice == Some(FormNotice::MissingFields) {
                    div class="alert warning" role="alert" {
                        (Icon::AlertCircle.render("icon"))
                        p { (strings.missing_fields) }
                    }
                }
                button type="submit" class="button full" disabled[submitting]
                    data-loading-label=(strings.submitting) {
                    @if submitting {
                        (strings.submitting)
                    } @else {
                        (strings.submit)
                        (Icon::Send.render("icon"))
                    }
                }
            }
        }
    }
}
