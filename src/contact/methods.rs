//! Contact method cards.

use crate::config::Config;
use crate::i18n::{Messages, MethodStrings};
use crate::icons::Icon;

/// Where a contact method leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactTarget {
    /// `mailto:` URI, followed directly
    Mail(String),
    /// QR image URL, shown in the overlay
    Qr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMethod {
    /// Stable identifier used in `?qr=` links
    pub slug: &'static str,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub target: ContactTarget,
}

impl ContactMethod {
    fn new(slug: &'static str, icon: Icon, strings: &MethodStrings, target: ContactTarget) -> Self {
        Self {
            slug,
            icon,
            title: strings.title,
            description: strings.description,
            action: strings.action,
            target,
        }
    }

    pub fn qr_image(&self) -> Option<&str> {
        match &self.target {
            ContactTarget::Qr(url) => Some(url),
            ContactTarget::Mail(_) => None,
        }
    }
}

/// Contact methods in display order: email, group chat, personal WeChat.
pub fn contact_methods(config: &Config, messages: &Messages) -> Vec<ContactMethod> {
    let strings = &messages.contact;
    vec![
        ContactMethod::new(
            "email",
            Icon::Mail,
            &strings.email_method,
            ContactTarget::Mail(format!("mailto:{}", config.contact_mailto)),
        ),
        ContactMethod::new(
            "group",
            Icon::Users,
            &strings.group_method,
            ContactTarget::Qr(config.qr_group_image_url.clone()),
        ),
        ContactMethod::new(
            "personal",
            Icon::UserPlus,
            &strings.personal_method,
            ContactTarget::Qr(config.qr_personal_image_url.clone()),
        ),
    ]
}

/// Find a QR-type method by slug.
pub fn find_qr<'a>(methods: &'a [ContactMethod], slug: &str) -> Option<&'a ContactMethod> {
    methods
        .iter()
        .find(|method| method.slug == slug && method.qr_image().is_some())
}
