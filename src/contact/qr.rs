//! QR code overlay state.
//!
//! At most one overlay is active. Opening replaces whatever is shown; there
//! is no queue.

use crate::contact::ContactMethod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQr {
    pub slug: String,
    pub title: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrOverlay {
    active: Option<ActiveQr>,
}

impl QrOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(
        &mut self,
        slug: impl Into<String>,
        title: impl Into<String>,
        image: impl Into<String>,
    ) {
        self.active = Some(ActiveQr {
            slug: slug.into(),
            title: title.into(),
            image: image.into(),
        });
    }

    /// Open the overlay for a QR-type method; mail methods are ignored.
    pub fn open_method(&mut self, method: &ContactMethod) {
        if let Some(image) = method.qr_image() {
            self.open(method.slug, method.title, image);
        }
    }

    /// Backdrop and close control dismiss; the panel has no close action.
    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&ActiveQr> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactTarget;
    use crate::icons::Icon;

    fn method(slug: &'static str, title: &'static str, target: ContactTarget) -> ContactMethod {
        ContactMethod {
            slug,
            icon: Icon::Users,
            title,
            description: "",
            action: "",
            target,
        }
    }

    #[test]
    fn test_starts_closed() {
        assert!(!QrOverlay::new().is_open());
    }

    #[test]
    fn test_open_then_close() {
        let mut overlay = QrOverlay::new();
        overlay.open("group", "Group", "https://img/a.png");
        assert_eq!(overlay.active().unwrap().title, "Group");

        overlay.close();
        assert!(overlay.active().is_none());
    }

    #[test]
    fn test_open_replaces_without_close() {
        let mut overlay = QrOverlay::new();
        let a = method("group", "Group", ContactTarget::Qr("https://img/a.png".into()));
        let b = method("personal", "Personal", ContactTarget::Qr("https://img/b.png".into()));

        overlay.open_method(&a);
        overlay.open_method(&b);

        let active = overlay.active().unwrap();
        assert_eq!(active.slug, "personal");
        assert_eq!(active.title, "Personal");
        assert_eq!(active.image, "https://img/b.png");
    }

    #[test]
    fn test_mail_method_does_not_open() {
        let mut overlay = QrOverlay::new();
        overlay.open_method(&method("email", "Email", ContactTarget::Mail("mailto:a@b.c".into())));
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_close_when_already_closed() {
        let mut overlay = QrOverlay::new();
        overlay.close();
        assert!(!overlay.is_open());
    }
}
