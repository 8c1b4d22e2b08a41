//! Contact page: form state, relay delivery, contact methods and QR overlay.

mod form;
mod methods;
mod page;
mod qr;
mod relay;

pub use form::{ContactForm, Field, FormData, FormError, FormStatus, Subject};
pub use methods::{contact_methods, find_qr, ContactMethod, ContactTarget};
pub use page::{render_contact, ContactView, FormNotice};
pub use qr::{ActiveQr, QrOverlay};
pub use relay::{FormSubmitRelay, MailRelay, RelayError};

use tracing::{error, info};

/// Run one submission attempt against the relay.
///
/// Validation failures leave the form untouched and issue no request.
/// Every relay failure maps to `FormStatus::Error`; there is no retry.
pub async fn submit_form(
    form: &mut ContactForm,
    relay: &dyn MailRelay,
) -> Result<FormStatus, FormError> {
    let message = form.begin_submit()?;

    let delivered = match relay.send(&message).await {
        Ok(()) => {
            info!("Contact message delivered (subject: {})", message.subject);
            true
        }
        Err(e) => {
            error!("Contact message delivery failed: {}", e);
            false
        }
    };

    form.complete(delivered)
}
