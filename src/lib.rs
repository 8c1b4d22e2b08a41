//! PDFCraft marketing and contact site.
//!
//! Server-rendered localized pages, a contact form that forwards messages to
//! a third-party mail relay, and a guard for in-app browsers.

pub mod config;
pub mod contact;
pub mod i18n;
pub mod icons;
pub mod in_app;
pub mod metadata;
pub mod pages;
pub mod scroll_lock;
pub mod server;
pub mod shell;
pub mod site;
