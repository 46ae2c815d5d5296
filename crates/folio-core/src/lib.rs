//! Core logic for the folio portfolio viewer.
//!
//! Everything in this crate is pure state-machine code: scroll-driven
//! view state, one-shot reveals, count-up and typing animations, the
//! contact form, the project catalog, and transient notifications. Time
//! is always injected (`Instant` parameters), and layout is always read
//! through [`layout::LayoutProvider`], so the rendering shell owns the
//! clock and the geometry while this crate owns the behavior.

pub mod cancel;
pub mod catalog;
pub mod constants;
pub mod content;
pub mod engine;
pub mod error;
pub mod events;
pub mod form;
pub mod layout;
pub mod reveal;
pub mod toast;
pub mod typing;
pub mod viewstate;

pub use cancel::CancellationToken;
pub use catalog::{ProjectCatalog, ProjectFilter};
pub use content::SiteContent;
pub use engine::PortfolioEngine;
pub use error::FolioError;
pub use events::{EngineEvent, EngineObserver, EventSubject};
pub use form::{ContactForm, Field, FormState};
pub use layout::{FixedLayout, LayoutProvider, SectionLayout};
pub use reveal::{CounterPhase, RevealRegistry, StatCounter};
pub use toast::{Notification, NotificationKind, ToastQueue};
pub use typing::{TypingEffect, TypingPhase};
pub use viewstate::{ViewPolicy, ViewStateController};

/// Build an engine over the embedded content with default policy.
#[must_use]
pub fn default_engine() -> PortfolioEngine {
    PortfolioEngine::new(SiteContent::embedded(), ViewPolicy::default(), false)
}
