//! Engine event notifications (observer pattern).
//!
//! Observers are registered once at startup and notified synchronously
//! from the engine; a slow observer stalls the tick, so handlers must
//! stay cheap.

use std::sync::Arc;

use parking_lot::RwLock;

/// A state change worth reacting to outside the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The active section changed (None above the first section).
    ActiveSectionChanged(Option<String>),
    /// A section was revealed for the first time.
    SectionRevealed(String),
    /// The navbar entered or left its scrolled state.
    NavbarScrolled(bool),
    /// A contact-form submission resolved.
    FormSubmitted,
    /// A project modal was opened.
    ProjectOpened(String),
}

/// Receives engine events.
pub trait EngineObserver: Send + Sync {
    fn on_event(&self, event: &EngineEvent);
}

/// Thread-safe observer registry.
#[derive(Default)]
pub struct EventSubject {
    observers: RwLock<Vec<Arc<dyn EngineObserver>>>,
}

impl EventSubject {
    /// Create an empty subject.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn EngineObserver>) {
        self.observers.write().push(observer);
    }

    /// Notify all observers of an event.
    pub fn notify(&self, event: &EngineEvent) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_event(event);
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }
}

/// Observer that logs events via `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl EngineObserver for TracingObserver {
    fn on_event(&self, event: &EngineEvent) {
        match event {
            EngineEvent::ActiveSectionChanged(section) => {
                tracing::debug!(?section, "active section changed");
            }
            EngineEvent::SectionRevealed(id) => {
                tracing::debug!(%id, "section revealed");
            }
            EngineEvent::NavbarScrolled(scrolled) => {
                tracing::trace!(scrolled, "navbar state changed");
            }
            EngineEvent::FormSubmitted => {
                tracing::info!("contact form submitted");
            }
            EngineEvent::ProjectOpened(id) => {
                tracing::debug!(%id, "project modal opened");
            }
        }
    }
}
