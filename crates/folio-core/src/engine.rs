//! The portfolio engine: one facade over scroll state, reveals,
//! animations, the contact form, and the project catalog.
//!
//! The engine is driven by a single periodic tick carrying the current
//! time and a live layout; it never reads the clock itself, which keeps
//! every behavior reproducible in tests.

use std::sync::Arc;
use std::time::Instant;

use crate::catalog::{ProjectCatalog, ProjectFilter};
use crate::constants::SUBMIT_SUCCESS_MESSAGE;
use crate::content::SiteContent;
use crate::events::{EngineEvent, EngineObserver, EventSubject};
use crate::form::ContactForm;
use crate::layout::LayoutProvider;
use crate::reveal::{RevealRegistry, StatCounter};
use crate::toast::{NotificationKind, ToastQueue};
use crate::typing::TypingEffect;
use crate::viewstate::{ViewPolicy, ViewStateController};

/// Top-level engine state.
pub struct PortfolioEngine {
    content: SiteContent,
    view: ViewStateController,
    reveals: RevealRegistry,
    counters: Vec<StatCounter>,
    typing: TypingEffect,
    toasts: ToastQueue,
    form: ContactForm,
    catalog: ProjectCatalog,
    subject: EventSubject,
    reduced_motion: bool,
    started: bool,
}

impl PortfolioEngine {
    /// Build an engine from validated content.
    #[must_use]
    pub fn new(content: SiteContent, policy: ViewPolicy, reduced_motion: bool) -> Self {
        let counters = content
            .stats
            .iter()
            .map(|s| StatCounter::new(s.target))
            .collect();
        let typing = TypingEffect::new(content.typing_phrases.clone());
        let catalog = ProjectCatalog::new(content.projects.clone(), &content.default_project);
        Self {
            content,
            view: ViewStateController::new(policy),
            reveals: RevealRegistry::new(),
            counters,
            typing,
            toasts: ToastQueue::new(),
            form: ContactForm::new(),
            catalog,
            subject: EventSubject::new(),
            reduced_motion,
            started: false,
        }
    }

    /// Start the animations. Idempotent.
    pub fn start(&mut self, now: Instant) {
        if self.started {
            return;
        }
        self.started = true;
        if !self.reduced_motion {
            self.typing.start(now);
        }
        tracing::debug!(reduced_motion = self.reduced_motion, "engine started");
    }

    /// Register an observer for engine events.
    pub fn subscribe(&self, observer: Arc<dyn EngineObserver>) {
        self.subject.register(observer);
    }

    /// Record a new scroll offset; state is re-derived on the next tick.
    pub fn set_scroll(&mut self, offset: u32) {
        self.view.set_scroll(offset);
    }

    /// Jump to a section, returning the new scroll offset. Unknown ids
    /// are a no-op and return None.
    pub fn scroll_to_section(&mut self, id: &str, layout: &dyn LayoutProvider) -> Option<u32> {
        let sections = layout.section_layouts();
        let section = sections.iter().find(|s| s.id == id)?;
        let target = self.view.scroll_target(section);
        self.view.set_scroll(target);
        Some(target)
    }

    /// Advance all time-driven state by one tick.
    pub fn tick(&mut self, now: Instant, layout: &dyn LayoutProvider, viewport_height: u32) {
        let sections = layout.section_layouts();

        let previous_active = self.view.active_section().map(ToString::to_string);
        let previous_scrolled = self.view.navbar_scrolled();
        if self.view.evaluate(&sections) {
            let active = self.view.active_section().map(ToString::to_string);
            if active != previous_active {
                self.subject
                    .notify(&EngineEvent::ActiveSectionChanged(active));
            }
            if self.view.navbar_scrolled() != previous_scrolled {
                self.subject
                    .notify(&EngineEvent::NavbarScrolled(self.view.navbar_scrolled()));
            }
        }

        // Batched reveal pass over every section intersecting the viewport.
        for section in &sections {
            if self.view.section_in_viewport(section, viewport_height)
                && self.reveals.reveal(&section.id)
            {
                self.subject
                    .notify(&EngineEvent::SectionRevealed(section.id.clone()));
                if section.id == self.content.stats_section {
                    self.start_counters(now);
                }
            }
        }

        for counter in &mut self.counters {
            counter.tick(now);
        }
        self.typing.tick(now);
        self.toasts.tick(now);

        if self.form.tick(now) {
            self.toasts
                .push(NotificationKind::Success, SUBMIT_SUCCESS_MESSAGE, now);
            self.subject.notify(&EngineEvent::FormSubmitted);
        }
    }

    fn start_counters(&mut self, now: Instant) {
        for counter in &mut self.counters {
            if self.reduced_motion {
                counter.skip_to_end();
            } else {
                counter.start(now);
            }
        }
    }

    /// Attempt to submit the contact form. Validation failures surface
    /// as error notifications; a valid form resolves on a later tick.
    pub fn submit_form(&mut self, now: Instant) {
        if let Err(errors) = self.form.submit(now) {
            for error in errors {
                self.toasts.push(NotificationKind::Error, error, now);
            }
        }
    }

    /// Dismiss the oldest visible notification.
    pub fn dismiss_toast(&mut self) {
        self.toasts.dismiss_oldest();
    }

    /// Open the project modal (unknown ids fall back to the default
    /// project; an empty catalog makes this a no-op).
    pub fn open_project(&mut self, id: &str) {
        self.catalog.open(id);
        if let Some(project) = self.catalog.open_project() {
            self.subject
                .notify(&EngineEvent::ProjectOpened(project.id.clone()));
        }
    }

    /// Close the project modal. Idempotent.
    pub fn close_modal(&mut self) {
        self.catalog.close();
    }

    /// Replace the project filter.
    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.catalog.set_filter(filter);
    }

    /// Advance to the next filter in the cycle.
    pub fn cycle_filter(&mut self) {
        self.catalog.cycle_filter();
    }

    /// The text the typing effect currently shows. With reduced motion
    /// the first phrase is shown in full, statically.
    #[must_use]
    pub fn typing_text(&self) -> String {
        if self.reduced_motion {
            self.content
                .typing_phrases
                .first()
                .cloned()
                .unwrap_or_default()
        } else {
            self.typing.display()
        }
    }

    /// Site content.
    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Scroll-driven view state.
    #[must_use]
    pub fn view(&self) -> &ViewStateController {
        &self.view
    }

    /// Reveal registry.
    #[must_use]
    pub fn reveals(&self) -> &RevealRegistry {
        &self.reveals
    }

    /// Stat counters, parallel to `content().stats`.
    #[must_use]
    pub fn counters(&self) -> &[StatCounter] {
        &self.counters
    }

    /// Visible notifications.
    #[must_use]
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// The contact form.
    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Mutable access to the contact form, for text input.
    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// The project catalog.
    #[must_use]
    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    /// Whether motion is reduced.
    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}
