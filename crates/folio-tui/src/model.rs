//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use folio_core::PortfolioEngine;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;

use crate::footer::render_footer;
use crate::keymap::{map_key, InputMode, KeyAction};
use crate::messages::TuiMessage;
use crate::modal::render_modal;
use crate::navbar::render_navbar;
use crate::page::PageDocument;
use crate::particles::render_particles;
use crate::styles::ColorTheme;
use crate::toasts::render_toasts;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// The portfolio engine this view drives.
    engine: PortfolioEngine,
    /// Message receiver (ticks, signals).
    rx: Receiver<TuiMessage>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether the contact form is being edited.
    editing: bool,
    /// Index into the filtered project list.
    selected_project: usize,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    theme: ColorTheme,
    tick_rate: Duration,
    tick_count: u64,
}

impl TuiApp {
    /// Create a new TUI app around an engine.
    #[must_use]
    pub fn new(engine: PortfolioEngine, rx: Receiver<TuiMessage>, tick_rate: Duration) -> Self {
        Self {
            engine,
            rx,
            should_quit: false,
            editing: false,
            selected_project: 0,
            terminal_width: 80,
            terminal_height: 24,
            theme: ColorTheme::default(),
            tick_rate,
            tick_count: 0,
        }
    }

    /// The engine being displayed.
    #[must_use]
    pub fn engine(&self) -> &PortfolioEngine {
        &self.engine
    }

    /// The current input mode.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.engine.catalog().open_project().is_some() {
            InputMode::Modal
        } else if self.editing {
            InputMode::Editing
        } else {
            InputMode::Browse
        }
    }

    /// Build the page document for the current state.
    #[must_use]
    pub fn build_document(&self) -> PageDocument {
        PageDocument::build(
            &self.engine,
            &self.theme,
            self.terminal_width,
            self.selected_project,
        )
    }

    /// Height of the scrolling body in rows.
    #[must_use]
    pub fn viewport_height(&self) -> u32 {
        u32::from(self.terminal_height.saturating_sub(3))
    }

    fn max_scroll(&self, doc: &PageDocument) -> u32 {
        use folio_core::LayoutProvider as _;
        doc.document_height().saturating_sub(self.viewport_height())
    }

    fn scroll_by(&mut self, doc: &PageDocument, delta: i32) {
        let offset = self.engine.view().scroll_offset();
        let next = if delta < 0 {
            offset.saturating_sub(delta.unsigned_abs())
        } else {
            offset
                .saturating_add(delta.unsigned_abs())
                .min(self.max_scroll(doc))
        };
        self.engine.set_scroll(next);
    }

    /// Advance the model by one tick.
    pub fn on_tick(&mut self, now: Instant) {
        let doc = self.build_document();
        self.engine.tick(now, &doc, self.viewport_height());
        self.tick_count += 1;
    }

    /// Drain pending messages (Elm Update).
    pub fn update(&mut self, now: Instant) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg, now);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage, now: Instant) {
        match msg {
            TuiMessage::Tick => self.on_tick(now),
            TuiMessage::KeyPress(action) => self.handle_key_action(action, now),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Quit => {
                tracing::debug!("external quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    #[allow(clippy::too_many_lines)]
    pub fn handle_key_action(&mut self, action: KeyAction, now: Instant) {
        let doc = self.build_document();
        let page = i32::try_from(self.viewport_height()).unwrap_or(i32::MAX);
        match action {
            KeyAction::Quit | KeyAction::Cancel => self.should_quit = true,
            KeyAction::ScrollUp => self.scroll_by(&doc, -1),
            KeyAction::ScrollDown => self.scroll_by(&doc, 1),
            KeyAction::PageUp => self.scroll_by(&doc, -page),
            KeyAction::PageDown => self.scroll_by(&doc, page),
            KeyAction::Home => self.engine.set_scroll(0),
            KeyAction::End => {
                let max = self.max_scroll(&doc);
                self.engine.set_scroll(max);
            }
            KeyAction::JumpSection(n) => {
                let id = self
                    .engine
                    .content()
                    .sections
                    .get(n.saturating_sub(1))
                    .map(|s| s.id.clone());
                if let Some(id) = id {
                    self.engine.scroll_to_section(&id, &doc);
                }
            }
            KeyAction::CycleFilter => {
                self.engine.cycle_filter();
                self.selected_project = 0;
            }
            KeyAction::NextProject => {
                let len = self.engine.catalog().filtered().len();
                if len > 0 {
                    self.selected_project = (self.selected_project + 1) % len;
                }
            }
            KeyAction::PrevProject => {
                let len = self.engine.catalog().filtered().len();
                if len > 0 {
                    self.selected_project = (self.selected_project + len - 1) % len;
                }
            }
            KeyAction::OpenProject => {
                let id = self
                    .engine
                    .catalog()
                    .filtered()
                    .get(self.selected_project)
                    .map(|p| p.id.clone());
                if let Some(id) = id {
                    self.engine.open_project(&id);
                }
            }
            KeyAction::CloseModal => self.engine.close_modal(),
            KeyAction::EnterEditing => {
                self.editing = true;
                self.engine.scroll_to_section("contact", &doc);
            }
            KeyAction::LeaveEditing => self.editing = false,
            KeyAction::FocusNext => self.engine.form_mut().focus_next(),
            KeyAction::FocusPrev => self.engine.form_mut().focus_prev(),
            KeyAction::Input(c) => self.engine.form_mut().input(c),
            KeyAction::Backspace => self.engine.form_mut().backspace(),
            KeyAction::Submit => self.engine.submit_form(now),
            KeyAction::DismissToast => self.engine.dismiss_toast(),
            KeyAction::None => {}
        }
    }

    /// Compute the navbar/body/footer layout.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // navbar
                Constraint::Min(5),    // page body
                Constraint::Length(1), // footer
            ])
            .split(area);
        (outer[0], outer[1], outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (nav_area, body_area, footer_area) = Self::compute_layout(frame.area());

        render_navbar(frame, nav_area, &self.engine, &self.theme);

        let doc = self.build_document();
        let offset = u16::try_from(self.engine.view().scroll_offset()).unwrap_or(u16::MAX);
        let body = Paragraph::new(doc.lines.clone()).scroll((offset, 0));
        frame.render_widget(body, body_area);

        // Dots drift behind the hero while it is on screen.
        if !self.engine.reduced_motion() && self.engine.view().scroll_offset() < 8 {
            let hero_area = Rect {
                height: body_area.height.min(6),
                ..body_area
            };
            render_particles(frame, hero_area, self.tick_count);
        }

        render_footer(frame, footer_area, self.input_mode(), &self.theme);

        if let Some(project) = self.engine.catalog().open_project() {
            render_modal(frame, project, &self.theme);
        }
        render_toasts(frame, self.engine.toasts(), &self.theme);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, runs the main loop (poll events, update,
    /// tick, render), and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;
        self.engine.start(Instant::now());

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                break;
            }

            if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        let action = map_key(key_event, self.input_mode());
                        self.handle_key_action(action, Instant::now());
                    }
                    Event::Resize(w, h) => {
                        self.terminal_width = w;
                        self.terminal_height = h;
                    }
                    _ => {}
                }
            }

            let now = Instant::now();
            self.update(now);
            self.on_tick(now);
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use folio_core::constants::DEFAULT_TICK_RATE;
    use folio_core::{LayoutProvider, SiteContent, ViewPolicy};
    use ratatui::backend::TestBackend;

    fn make_app() -> (TuiApp, crossbeam_channel::Sender<TuiMessage>) {
        let (tx, rx) = unbounded();
        let engine =
            PortfolioEngine::new(SiteContent::embedded(), ViewPolicy::terminal(), false);
        let app = TuiApp::new(engine, rx, DEFAULT_TICK_RATE);
        (app, tx)
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn initial_state() {
        let (app, _tx) = make_app();
        assert!(!app.should_quit);
        assert_eq!(app.input_mode(), InputMode::Browse);
        assert_eq!(app.engine().view().scroll_offset(), 0);
    }

    #[test]
    fn quit_message_sets_flag() {
        let (mut app, tx) = make_app();
        tx.send(TuiMessage::Quit).unwrap();
        app.update(Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn resize_updates_dimensions() {
        let (mut app, _tx) = make_app();
        app.handle_message(
            TuiMessage::Resize {
                width: 120,
                height: 40,
            },
            Instant::now(),
        );
        assert_eq!(app.terminal_width, 120);
        assert_eq!(app.terminal_height, 40);
        assert_eq!(app.viewport_height(), 37);
    }

    #[test]
    fn scroll_is_clamped_to_document() {
        let (mut app, _tx) = make_app();
        let now = Instant::now();

        app.handle_key_action(KeyAction::ScrollUp, now);
        assert_eq!(app.engine().view().scroll_offset(), 0);

        app.handle_key_action(KeyAction::End, now);
        let doc = app.build_document();
        let max = doc.document_height() - app.viewport_height();
        assert_eq!(app.engine().view().scroll_offset(), max);

        app.handle_key_action(KeyAction::ScrollDown, now);
        assert_eq!(app.engine().view().scroll_offset(), max);

        app.handle_key_action(KeyAction::Home, now);
        assert_eq!(app.engine().view().scroll_offset(), 0);
    }

    #[test]
    fn jump_to_section_scrolls_and_activates() {
        let (mut app, _tx) = make_app();
        let now = Instant::now();

        app.handle_key_action(KeyAction::JumpSection(4), now);
        app.on_tick(now);
        assert_eq!(app.engine().view().active_section(), Some("projects"));

        // Out-of-range digits are a no-op.
        let offset = app.engine().view().scroll_offset();
        app.handle_key_action(KeyAction::JumpSection(9), now);
        assert_eq!(app.engine().view().scroll_offset(), offset);
    }

    #[test]
    fn project_selection_wraps_and_opens_modal() {
        let (mut app, _tx) = make_app();
        let now = Instant::now();

        app.handle_key_action(KeyAction::PrevProject, now);
        app.handle_key_action(KeyAction::OpenProject, now);
        assert_eq!(app.input_mode(), InputMode::Modal);
        assert_eq!(
            app.engine().catalog().open_project().map(|p| p.id.as_str()),
            Some("mobile-app")
        );

        app.handle_key_action(KeyAction::CloseModal, now);
        assert_eq!(app.input_mode(), InputMode::Browse);
    }

    #[test]
    fn cycling_the_filter_resets_selection() {
        let (mut app, _tx) = make_app();
        let now = Instant::now();
        app.handle_key_action(KeyAction::NextProject, now);
        app.handle_key_action(KeyAction::CycleFilter, now);
        app.handle_key_action(KeyAction::OpenProject, now);
        // First project of the "Web Application" category.
        assert_eq!(
            app.engine().catalog().open_project().map(|p| p.id.as_str()),
            Some("sports-club")
        );
    }

    #[test]
    fn editing_mode_feeds_the_form() {
        let (mut app, _tx) = make_app();
        let now = Instant::now();

        app.handle_key_action(KeyAction::EnterEditing, now);
        assert_eq!(app.input_mode(), InputMode::Editing);

        app.handle_key_action(KeyAction::Input('A'), now);
        app.handle_key_action(KeyAction::Input('n'), now);
        app.handle_key_action(KeyAction::Backspace, now);
        assert_eq!(app.engine().form().value(folio_core::Field::Name), "A");

        app.handle_key_action(KeyAction::LeaveEditing, now);
        assert_eq!(app.input_mode(), InputMode::Browse);
    }

    #[test]
    fn invalid_submit_raises_toasts_and_dismiss_clears_one() {
        let (mut app, _tx) = make_app();
        let now = Instant::now();
        app.handle_key_action(KeyAction::Submit, now);
        let count = app.engine().toasts().visible().len();
        assert!(count > 0);
        app.handle_key_action(KeyAction::DismissToast, now);
        assert_eq!(app.engine().toasts().visible().len(), count - 1);
    }

    #[test]
    fn render_smoke_test() {
        let (mut app, _tx) = make_app();
        app.terminal_width = 100;
        app.terminal_height = 30;
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Nimesh"));
        assert!(content.contains("scroll"));
    }

    #[test]
    fn modal_renders_over_the_page() {
        let (mut app, _tx) = make_app();
        app.terminal_width = 100;
        app.terminal_height = 30;
        app.handle_key_action(KeyAction::OpenProject, Instant::now());

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(buffer_text(&terminal).contains("Project"));
    }

    #[test]
    fn ticks_advance_engine_state() {
        let (mut app, tx) = make_app();
        let now = Instant::now();
        tx.send(TuiMessage::Tick).unwrap();
        app.update(now);
        // The hero section is in view at offset 0, so it is revealed.
        assert!(app.engine().reveals().is_revealed("home"));
    }
}
