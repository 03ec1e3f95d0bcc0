//! Terminal user interface.
//!
//! The page is rendered as one scrollable column of sections. The theme
//! toggle, status bar and help overlay are drawn on top of it every frame.
//! All state lives in [`AppState`]; the style scope ([`Palette`]) is derived
//! from its [`ThemeStore`] on every frame.

pub mod clipboard;
pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod palette;
pub mod sections;
pub mod status_bar;
pub mod theme_toggle;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;

use crate::contact::{ContactBackend, ContactForm, UnconfiguredBackend};
use crate::models::Portfolio;
use crate::page::{Link, LinkTarget, Page, Section};
use crate::shortcuts::ShortcutRegistry;
use crate::theme::ThemeStore;

pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
pub use component::{RenderContext, SectionView};
pub use handlers::{handle_key_event, handle_mouse_event};
pub use help_overlay::HelpOverlayState;
pub use palette::Palette;
pub use status_bar::StatusBar;
pub use theme_toggle::ThemeToggle;

/// Height of the status bar including its border.
const STATUS_BAR_HEIGHT: u16 = 3;

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keys scroll and navigate the page
    #[default]
    Page,
    /// A link is focused (page-wide index into [`Page::links`])
    Link(usize),
    /// Keys edit the contact form
    Form,
}

/// Application state - single source of truth.
pub struct AppState {
    /// Theme scope shared by every widget
    pub store: ThemeStore,
    /// Content being shown
    pub portfolio: Portfolio,
    /// First visible line of the page
    pub scroll: usize,
    /// Page area from the last frame (width, height)
    pub viewport: (u16, u16),
    /// Contact form input
    pub form: ContactForm,
    /// Keyboard focus
    pub focus: Focus,
    /// Status line text; key hints are shown while it is empty
    pub status_message: String,
    /// Error shown in place of the status line
    pub error_message: Option<String>,
    /// Help overlay, when open
    pub help: Option<HelpOverlayState>,
    /// Exit after this event
    pub should_quit: bool,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Section last jumped to, until the user scrolls
    jump_target: Option<Section>,
    backend: Box<dyn ContactBackend>,
    clipboard: Box<dyn ClipboardSink>,
}

impl AppState {
    /// State for `portfolio` with the unconfigured contact backend and the
    /// system clipboard.
    #[must_use]
    pub fn new(store: ThemeStore, portfolio: Portfolio) -> Self {
        Self {
            store,
            portfolio,
            scroll: 0,
            viewport: (80, 24 - STATUS_BAR_HEIGHT),
            form: ContactForm::new(),
            focus: Focus::Page,
            status_message: String::new(),
            error_message: None,
            help: None,
            should_quit: false,
            shortcuts: ShortcutRegistry::new(),
            jump_target: None,
            backend: Box::new(UnconfiguredBackend),
            clipboard: Box::new(SystemClipboard),
        }
    }

    /// Replaces the contact backend.
    #[must_use]
    pub fn with_backend(mut self, backend: Box<dyn ContactBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Replaces the clipboard used for external links.
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Style scope for the current theme.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.store.theme())
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Every link on the page in render order.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        Page::new(&self.portfolio).links()
    }

    /// The focused link, if any.
    #[must_use]
    pub fn focused_link(&self) -> Option<Link> {
        match self.focus {
            Focus::Link(index) => self.links().into_iter().nth(index),
            Focus::Page | Focus::Form => None,
        }
    }

    /// Lines of every section, in render order.
    #[must_use]
    pub fn section_lines(&self, palette: &Palette) -> Vec<(Section, Vec<Line<'static>>)> {
        let links: Vec<(usize, Link)> = self.links().into_iter().enumerate().collect();
        let focused_link = match self.focus {
            Focus::Link(index) => Some(index),
            Focus::Page | Focus::Form => None,
        };

        Page::new(&self.portfolio)
            .sections()
            .into_iter()
            .map(|section| {
                let ctx = RenderContext {
                    palette,
                    portfolio: &self.portfolio,
                    links: links
                        .iter()
                        .filter(|(_, link)| link.section == section)
                        .cloned()
                        .collect(),
                    focused_link,
                    form: &self.form,
                    form_active: self.focus == Focus::Form,
                };
                (section, sections::view_for(section).lines(&ctx))
            })
            .collect()
    }

    /// Line offset of each section's top when wrapped to `width`, in
    /// [`Section::ALL`] order, followed by the total page height.
    #[must_use]
    pub fn section_offsets(&self, width: u16) -> ([usize; 5], usize) {
        let palette = self.palette();
        let mut offsets = [0; 5];
        let mut total = 0;
        for (section, lines) in self.section_lines(&palette) {
            offsets[section.index()] = total;
            total += Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .line_count(width.max(1));
        }
        (offsets, total)
    }

    /// Largest scroll offset that still fills the viewport.
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        let (width, height) = self.viewport;
        let (_, total) = self.section_offsets(width);
        total.saturating_sub(usize::from(height))
    }

    /// Scrolls to `offset`, clamped to the page.
    pub fn scroll_to(&mut self, offset: usize) {
        self.jump_target = None;
        self.scroll = offset.min(self.max_scroll());
    }

    /// Scrolls by `delta` lines.
    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.scroll.saturating_add_signed(delta);
        self.scroll_to(target);
    }

    /// Section the reader is at: the last jump target, or the section
    /// containing the first visible line once the page has been scrolled.
    ///
    /// Near the end of the page the scroll is clamped, so a jump target can
    /// start below the first visible line.
    #[must_use]
    pub fn current_section(&self) -> Section {
        if let Some(section) = self.jump_target {
            return section;
        }
        let (offsets, _) = self.section_offsets(self.viewport.0);
        Section::ALL
            .into_iter()
            .rev()
            .find(|section| offsets[section.index()] <= self.scroll)
            .unwrap_or(Section::Hero)
    }

    /// Scrolls so `section` starts at the top of the viewport.
    pub fn jump_to_section(&mut self, section: Section) {
        let (offsets, _) = self.section_offsets(self.viewport.0);
        self.scroll_to(offsets[section.index()]);
        self.jump_target = Some(section);
        debug!(anchor = section.anchor(), scroll = self.scroll, "jumped to section");
    }

    fn section_visible(&self, section: Section) -> bool {
        let (offsets, total) = self.section_offsets(self.viewport.0);
        let start = offsets[section.index()];
        let end = Section::ALL
            .get(section.index() + 1)
            .map_or(total, |next| offsets[next.index()]);
        let view_end = self.scroll + usize::from(self.viewport.1);
        start < view_end && end > self.scroll
    }

    fn focus_link(&mut self, index: usize) {
        self.focus = Focus::Link(index);
        if let Some(link) = self.focused_link() {
            if !self.section_visible(link.section) {
                self.jump_to_section(link.section);
            }
            self.set_status(format!("{} → {}", link.label, link.target.href()));
        }
    }

    /// Moves link focus forward, wrapping around.
    pub fn focus_next_link(&mut self) {
        let count = self.links().len();
        if count == 0 {
            return;
        }
        let next = match self.focus {
            Focus::Link(index) => (index + 1) % count,
            Focus::Page | Focus::Form => 0,
        };
        self.focus_link(next);
    }

    /// Moves link focus backward, wrapping around.
    pub fn focus_previous_link(&mut self) {
        let count = self.links().len();
        if count == 0 {
            return;
        }
        let previous = match self.focus {
            Focus::Link(index) => (index + count - 1) % count,
            Focus::Page | Focus::Form => count - 1,
        };
        self.focus_link(previous);
    }

    /// Follows the focused link.
    ///
    /// In-page links scroll to their anchor. External links are copied to
    /// the clipboard and the page stays where it is.
    pub fn activate_link(&mut self) {
        let Some(link) = self.focused_link() else {
            self.set_status("No link focused (Tab to select one)");
            return;
        };

        match link.target {
            LinkTarget::InPage(section) => {
                self.jump_to_section(section);
                self.set_status(format!("Jumped to #{}", section.anchor()));
            }
            LinkTarget::External(url) => match self.clipboard.copy_text(&url) {
                Ok(()) => self.set_status(format!("Copied {url} to clipboard")),
                Err(e) => self.set_error(format!("Clipboard unavailable ({e}): {url}")),
            },
        }
    }

    /// Toggles the theme and reports the new mode.
    pub fn toggle_theme(&mut self) {
        self.store.toggle_theme();
        self.set_status(format!("Theme: {}", self.store.theme()));
    }

    /// Gives the contact form keyboard focus.
    pub fn focus_form(&mut self) {
        self.focus = Focus::Form;
        self.jump_to_section(Section::Contact);
        self.set_status("Writing a message (Esc to leave)");
    }

    /// Returns keyboard focus to the page. The status bar goes back to key
    /// hints.
    pub fn leave_form(&mut self) {
        self.focus = Focus::Page;
        self.set_status("");
    }

    /// Submits the contact form to the configured backend.
    pub fn submit_form(&mut self) {
        match self.form.submit(self.backend.as_ref()) {
            Ok(ack) => match ack.reference {
                Some(reference) => self.set_status(format!("Message sent ({reference})")),
                None => self.set_status("Message sent"),
            },
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self) {
        self.help = match self.help {
            Some(_) => None,
            None => Some(HelpOverlayState::new()),
        };
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(state, mouse),
                // Resize and everything else re-render on the next pass
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &mut AppState) {
    let palette = state.palette();

    // Fill entire screen with the theme background first
    f.render_widget(Block::default().style(palette.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(f.area());
    let page_area = chunks[0];

    // Layout can change with the width, so the scroll is re-clamped each frame
    state.viewport = (page_area.width, page_area.height);
    state.scroll = state.scroll.min(state.max_scroll());

    let lines: Vec<Line<'static>> = state
        .section_lines(&palette)
        .into_iter()
        .flat_map(|(_, lines)| lines)
        .collect();
    let page = Paragraph::new(lines)
        .style(palette.base())
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(state.scroll).unwrap_or(u16::MAX), 0));
    f.render_widget(page, page_area);

    ThemeToggle::render(f, page_area, &palette);
    StatusBar::render(f, chunks[1], state, &palette);

    if let Some(help) = &state.help {
        help.render(f, f.area(), &palette);
    }
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use ratatui::backend::TestBackend;

    fn state() -> AppState {
        AppState::new(ThemeStore::new(Theme::Light), Portfolio::builtin())
            .with_clipboard(Box::new(MemoryClipboard::new()))
    }

    #[test]
    fn test_section_offsets_increase() {
        let state = state();
        let (offsets, total) = state.section_offsets(80);
        assert_eq!(offsets[0], 0);
        for pair in offsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(total > offsets[4]);
    }

    #[test]
    fn test_narrow_width_wraps_taller() {
        let state = state();
        let (_, wide) = state.section_offsets(120);
        let (_, narrow) = state.section_offsets(30);
        assert!(narrow > wide);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = state();
        state.scroll_by(-5);
        assert_eq!(state.scroll, 0);
        state.scroll_to(usize::MAX);
        assert_eq!(state.scroll, state.max_scroll());
    }

    #[test]
    fn test_jump_to_section_updates_current_section() {
        let mut state = state();
        state.jump_to_section(Section::Skills);
        assert_eq!(state.current_section(), Section::Skills);
        state.jump_to_section(Section::Hero);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_jump_near_end_reports_target_until_scrolled() {
        let mut state = state();
        state.viewport = (120, 57);
        state.jump_to_section(Section::Contact);
        assert_eq!(state.scroll, state.max_scroll());
        assert_eq!(state.current_section(), Section::Contact);

        state.scroll_by(-1);
        let (offsets, _) = state.section_offsets(120);
        let expected = Section::ALL
            .into_iter()
            .rev()
            .find(|s| offsets[s.index()] <= state.scroll)
            .unwrap();
        assert_eq!(state.current_section(), expected);
    }

    #[test]
    fn test_link_focus_wraps() {
        let mut state = state();
        let count = state.links().len();
        state.focus_previous_link();
        assert_eq!(state.focus, Focus::Link(count - 1));
        state.focus_next_link();
        assert_eq!(state.focus, Focus::Link(0));
    }

    #[test]
    fn test_activate_in_page_link_scrolls() {
        let mut state = state();
        // Second hero link is "View Work" → #projects
        state.focus = Focus::Link(1);
        state.activate_link();
        let (offsets, _) = state.section_offsets(state.viewport.0);
        assert_eq!(
            state.scroll,
            offsets[Section::Projects.index()].min(state.max_scroll())
        );
        assert!(state.status_message.contains("#projects"));
    }

    #[test]
    fn test_activate_external_link_keeps_scroll() {
        let mut state = state();
        state.focus = Focus::Link(2);
        state.activate_link();
        assert_eq!(state.scroll, 0);
        assert!(state.status_message.contains("https://github.com/"));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_submit_without_backend_keeps_input() {
        let mut state = state();
        state.focus_form();
        state.form.insert_char('x');
        state.submit_form();
        assert_eq!(
            state.error_message.as_deref(),
            Some("contact form submission is not configured")
        );
        assert_eq!(state.form.name, "x");
    }

    #[test]
    fn test_render_shows_toggle_label() {
        let mut state = state();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| render(f, &mut state)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Light"));

        state.toggle_theme();
        terminal.draw(|f| render(f, &mut state)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Dark"));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 80, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 40);
        assert_eq!(inner.x, 20);
    }
}
