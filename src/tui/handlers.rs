//! Keyboard and mouse input handling.

use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::shortcuts::{self, Action};

use super::theme_toggle::ThemeToggle;
use super::{AppState, Focus};

/// Lines moved per mouse wheel notch.
const WHEEL_STEP: isize = 3;

/// Handle keyboard input events.
///
/// Returns `true` when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if state.help.is_some() {
        handle_help_key(state, key);
        return Ok(false);
    }

    // Errors stay up until the next keystroke
    state.clear_error();

    let context = if state.focus == Focus::Form {
        shortcuts::FORM
    } else {
        shortcuts::PAGE
    };

    match state.shortcuts.lookup(context, key) {
        Some(action) => dispatch(state, action),
        None if state.focus == Focus::Form => handle_form_input(state, key),
        None => {}
    }

    Ok(state.should_quit)
}

/// Handle mouse input: a left click on the theme toggle flips the theme and
/// the wheel scrolls the page (or the help overlay while it is open).
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => match state.help.as_mut() {
            Some(help) => help.scroll_up(),
            None => state.scroll_by(-WHEEL_STEP),
        },
        MouseEventKind::ScrollDown => match state.help.as_mut() {
            Some(help) => help.scroll_down(),
            None => state.scroll_by(WHEEL_STEP),
        },
        MouseEventKind::Down(MouseButton::Left) if state.help.is_none() => {
            let page_area = Rect::new(0, 0, state.viewport.0, state.viewport.1);
            let toggle = ThemeToggle::area(page_area, state.store.theme());
            if toggle.contains(Position::new(mouse.column, mouse.row)) {
                state.clear_error();
                state.toggle_theme();
            }
        }
        _ => {}
    }
}

fn handle_help_key(state: &mut AppState, key: KeyEvent) {
    let Some(help) = state.help.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => state.help = None,
        KeyCode::Up | KeyCode::Char('k') => help.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => help.scroll_down(),
        _ => {}
    }
}

fn handle_form_input(state: &mut AppState, key: KeyEvent) {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }
    match key.code {
        KeyCode::Char(c) => state.form.insert_char(c),
        KeyCode::Enter => {
            if !state.form.insert_newline() {
                state.form.next_field();
            }
        }
        KeyCode::Backspace => state.form.backspace(),
        _ => {}
    }
}

fn dispatch(state: &mut AppState, action: Action) {
    let page_step = isize::try_from(state.viewport.1.saturating_sub(1).max(1)).unwrap_or(1);

    match action {
        Action::ToggleTheme => state.toggle_theme(),
        Action::ScrollUp => state.scroll_by(-1),
        Action::ScrollDown => state.scroll_by(1),
        Action::PageUp => state.scroll_by(-page_step),
        Action::PageDown => state.scroll_by(page_step),
        Action::ScrollToTop => state.scroll_to(0),
        Action::ScrollToBottom => state.scroll_to(usize::MAX),
        Action::JumpToSection(section) => {
            state.jump_to_section(section);
            state.set_status(format!("#{}", section.anchor()));
        }
        Action::NextLink => state.focus_next_link(),
        Action::PreviousLink => state.focus_previous_link(),
        Action::ActivateLink => state.activate_link(),
        Action::FocusForm => state.focus_form(),
        Action::NextField => state.form.next_field(),
        Action::PreviousField => state.form.previous_field(),
        Action::SubmitForm => state.submit_form(),
        Action::LeaveForm => state.leave_form(),
        Action::ToggleHelp => state.toggle_help(),
        Action::Quit => state.should_quit = true,
    }
}
