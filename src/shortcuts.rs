//! Centralized shortcut and action system.
//!
//! Key events are looked up per context (`page` or `form`) and resolved to an
//! [`Action`]. The help overlay reads the same table, so documented keys and
//! handled keys cannot drift apart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::page::Section;

/// Context for page navigation.
pub const PAGE: &str = "page";
/// Context while the contact form has focus.
pub const FORM: &str = "form";

/// All possible actions in the terminal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === THEME ===
    ToggleTheme,

    // === SCROLLING ===
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    JumpToSection(Section),

    // === LINKS ===
    NextLink,
    PreviousLink,
    ActivateLink,

    // === CONTACT FORM ===
    FocusForm,
    NextField,
    PreviousField,
    SubmitForm,
    LeaveForm,

    // === GENERAL ===
    ToggleHelp,
    Quit,
}

impl Action {
    /// One-line description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ToggleTheme => "Toggle light/dark theme",
            Self::ScrollUp => "Scroll up one line",
            Self::ScrollDown => "Scroll down one line",
            Self::PageUp => "Scroll up one page",
            Self::PageDown => "Scroll down one page",
            Self::ScrollToTop => "Scroll to the top",
            Self::ScrollToBottom => "Scroll to the bottom",
            Self::JumpToSection(section) => match section {
                Section::Hero => "Jump to #home",
                Section::About => "Jump to #about",
                Section::Skills => "Jump to #skills",
                Section::Projects => "Jump to #projects",
                Section::Contact => "Jump to #contact",
            },
            Self::NextLink => "Focus next link",
            Self::PreviousLink => "Focus previous link",
            Self::ActivateLink => "Follow in-page link / copy external URL",
            Self::FocusForm => "Write a message",
            Self::NextField => "Next field",
            Self::PreviousField => "Previous field",
            Self::SubmitForm => "Send message",
            Self::LeaveForm => "Leave the form",
            Self::ToggleHelp => "Toggle this help",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Maps key events to actions for a given context.
pub struct ShortcutRegistry {
    bindings: HashMap<(&'static str, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_page_shortcuts();
        registry.register_form_shortcuts();
        registry
    }

    fn register_page_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = PAGE;

        self.register(ctx, K::Char('t'), M::NONE, Action::ToggleTheme);

        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::PageUp, M::NONE, Action::PageUp);
        self.register(ctx, K::PageDown, M::NONE, Action::PageDown);
        self.register(ctx, K::Home, M::NONE, Action::ScrollToTop);
        self.register(ctx, K::End, M::NONE, Action::ScrollToBottom);

        for (n, section) in ('1'..='5').zip(Section::ALL) {
            self.register(ctx, K::Char(n), M::NONE, Action::JumpToSection(section));
        }

        self.register(ctx, K::Tab, M::NONE, Action::NextLink);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousLink);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousLink);
        self.register(ctx, K::Enter, M::NONE, Action::ActivateLink);

        self.register(ctx, K::Char('c'), M::NONE, Action::FocusForm);
        self.register(ctx, K::Char('i'), M::NONE, Action::FocusForm);

        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('?'), M::SHIFT, Action::ToggleHelp);

        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Printable keys are text input here, so only control keys are bound.
    fn register_form_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = FORM;

        self.register(ctx, K::Tab, M::NONE, Action::NextField);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousField);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousField);
        self.register(ctx, K::Char('s'), M::CONTROL, Action::SubmitForm);
        self.register(ctx, K::Esc, M::NONE, Action::LeaveForm);
        self.register(ctx, K::Char('t'), M::CONTROL, Action::ToggleTheme);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register(
        &mut self,
        context: &'static str,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &'static str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows of the help overlay: key label and action, grouped per context.
#[must_use]
pub fn help_rows(context: &str) -> &'static [(&'static str, Action)] {
    if context == FORM {
        &[
            ("Tab", Action::NextField),
            ("Shift+Tab", Action::PreviousField),
            ("Ctrl+S", Action::SubmitForm),
            ("Ctrl+T", Action::ToggleTheme),
            ("Esc", Action::LeaveForm),
        ]
    } else {
        &[
            ("t", Action::ToggleTheme),
            ("k / ↑", Action::ScrollUp),
            ("j / ↓", Action::ScrollDown),
            ("PgUp", Action::PageUp),
            ("PgDn", Action::PageDown),
            ("Home", Action::ScrollToTop),
            ("End", Action::ScrollToBottom),
            ("1", Action::JumpToSection(Section::Hero)),
            ("2", Action::JumpToSection(Section::About)),
            ("3", Action::JumpToSection(Section::Skills)),
            ("4", Action::JumpToSection(Section::Projects)),
            ("5", Action::JumpToSection(Section::Contact)),
            ("Tab", Action::NextLink),
            ("Shift+Tab", Action::PreviousLink),
            ("Enter", Action::ActivateLink),
            ("c / i", Action::FocusForm),
            ("?", Action::ToggleHelp),
            ("q / Esc", Action::Quit),
        ]
    }
}
