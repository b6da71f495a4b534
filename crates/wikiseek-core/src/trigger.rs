//! Trigger wiring: connects a search field and a navigator to the redirector.
//!
//! The widget receives its collaborators explicitly instead of looking them up,
//! so it can be driven without a live UI. Activation and the Enter key share
//! one path: [`SearchWidget::key_press`] calls [`SearchWidget::activate`].

use crate::redirector::{Action, Redirector};

/// Source of the text to search for, read at trigger time.
pub trait SearchField {
    fn current_text(&self) -> String;
}

impl SearchField for str {
    fn current_text(&self) -> String {
        self.to_string()
    }
}

impl SearchField for String {
    fn current_text(&self) -> String {
        self.clone()
    }
}

impl<T: SearchField + ?Sized> SearchField for &T {
    fn current_text(&self) -> String {
        (**self).current_text()
    }
}

/// Capability to move the user to a URL (full-page navigation).
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

impl<T: Navigator + ?Sized> Navigator for &mut T {
    fn navigate(&mut self, url: &str) {
        (**self).navigate(url)
    }
}

/// Navigator that remembers every URL it was sent to.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) {
        self.visited.push(url.to_string());
    }
}

/// Key signal delivered while the field has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(char),
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Explicit activation (button press).
    Activate,
    KeyPress(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Triggered,
}

/// A search field plus activation control bound to a navigator.
pub struct SearchWidget<F, N> {
    redirector: Redirector,
    field: F,
    navigator: N,
    state: WidgetState,
}

impl<F: SearchField, N: Navigator> SearchWidget<F, N> {
    pub fn new(field: F, navigator: N) -> Self {
        Self::with_redirector(Redirector::default(), field, navigator)
    }

    pub fn with_redirector(redirector: Redirector, field: F, navigator: N) -> Self {
        Self {
            redirector,
            field,
            navigator,
            state: WidgetState::Idle,
        }
    }

    /// Primary trigger. Evaluates the current text and navigates when the
    /// result is [`Action::Navigate`].
    pub fn activate(&mut self) -> Action {
        self.state = WidgetState::Triggered;
        let text = self.field.current_text();
        let action = self.redirector.attempt(&text);
        if let Action::Navigate(url) = &action {
            self.navigator.navigate(url);
        }
        self.state = WidgetState::Idle;
        action
    }

    /// Secondary trigger. Enter behaves exactly like activation; other keys
    /// are ignored and return `None`.
    pub fn key_press(&mut self, key: &Key) -> Option<Action> {
        match key {
            Key::Enter => Some(self.activate()),
            _ => None,
        }
    }

    pub fn dispatch(&mut self, event: &TriggerEvent) -> Option<Action> {
        match event {
            TriggerEvent::Activate => Some(self.activate()),
            TriggerEvent::KeyPress(key) => self.key_press(key),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_parts(self) -> (F, N) {
        (self.field, self.navigator)
    }
}
