//! Process-wide key chords.
//!
//! A [`HotkeyDispatcher`] is a handle to one registry of listeners. Views
//! subscribe chords for as long as they are mounted and get a
//! [`Subscription`] back. Dropping the subscription removes the listener, so
//! a view that is mounted again never leaves a stale handler behind.

use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chord {
    /// `Ctrl+<c>` or `Cmd+<c>`. Fires even while a text input has focus.
    Command(char),
    /// `<c>` with no Ctrl/Alt/Cmd held. Never fires while a text input has focus.
    Bare(char),
    /// A non-character key such as `Esc`.
    Key(KeyCode),
}

impl Chord {
    #[must_use]
    pub fn matches(&self, key: &KeyEvent, ctx: DispatchContext) -> bool {
        match *self {
            Chord::Command(c) => match key.code {
                KeyCode::Char(k) => {
                    command_held(key.modifiers) && k.eq_ignore_ascii_case(&c)
                }
                _ => false,
            },
            Chord::Bare(c) => {
                !ctx.text_input_focused
                    && !modifier_held(key.modifiers)
                    && key.code == KeyCode::Char(c)
            }
            Chord::Key(code) => key.code == code,
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chord::Command(c) => write!(f, "Ctrl/Cmd+{}", c.to_ascii_uppercase()),
            Chord::Bare(c) => write!(f, "{c}"),
            Chord::Key(KeyCode::Esc) => f.write_str("Esc"),
            Chord::Key(code) => write!(f, "{code:?}"),
        }
    }
}

fn command_held(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}

// Shift is allowed: several layouts need it to type `/`.
fn modifier_held(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
    )
}

/// What the dispatcher needs to know about focus when a key arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Also set while an overlay is open: focus is contained in it.
    pub text_input_focused: bool,
}

#[derive(Debug)]
struct Listener {
    id: u64,
    chord: Chord,
    action: Action,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

#[derive(Debug, Clone, Default)]
pub struct HotkeyDispatcher {
    registry: Rc<RefCell<Registry>>,
}

impl HotkeyDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `chord` until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, chord: Chord, action: Action) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        tracing::trace!(%chord, ?action, id, "hotkey subscribed");
        registry.listeners.push(Listener { id, chord, action });
        Subscription {
            id,
            chord,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Resolves `key` against the newest matching listener.
    ///
    /// `Some` means the key is consumed and must not reach any other handler.
    #[must_use]
    pub fn dispatch(&self, key: &KeyEvent, ctx: DispatchContext) -> Option<Action> {
        self.registry
            .borrow()
            .listeners
            .iter()
            .rev()
            .find(|l| l.chord.matches(key, ctx))
            .map(|l| l.action.clone())
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    #[must_use]
    pub fn is_subscribed(&self, chord: Chord) -> bool {
        self.registry
            .borrow()
            .listeners
            .iter()
            .any(|l| l.chord == chord)
    }
}

/// Keeps a listener registered. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes it immediately"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    chord: Chord,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    #[must_use]
    pub fn chord(&self) -> Chord {
        self.chord
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|l| l.id != self.id);
            tracing::trace!(chord = %self.chord, id = self.id, "hotkey unsubscribed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    const FREE: DispatchContext = DispatchContext {
        text_input_focused: false,
    };
    const TYPING: DispatchContext = DispatchContext {
        text_input_focused: true,
    };

    #[test]
    fn test_command_chord_accepts_ctrl_and_cmd() {
        let chord = Chord::Command('k');
        assert!(chord.matches(&key(KeyCode::Char('k'), KeyModifiers::CONTROL), FREE));
        assert!(chord.matches(&key(KeyCode::Char('k'), KeyModifiers::SUPER), FREE));
        assert!(chord.matches(&key(KeyCode::Char('K'), KeyModifiers::CONTROL), TYPING));
        assert!(!chord.matches(&key(KeyCode::Char('k'), KeyModifiers::NONE), FREE));
        assert!(!chord.matches(&key(KeyCode::Char('j'), KeyModifiers::CONTROL), FREE));
    }

    #[test]
    fn test_bare_chord_requires_no_modifier_and_no_text_focus() {
        let chord = Chord::Bare('/');
        assert!(chord.matches(&key(KeyCode::Char('/'), KeyModifiers::NONE), FREE));
        assert!(chord.matches(&key(KeyCode::Char('/'), KeyModifiers::SHIFT), FREE));
        assert!(!chord.matches(&key(KeyCode::Char('/'), KeyModifiers::CONTROL), FREE));
        assert!(!chord.matches(&key(KeyCode::Char('/'), KeyModifiers::ALT), FREE));
        assert!(!chord.matches(&key(KeyCode::Char('/'), KeyModifiers::NONE), TYPING));
    }

    #[test]
    fn test_dispatch_prefers_newest_listener() {
        let hotkeys = HotkeyDispatcher::new();
        let _outer = hotkeys.subscribe(Chord::Key(KeyCode::Esc), Action::CloseHelp);
        let inner = hotkeys.subscribe(Chord::Key(KeyCode::Esc), Action::ClosePalette);

        let esc = key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(hotkeys.dispatch(&esc, FREE), Some(Action::ClosePalette));

        drop(inner);
        assert_eq!(hotkeys.dispatch(&esc, FREE), Some(Action::CloseHelp));
    }

    #[test]
    fn test_drop_unsubscribes() {
        let hotkeys = HotkeyDispatcher::new();
        {
            let _sub = hotkeys.subscribe(Chord::Command('k'), Action::TogglePalette);
            assert_eq!(hotkeys.listener_count(), 1);
            assert!(hotkeys.is_subscribed(Chord::Command('k')));
        }
        assert_eq!(hotkeys.listener_count(), 0);
        let ctrl_k = key(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(hotkeys.dispatch(&ctrl_k, FREE), None);
    }

    #[test]
    fn test_resubscribing_does_not_accumulate() {
        let hotkeys = HotkeyDispatcher::new();
        for _ in 0..5 {
            let _sub = hotkeys.subscribe(Chord::Bare('/'), Action::FocusSearch);
            assert_eq!(hotkeys.listener_count(), 1);
        }
        assert_eq!(hotkeys.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_dispatcher_is_harmless() {
        let hotkeys = HotkeyDispatcher::new();
        let sub = hotkeys.subscribe(Chord::Bare('/'), Action::FocusSearch);
        drop(hotkeys);
        assert_eq!(sub.chord(), Chord::Bare('/'));
        drop(sub);
    }
}
