//! Overlay lifecycle: the scroll lock and the modal controller.

use super::action::Action;
use super::hotkeys::{Chord, HotkeyDispatcher, Subscription};
use crate::components::modals::helpers::{centered_rect, contains};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;

/// Freezes the main content pane while any guard is alive.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.holders.get() + 1;
        self.holders.set(holders);
        tracing::debug!(holders, "scroll lock acquired");
        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.get()
    }
}

#[must_use = "the scroll lock is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        tracing::debug!(holders, "scroll lock released");
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OverlayContext<'a> {
    pub hotkeys: &'a HotkeyDispatcher,
    pub scroll_lock: &'a ScrollLock,
}

/// What an open overlay holds: Escape bound to its close action, plus the scroll lock.
#[derive(Debug)]
pub struct Overlay {
    _escape: Subscription,
    _scroll: ScrollLockGuard,
}

impl Overlay {
    pub fn acquire(ctx: OverlayContext<'_>, on_close: Action) -> Self {
        Self {
            _escape: ctx.hotkeys.subscribe(Chord::Key(KeyCode::Esc), on_close),
            _scroll: ctx.scroll_lock.acquire(),
        }
    }
}

/// A centered dialog whose open state belongs to the caller.
///
/// The caller passes its flag to [`Modal::sync`] after every state change.
/// The only thing kept here is the [`Overlay`] of the last open sync, and
/// dropping the modal releases it like a close would.
#[derive(Debug)]
pub struct Modal {
    title: Option<String>,
    on_close: Action,
    percent_x: u16,
    percent_y: u16,
    overlay: Option<Overlay>,
}

impl Modal {
    #[must_use]
    pub fn new(title: Option<&str>, on_close: Action) -> Self {
        Self {
            title: title.map(str::to_string),
            on_close,
            percent_x: 60,
            percent_y: 50,
            overlay: None,
        }
    }

    #[must_use]
    pub fn with_size(mut self, percent_x: u16, percent_y: u16) -> Self {
        self.percent_x = percent_x;
        self.percent_y = percent_y;
        self
    }

    pub fn sync(&mut self, is_open: bool, ctx: OverlayContext<'_>) {
        match (is_open, self.overlay.is_some()) {
            (true, false) => {
                tracing::debug!(title = ?self.title, "modal opened");
                self.overlay = Some(Overlay::acquire(ctx, self.on_close.clone()));
            }
            (false, true) => {
                tracing::debug!(title = ?self.title, "modal closed");
                self.overlay = None;
            }
            _ => {}
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay.is_some()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn on_close(&self) -> &Action {
        &self.on_close
    }

    #[must_use]
    pub fn area(&self, terminal_area: Rect) -> Rect {
        centered_rect(self.percent_x, self.percent_y, terminal_area)
    }

    /// A left click on the backdrop closes; a click on the dialog does nothing.
    #[must_use]
    pub fn click(&self, terminal_area: Rect, column: u16, row: u16) -> Option<Action> {
        if !self.is_open() {
            return None;
        }
        if contains(self.area(terminal_area), column, row) {
            None
        } else {
            Some(self.on_close.clone())
        }
    }
}
