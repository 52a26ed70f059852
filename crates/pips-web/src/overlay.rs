#![forbid(unsafe_code)]

//! Overlay open/closed state and the current product index.
//!
//! # Invariants
//!
//! 1. `current_index`, when set, is always `< len`.
//! 2. Navigation is bounded: `next` at the last index and `previous` at 0
//!    change nothing and return [`Cmd::None`].
//! 3. Scroll lock is requested only on the Closed→Open edge and released
//!    only on the Open→Closed edge, so lock/unlock always pair up.
//! 4. The index survives `close`; focus returns to the trigger for the
//!    product that was showing.

use crate::command::{Cmd, FocusTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    len: usize,
    visibility: Visibility,
    current_index: Option<usize>,
}

impl OverlayState {
    /// State for a catalog of `len` products, closed.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    #[inline]
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Show product `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> Cmd {
        if index >= self.len {
            tracing::trace!(index, len = self.len, "open ignored: index out of range");
            return Cmd::None;
        }
        let opening = !self.is_open();
        self.current_index = Some(index);
        self.visibility = Visibility::Open;
        tracing::debug!(index, opening, "overlay open");

        let mut cmds = vec![Cmd::Render(index)];
        if opening {
            cmds.push(Cmd::SetActive(true));
            cmds.push(Cmd::LockScroll(true));
        }
        cmds.push(Cmd::Focus(FocusTarget::Overlay));
        Cmd::batch(cmds)
    }

    pub fn close(&mut self) -> Cmd {
        if !self.is_open() {
            tracing::trace!("close ignored: overlay not open");
            return Cmd::None;
        }
        self.visibility = Visibility::Closed;
        tracing::debug!(index = ?self.current_index, "overlay closed");

        let mut cmds = vec![Cmd::SetActive(false), Cmd::LockScroll(false)];
        if let Some(index) = self.current_index {
            cmds.push(Cmd::Focus(FocusTarget::Trigger(index)));
        }
        Cmd::batch(cmds)
    }

    pub fn next(&mut self) -> Cmd {
        match self.open_index() {
            Some(index) if index + 1 < self.len => self.show(index + 1),
            _ => {
                tracing::trace!(index = ?self.current_index, "next ignored");
                Cmd::None
            }
        }
    }

    pub fn previous(&mut self) -> Cmd {
        match self.open_index() {
            Some(index) if index > 0 => self.show(index - 1),
            _ => {
                tracing::trace!(index = ?self.current_index, "previous ignored");
                Cmd::None
            }
        }
    }

    fn open_index(&self) -> Option<usize> {
        if self.is_open() {
            self.current_index
        } else {
            None
        }
    }

    fn show(&mut self, index: usize) -> Cmd {
        self.current_index = Some(index);
        tracing::debug!(index, "overlay navigated");
        Cmd::Render(index)
    }
}
