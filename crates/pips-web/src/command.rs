#![forbid(unsafe_code)]

//! Side effects as values.
//!
//! State transitions never touch the page. They return a [`Cmd`]; the
//! controller resolves it into [`HostCommand`]s, which the host applies to
//! the DOM and may skip when an element is missing.

use serde::{Deserialize, Serialize};

/// Where keyboard focus should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    /// The overlay panel.
    Overlay,
    /// The i-th catalog trigger control.
    Trigger(usize),
}

/// Effects requested by the overlay state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No operation.
    #[default]
    None,
    /// Execute commands in order.
    Batch(Vec<Cmd>),
    /// Redraw the content container from catalog record `index`.
    Render(usize),
    /// Toggle the overlay's active class.
    SetActive(bool),
    /// Lock or release page scrolling behind the overlay.
    LockScroll(bool),
    /// Move keyboard focus.
    Focus(FocusTarget),
}

impl Cmd {
    /// Combine commands, dropping no-ops.
    #[must_use]
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or_default(),
            _ => Self::Batch(cmds),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Leaf commands in execution order.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<Self>) {
        match self {
            Self::None => {}
            Self::Batch(cmds) => {
                for cmd in cmds {
                    cmd.flatten_into(out);
                }
            }
            leaf => out.push(leaf),
        }
    }

    /// Stable name for tracing.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Batch(_) => "Batch",
            Self::Render(_) => "Render",
            Self::SetActive(_) => "SetActive",
            Self::LockScroll(_) => "LockScroll",
            Self::Focus(_) => "Focus",
        }
    }
}

/// Serializable instruction for the host page.
///
/// JSON form is `kind`-tagged, e.g. `{"kind":"set_active","active":true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostCommand {
    /// Append the overlay shell to the page. Emitted once, at init.
    MountShell { html: String },
    /// Replace the overlay content container's markup.
    SetContent { html: String },
    /// Add or remove the `active` class on the overlay and its panel.
    SetActive { active: bool },
    /// Set or clear `overflow: hidden` on the page body.
    LockPageScroll { locked: bool },
    /// Focus the overlay panel or a trigger control.
    Focus { target: FocusTarget },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn batch_drops_noops_and_unwraps_singletons() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::None]), Cmd::None);
        assert_eq!(
            Cmd::batch(vec![Cmd::None, Cmd::Render(2)]),
            Cmd::Render(2)
        );
        assert_eq!(
            Cmd::batch(vec![Cmd::Render(1), Cmd::SetActive(true)]),
            Cmd::Batch(vec![Cmd::Render(1), Cmd::SetActive(true)])
        );
    }

    #[test]
    fn flatten_preserves_order() {
        let cmd = Cmd::Batch(vec![
            Cmd::Render(0),
            Cmd::Batch(vec![Cmd::SetActive(true), Cmd::None, Cmd::LockScroll(true)]),
            Cmd::Focus(FocusTarget::Overlay),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![
                Cmd::Render(0),
                Cmd::SetActive(true),
                Cmd::LockScroll(true),
                Cmd::Focus(FocusTarget::Overlay),
            ]
        );
    }

    #[test]
    fn host_command_json_shape() {
        let json = serde_json::to_string(&HostCommand::LockPageScroll { locked: true }).unwrap();
        assert_eq!(json, r#"{"kind":"lock_page_scroll","locked":true}"#);
        let json = serde_json::to_string(&HostCommand::Focus {
            target: FocusTarget::Trigger(3),
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"focus","target":{"trigger":3}}"#);
    }
}
