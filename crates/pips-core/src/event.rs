#![forbid(unsafe_code)]

//! Deterministic, JSON-friendly input schema for the product overlay.
//!
//! The host page is expected to provide:
//! - DOM `key` strings for keyboard events,
//! - the semantic target of a click (close button, backdrop, trigger N, ...),
//! - client coordinates for touch points, and
//! - the overlay's current `scrollTop` alongside every touch/scroll sample.
//!
//! This module focuses on:
//! - stable key normalization (DOM `key` → [`KeyCode`]),
//! - a closed set of click targets, and
//! - JSON encoding suitable for record/replay.

use serde::{Deserialize, Serialize};

/// Normalized key code.
///
/// The overlay only reacts to three keys; everything else is carried through
/// verbatim so traces stay faithful to what the host saw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Left,
    Right,
    Other(Box<str>),
}

impl KeyCode {
    /// Normalize a DOM `KeyboardEvent.key` value.
    ///
    /// Legacy Edge/IE spellings (`Esc`, `Left`, `Right`) are accepted too.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "ArrowLeft" | "Left" => Self::Left,
            "ArrowRight" | "Right" => Self::Right,
            other => Self::Other(other.into()),
        }
    }

    /// The canonical DOM `key` spelling.
    #[must_use]
    pub fn to_dom_key(&self) -> &str {
        match self {
            Self::Escape => "Escape",
            Self::Left => "ArrowLeft",
            Self::Right => "ArrowRight",
            Self::Other(key) => &**key,
        }
    }
}

/// Normalized key-down event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub code: KeyCode,
    pub repeat: bool,
}

impl KeyInput {
    #[must_use]
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            repeat: false,
        }
    }
}

/// What a click landed on.
///
/// `Trigger(i)` is the i-th "read more" control on the page, in document
/// order; the host resolves the DOM element, the core only sees the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// The overlay's close button.
    Close,
    /// The dimmed backdrop outside the content panel.
    Backdrop,
    /// Anywhere inside the content panel.
    Panel,
    /// The shell's previous-product button.
    Previous,
    /// The shell's next-product button.
    Next,
    /// A catalog trigger control.
    Trigger(usize),
}

/// Phase for touch events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One touch point in client (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Normalized touch event.
///
/// `scroll_top` is the overlay's scroll offset sampled at the same moment.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchInput {
    pub phase: TouchPhase,
    pub touches: Vec<TouchPoint>,
    pub scroll_top: f32,
}

impl TouchInput {
    /// Single-point touch helper.
    #[must_use]
    pub fn single(phase: TouchPhase, x: f32, y: f32, scroll_top: f32) -> Self {
        Self {
            phase,
            touches: vec![TouchPoint::new(x, y)],
            scroll_top,
        }
    }

    /// The first active touch point; gestures only track this one.
    #[must_use]
    pub fn primary(&self) -> Option<TouchPoint> {
        self.touches.first().copied()
    }
}

/// Overlay scroll sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollInput {
    pub scroll_top: f32,
}

/// Normalized, deterministic overlay input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyInput),
    Click(ClickTarget),
    Touch(TouchInput),
    Scroll(ScrollInput),
}

/// Failure to decode a host event.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("malformed input event json: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON encoding used by the host bridge and recorded traces.
///
/// This is intentionally small and stable: a `kind` tag plus the minimum
/// semantic fields needed for replay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEventJson {
    Key {
        key: String,
        #[serde(default)]
        repeat: bool,
    },
    Click {
        target: ClickTarget,
    },
    Touch {
        phase: TouchPhase,
        #[serde(default)]
        touches: Vec<TouchPoint>,
        #[serde(default)]
        scroll_top: f32,
    },
    Scroll {
        scroll_top: f32,
    },
}

impl InputEvent {
    /// Encode this event as a stable JSON string.
    pub fn to_json_string(&self) -> Result<String, InputError> {
        Ok(serde_json::to_string(&InputEventJson::from(self))?)
    }

    /// Decode a host event JSON string.
    ///
    /// Errors occur if the JSON does not match the expected schema.
    pub fn from_json_str(s: &str) -> Result<Self, InputError> {
        let json: InputEventJson = serde_json::from_str(s)?;
        Ok(Self::from(json))
    }
}

impl From<&InputEvent> for InputEventJson {
    fn from(value: &InputEvent) -> Self {
        match value {
            InputEvent::Key(key) => Self::Key {
                key: key.code.to_dom_key().to_string(),
                repeat: key.repeat,
            },
            InputEvent::Click(target) => Self::Click { target: *target },
            InputEvent::Touch(touch) => Self::Touch {
                phase: touch.phase,
                touches: touch.touches.clone(),
                scroll_top: touch.scroll_top,
            },
            InputEvent::Scroll(scroll) => Self::Scroll {
                scroll_top: scroll.scroll_top,
            },
        }
    }
}

impl From<InputEventJson> for InputEvent {
    fn from(value: InputEventJson) -> Self {
        match value {
            InputEventJson::Key { key, repeat } => Self::Key(KeyInput {
                code: KeyCode::from_dom_key(&key),
                repeat,
            }),
            InputEventJson::Click { target } => Self::Click(target),
            InputEventJson::Touch {
                phase,
                touches,
                scroll_top,
            } => Self::Touch(TouchInput {
                phase,
                touches,
                scroll_top,
            }),
            InputEventJson::Scroll { scroll_top } => Self::Scroll(ScrollInput { scroll_top }),
        }
    }
}
