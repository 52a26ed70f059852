#![forbid(unsafe_code)]

//! Step-based overlay runner.
//!
//! [`OverlayProgram`] drives an [`OverlayController`] without threads,
//! blocking or wall-clock time. The host page controls the loop:
//!
//! 1. Call [`OverlayProgram::init`] once with the page's category tag and
//!    card data; the shell mount command is queued.
//! 2. Push input via [`OverlayProgram::push_event`].
//! 3. Move time via [`OverlayProgram::set_time`] / [`OverlayProgram::advance_time`].
//! 4. Call [`OverlayProgram::step`] to fire due timers and process queued input.
//! 5. Apply [`OverlayProgram::take_outputs`] to the DOM.
//!
//! Step at least once per distinct event timestamp so timers and gesture
//! timing see the time each event actually happened.
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use pips_catalog::ProductCard;
//! use pips_core::event::{ClickTarget, InputEvent};
//! use pips_web::{OverlayConfig, OverlayProgram};
//!
//! let cards = vec![ProductCard::named("Joola Zack"), ProductCard::named("Tibhar K3")];
//! let mut prog = OverlayProgram::initialize("rubber", &cards, OverlayConfig::default());
//!
//! prog.push_event(InputEvent::Click(ClickTarget::Trigger(1)));
//! prog.advance_time(Duration::from_millis(16));
//! let result = prog.step();
//! assert_eq!(result.events_processed, 1);
//!
//! let outputs = prog.take_outputs();
//! assert!(!outputs.commands.is_empty());
//! ```

use core::time::Duration;
use std::collections::VecDeque;

use pips_catalog::{Catalog, Category, ProductCard, SchemaRegistry, load, load_json};
use pips_core::clock::{DeterministicClock, MonotonicClock};
use pips_core::event::InputEvent;
use pips_core::timer::VirtualTimers;

use crate::command::HostCommand;
use crate::config::OverlayConfig;
use crate::controller::{OverlayController, TimerKind};
use crate::error::WebError;
use crate::render::render_shell;

type Controller = OverlayController<VirtualTimers<TimerKind>>;

/// Result of a single [`OverlayProgram::step`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    /// Number of input events processed during this step.
    pub events_processed: u32,
    /// Number of debounce timers that fired during this step.
    pub timers_fired: u32,
    /// Host commands queued during this step.
    pub commands_emitted: usize,
    /// Steps taken so far (monotonically increasing).
    pub step_idx: u64,
}

/// Host commands accumulated since the last [`OverlayProgram::take_outputs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayOutputs {
    pub commands: Vec<HostCommand>,
}

impl OverlayOutputs {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The commands as a JSON array.
    pub fn to_json(&self) -> Result<String, WebError> {
        serde_json::to_string(&self.commands).map_err(WebError::Encode)
    }
}

/// Host-driven, non-blocking overlay runner.
pub struct OverlayProgram {
    config: OverlayConfig,
    registry: SchemaRegistry,
    clock: DeterministicClock,
    events: VecDeque<InputEvent>,
    controller: Option<Controller>,
    outputs: OverlayOutputs,
    step_idx: u64,
}

impl OverlayProgram {
    /// Create an uninitialized program. Invalid config falls back to defaults.
    #[must_use]
    pub fn new(config: OverlayConfig, registry: SchemaRegistry) -> Self {
        Self {
            config: config.or_default_if_invalid(),
            registry,
            clock: DeterministicClock::new(),
            events: VecDeque::new(),
            controller: None,
            outputs: OverlayOutputs::default(),
            step_idx: 0,
        }
    }

    /// Create a program over the built-in tables and initialize it.
    #[must_use]
    pub fn initialize(category_tag: &str, cards: &[ProductCard], config: OverlayConfig) -> Self {
        let mut prog = Self::new(config, SchemaRegistry::builtin());
        prog.init(category_tag, cards);
        prog
    }

    /// Load the catalog and queue the shell mount.
    ///
    /// An unknown or empty category tag means `rubber`. Calling this again
    /// is a no-op.
    pub fn init(&mut self, category_tag: &str, cards: &[ProductCard]) {
        if self.controller.is_some() {
            tracing::warn!("overlay already initialized; ignoring init");
            return;
        }
        let category = Category::from_tag_or_default(category_tag);
        let catalog = load(cards, category, &self.registry);
        self.install(catalog);
    }

    /// [`init`](Self::init) with the cards as a JSON array.
    pub fn init_json(&mut self, category_tag: &str, cards_json: &str) -> Result<(), WebError> {
        if self.controller.is_some() {
            tracing::warn!("overlay already initialized; ignoring init");
            return Ok(());
        }
        let category = Category::from_tag_or_default(category_tag);
        let catalog = load_json(cards_json, category, &self.registry)?;
        self.install(catalog);
        Ok(())
    }

    /// Fire due timers, then process every queued event.
    ///
    /// Before [`init`](Self::init) events stay queued and nothing happens.
    pub fn step(&mut self) -> StepResult {
        let Some(controller) = self.controller.as_mut() else {
            tracing::trace!(queued = self.events.len(), "step before init");
            return StepResult {
                step_idx: self.step_idx,
                ..StepResult::default()
            };
        };
        let now = self.clock.now_mono();
        let before = self.outputs.commands.len();

        let mut timers_fired: u32 = 0;
        for kind in controller.timers_mut().expire(now) {
            timers_fired += 1;
            let cmd = controller.on_timer(kind);
            self.outputs.commands.extend(controller.resolve(cmd));
        }

        let mut events_processed: u32 = 0;
        while let Some(event) = self.events.pop_front() {
            events_processed += 1;
            let cmd = controller.handle_event(&event, now);
            if !cmd.is_none() {
                tracing::debug!(cmd = cmd.type_name(), "event produced commands");
            }
            self.outputs.commands.extend(controller.resolve(cmd));
        }

        self.step_idx += 1;
        StepResult {
            events_processed,
            timers_fired,
            commands_emitted: self.outputs.commands.len() - before,
            step_idx: self.step_idx,
        }
    }

    /// Queue an input event for the next [`step`](Self::step).
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Decode and queue an input event.
    pub fn push_event_json(&mut self, json: &str) -> Result<(), WebError> {
        self.push_event(InputEvent::from_json_str(json)?);
        Ok(())
    }

    /// Advance the deterministic clock by `dt`.
    pub fn advance_time(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }

    /// Set the deterministic clock to an absolute time. Never moves backwards.
    pub fn set_time(&mut self, now: Duration) {
        self.clock.set(now);
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now_mono()
    }

    /// Earliest pending timer deadline, so the host knows when to step next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.controller
            .as_ref()
            .and_then(|c| c.timers().next_deadline())
    }

    /// Take the queued host commands, leaving an empty buffer.
    pub fn take_outputs(&mut self) -> OverlayOutputs {
        std::mem::take(&mut self.outputs)
    }

    /// Read the queued host commands without consuming them.
    #[must_use]
    pub fn outputs(&self) -> &OverlayOutputs {
        &self.outputs
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.controller.is_some()
    }

    #[must_use]
    pub fn controller(&self) -> Option<&Controller> {
        self.controller.as_ref()
    }

    /// Direct access for hosts that call operations without events.
    pub fn controller_mut(&mut self) -> Option<&mut Controller> {
        self.controller.as_mut()
    }

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[must_use]
    pub fn step_idx(&self) -> u64 {
        self.step_idx
    }

    // --- Private helpers ---

    fn install(&mut self, catalog: Catalog) {
        tracing::info!(
            category = %catalog.category(),
            products = catalog.len(),
            "overlay initialized"
        );
        self.outputs
            .commands
            .push(HostCommand::MountShell { html: render_shell() });
        self.controller = Some(OverlayController::new(
            catalog,
            self.config.clone(),
            VirtualTimers::new(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::FocusTarget;
    use pips_core::event::{ClickTarget, KeyCode, KeyInput, ScrollInput, TouchInput, TouchPhase};
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn cards() -> Vec<ProductCard> {
        vec![
            ProductCard::named("Tibhar K3 Pro").with_price("£52.00"),
            ProductCard::named("Joola Zack").with_pricing("£40.00", "£30.00"),
            ProductCard::named("Friendship 729").with_price("£18.00"),
        ]
    }

    fn program() -> OverlayProgram {
        let mut prog = OverlayProgram::initialize("rubber", &cards(), OverlayConfig::default());
        prog.take_outputs();
        prog
    }

    fn kinds(outputs: &OverlayOutputs) -> Vec<&'static str> {
        outputs
            .commands
            .iter()
            .map(|c| match c {
                HostCommand::MountShell { .. } => "mount_shell",
                HostCommand::SetContent { .. } => "set_content",
                HostCommand::SetActive { .. } => "set_active",
                HostCommand::LockPageScroll { .. } => "lock_page_scroll",
                HostCommand::Focus { .. } => "focus",
            })
            .collect()
    }

    #[test]
    fn init_mounts_shell_once() {
        let mut prog = OverlayProgram::initialize("blade", &cards(), OverlayConfig::default());
        assert!(prog.is_initialized());
        assert_eq!(kinds(&prog.take_outputs()), vec!["mount_shell"]);

        prog.init("rubber", &[]);
        assert!(prog.take_outputs().is_empty());
        let controller = prog.controller().unwrap();
        assert_eq!(controller.catalog().category(), Category::Blade);
        assert_eq!(controller.catalog().len(), 3);
    }

    #[test]
    fn unknown_tag_loads_as_rubber() {
        let prog = OverlayProgram::initialize("", &cards(), OverlayConfig::default());
        assert_eq!(
            prog.controller().unwrap().catalog().category(),
            Category::Rubber
        );
    }

    #[test]
    fn events_wait_for_init() {
        let mut prog = OverlayProgram::new(OverlayConfig::default(), SchemaRegistry::builtin());
        prog.push_event(InputEvent::Click(ClickTarget::Trigger(0)));
        assert_eq!(prog.step().events_processed, 0);

        prog.init("rubber", &cards());
        let result = prog.step();
        assert_eq!(result.events_processed, 1);
        assert_eq!(
            kinds(&prog.take_outputs()),
            vec!["mount_shell", "set_content", "set_active", "lock_page_scroll", "focus"]
        );
    }

    #[test]
    fn open_then_escape_returns_focus() {
        let mut prog = program();
        prog.push_event(InputEvent::Click(ClickTarget::Trigger(1)));
        prog.step();
        let opened = prog.take_outputs();
        let HostCommand::SetContent { html } = &opened.commands[0] else {
            panic!("expected content");
        };
        assert!(html.contains("JOOLA ZACK"));
        assert!(html.contains(r#"<del class="modal-price-old">£40.00</del>"#));

        prog.push_event(InputEvent::Key(KeyInput::new(KeyCode::Escape)));
        prog.step();
        assert_eq!(
            prog.take_outputs().commands,
            vec![
                HostCommand::SetActive { active: false },
                HostCommand::LockPageScroll { locked: false },
                HostCommand::Focus {
                    target: FocusTarget::Trigger(1),
                },
            ]
        );
    }

    #[test]
    fn navigation_at_ends_emits_nothing() {
        let mut prog = program();
        prog.push_event(InputEvent::Click(ClickTarget::Trigger(2)));
        prog.step();
        prog.take_outputs();

        prog.push_event(InputEvent::Key(KeyInput::new(KeyCode::Right)));
        let result = prog.step();
        assert_eq!(result.commands_emitted, 0);
        assert_eq!(
            prog.controller().unwrap().state().current_index(),
            Some(2)
        );
    }

    #[test]
    fn scroll_settle_fires_on_time() {
        let mut prog = program();
        prog.push_event(InputEvent::Click(ClickTarget::Trigger(0)));
        prog.step();

        prog.set_time(ms(1_000));
        prog.push_event(InputEvent::Scroll(ScrollInput { scroll_top: 30.0 }));
        prog.step();
        assert_eq!(prog.next_deadline(), Some(ms(1_150)));

        prog.set_time(ms(1_100));
        prog.push_event(InputEvent::Scroll(ScrollInput { scroll_top: 60.0 }));
        prog.step();
        assert_eq!(prog.next_deadline(), Some(ms(1_250)));

        prog.set_time(ms(1_200));
        assert_eq!(prog.step().timers_fired, 0);
        assert!(prog.controller().unwrap().gesture().is_scroll_active());

        prog.set_time(ms(1_250));
        assert_eq!(prog.step().timers_fired, 1);
        assert!(!prog.controller().unwrap().gesture().is_scroll_active());
        assert_eq!(prog.next_deadline(), None);
    }

    #[test]
    fn swipe_sequence_navigates_then_grace_clears_session() {
        let mut prog = program();
        prog.push_event(InputEvent::Click(ClickTarget::Trigger(0)));
        prog.step();
        prog.take_outputs();

        prog.set_time(ms(500));
        prog.push_event(InputEvent::Touch(TouchInput::single(TouchPhase::Start, 300.0, 400.0, 0.0)));
        prog.step();
        prog.set_time(ms(540));
        prog.push_event(InputEvent::Touch(TouchInput::single(TouchPhase::Move, 215.0, 410.0, 0.0)));
        prog.step();
        assert_eq!(kinds(&prog.take_outputs()), vec!["set_content"]);

        prog.set_time(ms(560));
        prog.push_event(InputEvent::Touch(TouchInput::single(TouchPhase::End, 215.0, 410.0, 0.0)));
        prog.step();
        assert_eq!(prog.next_deadline(), Some(ms(660)));

        prog.set_time(ms(660));
        prog.step();
        assert!(prog.controller().unwrap().gesture().session().is_none());
    }

    #[test]
    fn saturated_clock_clamps_timer_deadlines() {
        let mut prog = program();
        prog.push_event(InputEvent::Click(ClickTarget::Trigger(0)));
        prog.step();

        prog.set_time(Duration::MAX);
        prog.push_event(InputEvent::Scroll(ScrollInput { scroll_top: 30.0 }));
        prog.step();
        assert_eq!(prog.next_deadline(), Some(Duration::MAX));
        assert_eq!(prog.step().timers_fired, 1);
        assert!(!prog.controller().unwrap().gesture().is_scroll_active());

        prog.advance_time(Duration::MAX);
        prog.push_event(InputEvent::Touch(TouchInput::single(TouchPhase::Start, 10.0, 10.0, 0.0)));
        prog.push_event(InputEvent::Touch(TouchInput::single(TouchPhase::End, 10.0, 10.0, 0.0)));
        prog.step();
        assert_eq!(prog.next_deadline(), Some(Duration::MAX));
        assert!(prog.controller().unwrap().state().is_open());
    }

    #[test]
    fn json_surface_round_trip() {
        let mut prog = OverlayProgram::new(OverlayConfig::default(), SchemaRegistry::builtin());
        prog.init_json("bat", r#"[{"name":"Yinhe Sunray","price":"£15.00"}]"#)
            .unwrap();
        prog.push_event_json(r#"{"kind":"click","target":{"trigger":0}}"#)
            .unwrap();
        prog.step();
        let json = prog.take_outputs().to_json().unwrap();
        assert!(json.starts_with(r#"[{"kind":"mount_shell""#));
        assert!(json.contains(r#"{"kind":"lock_page_scroll","locked":true}"#));
        assert!(matches!(
            prog.push_event_json(r#"{"kind":"wave"}"#),
            Err(WebError::Input(_))
        ));
    }

    #[test]
    fn invalid_config_uses_defaults() {
        let config = OverlayConfig {
            scroll_settle_ms: 0,
            ..OverlayConfig::default()
        };
        let prog = OverlayProgram::new(config, SchemaRegistry::builtin());
        assert_eq!(prog.config(), &OverlayConfig::default());
    }
}
