#![forbid(unsafe_code)]

//! Overlay controller: routes host input to the state machine and the
//! gesture classifier, and owns the two debounce timers.
//!
//! # Routing
//!
//! | Input                          | Effect (only while open unless noted) |
//! |--------------------------------|---------------------------------------|
//! | click trigger `i`              | `open(i)` (any time)                  |
//! | click close / backdrop         | `close()`                             |
//! | click previous / next          | `previous()` / `next()`               |
//! | key `Escape`                   | `close()`                             |
//! | key `ArrowLeft` / `ArrowRight` | `previous()` / `next()`               |
//! | touch start / move / end       | gesture session; navigate or dismiss  |
//! | scroll                         | mark scrolling, restart settle timer  |
//!
//! Timer callbacks are idempotent: a timer that fires after the state it
//! was meant for is gone (overlay closed, newer touch started) changes
//! nothing.

use core::time::Duration;

use pips_catalog::Catalog;
use pips_core::event::{ClickTarget, InputEvent, KeyCode, KeyInput, TouchInput, TouchPhase};
use pips_core::gesture::{GestureAction, GestureClassifier, NavDirection};
use pips_core::timer::TimerScheduler;

use crate::command::{Cmd, HostCommand};
use crate::config::OverlayConfig;
use crate::overlay::OverlayState;
use crate::render::render_product;

/// The controller's debounce timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Clears the scroll-active flag once scrolling has been quiet.
    ScrollSettle,
    /// Discards an ended touch session.
    TouchGrace,
}

#[derive(Debug, Clone)]
pub struct OverlayController<S> {
    catalog: Catalog,
    state: OverlayState,
    gesture: GestureClassifier,
    timers: S,
    config: OverlayConfig,
}

impl<S: TimerScheduler<TimerKind>> OverlayController<S> {
    #[must_use]
    pub fn new(catalog: Catalog, config: OverlayConfig, timers: S) -> Self {
        Self {
            state: OverlayState::new(catalog.len()),
            gesture: GestureClassifier::new(config.gesture.clone()),
            catalog,
            timers,
            config,
        }
    }

    // --- Operations ---

    pub fn open(&mut self, index: usize) -> Cmd {
        self.state.open(index)
    }

    /// Close the overlay and drop any touch in progress.
    pub fn close(&mut self) -> Cmd {
        let cmd = self.state.close();
        if !cmd.is_none() {
            self.gesture.cancel();
            self.gesture.settle_scroll();
            self.timers.cancel(&TimerKind::TouchGrace);
            self.timers.cancel(&TimerKind::ScrollSettle);
        }
        cmd
    }

    pub fn next(&mut self) -> Cmd {
        self.state.next()
    }

    pub fn previous(&mut self) -> Cmd {
        self.state.previous()
    }

    /// Route one host input event observed at `now`.
    pub fn handle_event(&mut self, event: &InputEvent, now: Duration) -> Cmd {
        match event {
            InputEvent::Click(target) => self.handle_click(*target),
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Touch(touch) => self.handle_touch(touch, now),
            InputEvent::Scroll(scroll) => {
                if self.state.is_open() {
                    self.gesture.note_scroll();
                    self.timers.schedule(
                        TimerKind::ScrollSettle,
                        now.saturating_add(self.config.scroll_settle()),
                    );
                    tracing::trace!(scroll_top = scroll.scroll_top, "overlay scrolled");
                }
                Cmd::None
            }
        }
    }

    /// A debounce timer came due.
    pub fn on_timer(&mut self, kind: TimerKind) -> Cmd {
        match kind {
            TimerKind::ScrollSettle => self.gesture.settle_scroll(),
            TimerKind::TouchGrace => self.gesture.release(),
        }
        tracing::trace!(?kind, "timer fired");
        Cmd::None
    }

    /// Turn a command into host instructions, rendering content as needed.
    #[must_use]
    pub fn resolve(&self, cmd: Cmd) -> Vec<HostCommand> {
        cmd.flatten()
            .into_iter()
            .filter_map(|leaf| match leaf {
                Cmd::Render(index) => self.catalog.get(index).map(|record| {
                    HostCommand::SetContent {
                        html: render_product(record),
                    }
                }),
                Cmd::SetActive(active) => Some(HostCommand::SetActive { active }),
                Cmd::LockScroll(locked) => Some(HostCommand::LockPageScroll { locked }),
                Cmd::Focus(target) => Some(HostCommand::Focus { target }),
                Cmd::None | Cmd::Batch(_) => None,
            })
            .collect()
    }

    // --- Accessors ---

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    #[must_use]
    pub fn gesture(&self) -> &GestureClassifier {
        &self.gesture
    }

    #[must_use]
    pub fn timers(&self) -> &S {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut S {
        &mut self.timers
    }

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    // --- Private helpers ---

    fn handle_click(&mut self, target: ClickTarget) -> Cmd {
        match target {
            ClickTarget::Trigger(index) => self.open(index),
            ClickTarget::Close | ClickTarget::Backdrop => self.close(),
            ClickTarget::Previous => self.previous(),
            ClickTarget::Next => self.next(),
            ClickTarget::Panel => Cmd::None,
        }
    }

    fn handle_key(&mut self, key: &KeyInput) -> Cmd {
        if !self.state.is_open() {
            return Cmd::None;
        }
        match key.code {
            KeyCode::Escape => self.close(),
            KeyCode::Left => self.previous(),
            KeyCode::Right => self.next(),
            KeyCode::Other(_) => Cmd::None,
        }
    }

    fn handle_touch(&mut self, touch: &TouchInput, now: Duration) -> Cmd {
        if !self.state.is_open() {
            return Cmd::None;
        }
        match touch.phase {
            TouchPhase::Start => {
                let Some(point) = touch.primary() else {
                    return Cmd::None;
                };
                self.timers.cancel(&TimerKind::TouchGrace);
                self.gesture.begin(point.x, point.y, touch.scroll_top, now);
                Cmd::None
            }
            TouchPhase::Move => {
                let Some(point) = touch.primary() else {
                    return Cmd::None;
                };
                match self.gesture.sample(point.x, point.y, touch.scroll_top, now) {
                    GestureAction::None => Cmd::None,
                    GestureAction::Navigate(NavDirection::Next) => self.next(),
                    GestureAction::Navigate(NavDirection::Previous) => self.previous(),
                    GestureAction::Dismiss => self.close(),
                }
            }
            TouchPhase::End => {
                if self.gesture.end() {
                    self.timers.schedule(
                        TimerKind::TouchGrace,
                        now.saturating_add(self.config.touch_grace()),
                    );
                }
                Cmd::None
            }
            TouchPhase::Cancel => {
                self.gesture.cancel();
                self.timers.cancel(&TimerKind::TouchGrace);
                Cmd::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::FocusTarget;
    use pips_catalog::{Category, ProductCard, SchemaRegistry, load};
    use pips_core::event::{ScrollInput, TouchInput};
    use pips_core::gesture::Classification;
    use pips_core::timer::VirtualTimers;
    use pretty_assertions::assert_eq;

    type Controller = OverlayController<VirtualTimers<TimerKind>>;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller(n: usize) -> Controller {
        let cards: Vec<_> = (0..n)
            .map(|i| ProductCard::named(format!("Product {i}")).with_price("£10.00"))
            .collect();
        let catalog = load(&cards, Category::Blade, &SchemaRegistry::builtin());
        OverlayController::new(catalog, OverlayConfig::default(), VirtualTimers::new())
    }

    fn touch(phase: TouchPhase, x: f32, y: f32, scroll_top: f32) -> InputEvent {
        InputEvent::Touch(TouchInput::single(phase, x, y, scroll_top))
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyInput::new(code))
    }

    #[test]
    fn trigger_click_opens_and_resolves_content() {
        let mut c = controller(3);
        let cmd = c.handle_event(&InputEvent::Click(ClickTarget::Trigger(2)), ms(0));
        let host = c.resolve(cmd);
        assert_eq!(host.len(), 4);
        let HostCommand::SetContent { html } = &host[0] else {
            panic!("expected content first");
        };
        assert!(html.contains("Product 2"));
        assert_eq!(host[1], HostCommand::SetActive { active: true });
        assert_eq!(host[2], HostCommand::LockPageScroll { locked: true });
        assert_eq!(host[3], HostCommand::Focus { target: FocusTarget::Overlay });
    }

    #[test]
    fn keys_only_act_while_open() {
        let mut c = controller(3);
        assert_eq!(c.handle_event(&key(KeyCode::Right), ms(0)), Cmd::None);
        assert_eq!(c.state().current_index(), None);

        c.open(1);
        assert_eq!(c.handle_event(&key(KeyCode::Right), ms(0)), Cmd::Render(2));
        assert_eq!(c.handle_event(&key(KeyCode::Left), ms(0)), Cmd::Render(1));
        assert_eq!(
            c.handle_event(&key(KeyCode::Other("Enter".into())), ms(0)),
            Cmd::None
        );
        c.handle_event(&key(KeyCode::Escape), ms(0));
        assert!(!c.state().is_open());
    }

    #[test]
    fn backdrop_closes_but_panel_does_not() {
        let mut c = controller(2);
        c.open(0);
        assert_eq!(c.handle_event(&InputEvent::Click(ClickTarget::Panel), ms(0)), Cmd::None);
        assert!(c.state().is_open());
        c.handle_event(&InputEvent::Click(ClickTarget::Backdrop), ms(0));
        assert!(!c.state().is_open());
    }

    #[test]
    fn shell_nav_buttons_navigate() {
        let mut c = controller(3);
        c.open(1);
        assert_eq!(
            c.handle_event(&InputEvent::Click(ClickTarget::Next), ms(0)),
            Cmd::Render(2)
        );
        assert_eq!(
            c.handle_event(&InputEvent::Click(ClickTarget::Previous), ms(0)),
            Cmd::Render(1)
        );
    }

    #[test]
    fn horizontal_swipe_navigates_once() {
        let mut c = controller(3);
        c.open(0);
        c.handle_event(&touch(TouchPhase::Start, 300.0, 300.0, 0.0), ms(0));
        let cmd = c.handle_event(&touch(TouchPhase::Move, 215.0, 310.0, 0.0), ms(40));
        assert_eq!(cmd, Cmd::Render(1));
        let cmd = c.handle_event(&touch(TouchPhase::Move, 50.0, 310.0, 0.0), ms(60));
        assert_eq!(cmd, Cmd::None);
        assert_eq!(c.state().current_index(), Some(1));
        assert_eq!(c.gesture().classification(), Some(Classification::Navigating));
    }

    #[test]
    fn fast_downward_swipe_at_top_dismisses() {
        let mut c = controller(2);
        c.open(1);
        c.handle_event(&touch(TouchPhase::Start, 200.0, 100.0, 0.0), ms(1_000));
        let cmd = c.handle_event(&touch(TouchPhase::Move, 200.0, 350.0, 0.0), ms(1_200));
        assert_eq!(
            cmd.flatten(),
            vec![
                Cmd::SetActive(false),
                Cmd::LockScroll(false),
                Cmd::Focus(FocusTarget::Trigger(1)),
            ]
        );
        assert!(c.gesture().session().is_none());
    }

    #[test]
    fn slow_downward_swipe_does_nothing() {
        let mut c = controller(2);
        c.open(0);
        c.handle_event(&touch(TouchPhase::Start, 200.0, 100.0, 0.0), ms(0));
        let cmd = c.handle_event(&touch(TouchPhase::Move, 200.0, 350.0, 0.0), ms(400));
        assert_eq!(cmd, Cmd::None);
        assert!(c.state().is_open());
    }

    #[test]
    fn scrolling_suppresses_swipes_until_settled() {
        let mut c = controller(3);
        c.open(0);
        c.handle_event(&touch(TouchPhase::Start, 300.0, 300.0, 40.0), ms(0));
        c.handle_event(
            &InputEvent::Scroll(ScrollInput { scroll_top: 42.0 }),
            ms(10),
        );
        assert!(c.gesture().is_scroll_active());
        assert!(c.timers().is_pending(&TimerKind::ScrollSettle));

        let cmd = c.handle_event(&touch(TouchPhase::Move, 100.0, 300.0, 42.0), ms(30));
        assert_eq!(cmd, Cmd::None);
        assert_eq!(c.gesture().classification(), Some(Classification::Scrolling));

        c.on_timer(TimerKind::ScrollSettle);
        assert!(!c.gesture().is_scroll_active());
    }

    #[test]
    fn touch_end_schedules_grace_and_new_touch_cancels_it() {
        let mut c = controller(2);
        c.open(0);
        c.handle_event(&touch(TouchPhase::Start, 10.0, 10.0, 0.0), ms(0));
        c.handle_event(
            &InputEvent::Touch(TouchInput {
                phase: TouchPhase::End,
                touches: Vec::new(),
                scroll_top: 0.0,
            }),
            ms(50),
        );
        assert_eq!(c.timers().deadline_of(&TimerKind::TouchGrace), Some(ms(150)));

        c.handle_event(&touch(TouchPhase::Start, 20.0, 20.0, 0.0), ms(80));
        assert!(!c.timers().is_pending(&TimerKind::TouchGrace));

        // A stale grace callback leaves the live session alone.
        c.on_timer(TimerKind::TouchGrace);
        assert!(c.gesture().session().is_some());
    }

    #[test]
    fn grace_timer_releases_ended_session() {
        let mut c = controller(2);
        c.open(0);
        c.handle_event(&touch(TouchPhase::Start, 10.0, 10.0, 0.0), ms(0));
        c.handle_event(&touch(TouchPhase::End, 10.0, 10.0, 0.0), ms(20));
        assert!(c.gesture().session().is_some_and(|s| s.is_ended()));
        c.on_timer(TimerKind::TouchGrace);
        assert!(c.gesture().session().is_none());
        c.on_timer(TimerKind::TouchGrace);
        assert!(c.gesture().session().is_none());
    }

    #[test]
    fn touches_ignored_while_closed() {
        let mut c = controller(2);
        c.handle_event(&touch(TouchPhase::Start, 10.0, 10.0, 0.0), ms(0));
        assert!(c.gesture().session().is_none());
        c.handle_event(&InputEvent::Scroll(ScrollInput { scroll_top: 5.0 }), ms(0));
        assert!(!c.gesture().is_scroll_active());
    }

    #[test]
    fn close_cancels_pending_timers() {
        let mut c = controller(2);
        c.open(0);
        c.handle_event(&InputEvent::Scroll(ScrollInput { scroll_top: 5.0 }), ms(0));
        c.handle_event(&touch(TouchPhase::Start, 10.0, 10.0, 0.0), ms(0));
        c.handle_event(&touch(TouchPhase::End, 10.0, 10.0, 0.0), ms(5));
        c.close();
        assert!(c.timers().is_empty());
        assert!(c.gesture().session().is_none());
    }
}
