#![forbid(unsafe_code)]

//! Touch gesture classification for the product overlay.
//!
//! One finger on the overlay can mean three different things: scroll the
//! long product description, swipe sideways to the neighbouring product, or
//! flick the sheet down to dismiss it. [`GestureClassifier`] watches the
//! samples of one touch session and decides, at most once, which of those it
//! is.
//!
//! # Rules (evaluated on every move sample)
//!
//! 1. Scroll wins. If the overlay's scroll offset drifted more than
//!    `scroll_epsilon` from where the touch started, or the host reported
//!    scroll activity since the touch began, the session becomes
//!    [`Classification::Scrolling`] and is never re-evaluated.
//! 2. Horizontal dominant (`|dx| > |dy|`) past `swipe_threshold` becomes
//!    [`Classification::Navigating`] and emits one navigation. Finger moving
//!    right-to-left is [`NavDirection::Next`].
//! 3. Otherwise (vertical dominant, ties included) dismiss fires only when
//!    the overlay is scrolled to the top (`<= top_tolerance`), the session is
//!    younger than `dismiss_max_elapsed_ms`, and the finger travelled down
//!    more than `dismiss_distance`. Any partial match is no action.
//!
//! # Invariants
//!
//! 1. Classification is sticky: once `Scrolling` or `Navigating`, later
//!    samples of the same session return [`GestureAction::None`].
//! 2. A session emits at most one navigation.
//! 3. Nothing carries over between sessions: [`GestureClassifier::begin`]
//!    starts from `Undetermined` with the scroll-active flag cleared.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigParse, EnvOverrides, check_positive};

pub const ENV_SCROLL_EPSILON: &str = "PIPS_GESTURE_SCROLL_EPSILON";
pub const ENV_SWIPE_THRESHOLD: &str = "PIPS_GESTURE_SWIPE_PX";
pub const ENV_TOP_TOLERANCE: &str = "PIPS_GESTURE_TOP_TOLERANCE";
pub const ENV_DISMISS_DISTANCE: &str = "PIPS_GESTURE_DISMISS_PX";
pub const ENV_DISMISS_MAX_ELAPSED: &str = "PIPS_GESTURE_DISMISS_MS";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tuning constants for gesture classification.
///
/// Distances are CSS pixels. The defaults are the values the storefront
/// shipped with; they are not derived from anything, only tuned by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    /// Scroll offset drift that marks a session as content scrolling.
    /// Default: 5
    pub scroll_epsilon: f32,

    /// Horizontal travel that turns a swipe into a navigation.
    /// Default: 80
    pub swipe_threshold: f32,

    /// Scroll offset still considered "at the top" for dismissal.
    /// Default: 10
    pub top_tolerance: f32,

    /// Downward travel required to dismiss.
    /// Default: 200
    pub dismiss_distance: f32,

    /// Dismiss only fires for sessions younger than this.
    /// Default: 300ms
    pub dismiss_max_elapsed_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            scroll_epsilon: 5.0,
            swipe_threshold: 80.0,
            top_tolerance: 10.0,
            dismiss_distance: 200.0,
            dismiss_max_elapsed_ms: 300,
        }
    }
}

impl GestureConfig {
    #[must_use]
    pub fn dismiss_max_elapsed(&self) -> Duration {
        Duration::from_millis(self.dismiss_max_elapsed_ms)
    }

    /// Apply `PIPS_GESTURE_*` overrides from the process environment.
    #[must_use]
    pub fn from_env() -> ConfigParse<Self> {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply `PIPS_GESTURE_*` overrides using a custom lookup.
    #[must_use]
    pub fn with_env<G>(mut self, get: G) -> ConfigParse<Self>
    where
        G: FnMut(&str) -> Option<String>,
    {
        let mut env = EnvOverrides::new(get);
        env.positive_f32(ENV_SCROLL_EPSILON, "scroll_epsilon", &mut self.scroll_epsilon);
        env.positive_f32(ENV_SWIPE_THRESHOLD, "swipe_threshold", &mut self.swipe_threshold);
        env.positive_f32(ENV_TOP_TOLERANCE, "top_tolerance", &mut self.top_tolerance);
        env.positive_f32(
            ENV_DISMISS_DISTANCE,
            "dismiss_distance",
            &mut self.dismiss_distance,
        );
        env.millis(
            ENV_DISMISS_MAX_ELAPSED,
            "dismiss_max_elapsed_ms",
            &mut self.dismiss_max_elapsed_ms,
        );
        ConfigParse {
            config: self,
            errors: env.finish(),
        }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        check_positive("scroll_epsilon", self.scroll_epsilon, &mut errors);
        check_positive("swipe_threshold", self.swipe_threshold, &mut errors);
        check_positive("top_tolerance", self.top_tolerance, &mut errors);
        check_positive("dismiss_distance", self.dismiss_distance, &mut errors);
        if self.dismiss_max_elapsed_ms == 0 {
            errors.push(ConfigError::new(
                "dismiss_max_elapsed_ms",
                "0",
                "must be > 0",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// What a touch session has been recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    #[default]
    Undetermined,
    Scrolling,
    Navigating,
}

impl Classification {
    /// Whether evaluation has stopped for the session.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Undetermined)
    }
}

/// Direction of a navigation swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDirection {
    Previous,
    Next,
}

/// Outcome of feeding one sample to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureAction {
    #[default]
    None,
    Navigate(NavDirection),
    Dismiss,
}

/// One continuous touch interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchSession {
    start_x: f32,
    start_y: f32,
    start_scroll: f32,
    started_at: Duration,
    classification: Classification,
    /// Finger lifted; waiting out the grace period.
    ended: bool,
}

impl TouchSession {
    #[must_use]
    pub fn start(&self) -> (f32, f32) {
        (self.start_x, self.start_y)
    }

    #[must_use]
    pub fn start_scroll(&self) -> f32 {
        self.start_scroll
    }

    #[must_use]
    pub fn started_at(&self) -> Duration {
        self.started_at
    }

    #[must_use]
    pub fn classification(&self) -> Classification {
        self.classification
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

// ---------------------------------------------------------------------------
// GestureClassifier
// ---------------------------------------------------------------------------

/// Per-overlay gesture state: the current session plus the scroll-active flag.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
    session: Option<TouchSession>,
    /// Host reported overlay scrolling that has not settled yet.
    scroll_active: bool,
    /// Diagnostic: sessions started.
    sessions: u64,
}

impl GestureClassifier {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start a new session, discarding any previous one.
    pub fn begin(&mut self, x: f32, y: f32, scroll_top: f32, now: Duration) {
        self.session = Some(TouchSession {
            start_x: x,
            start_y: y,
            start_scroll: scroll_top,
            started_at: now,
            classification: Classification::Undetermined,
            ended: false,
        });
        self.scroll_active = false;
        self.sessions += 1;
    }

    /// Feed one move sample.
    pub fn sample(&mut self, x: f32, y: f32, scroll_top: f32, now: Duration) -> GestureAction {
        let Some(session) = self.session.as_mut() else {
            return GestureAction::None;
        };
        if session.ended || session.classification.is_terminal() {
            return GestureAction::None;
        }

        if self.scroll_active || (scroll_top - session.start_scroll).abs() > self.config.scroll_epsilon
        {
            session.classification = Classification::Scrolling;
            tracing::trace!(scroll_top, "gesture classified as scrolling");
            return GestureAction::None;
        }

        // Positive dx: finger travelled right-to-left. Positive dy: downward.
        let dx = session.start_x - x;
        let dy = y - session.start_y;

        if dx.abs() > dy.abs() {
            if dx.abs() <= self.config.swipe_threshold {
                return GestureAction::None;
            }
            session.classification = Classification::Navigating;
            let direction = if dx > 0.0 {
                NavDirection::Next
            } else {
                NavDirection::Previous
            };
            tracing::debug!(dx, ?direction, "gesture classified as navigation");
            return GestureAction::Navigate(direction);
        }

        let at_top = scroll_top <= self.config.top_tolerance;
        let fast = now.saturating_sub(session.started_at) < self.config.dismiss_max_elapsed();
        let long = dy > self.config.dismiss_distance;
        if at_top && fast && long {
            tracing::debug!(dy, "gesture classified as dismiss");
            return GestureAction::Dismiss;
        }
        GestureAction::None
    }

    /// Finger lifted. Returns whether a session was in progress.
    ///
    /// The session lingers (ignored) until [`release`](Self::release) so
    /// trailing scroll momentum is not mistaken for a new gesture.
    pub fn end(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session) if !session.ended => {
                session.ended = true;
                true
            }
            _ => false,
        }
    }

    /// Grace period over: forget the ended session and scroll activity.
    ///
    /// A live (not yet ended) session is left alone.
    pub fn release(&mut self) {
        if self.session.as_ref().is_some_and(|s| s.ended) {
            self.session = None;
            self.scroll_active = false;
        }
    }

    /// Drop any session immediately (overlay closed underneath the finger).
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Host reported an overlay scroll sample.
    pub fn note_scroll(&mut self) {
        self.scroll_active = true;
    }

    /// Scroll-settle timer fired.
    pub fn settle_scroll(&mut self) {
        self.scroll_active = false;
    }

    #[must_use]
    pub fn session(&self) -> Option<&TouchSession> {
        self.session.as_ref()
    }

    /// Classification of the current session, if any.
    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        self.session.as_ref().map(TouchSession::classification)
    }

    #[inline]
    #[must_use]
    pub fn is_scroll_active(&self) -> bool {
        self.scroll_active
    }

    /// Number of sessions started (diagnostic).
    #[inline]
    #[must_use]
    pub fn session_count(&self) -> u64 {
        self.sessions
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn classifier() -> GestureClassifier {
        GestureClassifier::new(GestureConfig::default())
    }

    // --- Scrolling ---

    #[test]
    fn scroll_drift_beats_horizontal_swipe() {
        let mut g = classifier();
        g.begin(200.0, 300.0, 0.0, ms(0));
        let action = g.sample(100.0, 300.0, 6.0, ms(50));
        assert_eq!(action, GestureAction::None);
        assert_eq!(g.classification(), Some(Classification::Scrolling));
    }

    #[test]
    fn drift_of_exactly_epsilon_is_not_scrolling() {
        let mut g = classifier();
        g.begin(200.0, 300.0, 20.0, ms(0));
        let action = g.sample(110.0, 300.0, 25.0, ms(50));
        assert_eq!(action, GestureAction::Navigate(NavDirection::Next));
    }

    #[test]
    fn scrolling_is_sticky() {
        let mut g = classifier();
        g.begin(200.0, 300.0, 0.0, ms(0));
        g.sample(200.0, 280.0, 40.0, ms(20));
        // Offset returns to start and the finger swipes far: still nothing.
        assert_eq!(g.sample(50.0, 300.0, 0.0, ms(40)), GestureAction::None);
        assert_eq!(g.classification(), Some(Classification::Scrolling));
    }

    #[test]
    fn reported_scroll_activity_marks_scrolling() {
        let mut g = classifier();
        g.begin(200.0, 300.0, 0.0, ms(0));
        g.note_scroll();
        assert_eq!(g.sample(100.0, 300.0, 0.0, ms(10)), GestureAction::None);
        assert_eq!(g.classification(), Some(Classification::Scrolling));
    }

    // --- Navigation ---

    #[test]
    fn right_to_left_swipe_navigates_next() {
        let mut g = classifier();
        g.begin(300.0, 400.0, 0.0, ms(0));
        let action = g.sample(215.0, 410.0, 0.0, ms(80));
        assert_eq!(action, GestureAction::Navigate(NavDirection::Next));
        assert_eq!(g.classification(), Some(Classification::Navigating));
    }

    #[test]
    fn left_to_right_swipe_navigates_previous() {
        let mut g = classifier();
        g.begin(100.0, 400.0, 0.0, ms(0));
        let action = g.sample(185.0, 390.0, 0.0, ms(80));
        assert_eq!(action, GestureAction::Navigate(NavDirection::Previous));
    }

    #[test]
    fn one_swipe_navigates_once() {
        let mut g = classifier();
        g.begin(300.0, 400.0, 0.0, ms(0));
        assert_eq!(
            g.sample(210.0, 400.0, 0.0, ms(50)),
            GestureAction::Navigate(NavDirection::Next)
        );
        assert_eq!(g.sample(50.0, 400.0, 0.0, ms(90)), GestureAction::None);
    }

    #[test]
    fn short_horizontal_move_stays_undetermined() {
        let mut g = classifier();
        g.begin(300.0, 400.0, 0.0, ms(0));
        assert_eq!(g.sample(221.0, 400.0, 0.0, ms(50)), GestureAction::None);
        assert_eq!(g.classification(), Some(Classification::Undetermined));
        // The same session can still become a navigation.
        assert_eq!(
            g.sample(219.0, 400.0, 0.0, ms(60)),
            GestureAction::Navigate(NavDirection::Next)
        );
    }

    #[test]
    fn fast_diagonal_prefers_navigation() {
        let mut g = classifier();
        g.begin(300.0, 100.0, 0.0, ms(0));
        // |dx| = 250 > |dy| = 240 > dismiss distance: navigation branch only.
        let action = g.sample(50.0, 340.0, 0.0, ms(50));
        assert_eq!(action, GestureAction::Navigate(NavDirection::Next));
    }

    // --- Dismiss ---

    #[test]
    fn fast_long_pull_at_top_dismisses() {
        let mut g = classifier();
        g.begin(200.0, 100.0, 0.0, ms(1_000));
        assert_eq!(
            g.sample(200.0, 350.0, 0.0, ms(1_200)),
            GestureAction::Dismiss
        );
    }

    #[test]
    fn slow_pull_does_not_dismiss() {
        let mut g = classifier();
        g.begin(200.0, 100.0, 0.0, ms(1_000));
        assert_eq!(g.sample(200.0, 350.0, 0.0, ms(1_400)), GestureAction::None);
        assert_eq!(g.classification(), Some(Classification::Undetermined));
    }

    #[test]
    fn pull_away_from_top_does_not_dismiss() {
        let mut g = classifier();
        g.begin(200.0, 100.0, 11.0, ms(0));
        assert_eq!(g.sample(200.0, 350.0, 11.0, ms(100)), GestureAction::None);
    }

    #[test]
    fn short_or_upward_pull_does_not_dismiss() {
        let mut g = classifier();
        g.begin(200.0, 300.0, 0.0, ms(0));
        assert_eq!(g.sample(200.0, 500.0, 0.0, ms(100)), GestureAction::None);
        assert_eq!(g.sample(200.0, 50.0, 0.0, ms(120)), GestureAction::None);
    }

    // --- Session lifecycle ---

    #[test]
    fn samples_without_session_are_ignored() {
        let mut g = classifier();
        assert_eq!(g.sample(0.0, 500.0, 0.0, ms(10)), GestureAction::None);
        assert!(!g.end());
    }

    #[test]
    fn ended_session_ignores_samples_until_released() {
        let mut g = classifier();
        g.begin(300.0, 400.0, 0.0, ms(0));
        assert!(g.end());
        assert_eq!(g.sample(100.0, 400.0, 0.0, ms(20)), GestureAction::None);
        assert!(g.session().is_some_and(TouchSession::is_ended));
        g.release();
        assert!(g.session().is_none());
    }

    #[test]
    fn release_keeps_live_session() {
        let mut g = classifier();
        g.begin(300.0, 400.0, 0.0, ms(0));
        g.release();
        assert!(g.session().is_some());
    }

    #[test]
    fn begin_resets_classification_and_scroll_flag() {
        let mut g = classifier();
        g.begin(200.0, 300.0, 0.0, ms(0));
        g.note_scroll();
        g.sample(200.0, 300.0, 0.0, ms(10));
        assert_eq!(g.classification(), Some(Classification::Scrolling));

        g.begin(200.0, 300.0, 0.0, ms(500));
        assert_eq!(g.classification(), Some(Classification::Undetermined));
        assert!(!g.is_scroll_active());
        assert_eq!(g.session_count(), 2);
    }

    // --- Config ---

    #[test]
    fn env_overrides_thresholds() {
        let env: HashMap<&str, &str> = [(ENV_SWIPE_THRESHOLD, "120"), (ENV_DISMISS_MAX_ELAPSED, "x")]
            .into_iter()
            .collect();
        let parsed = GestureConfig::default().with_env(|k| env.get(k).map(|v| (*v).to_string()));
        assert_eq!(parsed.config.swipe_threshold, 120.0);
        assert_eq!(parsed.config.dismiss_max_elapsed_ms, 300);
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].field, "dismiss_max_elapsed_ms");
    }

    #[test]
    fn custom_threshold_changes_navigation_point() {
        let mut g = GestureClassifier::new(GestureConfig {
            swipe_threshold: 40.0,
            ..GestureConfig::default()
        });
        g.begin(100.0, 100.0, 0.0, ms(0));
        assert_eq!(
            g.sample(55.0, 100.0, 0.0, ms(10)),
            GestureAction::Navigate(NavDirection::Next)
        );
    }

    #[test]
    fn validate_flags_non_positive_values() {
        let config = GestureConfig {
            swipe_threshold: 0.0,
            dismiss_max_elapsed_ms: 0,
            ..GestureConfig::default()
        };
        let errors = config.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["swipe_threshold", "dismiss_max_elapsed_ms"]);
        assert!(GestureConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: GestureConfig = serde_json::from_str(r#"{"swipe_threshold": 64}"#).unwrap();
        assert_eq!(config.swipe_threshold, 64.0);
        assert_eq!(config.dismiss_distance, 200.0);
    }
}
