#![forbid(unsafe_code)]

//! Shared configuration plumbing: environment overrides with diagnostics.
//!
//! Config structs carry their tuning constants in `Default`, accept partial
//! JSON from the host through serde, and layer `PIPS_*` environment
//! overrides on top. A bad override never aborts: it is reported as a
//! [`ConfigError`] and the previous value is kept.

/// One rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}={value} ({message})")]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    pub fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

/// A parsed config plus the diagnostics collected while parsing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigParse<T> {
    pub config: T,
    pub errors: Vec<ConfigError>,
}

/// Applies environment overrides to config fields, collecting errors.
///
/// `get` is the environment lookup; tests pass a closure over a map.
pub struct EnvOverrides<G> {
    get: G,
    errors: Vec<ConfigError>,
}

impl<G> EnvOverrides<G>
where
    G: FnMut(&str) -> Option<String>,
{
    pub fn new(get: G) -> Self {
        Self {
            get,
            errors: Vec::new(),
        }
    }

    /// Override a strictly positive, finite `f32`.
    pub fn positive_f32(&mut self, key: &str, field: &'static str, slot: &mut f32) {
        let Some(value) = (self.get)(key) else {
            return;
        };
        match parse_positive_f32(&value) {
            Some(parsed) => *slot = parsed,
            None => self.errors.push(ConfigError::new(
                field,
                value,
                "expected positive number",
            )),
        }
    }

    /// Override a strictly positive millisecond count.
    pub fn millis(&mut self, key: &str, field: &'static str, slot: &mut u64) {
        let Some(value) = (self.get)(key) else {
            return;
        };
        match parse_positive_u64(&value) {
            Some(parsed) => *slot = parsed,
            None => self.errors.push(ConfigError::new(
                field,
                value,
                "expected positive integer (milliseconds)",
            )),
        }
    }

    /// Diagnostics collected so far.
    #[must_use]
    pub fn finish(self) -> Vec<ConfigError> {
        self.errors
    }
}

/// Report `value` unless it is finite and `> 0`.
pub fn check_positive(field: &'static str, value: f32, errors: &mut Vec<ConfigError>) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(ConfigError::new(field, value.to_string(), "must be > 0"));
    }
}

fn parse_positive_f32(value: &str) -> Option<f32> {
    let parsed = value.trim().parse::<f32>().ok()?;
    (parsed.is_finite() && parsed > 0.0).then_some(parsed)
}

fn parse_positive_u64(value: &str) -> Option<u64> {
    let parsed = value.trim().parse::<u64>().ok()?;
    (parsed > 0).then_some(parsed)
}
