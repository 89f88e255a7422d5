//! Step-aligned numeric input state.

/// Largest integer an `f64` represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
pub const MIN_SAFE_INTEGER: f64 = -MAX_SAFE_INTEGER;

/// Snaps `value` to the nearest multiple of `step` counted from `min`, then
/// clamps into `[min, max]`.
///
/// Ties round away from zero. A value above `max` becomes the largest on-grid
/// value not exceeding `max`. A non-positive or non-finite `step` skips
/// snapping and only clamps.
pub fn snap_to_step(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let mut value = value;
    if step.is_finite() && step > 0.0 {
        let remainder = (value - min) % step;
        value = value - remainder + (remainder / step).round() * step;
    }

    value = value.max(min);
    if value > max {
        value = if step.is_finite() && step > 0.0 {
            max - (max - min) % step
        } else {
            max
        };
    }
    value
}

/// Bounds and step of a [`NumberField`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for NumberBounds {
    fn default() -> Self {
        Self {
            min: MIN_SAFE_INTEGER,
            max: MAX_SAFE_INTEGER,
            step: 1.0,
        }
    }
}

impl NumberBounds {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }
}

/// A numeric input with +/- buttons. The committed value is always on the
/// step grid and inside the bounds; the text being typed is kept separately
/// until [`commit_input`](Self::commit_input).
#[derive(Clone, Debug, PartialEq)]
pub struct NumberField {
    bounds: NumberBounds,
    value: f64,
    input: String,
    disabled: bool,
    read_only: bool,
}

impl NumberField {
    /// `max` is raised to `min` when given below it; `initial` is snapped.
    pub fn new(initial: f64, bounds: NumberBounds) -> Self {
        let bounds = NumberBounds {
            max: bounds.max.max(bounds.min),
            ..bounds
        };
        let value = snap_to_step(initial, bounds.min, bounds.max, bounds.step);
        Self {
            bounds,
            value,
            input: format_number(value),
            disabled: false,
            read_only: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn bounds(&self) -> NumberBounds {
        self.bounds
    }

    pub fn is_increase_disabled(&self) -> bool {
        self.disabled || self.read_only || self.value + self.bounds.step > self.bounds.max
    }

    pub fn is_decrease_disabled(&self) -> bool {
        self.disabled || self.read_only || self.value - self.bounds.step < self.bounds.min
    }

    /// Adds one step. Returns the new value, or `None` when disabled.
    pub fn increase(&mut self) -> Option<f64> {
        if self.is_increase_disabled() {
            return None;
        }
        self.set(self.value + self.bounds.step);
        Some(self.value)
    }

    /// Subtracts one step. Returns the new value, or `None` when disabled.
    pub fn decrease(&mut self) -> Option<f64> {
        if self.is_decrease_disabled() {
            return None;
        }
        self.set(self.value - self.bounds.step);
        Some(self.value)
    }

    /// Replaces the text being typed without touching the value.
    pub fn type_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Parses `text` and snaps it onto the grid. Unparseable text reverts the
    /// input to the current value.
    pub fn commit_input(&mut self, text: &str) -> f64 {
        match parse_leading_number(text) {
            Some(parsed) => {
                let snapped = snap_to_step(parsed, self.bounds.min, self.bounds.max, self.bounds.step);
                self.set(snapped);
            }
            None => {
                tracing::debug!("Reverting unparseable number input {:?}", text);
                self.input = format_number(self.value);
            }
        }
        self.value
    }

    fn set(&mut self, value: f64) {
        self.value = value;
        self.input = format_number(value);
    }
}

/// Parses the longest leading decimal number in `text` (after leading
/// whitespace), so `"12abc"` reads as 12 and `"1.5e3x"` as 1500.
fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut best = None;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
        if seen_digit {
            best = Some(end);
        }
    }
    if seen_digit && matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            best = Some(exp_end);
        }
    }
    best.and_then(|end| trimmed[..end].parse::<f64>().ok())
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
