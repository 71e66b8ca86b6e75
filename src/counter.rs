//! Animated statistic counters.
//!
//! A stat element's own text is its target: `"500+"`, `"98.5%"`, `"24/7"` or
//! a plain integer. [`CounterTarget::parse`] detects the format and numeric
//! goal; [`CounterRun::frame`] computes the display text for any tick, so the
//! DOM layer only has to count ticks and stop when a frame reports `done`.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Interval between counter ticks.
pub const TICK_MS: u32 = 40;

/// Number of increments from zero to target.
pub const STEPS: f64 = 60.0;

/// Fraction of the element that must be visible before counting starts.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

pub const BOUNCE_TRANSFORM: &str = "scale(1.1)";
pub const REST_TRANSFORM: &str = "scale(1)";
pub const BOUNCE_MS: u32 = 200;

/// Target for the round-the-clock format, whatever the text says.
const SLASH_TARGET: f64 = 24.0;

/// How the counter renders its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFormat {
    /// `98.5%` — one decimal place.
    Percent,
    /// `500+`
    Plus,
    /// `24/7`
    Slash,
    /// `1200`
    Plain,
}

impl CounterFormat {
    /// Detect the format from the element's text. Order matters: `%` wins
    /// over `+`, which wins over `/`.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains('%') {
            Self::Percent
        } else if text.contains('+') {
            Self::Plus
        } else if text.contains('/') {
            Self::Slash
        } else {
            Self::Plain
        }
    }

    #[must_use]
    pub fn render(self, value: f64) -> String {
        match self {
            Self::Percent => format!("{}%", one_decimal(value)),
            Self::Plus => format!("{:.0}+", value.floor()),
            Self::Slash => format!("{:.0}/7", value.floor()),
            Self::Plain => format!("{:.0}", value.floor()),
        }
    }
}

/// One decimal place, with exact halves rounded up (`2.25` gives `"2.3"`).
///
/// `{:.1}` alone sends exact ties to even. A tie only exists when `value * 10`
/// lands on a half with no rounding error in the product.
fn one_decimal(value: f64) -> String {
    let scaled = value * 10.0;
    let residual = value.mul_add(10.0, -scaled);
    let half = scaled - scaled.floor() - 0.5;
    if residual == 0.0 && half == 0.0 {
        format!("{:.1}", (scaled + 0.5) / 10.0)
    } else {
        format!("{value:.1}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterTarget {
    pub format: CounterFormat,
    pub value: f64,
}

impl CounterTarget {
    /// Parse a stat's text. `None` when no number can be read from it.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let format = CounterFormat::detect(text);
        let value = match format {
            CounterFormat::Percent => leading_float(&text.replacen('%', "", 1))?,
            CounterFormat::Plus => leading_int(&text.replacen('+', "", 1))?,
            CounterFormat::Slash => SLASH_TARGET,
            CounterFormat::Plain => leading_int(text)?,
        };
        Some(Self { format, value })
    }
}

/// One rendered counter step.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub value: f64,
    pub text: String,
    pub done: bool,
}

/// A counter animation from zero to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterRun {
    target: CounterTarget,
    increment: f64,
}

impl CounterRun {
    #[must_use]
    pub fn new(target: CounterTarget) -> Self {
        Self { target, increment: target.value / STEPS }
    }

    #[must_use]
    pub fn target(&self) -> CounterTarget {
        self.target
    }

    /// Display state after `tick` increments (the first interval fire is tick 1).
    #[must_use]
    pub fn frame(&self, tick: u32) -> CounterFrame {
        let raw = self.increment * f64::from(tick);
        let done = raw >= self.target.value;
        let value = if done { self.target.value } else { raw };
        CounterFrame { value, text: self.target.format.render(value), done }
    }
}

/// Integer prefix of `text`, after leading whitespace and an optional sign.
fn leading_int(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (sign, rest) = split_sign(text);
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let Ok(value) = digits.parse::<f64>() else {
        return None;
    };
    Some(sign * value)
}

/// Decimal prefix of `text`, after leading whitespace and an optional sign.
fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (sign, rest) = split_sign(text);
    let mut seen_dot = false;
    let mut seen_digit = false;
    let mut end = 0;
    for (i, c) in rest.char_indices() {
        if c.is_ascii_digit() {
            seen_digit = true;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    let Ok(value) = rest[..end].trim_end_matches('.').parse::<f64>() else {
        return None;
    };
    Some(sign * value)
}

fn split_sign(text: &str) -> (f64, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, text)
    }
}
