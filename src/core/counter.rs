// Counter animation: quartic ease-out from zero to a target integer.
//
// Everything here is a pure function of elapsed milliseconds so the page
// side only has to feed timestamps and write the returned text.

/// Target and suffix read from a counter element's `data-count` /
/// `data-suffix` attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: i64,
    pub suffix: Option<String>,
}

impl CounterSpec {
    /// Build from raw attribute values. Returns `None` when the count
    /// is missing or does not start with an integer, in which case the
    /// element is left untouched.
    pub fn from_attrs(count: Option<&str>, suffix: Option<&str>) -> Option<Self> {
        let target = parse_leading_int(count?)?;
        let suffix = suffix.filter(|s| !s.is_empty()).map(str::to_owned);
        Some(Self { target, suffix })
    }

    /// Text shown once the animation has finished.
    pub fn final_text(&self) -> String {
        let mut text = group_thousands(self.target);
        if let Some(s) = &self.suffix {
            text.push_str(s);
        }
        text
    }
}

/// Parse an integer the way a lenient leading-number parse does: skip
/// leading whitespace, accept an optional sign, then consume digits and
/// ignore whatever follows. `"1200+"` is 1200, `"abc"` is `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Displayed value at `elapsed_ms` into an animation of `duration_ms`.
pub fn value_at(target: i64, elapsed_ms: f64, duration_ms: f64) -> i64 {
    let progress = progress(elapsed_ms, duration_ms);
    if progress >= 1.0 {
        return target;
    }
    (target as f64 * ease_out_quart(progress)).floor() as i64
}

#[inline]
fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Format with `,` thousands separators (`1234567` -> `"1,234,567"`).
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One frame's output for the counter element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// A single running counter animation.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    spec: CounterSpec,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec, duration_ms: f64) -> Self {
        Self { spec, duration_ms }
    }

    pub fn frame(&self, elapsed_ms: f64) -> CounterFrame {
        if progress(elapsed_ms, self.duration_ms) >= 1.0 {
            return CounterFrame {
                text: self.spec.final_text(),
                done: true,
            };
        }
        CounterFrame {
            text: group_thousands(value_at(self.spec.target, elapsed_ms, self.duration_ms)),
            done: false,
        }
    }
}
