//! Numeric value model: storage, clamping, parsing and display.

/// Decimal places shown by a new decimal field.
pub const DEFAULT_PRECISION: usize = 2;
/// Value change per normalized drag distance for a new field.
pub const DEFAULT_STEP: f64 = 1.0;

/// How a field renders and parses its value.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberFormat {
    /// Fixed fraction digits with an optional unit suffix.
    Decimal { precision: usize, unit: String },
    /// Whole numbers, truncated toward zero.
    Integer,
}

impl NumberFormat {
    /// Decimal format with default precision and no unit.
    pub fn decimal() -> Self {
        Self::Decimal {
            precision: DEFAULT_PRECISION,
            unit: String::new(),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer)
    }

    /// Render a value for display.
    pub fn render(&self, value: f64) -> String {
        match self {
            Self::Decimal { precision, unit } => {
                let mut text = to_fixed(value, *precision);
                if !unit.is_empty() {
                    text.push(' ');
                    text.push_str(unit);
                }
                text
            }
            Self::Integer => format!("{}", positive_zero(value.trunc())),
        }
    }

    /// Parse typed text. Trailing garbage such as a unit suffix is ignored.
    pub fn parse(&self, text: &str) -> Option<f64> {
        match self {
            Self::Decimal { .. } => parse_leading_float(text),
            Self::Integer => parse_leading_int(text),
        }
    }
}

/// Parse the longest numeric prefix of `text` as a decimal number.
///
/// Leading whitespace is skipped; `"1.50 m"` yields `1.5`. Returns `None`
/// when no digits start the text.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = sign_len(bytes);

    let int_end = digits_end(bytes, end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_end(bytes, end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1 + sign_len(&bytes[end + 1..]);
        let exp_end = digits_end(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Parse the longest integer prefix of `text`; `"7.8"` yields `7`.
pub fn parse_leading_int(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let start = sign_len(bytes);
    let end = digits_end(bytes, start);
    if end == start {
        return None;
    }
    s[..end].parse::<f64>().ok().map(positive_zero)
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    end
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Fixed-point text with `precision` fraction digits.
///
/// Exact midpoints round away from zero and `-0` prints unsigned. Any other
/// value rounds to the nearest representable digit string.
fn to_fixed(value: f64, precision: usize) -> String {
    let value = positive_zero(value);
    if !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs();
    let digits = if is_midpoint(magnitude, precision) {
        // A midpoint has exactly `precision + 1` fraction digits, so this
        // prints it without rounding.
        let mut text = format!("{:.*}", precision + 1, magnitude);
        text.pop();
        if text.ends_with('.') {
            text.pop();
        }
        increment_last_digit(&text)
    } else {
        format!("{:.*}", precision, magnitude)
    };
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// True when `magnitude` lies exactly halfway between two `precision`-digit
/// decimals, i.e. `magnitude * 2^(precision + 1)` is an odd integer.
fn is_midpoint(magnitude: f64, precision: usize) -> bool {
    let Ok(exponent) = i32::try_from(precision + 1) else {
        return false;
    };
    let scaled = magnitude * 2f64.powi(exponent);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

fn increment_last_digit(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for c in chars.iter_mut().rev() {
        match c.to_digit(10) {
            Some(9) => *c = '0',
            Some(d) => {
                *c = char::from_digit(d + 1, 10).unwrap_or('0');
                return chars.into_iter().collect();
            }
            None => {}
        }
    }
    std::iter::once('1').chain(chars).collect()
}

/// Authoritative state of a numeric field.
///
/// `value` always lies within `[min, max]` after a successful commit. The
/// display string is derived from it on demand and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueModel {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    format: NumberFormat,
}

impl ValueModel {
    /// Create an unbounded model at zero.
    pub fn new(format: NumberFormat) -> Self {
        Self {
            value: 0.0,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            step: DEFAULT_STEP,
            format,
        }
    }

    pub fn decimal() -> Self {
        Self::new(NumberFormat::decimal())
    }

    pub fn integer() -> Self {
        Self::new(NumberFormat::Integer)
    }

    /// The committed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Set the clamp bounds. The stored value is not re-clamped.
    pub fn set_range(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }

    /// Set the drag step. Integer models truncate it toward zero.
    pub fn set_step(&mut self, step: f64) {
        self.step = if self.format.is_integer() {
            step.trunc()
        } else {
            step
        };
    }

    /// Set the fraction digits of a decimal model. Ignored for integers.
    pub fn set_precision(&mut self, precision: usize) {
        if let NumberFormat::Decimal { precision: p, .. } = &mut self.format {
            *p = precision;
        }
    }

    /// Set the unit suffix of a decimal model. Ignored for integers.
    pub fn set_unit(&mut self, unit: &str) {
        if let NumberFormat::Decimal { unit: u, .. } = &mut self.format {
            *u = unit.to_string();
        }
    }

    /// Clamp a candidate into range; integer models also truncate toward zero.
    ///
    /// Bounds are applied as `max(min)` then `min(max)`, so inverted bounds
    /// resolve to `max` rather than panicking.
    pub fn clamp(&self, candidate: f64) -> f64 {
        let clamped = candidate.max(self.min).min(self.max);
        if self.format.is_integer() {
            positive_zero(clamped.trunc())
        } else {
            clamped
        }
    }

    /// Store a candidate after clamping.
    ///
    /// Returns `false` and keeps the previous value when the candidate is NaN
    /// or still non-finite after clamping.
    pub fn commit(&mut self, candidate: f64) -> bool {
        if candidate.is_nan() {
            log::debug!("Ignoring NaN commit; keeping {}", self.value);
            return false;
        }
        let candidate = if self.format.is_integer() {
            candidate.trunc()
        } else {
            candidate
        };
        let clamped = self.clamp(candidate);
        if !clamped.is_finite() {
            log::debug!("Ignoring unbounded commit {}; keeping {}", clamped, self.value);
            return false;
        }
        self.value = clamped;
        true
    }

    /// Parse typed text and commit it. Unparsable text keeps the previous value.
    pub fn commit_text(&mut self, text: &str) -> bool {
        match self.format.parse(text) {
            Some(candidate) => self.commit(candidate),
            None => {
                log::debug!("Ignoring unparsable input {:?}; keeping {}", text, self.value);
                false
            }
        }
    }

    /// Display text for the committed value.
    pub fn display(&self) -> String {
        self.format.render(self.value)
    }
}

impl Default for ValueModel {
    fn default() -> Self {
        Self::decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounded(min: f64, max: f64) -> ValueModel {
        let mut model = ValueModel::decimal();
        model.set_range(min, max);
        model
    }

    #[test]
    fn test_default_display() {
        assert_eq!(ValueModel::decimal().display(), "0.00");
        assert_eq!(ValueModel::integer().display(), "0");
    }

    #[test]
    fn test_display_with_precision_and_unit() {
        let mut model = ValueModel::decimal();
        model.set_precision(3);
        model.set_unit("m");
        model.commit(1.5);
        assert_eq!(model.display(), "1.500 m");

        model.set_unit("");
        assert_eq!(model.display(), "1.500");
    }

    #[test]
    fn test_display_rounds_midpoints_away_from_zero() {
        let render = |value: f64, precision: usize| {
            NumberFormat::Decimal {
                precision,
                unit: String::new(),
            }
            .render(value)
        };
        assert_eq!(render(0.5, 0), "1");
        assert_eq!(render(2.5, 0), "3");
        assert_eq!(render(0.125, 2), "0.13");
        assert_eq!(render(-2.5, 0), "-3");
        assert_eq!(render(9.95, 1), "9.9");
        assert_eq!(render(99.5, 0), "100");
        assert_eq!(render(-0.0, 2), "0.00");
        assert_eq!(render(1.005, 2), "1.00");
    }

    #[test]
    fn test_typed_negative_zero_displays_unsigned() {
        let mut model = ValueModel::decimal();
        model.commit_text("-0");
        assert_eq!(model.display(), "0.00");
        model.commit(-0.0);
        assert_eq!(model.display(), "0.00");
    }

    #[test]
    fn test_commit_clamps_to_nearest_bound() {
        let mut model = bounded(0.0, 10.0);
        model.commit(-3.0);
        assert_eq!(model.value(), 0.0);
        model.commit(42.0);
        assert_eq!(model.value(), 10.0);
        model.commit(f64::INFINITY);
        assert_eq!(model.value(), 10.0);
    }

    #[test]
    fn test_range_change_does_not_reclamp() {
        let mut model = ValueModel::decimal();
        model.commit(50.0);
        model.set_range(0.0, 10.0);
        assert_eq!(model.value(), 50.0);
        model.commit(model.value());
        assert_eq!(model.value(), 10.0);
    }

    #[test]
    fn test_nan_and_unbounded_infinity_keep_value() {
        let mut model = ValueModel::decimal();
        model.commit(3.0);
        assert!(!model.commit(f64::NAN));
        assert!(!model.commit(f64::INFINITY));
        assert_eq!(model.value(), 3.0);
    }

    #[test]
    fn test_unparsable_text_keeps_value() {
        let mut model = bounded(0.0, 10.0);
        model.commit(4.0);
        assert!(!model.commit_text(""));
        assert!(!model.commit_text("abc"));
        assert!(!model.commit_text("-"));
        assert_eq!(model.value(), 4.0);
        assert_eq!(model.display(), "4.00");
    }

    #[test]
    fn test_text_with_unit_suffix() {
        let mut model = ValueModel::decimal();
        model.set_unit("m");
        assert!(model.commit_text("2.75 m"));
        assert_eq!(model.value(), 2.75);
    }

    #[test]
    fn test_inverted_range_does_not_panic() {
        let mut model = bounded(10.0, 0.0);
        model.commit(5.0);
        assert_eq!(model.value(), 0.0);
    }

    #[test]
    fn test_integer_truncates_toward_zero() {
        let mut model = ValueModel::integer();
        model.commit(7.8);
        assert_eq!(model.value(), 7.0);
        model.commit(-7.8);
        assert_eq!(model.value(), -7.0);
        model.commit(-0.4);
        assert_eq!(model.display(), "0");
    }

    #[test]
    fn test_integer_clamps_then_truncates() {
        let mut model = ValueModel::integer();
        model.set_range(0.0, 5.0);
        assert_eq!(model.clamp(7.8), 5.0);
        assert_eq!(model.clamp(3.9), 3.0);
    }

    #[test]
    fn test_integer_step_is_truncated() {
        let mut model = ValueModel::integer();
        model.set_step(2.9);
        assert_eq!(model.step(), 2.0);

        let mut decimal = ValueModel::decimal();
        decimal.set_step(0.25);
        assert_eq!(decimal.step(), 0.25);
    }

    #[test]
    fn test_precision_and_unit_ignored_for_integer() {
        let mut model = ValueModel::integer();
        model.set_precision(4);
        model.set_unit("px");
        assert_eq!(model.format(), &NumberFormat::Integer);
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("1.50 m"), Some(1.5));
        assert_eq!(parse_leading_float("  -3e2px"), Some(-300.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("+7"), Some(7.0));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("2e+"), Some(2.0));
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float(""), None);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("7.8"), Some(7.0));
        assert_eq!(parse_leading_int("-12abc"), Some(-12.0));
        assert_eq!(parse_leading_int("  42"), Some(42.0));
        assert_eq!(parse_leading_int("-0"), Some(0.0));
        assert_eq!(parse_leading_int("+"), None);
        assert_eq!(parse_leading_int(".5"), None);
    }

    proptest! {
        #[test]
        fn prop_in_range_value_round_trips(v in -1000.0f64..1000.0) {
            let mut model = bounded(-1000.0, 1000.0);
            prop_assert!(model.commit(v));
            prop_assert_eq!(model.value(), v);
        }

        #[test]
        fn prop_out_of_range_snaps_to_bound(v in -1.0e6f64..1.0e6) {
            let mut model = bounded(-10.0, 10.0);
            model.commit(v);
            let expected = if v < -10.0 { -10.0 } else if v > 10.0 { 10.0 } else { v };
            prop_assert_eq!(model.value(), expected);
        }

        #[test]
        fn prop_recommit_is_idempotent(v in -1.0e6f64..1.0e6, precision in 0usize..6) {
            let mut model = bounded(-100.0, 100.0);
            model.set_precision(precision);
            model.commit(v);
            let first = model.value();
            model.commit(model.value());
            model.commit(model.value());
            prop_assert_eq!(model.value(), first);
        }

        #[test]
        fn prop_typed_display_round_trips_at_precision(v in -100.0f64..100.0, precision in 0usize..6) {
            let mut model = ValueModel::decimal();
            model.set_precision(precision);
            model.set_unit("m");
            model.commit(v);
            let shown = model.display();
            model.commit_text(&shown);
            prop_assert_eq!(model.display(), shown);
        }

        #[test]
        fn prop_integer_values_are_whole(v in -1.0e6f64..1.0e6, lo in -100i32..0, hi in 0i32..100) {
            let mut model = ValueModel::integer();
            model.set_range(f64::from(lo), f64::from(hi));
            model.commit(v);
            prop_assert_eq!(model.value().fract(), 0.0);
            prop_assert!(model.value() >= f64::from(lo) && model.value() <= f64::from(hi));
        }
    }
}
