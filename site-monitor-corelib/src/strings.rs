//! String libraries.

use serde_json::Value;

/// The result for inputs that do not start with a number.
pub const ZERO: &'static str = "0";

const MAX_DECIMALS: usize = 2;

/// To format a decimal string for display.
///
/// The longest numeric prefix of the input is parsed (leading white spaces are skipped). The value
/// is rounded to two decimal places, then trailing zeros and a trailing decimal point are removed.
/// Inputs without a numeric prefix produce `"0"`.
///
/// ```
/// use site_monitor_corelib::strings::format_number;
///
/// assert_eq!(format_number("3.00"), "3");
/// assert_eq!(format_number("3.10"), "3.1");
/// assert_eq!(format_number("abc"), "0");
/// ```
pub fn format_number(value: &str) -> String {
    match parse_float(value) {
        None => ZERO.to_string(),
        Some(num) => trim_zeros(to_fixed(num)),
    }
}

/// To format a JSON field with [`format_number`].
///
/// Numbers are formatted by their decimal representation. Absent fields and non-scalar values
/// produce `"0"`.
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(v)) => format_number(v.as_str()),
        Some(Value::Number(v)) => format_number(v.to_string().as_str()),
        _ => ZERO.to_string(),
    }
}

/// Parse the longest leading decimal literal: `[+-]? (Infinity | digits [. digits] | . digits)
/// ([eE] [+-]? digits)?`.
fn parse_float(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return match bytes[0] {
            b'-' => Some(f64::NEG_INFINITY),
            _ => Some(f64::INFINITY),
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            has_digits = has_digits || frac_end > frac_start;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    // `.5` and `5.` are completed to `0.5` and `5`.
    let literal = format!(
        "{}0{}",
        &s[..int_start],
        s[int_start..end].trim_end_matches('.')
    );
    match literal.parse::<f64>() {
        Err(_) => None,
        Ok(num) => Some(num),
    }
}

/// Fractions that are exact multiples of 1/8, rounded to two decimals. Odd eighths are exact
/// halves at the third decimal and go to the larger magnitude.
const EIGHTHS: [&'static str; 8] = ["00", "13", "25", "38", "50", "63", "75", "88"];

/// Round to two decimals. The sign is applied to the rounded magnitude and `-0` has no sign.
fn to_fixed(num: f64) -> String {
    let sign = match num < 0.0 {
        false => "",
        true => "-",
    };
    let abs = num.abs();
    if abs.is_infinite() {
        return format!("{}Infinity", sign);
    }

    let eighths = abs.fract() * 8.0;
    if eighths.fract() == 0.0 {
        return format!("{}{:.0}.{}", sign, abs.trunc(), EIGHTHS[eighths as usize]);
    }
    format!("{}{:.*}", sign, MAX_DECIMALS, abs)
}

/// Strip trailing zeros of the fraction and then a dangling decimal point.
fn trim_zeros(fixed: String) -> String {
    match fixed.contains('.') {
        false => fixed,
        true => fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string(),
    }
}
