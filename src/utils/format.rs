use chrono::TimeZone;
use crate::api::wallet::CreatedAt;

/// Timestamp layout used for transaction fragments, e.g. `3/1/2024, 1:05:09 PM`
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Text shown when a timestamp names no valid instant
pub const INVALID_DATE: &str = "Invalid Date";

/// Insert a `,` every three digits from the right of the integer part.
///
/// The sign and any fractional part are kept as-is. Values whose integer
/// part is not plain digits are returned unchanged.
pub fn group_thousands(value: &str) -> String {
    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return value.to_string();
    }

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}{}", sign, grouped, frac_part)
}

/// Print a number the way JavaScript's `String(number)` does.
///
/// Integral values print without a fraction; magnitudes below `1e-6` or at
/// least `1e21` use exponent notation (`1e-7`, `1.5e+21`).
pub fn format_js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        let exponential = format!("{:e}", value);
        return match exponential.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => exponential,
        };
    }

    format!("{}", value)
}

/// Render a creation time as wall-clock time in `tz`
pub fn format_timestamp<Tz>(created_at: &CreatedAt, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match created_at.to_datetime(tz) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
