//! printf-style message interpolation
//!
//! The first argument of an emit call is a template; the remaining values are
//! substituted into its placeholders:
//!
//! | Placeholder | Substitution |
//! |---|---|
//! | `%s` | strings verbatim, other values as JSON |
//! | `%d` | numeric conversion (`NaN` when not a number) |
//! | `%i` | integer conversion, truncating |
//! | `%f` | floating point conversion |
//! | `%j`, `%o`, `%O` | JSON |
//! | `%%` | a literal `%` |
//!
//! Placeholders without a matching value are left in place, and values
//! without a placeholder are appended separated by spaces.

pub use serde_json::Value;

/// Substitute `args` into `template`.
///
/// # Examples
///
/// ```
/// use rust_event_logger::core::format::{interpolate, Value};
///
/// let message = interpolate("should appear: %s", &[Value::from("boom")]);
/// assert_eq!(message, "should appear: boom");
///
/// let message = interpolate("%d items, %j", &[Value::from(3), serde_json::json!({"a": 1})]);
/// assert_eq!(message, "3 items, {\"a\":1}");
/// ```
pub fn interpolate(template: &str, args: &[Value]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut output = String::with_capacity(template.len() + args.len() * 8);
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            output.push(c);
            continue;
        }

        let Some(&conversion) = chars.peek() else {
            output.push('%');
            break;
        };

        if conversion == '%' {
            chars.next();
            output.push('%');
            continue;
        }

        if !matches!(conversion, 's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O') {
            output.push('%');
            continue;
        }

        match remaining.next() {
            Some(value) => {
                chars.next();
                output.push_str(&substitute(conversion, value));
            }
            None => output.push('%'),
        }
    }

    for value in remaining {
        output.push(' ');
        output.push_str(&as_string(value));
    }

    output
}

fn substitute(conversion: char, value: &Value) -> String {
    match conversion {
        's' => as_string(value),
        'd' => format_number(to_number(value)),
        'i' => format_number(to_number(value).trunc()),
        'f' => format_number(to_number(value)),
        _ => value.to_string(),
    }
}

fn as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
