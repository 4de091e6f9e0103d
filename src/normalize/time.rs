// src/normalize/time.rs

/// Duration assigned to anything that does not parse. Sorts after every
/// finite time.
pub const UNPARSEABLE_TIME: f64 = f64::INFINITY;

/// Parse a race time into seconds.
///
/// Accepted shapes, tried in order:
/// - `[[H:]M:]S.f`  any colon-separated fields with a fractional part;
///   field `i` from the right is weighted by `60^i`
/// - `H:M:S` or `M:S`  integer fields
/// - `S`  plain number of seconds
///
/// Never fails; malformed input yields [`UNPARSEABLE_TIME`].
pub fn parse_time(text: &str) -> f64 {
    let s = text.trim();
    let parsed = if s.contains(':') {
        if s.contains('.') {
            parse_weighted_fields(s)
        } else {
            parse_integer_fields(s)
        }
    } else {
        s.parse::<f64>().ok()
    };

    match parsed {
        Some(v) if v.is_finite() => v,
        _ => UNPARSEABLE_TIME,
    }
}

fn parse_weighted_fields(s: &str) -> Option<f64> {
    let mut total = 0.0;
    let mut weight = 1.0;
    for field in s.rsplit(':') {
        total += field.trim().parse::<f64>().ok()? * weight;
        weight *= 60.0;
    }
    Some(total)
}

fn parse_integer_fields(s: &str) -> Option<f64> {
    let parts = s
        .split(':')
        .map(|p| p.trim().parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;

    let secs = match parts.as_slice() {
        [h, m, s] => h.checked_mul(3600)?.checked_add(m.checked_mul(60)?)?.checked_add(*s)?,
        [m, s] => m.checked_mul(60)?.checked_add(*s)?,
        _ => return None,
    };
    Some(secs as f64)
}

/// Render seconds back into `H:MM:SS` / `MM:SS`, with `.ff` when the value
/// carries a fraction. Non-finite input renders as `N/A`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "N/A".to_string();
    }

    let sign = if seconds < 0.0 { "-" } else { "" };
    let centis = (seconds.abs() * 100.0).round() as u64;
    let whole = centis / 100;
    let frac = centis % 100;

    let h = whole / 3600;
    let m = (whole % 3600) / 60;
    let s = whole % 60;

    let base = if h > 0 {
        format!("{sign}{h}:{m:02}:{s:02}")
    } else {
        format!("{sign}{m:02}:{s:02}")
    };

    if frac == 0 { base } else { format!("{base}.{frac:02}") }
}
