use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Renders a duration as `1h2m3.456s`.
///
/// Sub-second values use a single unit (`ns`, `µs` or `ms`) with a trimmed
/// fraction. From one second up, hours are shown only when non-zero and
/// minutes whenever hours are, e.g. `1h0m0s` or `2m3.5s`.
pub fn format_uptime(elapsed: Duration) -> String {

    let nanos = elapsed.as_nanos();

    if nanos == 0 {
        return "0s".to_string();
    }

    if nanos < NANOS_PER_SEC {
        return if nanos < NANOS_PER_MICRO {
            format!("{}ns", nanos)
        } else if nanos < NANOS_PER_MILLI {
            let (whole, frac) = split_fraction(nanos, 3);
            format!("{}{}µs", whole, frac)
        } else {
            let (whole, frac) = split_fraction(nanos, 6);
            format!("{}{}ms", whole, frac)
        };
    }

    let (total_secs, frac) = split_fraction(nanos, 9);
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;

    if total_mins == 0 {
        return format!("{}{}s", secs, frac);
    }

    let mins = total_mins % 60;
    let hours = total_mins / 60;

    if hours == 0 {
        format!("{}m{}{}s", mins, secs, frac)
    } else {
        format!("{}h{}m{}{}s", hours, mins, secs, frac)
    }

}

// splits off the lowest `precision` digits as a ".ddd" suffix with trailing zeros dropped
fn split_fraction(value: u128, precision: u32) -> (u128, String) {

    let scale = 10u128.pow(precision);
    let frac = value % scale;

    if frac == 0 {
        return (value / scale, String::new());
    }

    let digits = format!("{:0width$}", frac, width = precision as usize);
    (value / scale, format!(".{}", digits.trim_end_matches('0')))

}

/// Inverse of [`format_uptime`], used to compare reported uptimes in tests.
#[cfg(test)]
pub fn parse_uptime(text: &str) -> Option<Duration> {

    let mut rest = text;
    let mut total_nanos = 0f64;

    while !rest.is_empty() {
        let number_end = rest.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
        let value: f64 = rest[..number_end].parse().ok()?;
        rest = &rest[number_end..];

        let unit_end = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        let scale = match &rest[..unit_end] {
            "h" => 3_600e9,
            "m" => 60e9,
            "s" => 1e9,
            "ms" => 1e6,
            "µs" => 1e3,
            "ns" => 1.0,
            _ => return None
        };
        rest = &rest[unit_end..];

        total_nanos += value * scale;
    }

    Some(Duration::from_nanos(total_nanos.round() as u64))

}
