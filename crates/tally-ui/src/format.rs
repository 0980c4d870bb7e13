//! Numeric formatting shared by the y-axis ticks and the bar value labels.

const K: f64 = 1_000.0;
const M: f64 = 1_000_000.0;
const B: f64 = 1_000_000_000.0;

/// Formats a raw value as a compact human-readable string: "950", "1.2K",
/// "1.5M", "2B". Deterministic and total over finite numbers.
pub fn format_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let v = value.abs();

    if v >= B {
        format!("{sign}{}B", trim_decimal(v / B))
    } else if v >= M {
        format!("{sign}{}M", trim_decimal(v / M))
    } else if v >= K {
        format!("{sign}{}K", trim_decimal(v / K))
    } else if v == v.floor() {
        format!("{sign}{v:.0}")
    } else {
        format!("{sign}{v:.1}")
    }
}

fn trim_decimal(v: f64) -> String {
    let formatted = format!("{v:.1}");
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}
