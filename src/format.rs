//! Swedish display formatting shared by every report consumer.
//!
//! The web views and the PDF exporter must render identical strings, so this
//! is the only place these rules live. Non-finite inputs render as zero; the
//! report DTO already guarantees finite numbers, this keeps the promise even
//! for values computed downstream.

/// Group an integer with spaces as thousands separators, sv-SE style.
fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ");
    if n < 0 { format!("-{grouped}") } else { grouped }
}

/// One decimal place with a decimal comma, e.g. `4.8` → `"4,8"`.
fn decimal_comma(value: f64) -> String {
    format!("{value:.1}").replace('.', ",")
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Whole-krona currency string: `123456.7` → `"123 457 kr"`, `0` → `"0 kr"`.
pub fn format_currency(value: f64) -> String {
    let rounded = finite_or_zero(value).round() as i64;
    format!("{} kr", group_thousands(rounded))
}

/// Percentage string from a percentage-as-number (`42` means 42 %, not 0.42):
/// at most one decimal place, decimal comma, no space before the sign.
/// `0` → `"0%"`, `42.53` → `"42,5%"`.
pub fn format_percent(value: f64) -> String {
    let rounded = (finite_or_zero(value) * 10.0).round() / 10.0;
    if rounded == rounded.trunc() {
        format!("{}%", rounded.trunc() as i64)
    } else {
        format!("{}%", decimal_comma(rounded))
    }
}

/// Human-readable month count.
///
/// Rounds to one decimal first, then: under a month renders as days
/// (`round(months * 30)`), under a year as `"N,N månader"`, from twelve
/// months up as `"Y år"` with an `"och M månader"` clause unless the
/// remainder rounds away.
pub fn format_months(value: f64) -> String {
    let months = (finite_or_zero(value) * 10.0).round() / 10.0;

    if months < 1.0 {
        return format!("{} dagar", (months * 30.0).round() as i64);
    }
    if months < 12.0 {
        return format!("{} månader", decimal_comma(months));
    }

    let mut years = (months / 12.0).floor() as i64;
    let mut remainder = (months - (years as f64) * 12.0).round() as i64;
    if remainder == 12 {
        years += 1;
        remainder = 0;
    }
    if remainder == 0 {
        format!("{years} år")
    } else {
        format!("{years} år och {remainder} månader")
    }
}
