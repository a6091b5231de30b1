use std::sync::LazyLock;

use regex::Regex;

/// `15.000`, `1,250,000`: one separator kind, used only between groups of three.
static GROUPED_INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[1-9]\d{0,2}(?:(?:\.\d{3})+|(?:,\d{3})+)$").expect("valid regex")
});

/// Parse a price-like string written as `1.234,56`, `1,234.56` or `1234`.
///
/// With both separators present, whichever of `,` and `.` appears last is the
/// decimal separator and every occurrence of the other one is dropped. With a
/// single separator kind, strict thousands grouping (`15.000`, `1,250,000`)
/// reads as an integer and anything else reads the separator as a decimal point.
/// Empty input is `0.0`. Anything that does not parse to a finite number,
/// including `inf` and `NaN` spelled out, is `NaN`.
pub fn normalize(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }

    let canonical = match (raw.rfind(','), raw.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => raw.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => raw.replace(',', ""),
        _ if GROUPED_INTEGER.is_match(raw) => raw.replace(['.', ','], ""),
        (Some(_), None) => raw.replace(',', "."),
        (None, _) => raw.to_string(),
    };

    canonical
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(f64::NAN)
}
