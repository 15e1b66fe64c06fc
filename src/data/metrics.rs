//! Display-level derived metrics. Raw counts come pre-computed from the
//! upstream pipeline; this module only turns them into percentages, rates,
//! and formatted strings, with a guard for sparse entities whose
//! denominators are zero.

/// Rendered wherever a metric has no defined value (zero denominator).
pub const UNAVAILABLE: &str = "\u{2014}";

/// numerator / denominator * 100, or None when the denominator is zero.
/// Never yields NaN or infinity.
pub fn percentage(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64 * 100.0)
}

/// 0..1 form of `percentage`.
pub fn ratio(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(part as f64 / whole as f64)
}

/// Round to one decimal place. Payloads carry rounded values so every page
/// shows the same figure for the same statistic.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One-decimal percent string, or the unavailable sentinel.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => UNAVAILABLE.to_string(),
    }
}

/// Thousands-separated count string ("3,000,000").
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{format_count, format_percent, percentage, ratio, round1, UNAVAILABLE};

    #[test]
    fn percentage_matches_float_division() {
        let cases: &[(u64, u64)] = &[(1, 4), (918_787, 3_000_000), (0, 7), (7, 7), (9, 2)];
        for &(num, den) in cases {
            let got = percentage(num, den).expect("nonzero denominator");
            let want = num as f64 / den as f64 * 100.0;
            assert!((got - want).abs() < 1e-9, "{num}/{den}: {got} vs {want}");
            assert!(got.is_finite());
        }
    }

    #[test]
    fn zero_denominator_is_unavailable_not_nan() {
        assert_eq!(percentage(5, 0), None);
        assert_eq!(percentage(0, 0), None);
        assert_eq!(ratio(5, 0), None);
        assert_eq!(format_percent(percentage(5, 0)), UNAVAILABLE);
    }

    #[test]
    fn grant_rate_scenario_renders_one_decimal() {
        // 918,787 grants over 3,000,000 decided.
        let rate = percentage(918_787, 3_000_000);
        assert_eq!(format_percent(rate), "30.6%");
    }

    #[test]
    fn rounding_is_stable_at_one_decimal() {
        assert_eq!(round1(30.6262), 30.6);
        assert_eq!(round1(30.65), 30.7);
        assert_eq!(format_percent(Some(0.0)), "0.0%");
        assert_eq!(format_percent(Some(100.0)), "100.0%");
    }

    #[test]
    fn counts_group_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(3_000_000), "3,000,000");
        assert_eq!(format_count(1_234_567_890), "1,234,567,890");
    }
}
