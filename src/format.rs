//! Number and duration formatting for the view.

const SUFFIXES: &[(f64, &str, usize)] = &[
    (1e12, "T", 2),
    (1e9, "B", 2),
    (1e6, "M", 2),
    (1e3, "K", 1),
];

/// Compact amount: `"7.5"`, `"842"`, `"12.3K"`, `"4.56M"`, `"1.20T"`.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return if n.is_nan() { "0".into() } else { "∞".into() };
    }
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }
    for &(scale, suffix, decimals) in SUFFIXES {
        if n >= scale {
            return format!("{:.*}{}", decimals, n / scale, suffix);
        }
    }
    if n < 10.0 {
        format!("{n:.1}")
    } else {
        format!("{}", n.floor() as u64)
    }
}

/// Per-second rate, with extra precision for small rates.
pub fn format_rate(rate: f64) -> String {
    if rate == 0.0 {
        "0/s".into()
    } else if rate.abs() < 0.1 {
        format!("{rate:.2}/s")
    } else if rate.abs() < 1.0 {
        format!("{rate:.1}/s")
    } else {
        format!("{}/s", format_number(rate))
    }
}

/// `"45s"`, `"3m 20s"`, `"2h 5m"`.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    match total {
        0..=59 => format!("{total}s"),
        60..=3599 => format!("{}m {}s", total / 60, total % 60),
        _ => format!("{}h {}m", total / 3600, (total % 3600) / 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(7.46), "7.5");
        assert_eq!(format_number(842.9), "842");
    }

    #[test]
    fn suffixed_numbers() {
        assert_eq!(format_number(12_345.0), "12.3K");
        assert_eq!(format_number(4_560_000.0), "4.56M");
        assert_eq!(format_number(57_500_000.0), "57.50M");
        assert_eq!(format_number(2.5e9), "2.50B");
        assert_eq!(format_number(1.2e12), "1.20T");
        assert_eq!(format_number(3e15), "3000.00T");
    }

    #[test]
    fn negative_and_non_finite() {
        assert_eq!(format_number(-1500.0), "-1.5K");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn rates() {
        assert_eq!(format_rate(0.0), "0/s");
        assert_eq!(format_rate(0.05), "0.05/s");
        assert_eq!(format_rate(0.5), "0.5/s");
        assert_eq!(format_rate(10_000_000.0), "10.00M/s");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(45.9), "45s");
        assert_eq!(format_duration(200.0), "3m 20s");
        assert_eq!(format_duration(7_500.0), "2h 5m");
        assert_eq!(format_duration(-3.0), "0s");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_format_number_no_panic(n in proptest::num::f64::ANY) {
            let _ = format_number(n);
        }

        #[test]
        fn prop_nonneg_has_no_minus(n in 0.0f64..1e18) {
            let s = format_number(n);
            prop_assert!(!s.starts_with('-'), "got: {}", s);
        }

        #[test]
        fn prop_negative_has_minus(n in -1e18f64..-0.1) {
            let s = format_number(n);
            prop_assert!(s.starts_with('-'), "got: {}", s);
        }

        #[test]
        fn prop_integers_below_thousand_verbatim(n in 10u64..1000) {
            prop_assert_eq!(format_number(n as f64), n.to_string());
        }

        #[test]
        fn prop_suffix_matches_magnitude(n in 1_000.0f64..1e15) {
            let s = format_number(n);
            let expected = if n >= 1e12 { 'T' } else if n >= 1e9 { 'B' } else if n >= 1e6 { 'M' } else { 'K' };
            prop_assert!(s.ends_with(expected), "{} -> {}", n, s);
        }
    }
}
