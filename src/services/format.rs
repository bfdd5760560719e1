// src/services/format.rs

/// Whole US dollars with thousands separators, e.g. `$12,500` or `-$300`.
pub fn format_currency(value: f64) -> String {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn format_multiple(multiple: f64) -> String {
    format!("{:.2}x", multiple)
}

pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{}%", p.round()),
        None => "N/A".to_string(),
    }
}

pub fn format_payback(payback_months: Option<f64>) -> String {
    let months = match payback_months {
        Some(m) if m.is_finite() && m >= 0.0 => m,
        _ => return "N/A".to_string(),
    };

    if months < 12.0 {
        let tenths = (months * 10.0).round() / 10.0;
        if tenths.fract() == 0.0 {
            format!("{} months", tenths as u64)
        } else {
            format!("{:.1} months", tenths)
        }
    } else {
        let mut years = (months / 12.0).floor() as u64;
        let mut remainder = (months % 12.0).round() as u64;
        if remainder == 12 {
            years += 1;
            remainder = 0;
        }
        format!("{}y {}m", years, remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(7000.0), "$7,000");
        assert_eq!(format_currency(1234567.4), "$1,234,567");
        assert_eq!(format_currency(-1200.0), "-$1,200");
        assert_eq!(format_currency(f64::NAN), "$0");
    }

    #[test]
    fn test_multiple() {
        assert_eq!(format_multiple(2.5238), "2.52x");
        assert_eq!(format_multiple(1.5), "1.50x");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(Some(120.0)), "120%");
        assert_eq!(format_percent(Some(-60.0)), "-60%");
        assert_eq!(format_percent(None), "N/A");
    }

    #[test]
    fn test_payback() {
        assert_eq!(format_payback(None), "N/A");
        assert_eq!(format_payback(Some(10.0)), "10 months");
        assert_eq!(format_payback(Some(7.46)), "7.5 months");
        assert_eq!(format_payback(Some(12.0)), "1y 0m");
        assert_eq!(format_payback(Some(30.4)), "2y 6m");
        assert_eq!(format_payback(Some(23.8)), "2y 0m");
    }
}
