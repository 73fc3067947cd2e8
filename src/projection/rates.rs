//! Rate conversions shared by both projectors

/// Effective monthly rate equivalent to an annual rate: (1 + annual)^(1/12) - 1
pub fn monthly_rate(annual: f64) -> f64 {
    (1.0 + annual).powf(1.0 / 12.0) - 1.0
}

/// Compound growth factor after `months` months at a monthly rate
pub fn growth_factor(monthly: f64, months: u32) -> f64 {
    (1.0 + monthly).powi(months as i32)
}

/// Annual indexation falls on months 13, 25, 37, ... and never on month 1
pub fn is_anniversary(month: u32) -> bool {
    month > 1 && month % 12 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_rate_compounds_to_annual() {
        let m = monthly_rate(0.105);
        assert_relative_eq!((1.0 + m).powi(12), 1.105, epsilon = 1e-12);
        assert_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_anniversaries() {
        assert!(!is_anniversary(1));
        assert!(!is_anniversary(12));
        assert!(is_anniversary(13));
        assert!(is_anniversary(25));
        assert!(!is_anniversary(24));
    }

    #[test]
    fn test_growth_factor() {
        assert_relative_eq!(growth_factor(0.01, 2), 1.0201, epsilon = 1e-12);
        assert_eq!(growth_factor(0.05, 0), 1.0);
    }
}
