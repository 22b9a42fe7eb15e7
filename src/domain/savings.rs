//! Savings projection: future value of a deposit plus monthly contributions.
//!
//! Monthly compounding, contributions at the end of each period (ordinary
//! annuity). Pure arithmetic with no validation: non-finite inputs produce
//! non-finite outputs, and callers are expected to guard with
//! [`crate::domain::calculator_form::ProjectionForm`].

pub const PERIODS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionInput {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    /// Nominal annual rate in percent, so `7.0` means 7%.
    pub annual_rate_percent: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionResult {
    pub future_value: f64,
    pub total_contributions: f64,
    /// Always `future_value - total_contributions`.
    pub total_interest: f64,
}

pub fn periodic_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / PERIODS_PER_YEAR
}

/// Number of compounding periods. Fractional years give fractional periods.
pub fn periods(years: f64) -> f64 {
    years * PERIODS_PER_YEAR
}

pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let r = periodic_rate(input.annual_rate_percent);
    let n = periods(input.years);
    let principal = input.initial_amount;
    let payment = input.monthly_contribution;

    let future_value = if r == 0.0 {
        principal + payment * n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * growth + payment * ((growth - 1.0) / r)
    };

    let total_contributions = principal + payment * n;
    let total_interest = future_value - total_contributions;

    ProjectionResult {
        future_value,
        total_contributions,
        total_interest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input(initial: f64, monthly: f64, rate: f64, years: f64) -> ProjectionInput {
        ProjectionInput {
            initial_amount: initial,
            monthly_contribution: monthly,
            annual_rate_percent: rate,
            years,
        }
    }

    #[test]
    fn lump_sum_compounds_monthly() {
        let result = project(&input(10_000.0, 0.0, 7.0, 20.0));
        assert_abs_diff_eq!(result.future_value, 40_387.39, epsilon = 0.01);
        assert_abs_diff_eq!(result.total_contributions, 10_000.0);
        assert_abs_diff_eq!(result.total_interest, 30_387.39, epsilon = 0.01);
    }

    #[test]
    fn deposit_with_contributions() {
        let result = project(&input(5_000.0, 500.0, 7.0, 10.0));
        assert_abs_diff_eq!(result.future_value, 96_590.71, epsilon = 0.01);
        assert_abs_diff_eq!(result.total_contributions, 65_000.0);
        assert!(result.total_interest > 0.0);
    }

    #[test]
    fn zero_rate_is_plain_sum() {
        let result = project(&input(1_000.0, 100.0, 0.0, 5.0));
        assert_eq!(result.future_value, 7_000.0);
        assert_eq!(result.total_contributions, 7_000.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn zero_horizon_returns_principal() {
        let result = project(&input(2_500.0, 200.0, 5.0, 0.0));
        assert_eq!(result.future_value, 2_500.0);
        assert_eq!(result.total_contributions, 2_500.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn fractional_years_use_real_exponent() {
        let half = project(&input(1_000.0, 0.0, 12.0, 0.5));
        assert_abs_diff_eq!(half.future_value, 1_000.0 * 1.01_f64.powi(6), epsilon = 1e-9);

        let partial_month = project(&input(1_000.0, 0.0, 12.0, 1.0 / 24.0));
        assert_abs_diff_eq!(
            partial_month.future_value,
            1_000.0 * 1.01_f64.powf(0.5),
            epsilon = 1e-9
        );
    }

    #[test]
    fn nan_input_propagates_to_every_field() {
        let result = project(&input(f64::NAN, 0.0, 5.0, 10.0));
        assert!(result.future_value.is_nan());
        assert!(result.total_contributions.is_nan());
        assert!(result.total_interest.is_nan());
    }

    #[test]
    fn negative_rate_is_not_rejected() {
        let result = project(&input(1_000.0, 0.0, -12.0, 1.0));
        assert_abs_diff_eq!(result.future_value, 1_000.0 * 0.99_f64.powi(12), epsilon = 1e-9);
        assert!(result.total_interest < 0.0);
    }

    #[test]
    fn derived_rate_and_periods() {
        assert_abs_diff_eq!(periodic_rate(6.0), 0.005, epsilon = 1e-15);
        assert_eq!(periods(2.5), 30.0);
    }
}
