//! Savings calculator form: raw text fields to a [`ProjectionInput`].

use crate::domain::amount::parse_amount;
use crate::domain::error::{AmountParseError, FormError};
use crate::domain::savings::ProjectionInput;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectionForm {
    pub initial_amount: String,
    pub monthly_contribution: String,
    pub annual_rate_percent: String,
    pub years: String,
}

impl ProjectionForm {
    /// True once every required field has text. The monthly contribution
    /// is optional.
    pub fn is_ready(&self) -> bool {
        [&self.initial_amount, &self.annual_rate_percent, &self.years]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn parse(&self) -> Result<ProjectionInput, FormError> {
        let initial_amount = required("initial_amount", &self.initial_amount)?;
        let monthly_contribution = optional("monthly_contribution", &self.monthly_contribution)?;
        let annual_rate_percent = required("annual_rate_percent", &self.annual_rate_percent)?;
        let years = required("years", &self.years)?;

        non_negative("initial_amount", initial_amount)?;
        non_negative("monthly_contribution", monthly_contribution)?;
        non_negative("years", years)?;

        Ok(ProjectionInput {
            initial_amount,
            monthly_contribution,
            annual_rate_percent,
            years,
        })
    }
}

fn required(field: &'static str, raw: &str) -> Result<f64, FormError> {
    parse_amount(raw).map_err(|source| match source {
        AmountParseError::Empty => FormError::Missing { field },
        source => FormError::Invalid { field, source },
    })
}

fn optional(field: &'static str, raw: &str) -> Result<f64, FormError> {
    match parse_amount(raw) {
        Ok(value) => Ok(value),
        Err(AmountParseError::Empty) => Ok(0.0),
        Err(source) => Err(FormError::Invalid { field, source }),
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), FormError> {
    if value < 0.0 {
        return Err(FormError::Negative { field });
    }
    Ok(())
}
