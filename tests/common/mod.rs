#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use std::io::Write;
use wealthpath::domain::savings::ProjectionInput;
use wealthpath::domain::session::{AuthSession, User};

pub fn input(initial: f64, monthly: f64, rate: f64, years: f64) -> ProjectionInput {
    ProjectionInput {
        initial_amount: initial,
        monthly_contribution: monthly,
        annual_rate_percent: rate,
        years,
    }
}

pub fn sample_user() -> User {
    User {
        id: "7f9c2d1e".to_string(),
        email: "minh@example.com".to_string(),
        name: "Minh Tran".to_string(),
        currency: "VND".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
    }
}

pub fn signed_in_session() -> AuthSession {
    let mut session = AuthSession::anonymous();
    session.login(sample_user());
    session
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// `ExitCode` has no `PartialEq`; compare through its debug output.
pub fn exit_code_repr(code: std::process::ExitCode) -> String {
    format!("{code:?}")
}

pub fn success_repr() -> String {
    exit_code_repr(std::process::ExitCode::SUCCESS)
}

/// Relative comparison for the decomposition check.
pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
