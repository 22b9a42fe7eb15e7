//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_session_adapter::JsonSessionStore;
use crate::domain::amount::{format_amount, Currency};
use crate::domain::calculator_form::ProjectionForm;
use crate::domain::config_validation::validate_config;
use crate::domain::error::{FormError, WealthPathError};
use crate::domain::savings::{self, ProjectionResult};
use crate::domain::session::SessionManager;
use crate::ports::config_port::ConfigPort;

#[derive(Parser, Debug)]
#[command(name = "wealthpath", about = "Personal finance tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Project the future value of savings with monthly compounding
    Project {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Starting deposit
        #[arg(long, allow_hyphen_values = true)]
        initial: Option<String>,
        /// Contribution added at the end of every month
        #[arg(long, allow_hyphen_values = true)]
        monthly: Option<String>,
        /// Nominal annual rate in percent
        #[arg(long, allow_hyphen_values = true)]
        rate: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        years: Option<String>,
        #[arg(long)]
        currency: Option<String>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Inspect or clear the persisted session
    Session {
        #[command(subcommand)]
        action: SessionAction,
        #[arg(short, long, global = true)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Print the signed-in user, if any
    Show,
    /// Forget the signed-in user
    Logout,
}

/// Command-line values for the calculator; each one overrides `[calculator]`.
#[derive(Debug, Clone, Default)]
pub struct ProjectionOverrides {
    pub initial: Option<String>,
    pub monthly: Option<String>,
    pub rate: Option<String>,
    pub years: Option<String>,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Project {
            config,
            initial,
            monthly,
            rate,
            years,
            currency,
        } => {
            let overrides = ProjectionOverrides {
                initial,
                monthly,
                rate,
                years,
            };
            run_project(config.as_ref(), &overrides, currency.as_deref())
        }
        Command::Validate { config } => run_validate(&config),
        Command::Session { action, config } => run_session(action, config.as_ref()),
    }
}

pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, ExitCode> {
    let adapter = match path {
        Some(p) => FileConfigAdapter::from_file(p).map_err(report)?,
        None => FileConfigAdapter::empty(),
    };
    validate_config(&adapter).map_err(report)?;
    Ok(adapter)
}

fn report(err: WealthPathError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::from(&err)
}

pub fn build_projection_form(
    config: &dyn ConfigPort,
    overrides: &ProjectionOverrides,
) -> ProjectionForm {
    let field = |flag: &Option<String>, key: &str| {
        flag.clone()
            .or_else(|| config.get_string("calculator", key))
            .unwrap_or_default()
    };
    ProjectionForm {
        initial_amount: field(&overrides.initial, "initial_amount"),
        monthly_contribution: field(&overrides.monthly, "monthly_contribution"),
        annual_rate_percent: field(&overrides.rate, "annual_rate_percent"),
        years: field(&overrides.years, "years"),
    }
}

pub fn resolve_currency(
    flag: Option<&str>,
    config: &dyn ConfigPort,
) -> Result<Currency, WealthPathError> {
    match flag {
        Some(code) => code
            .parse::<Currency>()
            .map_err(|e| WealthPathError::ConfigInvalid {
                section: "display".into(),
                key: "currency".into(),
                reason: e.to_string(),
            }),
        None => Ok(config
            .get_string("display", "currency")
            .map(|code| Currency::lookup(&code))
            .unwrap_or_default()),
    }
}

pub fn render_projection(result: &ProjectionResult, currency: Currency) -> String {
    format!(
        "Future value:        {}\nTotal contributions: {}\nTotal interest:      {}\n",
        format_amount(result.future_value, currency),
        format_amount(result.total_contributions, currency),
        format_amount(result.total_interest, currency),
    )
}

pub fn run_project(
    config_path: Option<&PathBuf>,
    overrides: &ProjectionOverrides,
    currency_flag: Option<&str>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let currency = match resolve_currency(currency_flag, &config) {
        Ok(c) => c,
        Err(e) => return report(e),
    };

    let form = build_projection_form(&config, overrides);
    if !form.is_ready() {
        let missing = [
            ("initial_amount", &form.initial_amount),
            ("annual_rate_percent", &form.annual_rate_percent),
            ("years", &form.years),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .unwrap_or("initial_amount");
        return report(FormError::Missing { field: missing }.into());
    }

    let input = match form.parse() {
        Ok(i) => i,
        Err(e) => return report(e.into()),
    };
    log::debug!(
        "projecting: periodic rate {}, periods {}",
        savings::periodic_rate(input.annual_rate_percent),
        savings::periods(input.years)
    );

    let result = savings::project(&input);
    print!("{}", render_projection(&result, currency));
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    match load_config(Some(config_path)) {
        Ok(_) => {
            eprintln!("Configuration is valid.");
            ExitCode::SUCCESS
        }
        Err(code) => code,
    }
}

pub fn run_session(action: SessionAction, config_path: Option<&PathBuf>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let mut manager = SessionManager::new(JsonSessionStore::from_config(&config));

    let result = match action {
        SessionAction::Show => manager.restore().map(|session| match &session.user {
            Some(user) if session.is_authenticated => {
                println!("{} <{}> ({})", user.name, user.email, user.currency);
            }
            _ => println!("Not signed in."),
        }),
        SessionAction::Logout => manager.logout().map(|()| println!("Signed out.")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}
