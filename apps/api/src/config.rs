use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::dashboard::pipeline::PlanDefaults;

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable doesn't parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON company catalog; the built-in catalog is used when unset.
    pub company_catalog_path: Option<PathBuf>,
    pub default_timeline_months: u32,
    pub default_weekly_hours: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: parse_or("PORT", lookup("PORT"), 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            company_catalog_path: lookup("COMPANY_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            default_timeline_months: parse_or(
                "DEFAULT_TIMELINE_MONTHS",
                lookup("DEFAULT_TIMELINE_MONTHS"),
                4,
            )?,
            default_weekly_hours: parse_or(
                "DEFAULT_WEEKLY_HOURS",
                lookup("DEFAULT_WEEKLY_HOURS"),
                20,
            )?,
        })
    }

    pub fn plan_defaults(&self) -> PlanDefaults {
        PlanDefaults {
            timeline_months: self.default_timeline_months,
            weekly_hours: self.default_weekly_hours,
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, value: Option<String>, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
