use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::user::application::domain::entities::SuperAdminSeed;

const DEFAULT_SESSION_TTL: i64 = 3600;
const DEFAULT_BCRYPT_COST: u32 = 10;
const DEFAULT_ACTIVATION_CODE_TTL: i64 = 86_400;

/// Where outgoing mail goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpSettings {
    /// Local catcher such as Mailpit, used when `RUST_ENV=test`.
    Local { host: String, port: u16 },
    Relay {
        server: String,
        username: String,
        password: String,
    },
}

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub rust_env: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub session_ttl: i64,
    pub bcrypt_cost: u32,
    pub activation_code_ttl: i64,
    pub password_setup_url: String,
    pub email_from: String,
    pub smtp: SmtpSettings,
    pub public_paths: Vec<String>,
    /// Account created at start-up when no user holds its email yet.
    pub super_admin: Option<SuperAdminSeed>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("rust_env", &self.rust_env)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("session_ttl", &self.session_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("activation_code_ttl", &self.activation_code_ttl)
            .field("password_setup_url", &self.password_setup_url)
            .field("email_from", &self.email_from)
            .field("public_paths", &self.public_paths)
            .field("super_admin", &self.super_admin)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests never touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{key} is not set"))
        };

        let rust_env = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let smtp = if rust_env == "test" {
            SmtpSettings::Local {
                host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or("SMTP_PORT", lookup("SMTP_PORT"), 1025)?,
            }
        } else {
            SmtpSettings::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        let public_paths = lookup("PUBLIC_PATHS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let super_admin = lookup("SUPER_ADMIN")
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| serde_json::from_str::<SuperAdminSeed>(&raw))
            .transpose()
            .context("SUPER_ADMIN is not valid JSON")?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: required("HOST")?,
            port: parse_or("PORT", Some(required("PORT")?), 0)?,
            jwt_secret: required("JWT_SECRET")?,
            session_ttl: parse_or("SESSION_TTL", lookup("SESSION_TTL"), DEFAULT_SESSION_TTL)?,
            bcrypt_cost: parse_or("BCRYPT_COST", lookup("BCRYPT_COST"), DEFAULT_BCRYPT_COST)?,
            activation_code_ttl: parse_or(
                "ACTIVATION_CODE_TTL",
                lookup("ACTIVATION_CODE_TTL"),
                DEFAULT_ACTIVATION_CODE_TTL,
            )?,
            password_setup_url: required("PASSWORD_SETUP_URL")?,
            email_from: required("EMAIL_FROM")?,
            smtp,
            public_paths,
            super_admin,
            rust_env,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value '{value}'")),
        None => Ok(default),
    }
}
