// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the mail suite status service
//!
//! Takes a one-time snapshot of the process environment at startup. Handlers
//! only ever see the resulting immutable [`Config`].

use std::net::SocketAddr;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const BIND_HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8080;
    pub const ENVIRONMENT: &str = "development";
    /// Shown on the HTML page when no hostname or domain resolves
    pub const NOT_CONFIGURED: &str = "Not configured";
    /// Used in startup logs when no hostname or domain resolves
    pub const LOCALHOST: &str = "localhost";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const NODE_ENV: &str = "NODE_ENV";
    pub const HOSTNAME: &str = "HOSTNAME";
    pub const RAILWAY_PUBLIC_DOMAIN: &str = "RAILWAY_PUBLIC_DOMAIN";
    pub const MAILDOMAIN: &str = "MAILDOMAIN";
}

/// Ordered list of environment variables, first non-empty one wins
#[derive(Debug, Clone, Copy)]
pub struct FallbackChain(&'static [&'static str]);

impl FallbackChain {
    pub const HOSTNAME: FallbackChain =
        FallbackChain(&[env_vars::HOSTNAME, env_vars::RAILWAY_PUBLIC_DOMAIN]);
    pub const DOMAIN: FallbackChain =
        FallbackChain(&[env_vars::MAILDOMAIN, env_vars::RAILWAY_PUBLIC_DOMAIN]);

    #[must_use]
    pub const fn new(candidates: &'static [&'static str]) -> Self {
        Self(candidates)
    }

    #[must_use]
    pub fn candidates(&self) -> &'static [&'static str] {
        self.0
    }

    /// Returns the value of the first candidate that is set and non-empty
    pub fn resolve<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.0
            .iter()
            .filter_map(|name| lookup(*name))
            .find(|value| !value.is_empty())
    }
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub hostname: Option<String>,
    pub domain: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: defaults::PORT,
            environment: defaults::ENVIRONMENT.to_string(),
            hostname: None,
            domain: None,
        }
    }
}

impl Config {
    /// Loads configuration from the process environment and an optional `.env` file
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(env_vars::PORT)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                AppError::Config(format!("Invalid {} value '{}': {}", env_vars::PORT, raw, e))
            })?,
            None => defaults::PORT,
        };

        let environment = lookup(env_vars::NODE_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| defaults::ENVIRONMENT.to_string());

        let hostname = FallbackChain::HOSTNAME.resolve(&lookup);
        let domain = FallbackChain::DOMAIN.resolve(&lookup);

        if hostname.is_none() {
            tracing::debug!("No hostname configured");
        }
        if domain.is_none() {
            tracing::debug!("No mail domain configured");
        }

        Ok(Config {
            port,
            environment,
            hostname,
            domain,
        })
    }

    /// Address the HTTP listener binds to
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let addr: SocketAddr = format!("{}:{}", defaults::BIND_HOST, self.port).parse()?;
        Ok(addr)
    }

    #[must_use]
    pub fn hostname_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.hostname.as_deref().unwrap_or(default)
    }

    #[must_use]
    pub fn domain_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.domain.as_deref().unwrap_or(default)
    }
}
