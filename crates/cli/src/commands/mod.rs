// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};

mod config;
mod registry;
mod scope;
mod validate;

#[derive(Parser, Debug)]
enum Subcommand {
    /// Configuration-related commands
    Config(self::config::Options),

    /// Parse and check scope parameters
    Scope(self::scope::Options),

    /// List the entries of the OAuth 2.0, OpenID Connect and UMA 2.0
    /// registries
    Registry(self::registry::Options),

    /// Check the syntax of OAuth 2.0 request and response elements
    Validate(self::validate::Options),
}

#[derive(Parser, Debug)]
#[command(version = crate::VERSION)]
pub struct Options {
    /// Path to the configuration file
    #[arg(short, long, global = true, action = clap::ArgAction::Append)]
    config: Vec<Utf8PathBuf>,

    #[command(subcommand)]
    subcommand: Subcommand,
}

impl Options {
    pub fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        use Subcommand as S;
        match self.subcommand {
            S::Config(c) => c.run(figment),
            S::Scope(c) => c.run(figment),
            S::Registry(c) => c.run(figment),
            S::Validate(c) => Ok(c.run()),
        }
    }

    /// Get a [`Figment`] instance with the configuration loaded
    pub fn figment(&self) -> Figment {
        let configs = if self.config.is_empty() {
            // Read the OAUTH2_UTILS_CONFIG environment variable
            std::env::var("OAUTH2_UTILS_CONFIG")
                // Split the environment variable
                .map(|config| config.split(':').map(Utf8PathBuf::from).collect())
                // Default to "config.yaml"
                .unwrap_or_else(|_| vec!["config.yaml".into()])
        } else {
            self.config.clone()
        };

        let base = Figment::new().merge(Env::prefixed("OAUTH2_UTILS_").split("__"));

        configs
            .into_iter()
            .fold(base, |f, path| f.admerge(Yaml::file(path)))
    }
}
