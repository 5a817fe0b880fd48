// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use figment::Figment;
use oauth2_registry::{
    ErrorLocation, Location, Standard, StandardSet, Table, error_codes_at, parameters_at,
};
use oauth2_utils_config::{ConfigurationSectionExt, StandardsConfig};
use tracing::{debug, info_span};

#[derive(Parser, Debug)]
pub(super) struct Options {
    /// The registry to list: parameters, grant-types, response-types,
    /// token-type-hints, endpoint-auth-methods, client-metadata,
    /// authorization-server-metadata or error-codes
    table: Table,

    /// Only list the entries which may appear in this location
    ///
    /// Only applies to the `parameters` and `error-codes` registries.
    #[arg(short, long)]
    location: Option<String>,

    /// Standards to list entries from, overriding the configured ones
    #[arg(short, long = "standard", value_delimiter = ',')]
    standards: Vec<Standard>,
}

impl Options {
    pub fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        let _span = info_span!("cli.registry.list", table = %self.table).entered();

        let standards: StandardSet = if self.standards.is_empty() {
            StandardsConfig::extract_or_default(figment)?.standard_set()
        } else {
            self.standards.iter().copied().collect()
        };
        debug!(standards = ?standards.standards().collect::<Vec<_>>(), "Filtering registry");

        let names = match (self.table, self.location.as_deref()) {
            (table, None) => table.names(standards),

            (Table::Parameters, Some(location)) => {
                let location: Location = location
                    .parse()
                    .with_context(|| format!("unknown parameter location {location:?}"))?;
                parameters_at(location, standards)
            }

            (Table::ErrorCodes, Some(location)) => {
                let location: ErrorLocation = location
                    .parse()
                    .with_context(|| format!("unknown error location {location:?}"))?;
                error_codes_at(location, standards)
            }

            (table, Some(_)) => bail!("the {table} registry has no locations"),
        };

        for name in names {
            println!("{name}");
        }

        Ok(ExitCode::SUCCESS)
    }
}
