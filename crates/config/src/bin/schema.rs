// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Prints the JSON Schema of the configuration file, or writes it to the path
//! given as first argument.

use std::{fs::File, io::Write};

use schemars::{
    generate::SchemaSettings,
    transform::{AddNullable, RecursiveTransform},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let generator = SchemaSettings::draft07()
        .with_transform(RecursiveTransform(AddNullable::default()))
        .into_generator();
    let schema = generator.into_root_schema_for::<oauth2_utils_config::RootConfig>();

    let mut output: Box<dyn Write> = match std::env::args_os().nth(1) {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };

    serde_json::to_writer_pretty(&mut output, &schema)?;
    writeln!(output)?;
    Ok(())
}
