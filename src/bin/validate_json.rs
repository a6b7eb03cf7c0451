// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command-line front end for the validator.
//!
//! Reads the file named by `--file` and prints `Valid: true` or
//! `Valid: false`. The rejection reason is logged to stderr by the
//! boolean entry point.

use std::fs;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "validate-json")]
#[command(about = "Check that a file contains well-formed JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// Path of the file to validate
    #[arg(long)]
    file: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let content = match fs::read(&cli.file) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Error reading file {}: {}", cli.file, err);
            return ExitCode::FAILURE;
        }
    };

    println!("Valid: {}", jsonvalid::is_valid(&content));
    ExitCode::SUCCESS
}
