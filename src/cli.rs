// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::core::models::Environment;
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|arg| arg == "--lang")
        .and_then(|pos| args.get(pos + 1))
        .cloned()
}

fn build_cli(locale: &str) -> Command {
    Command::new("workflow-processor")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("work-dir")
                .long("work-dir")
                .help(t!("arg_work_dir", locale = locale).to_string())
                .value_name("WORK_DIR")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("environment")
                .long("environment")
                .help(t!("arg_environment", locale = locale).to_string())
                .value_name("ENVIRONMENT")
                .required(true)
                // Closed enum: anything else is rejected here, before the
                // environment processor can see it.
                .value_parser(Environment::NAMES)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("log-dir")
                .long("log-dir")
                .help(t!("arg_log_dir", locale = locale).to_string())
                .value_name("LOG_DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help(t!("arg_output_dir", locale = locale).to_string())
                .value_name("OUTPUT_DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    match pre_parse_language() {
        Some(language) => rust_i18n::set_locale(&language),
        None => crate::init(),
    }
    let language = rust_i18n::locale().to_string();

    let matches = build_cli(&language).get_matches();

    let work_dir = matches
        .get_one::<PathBuf>("work-dir")
        .expect("required argument")
        .clone();
    let environment: Environment = matches
        .get_one::<String>("environment")
        .expect("required argument")
        .parse()?;
    let log_dir = matches.get_one::<PathBuf>("log-dir").cloned();
    let output_dir = matches.get_one::<PathBuf>("output-dir").cloned();

    commands::run::execute(work_dir, environment, log_dir, output_dir).await
}
