// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pitchdeck CLI entrypoint.
//!
//! By default this presents a deck file in the terminal. `--check` validates the deck's link
//! table instead and prints the report; `--print-schema` prints the deck file JSON schema.

use std::error::Error;
use std::io::{self, Write};

use pitchdeck::deck::{deck_file_schema, Deck, ValidationReport};
use pitchdeck::logging::{self, LogDestination};
use pitchdeck::model::SlideId;
use pitchdeck::presentation::Presentation;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<deck.json>] [--start <slide-id>]\n  {program} [--deck <deck.json>] [--start <slide-id>]\n  {program} --demo [--start <slide-id>]\n  {program} [<deck.json> | --demo] --check [--strict]\n  {program} --print-schema\n\nPresents the deck in the terminal. Without a deck file the built-in demo deck is used.\n--start mounts the given slide instead of the deck's start slide.\n\n--check validates the deck links and prints the issues; with --strict, errors exit with status 1.\n--print-schema prints the JSON schema for deck files.\n\nEnvironment: PITCHDECK_LOG (log filter, default warn), PITCHDECK_LOG_FILE (log to file),\nPITCHDECK_TUI_PALETTE (fg,bg,accent,muted,alert as #RRGGBB)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    deck_path: Option<String>,
    start: Option<String>,
    check: bool,
    strict: bool,
    print_schema: bool,
}

impl CliOptions {
    fn interactive(&self) -> bool {
        !self.check && !self.print_schema
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--deck" => {
                if options.deck_path.is_some() {
                    return Err(());
                }
                options.deck_path = Some(args.next().ok_or(())?);
            }
            "--start" => {
                if options.start.is_some() {
                    return Err(());
                }
                options.start = Some(args.next().ok_or(())?);
            }
            "--check" => {
                if options.check {
                    return Err(());
                }
                options.check = true;
            }
            "--strict" => {
                if options.strict {
                    return Err(());
                }
                options.strict = true;
            }
            "--print-schema" => {
                if options.print_schema {
                    return Err(());
                }
                options.print_schema = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.deck_path.is_some() {
                    return Err(());
                }
                options.deck_path = Some(arg);
            }
        }
    }

    if options.demo && options.deck_path.is_some() {
        return Err(());
    }

    if options.strict && !options.check {
        return Err(());
    }

    if options.print_schema
        && (options.demo || options.deck_path.is_some() || options.start.is_some() || options.check)
    {
        return Err(());
    }

    Ok(options)
}

fn load_deck(options: &CliOptions) -> Result<Deck, Box<dyn Error>> {
    let deck = match &options.deck_path {
        Some(path) => Deck::load(path)?,
        None => Deck::demo()?,
    };
    tracing::debug!(title = deck.title(), slides = deck.len(), "deck loaded");
    Ok(deck)
}

fn write_report(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
    for issue in report.issues() {
        writeln!(out, "{}: {issue}", issue.severity())?;
    }
    let errors = report.errors().count();
    let warnings = report.warnings().count();
    writeln!(out, "{errors} error(s), {warnings} warning(s)")
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "pitchdeck".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        logging::init(&LogDestination::from_env(options.interactive()))?;

        if options.print_schema {
            println!("{}", serde_json::to_string_pretty(&deck_file_schema())?);
            return Ok(());
        }

        let deck = load_deck(&options)?;

        if options.check {
            let report = deck.validate();
            write_report(&mut io::stdout().lock(), &report)?;
            if options.strict && report.has_errors() {
                std::process::exit(1);
            }
            return Ok(());
        }

        let start = options.start.as_deref().map(SlideId::new).transpose()?;
        let presentation = Presentation::new(deck, start)?;
        pitchdeck::tui::run(presentation)?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("pitchdeck: {err}");
        std::process::exit(1);
    }
}
