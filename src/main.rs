// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sotd CLI entrypoint.
//!
//! Runs the interactive wizard and prints the finished shave-of-the-day post to stdout on exit.

use std::error::Error;
use std::io;

use sotd::config::{Config, Overrides};
use sotd::export::{Exporter, TextExporter};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--manual] [--order <codes>] [--date full|locale|none] [--vocab <file>] [--log <file>]\n\n--order picks the product categories and their order from L B R b P M F p\n(Lather, Brush, Razor, Blade, Post Shave, Moar Post Shave, Fragrance, Prep).\nUnknown codes are dropped; the cycling wizard keeps at most six.\n--manual switches from the cycling wizard to free-form line building.\n--vocab merges a JSON file of product lists over the built-in ones.\n\nEnvironment fallbacks: SOTD_ORDER, SOTD_DATE, SOTD_MODE=cycle|manual, SOTD_VOCAB, SOTD_LOG.\nLog filtering follows RUST_LOG (default sotd=info)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    overrides: Overrides,
    help: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    fn take_value(
        slot: &mut Option<String>,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<(), ()> {
        if slot.is_some() {
            return Err(());
        }
        let value = args.next().ok_or(())?;
        if value.starts_with("--") {
            return Err(());
        }
        *slot = Some(value);
        Ok(())
    }

    while let Some(arg) = args.next() {
        let overrides = &mut options.overrides;
        match arg.as_str() {
            "--manual" => {
                if overrides.manual {
                    return Err(());
                }
                overrides.manual = true;
            }
            "--order" => take_value(&mut overrides.order, &mut args)?,
            "--date" => take_value(&mut overrides.date, &mut args)?,
            "--vocab" => take_value(&mut overrides.vocab, &mut args)?,
            "--log" => take_value(&mut overrides.log, &mut args)?,
            "-h" | "--help" => options.help = true,
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "sotd".to_owned());

        let options = match parse_options(args) {
            Ok(options) if !options.help => options,
            Ok(_) => {
                print_usage(&program);
                return Ok(());
            }
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let config = Config::from_env(options.overrides)?;
        sotd::logging::init(config.log_file.as_deref())?;
        let wizard = config.build_wizard()?;

        let document = sotd::tui::run(wizard)?;
        if !document.is_empty() {
            TextExporter::new(io::stdout()).export(&document)?;
        }
        Ok(())
    })();

    if let Err(err) = result {
        tracing::error!(error = %err, "sotd failed");
        eprintln!("sotd: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn args(items: &[&str]) -> impl Iterator<Item = String> {
        items.iter().map(|item| (*item).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_manual_flag() {
        let options = parse_options(args(&["--manual"])).expect("parse options");
        assert!(options.overrides.manual);
        assert_eq!(options.overrides.order, None);
    }

    #[test]
    fn parses_valued_flags() {
        let options = parse_options(args(&[
            "--order", "RBL", "--date", "locale", "--vocab", "v.json", "--log", "sotd.log",
        ]))
        .expect("parse options");
        assert_eq!(options.overrides.order.as_deref(), Some("RBL"));
        assert_eq!(options.overrides.date.as_deref(), Some("locale"));
        assert_eq!(options.overrides.vocab.as_deref(), Some("v.json"));
        assert_eq!(options.overrides.log.as_deref(), Some("sotd.log"));
        assert!(!options.overrides.manual);
    }

    #[test]
    fn parses_help() {
        assert!(parse_options(args(&["--help"])).expect("parse options").help);
        assert!(parse_options(args(&["-h"])).expect("parse options").help);
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(args(&["--nope"])).unwrap_err();
        parse_options(args(&["positional"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(args(&["--manual", "--manual"])).unwrap_err();
        parse_options(args(&["--order", "L", "--order", "B"])).unwrap_err();
    }

    #[test]
    fn rejects_missing_values() {
        parse_options(args(&["--order"])).unwrap_err();
        parse_options(args(&["--date", "--manual"])).unwrap_err();
    }
}
