// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{AppOptions, ExportFormat, InputSelector};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

pub enum Command {
    Run(AppOptions),
    Help,
}

/// Prints one line per processed file.
struct CliProgress;

impl Progress for CliProgress {
    fn item_done(&mut self, name: &str, written: &[PathBuf]) {
        for path in written {
            println!("{} → {}", name, path.display());
        }
    }
    fn item_failed(&mut self, name: &str, error: &str) {
        eprintln!("Skipped {}: {}", name, error);
    }
}

pub fn run() -> Result<RunSummary, Box<dyn Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(RunSummary::default())
        }
        Command::Run(options) => {
            let mut progress = CliProgress;
            let summary = runner::run(&options, Some(&mut progress))?;
            println!("Processed {} report(s), wrote {} file(s)", summary.reports, summary.files_written.len());
            Ok(summary)
        }
    }
}

/// With no arguments: `data/data1..3.html` → `extracted_tables/` as HTML.
pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut files: Vec<String> = Vec::new();
    let mut all = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-d" | "--dir" => options.input.dir = PathBuf::from(args.next().ok_or("Missing data directory")?),
            "-a" | "--all" => all = true,
            "-o" | "--out" => options.export.out_dir = PathBuf::from(args.next().ok_or("Missing output directory")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.export.format = ExportFormat::from_name(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;
            }
            "--font" => options.export.pdf_font = Some(PathBuf::from(args.next().ok_or("Missing font path")?)),
            "-h" | "--help" => return Ok(Command::Help),
            s if s.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ => files.push(a),
        }
    }

    if all && !files.is_empty() {
        return Err("Use either --all or explicit file names, not both".into());
    }
    options.input.files = if all {
        InputSelector::All
    } else if files.is_empty() {
        InputSelector::Defaults
    } else {
        InputSelector::Files(files)
    };

    Ok(Command::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, Box<dyn Error>> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    fn options(args: &[&str]) -> AppOptions {
        match parse(args).unwrap() {
            Command::Run(o) => o,
            Command::Help => panic!("expected a run"),
        }
    }

    #[test]
    fn no_args_is_the_fixed_job() {
        assert_eq!(options(&[]), AppOptions::default());
        assert_eq!(options(&[]).input.files, InputSelector::Defaults);
    }

    #[test]
    fn flags_fill_options() {
        let o = options(&["-d", "reports", "--format", "pdf", "-o", "out", "--font", "DejaVuSans.ttf", "a.html", "b.html"]);
        assert_eq!(o.input.dir, PathBuf::from("reports"));
        assert_eq!(o.input.files, InputSelector::Files(vec![s!("a.html"), s!("b.html")]));
        assert_eq!(o.export.format, ExportFormat::Pdf);
        assert_eq!(o.export.out_dir, PathBuf::from("out"));
        assert_eq!(o.export.pdf_font, Some(PathBuf::from("DejaVuSans.ttf")));
    }

    #[test]
    fn all_selects_directory_listing() {
        assert_eq!(options(&["--all"]).input.files, InputSelector::All);
        assert!(parse(&["--all", "x.html"]).is_err());
    }

    #[test]
    fn bad_args_are_errors() {
        assert!(parse(&["--format", "docx"]).is_err());
        assert!(parse(&["--out"]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(matches!(parse(&["-h"]).unwrap(), Command::Help));
    }
}
