// File: ./src/cli.rs
//! The `tasklex` command: parse one task text and print the result.
use crate::config::Config;
use crate::context::StandardContext;
use crate::model::display::TaskDisplay;
use crate::model::language::{Language, LanguageConfig};
use crate::model::parser::TaskParser;
use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::Parser;
use clap::error::ErrorKind;
use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::borrow::Cow;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Language used when the requested code is neither built in nor defined in
/// the config file.
pub const FALLBACK_LANGUAGE: Language = Language::German;

const EXAMPLES: &str = "\
EXAMPLES:
    tasklex -l en '!! Submit report by Friday at 5pm #work'
    tasklex -l de 'Zahnarzt übermorgen um 14 Uhr @privat'
    tasklex -l fr 'Yoga tous les mardis et jeudis'
    tasklex -l es --json 'Pagar alquiler el 1 de cada mes'";

/// Extracts dates, deadlines, times, priorities, tags and recurrence from a
/// task written in German, English, French or Spanish.
#[derive(Parser, Debug)]
#[command(name = "tasklex", version, about, long_about = None, after_help = EXAMPLES)]
pub struct Args {
    /// Task text. Several words are joined with single spaces.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Language code: de, en, fr, es, or a custom table from the config file
    #[arg(short, long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Reference date for relative phrases (default: today)
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Print the parsed task as JSON
    #[arg(long)]
    pub json: bool,

    /// Use a different directory for the config file
    #[arg(short, long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Write the current (or default) configuration to disk
    #[arg(long)]
    pub init_config: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Entry point of the binary. Help and version exit with 0; usage errors,
/// empty text and unreadable config files exit with 1.
pub fn run() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let mut stdout = std::io::stdout().lock();
    match execute(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

pub fn execute(args: &Args, out: &mut impl Write) -> Result<()> {
    let ctx = StandardContext::new(args.root.clone());
    let config = Config::load_or_default(&ctx)?;
    init_logging(config.log_level_filter(), args.verbose);

    let text = args.text.join(" ");
    if args.init_config {
        config.save(&ctx)?;
        writeln!(out, "Config written to {}", Config::get_path_string(&ctx)?)?;
        if text.trim().is_empty() {
            return Ok(());
        }
    }
    if text.trim().is_empty() {
        bail!("No task text given (see --help)");
    }

    let code = args.lang.as_deref().unwrap_or(&config.default_language);
    let language = select_language(&config, code)?;
    let task = TaskParser::new(&language).parse(&text, args.date);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&task)?)?;
    } else {
        writeln!(out, "{}", task.to_plain_text())?;
    }
    Ok(())
}

/// Custom tables from the config come first, so they can override a
/// built-in language. Unknown codes warn and fall back to German.
pub fn select_language(config: &Config, code: &str) -> Result<Cow<'static, LanguageConfig>> {
    if let Some(custom) = config.custom_language(code) {
        return Ok(Cow::Owned(custom?));
    }
    match LanguageConfig::for_code(code) {
        Some(builtin) => Ok(Cow::Borrowed(builtin)),
        None => {
            eprintln!(
                "Warning: unknown language '{}', using {} ({})",
                code,
                FALLBACK_LANGUAGE,
                FALLBACK_LANGUAGE.code()
            );
            Ok(Cow::Borrowed(LanguageConfig::builtin(FALLBACK_LANGUAGE)))
        }
    }
}

fn init_logging(configured: LevelFilter, verbose: u8) {
    let level = match verbose {
        0 => configured,
        1 => configured.max(LevelFilter::Info),
        2 => configured.max(LevelFilter::Debug),
        _ => LevelFilter::Trace,
    };
    // A second initialisation (tests) is harmless.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
