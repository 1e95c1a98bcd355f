mod logging;
mod settings;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fixtura_core::{Error as CoreError, Placeholders, luhn_check_digit};
use fixtura_generate::assets::directory_store;
use fixtura_generate::{BUILTIN_PROVIDERS, Generic, GenericOptions};
use serde_json::Value;
use settings::{Settings, SettingsError, load_settings};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "fixtura", version, about = "Locale-aware fake data generator")]
struct Cli {
    /// Settings file (defaults to ./fixtura.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Locale code such as en, ru or de.
    #[arg(long, global = true)]
    locale: Option<String>,
    /// Seed for reproducible output.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Directory of `<locale>/<domain>.json` bundles replacing the embedded ones.
    #[arg(long, global = true, value_name = "DIR")]
    assets_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in providers and their fields.
    Fields,
    /// Generate values of one provider field.
    Gen(GenArgs),
    /// Expand a mask template.
    Code(CodeArgs),
    /// Print a structured JSON document.
    Json(JsonArgs),
    /// Print the Luhn check digit of a number.
    Luhn(LuhnArgs),
}

#[derive(Args, Debug)]
struct GenArgs {
    provider: String,
    field: String,
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

#[derive(Args, Debug)]
struct CodeArgs {
    mask: String,
    #[arg(long, default_value_t = fixtura_core::LETTER_PLACEHOLDER)]
    letter: char,
    #[arg(long, default_value_t = fixtura_core::DIGIT_PLACEHOLDER)]
    digit: char,
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

#[derive(Args, Debug)]
struct JsonArgs {
    provider: String,
    #[arg(long, default_value_t = 5)]
    items: usize,
}

#[derive(Args, Debug)]
struct LuhnArgs {
    digits: String,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    logging::init_logging(&settings.log_level, settings.log_format).map_err(CliError::Logging)?;
    tracing::debug!(locale = %settings.locale, seed = ?settings.seed, "settings resolved");

    let mut generic = Generic::with_options(GenericOptions {
        locale: settings.locale.clone(),
        seed: settings.seed,
        store: settings.assets_dir.clone().map(directory_store),
    });

    match cli.command {
        Command::Fields => run_fields(&mut generic),
        Command::Gen(args) => run_gen(&mut generic, args),
        Command::Code(args) => run_code(&mut generic, args),
        Command::Json(args) => run_json(&mut generic, args),
        Command::Luhn(args) => run_luhn(args),
    }
}

/// File settings with command-line flags applied on top.
fn resolve_settings(cli: &Cli) -> Result<Settings, CliError> {
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(locale) = &cli.locale {
        settings.locale = locale.clone();
    }
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(dir) = &cli.assets_dir {
        settings.assets_dir = Some(dir.clone());
    }
    Ok(settings)
}

fn run_fields(generic: &mut Generic) -> Result<(), CliError> {
    for provider in BUILTIN_PROVIDERS {
        let fields = generic.fields(provider)?;
        println!("{provider}: {}", fields.join(", "));
    }
    Ok(())
}

fn run_gen(generic: &mut Generic, args: GenArgs) -> Result<(), CliError> {
    for _ in 0..args.count {
        let value = generic.generate(&args.provider, &args.field)?;
        match value {
            Value::String(text) => println!("{text}"),
            other => println!("{}", serde_json::to_string(&other)?),
        }
    }
    Ok(())
}

fn run_code(generic: &mut Generic, args: CodeArgs) -> Result<(), CliError> {
    let placeholders = Placeholders::new(args.letter, args.digit)?;
    let code = generic.code()?;
    for _ in 0..args.count {
        println!("{}", code.custom_code(&args.mask, placeholders));
    }
    Ok(())
}

fn run_json(generic: &mut Generic, args: JsonArgs) -> Result<(), CliError> {
    let document = generic.structured().json(&args.provider, args.items)?;
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn run_luhn(args: LuhnArgs) -> Result<(), CliError> {
    println!("{}", luhn_check_digit(&args.digits)?);
    Ok(())
}
