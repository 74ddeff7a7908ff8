//! Command-line interface for texlate
//! This binary reads a LaTeX document and writes the artifacts of the
//! tokenization pipeline: the token stream as JSON, the reconstructed
//! document, and the translated document.
//!
//! Usage:
//!   texlate `<path>`                           - Print the token stream JSON to stdout
//!   texlate `<path>` --tokens --translate      - Write artifacts to the output directory
//!   texlate `<path>` -c texlate.toml -o out    - Layer a config file, override the out dir

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Arg, ArgAction, ArgMatches, Command};

use texlate_config::{Loader, TexlateConfig, TranslationConfig, TranslationMode};
use texlate_tokenizer::{
    detokenize, tokenize, translate_document, NoopTranslator, SuffixTranslator, Token, Translate,
};

fn main() {
    let matches = Command::new("texlate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize LaTeX documents and round-trip them through translation")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the LaTeX file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .short('o')
                .help("Directory for output artifacts (overrides configuration)"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Write the token stream as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("roundtrip")
                .long("roundtrip")
                .help("Write the reconstructed document")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("translate")
                .long("translate")
                .help("Write the translated document")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-timestamp")
                .long("no-timestamp")
                .help("Do not add a timestamp to output filenames")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if let Err(error) = run(&matches) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let path = matches.get_one::<String>("path").expect("path is required");
    let config = load_config(matches)?;

    let source = fs::read_to_string(path).map_err(CliError::Io)?;
    let tokens = tokenize(&source);

    let write_tokens = matches.get_flag("tokens");
    let write_roundtrip = matches.get_flag("roundtrip");
    let write_translation = matches.get_flag("translate");

    if !write_tokens && !write_roundtrip && !write_translation {
        println!("{}", render_tokens(&tokens, config.output.pretty_tokens)?);
        return Ok(());
    }

    let out_dir = Path::new(&config.output.directory);
    fs::create_dir_all(out_dir).map_err(CliError::Io)?;
    let stamp = if config.output.timestamped {
        Some(Local::now().format("%Y%m%d_%H%M%S").to_string())
    } else {
        None
    };

    if write_tokens {
        let rendered = render_tokens(&tokens, config.output.pretty_tokens)?;
        let target = artifact_path(out_dir, "tokens", "json", stamp.as_deref());
        fs::write(&target, rendered).map_err(CliError::Io)?;
        println!("Tokens written to {}", target.display());
    }

    if write_roundtrip {
        let target = artifact_path(out_dir, "roundtrip", "tex", stamp.as_deref());
        fs::write(&target, detokenize(&tokens)).map_err(CliError::Io)?;
        println!("Reconstructed document written to {}", target.display());
    }

    if write_translation {
        let translator = build_translator(&config.translation);
        let translated = translate_document(&source, translator.as_ref());
        let target = artifact_path(out_dir, "translated", "tex", stamp.as_deref());
        fs::write(&target, translated).map_err(CliError::Io)?;
        println!("Translated document written to {}", target.display());
    }

    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<TexlateConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(dir) = matches.get_one::<String>("out-dir") {
        loader = loader
            .set_override("output.directory", dir.as_str())
            .map_err(CliError::Config)?;
    }
    if matches.get_flag("no-timestamp") {
        loader = loader
            .set_override("output.timestamped", false)
            .map_err(CliError::Config)?;
    }
    loader.build().map_err(CliError::Config)
}

fn render_tokens(tokens: &[Token], pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(tokens)
    } else {
        serde_json::to_string(tokens)
    };
    rendered.map_err(CliError::Json)
}

fn artifact_path(dir: &Path, stem: &str, ext: &str, stamp: Option<&str>) -> PathBuf {
    match stamp {
        Some(stamp) => dir.join(format!("{}_{}.{}", stem, stamp, ext)),
        None => dir.join(format!("{}.{}", stem, ext)),
    }
}

fn build_translator(config: &TranslationConfig) -> Box<dyn Translate> {
    match config.mode {
        TranslationMode::None => Box::new(NoopTranslator),
        TranslationMode::Suffix => Box::new(SuffixTranslator::new(config.suffix.clone())),
    }
}

/// Failures surfaced to the operator; tokenization itself never fails.
#[derive(Debug)]
enum CliError {
    Io(std::io::Error),
    Config(config::ConfigError),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "I/O failure: {}", err),
            CliError::Config(err) => write!(f, "configuration error: {}", err),
            CliError::Json(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for CliError {}
