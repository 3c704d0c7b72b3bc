use clap::{Parser, Subcommand, ValueEnum};
use simplelog::{
  ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode,
};
use trinomial::{FactorOptions, TrinomialError, analyze, render};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Minimum level of log messages written to stderr
  #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
  log_level: LogLevel,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Explain step by step whether a trinomial is a perfect square
  Factor {
    /// The trinomial, e.g. "16x^6 + 9y^22 - 24x^3y^11"
    polynomial: String,

    /// Fail on unrecognized text inside a term instead of ignoring it
    #[arg(long)]
    strict: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
  Html,
  Text,
  Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
  Off,
  Error,
  Warn,
  Info,
  Debug,
  Trace,
}

impl From<LogLevel> for LevelFilter {
  fn from(level: LogLevel) -> Self {
    match level {
      LogLevel::Off => LevelFilter::Off,
      LogLevel::Error => LevelFilter::Error,
      LogLevel::Warn => LevelFilter::Warn,
      LogLevel::Info => LevelFilter::Info,
      LogLevel::Debug => LevelFilter::Debug,
      LogLevel::Trace => LevelFilter::Trace,
    }
  }
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  CombinedLogger::init(vec![TermLogger::new(
    cli.log_level.into(),
    Config::default(),
    TerminalMode::Stderr,
    ColorChoice::Auto,
  )])?;

  match cli.command {
    Commands::Factor {
      polynomial,
      strict,
      format,
    } => {
      let options = FactorOptions { strict };
      let analysis = match analyze(&polynomial, &options) {
        Ok(analysis) => analysis,
        Err(TrinomialError::TermCount { found, .. }) => {
          eprintln!("Error: {}", render::term_count_message(found));
          std::process::exit(1);
        }
        Err(e) => {
          eprintln!("Error: {e}");
          std::process::exit(1);
        }
      };

      match format {
        Format::Html => println!("{}", render::to_html(&analysis)),
        Format::Text => print!("{}", render::to_text(&analysis)),
        Format::Json => {
          let json = render::to_json(&analysis);
          println!("{}", serde_json::to_string_pretty(&json)?)
        }
      }
    }
  }

  Ok(())
}
