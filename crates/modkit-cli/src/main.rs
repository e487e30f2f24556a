use anyhow::Result;
use clap::{Parser, Subcommand};
use modkit::si::MAX_DIGITS;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "modkit")]
#[command(about = "SI-prefix formatting and composite format strings")]
struct Args {
    #[arg(short, long, global = true, default_value = "modkit.toml")]
    config: PathBuf,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format a number with an SI prefix
    Si {
        value: f64,

        /// Significant figures, or decimals when a magnitude range is given
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DIGITS)))]
        digits: Option<u32>,

        /// Smallest allowed base-10 magnitude
        #[arg(long, allow_hyphen_values = true)]
        min: Option<i32>,

        /// Largest allowed base-10 magnitude
        #[arg(long, allow_hyphen_values = true)]
        max: Option<i32>,
    },
    /// Expand a composite format template such as "{0:S3}W"
    Format {
        template: String,

        /// Arguments; integers and floats are detected, anything else is text
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Parse an SI format token and print it as JSON
    Spec { token: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let directive = if args.verbose { "modkit=debug" } else { "modkit=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = match config::load(&args.config) {
        Ok(c) => {
            info!("Loaded config from {:?}", args.config);
            c
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            modkit::Config::default()
        }
    };
    debug!("Effective config: {:?}", config);

    let output = match args.command {
        Command::Si {
            value,
            digits,
            min,
            max,
        } => commands::si::run(&config, value, digits, min, max),
        Command::Format { template, args } => commands::format::run(&template, &args)?,
        Command::Spec { token } => commands::spec::run(&token)?,
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("modkit").chain(argv.iter().copied()))
    }

    #[test]
    fn test_si_digits_must_be_positive() {
        assert!(parse(&["si", "5", "--digits", "0"]).is_err());
        assert!(parse(&["si", "5", "--digits", "100"]).is_err());
        assert!(parse(&["si", "5", "--digits", "99"]).is_ok());
    }

    #[test]
    fn test_si_accepts_negative_bounds() {
        let args = parse(&["si", "0.0005", "-d", "2", "--min", "-3", "--max", "9"]).unwrap();
        match args.command {
            Command::Si { min, max, .. } => {
                assert_eq!(min, Some(-3));
                assert_eq!(max, Some(9));
            }
            _ => panic!("expected si command"),
        }
    }
}
