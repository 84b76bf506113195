// ABOUTME: Entry point for the vecdump binary.
// ABOUTME: Parses CLI arguments, initializes tracing, reads a vector, and appends it to a file.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use vecdump_core::{length_from_host, step_from_host};
use vecdump_store::{AppendFile, ExportConfig, ExportReport, export_all, export_sampled};

#[derive(Parser)]
#[command(name = "vecdump", version, about = "Append numeric vectors to text files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Append every value, one per line.
    All(ExportArgs),
    /// Append a step-sampled subset of the nonzero values.
    Sampled {
        #[command(flatten)]
        args: ExportArgs,
        /// Counter threshold; truncated toward zero.
        #[arg(long)]
        step: f64,
    },
    /// Print how many values an exported file holds.
    Count { file: PathBuf },
}

#[derive(Args)]
struct ExportArgs {
    /// File to append to.
    #[arg(long)]
    out: PathBuf,
    /// Read values from this file instead of stdin.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Number of values to export; truncated toward zero. Defaults to all.
    #[arg(long)]
    length: Option<f64>,
    /// Skip the progress line.
    #[arg(long)]
    quiet: bool,
    /// Skip fsync after writing.
    #[arg(long)]
    no_sync: bool,
    /// Create missing parent directories of --out.
    #[arg(long)]
    create_dirs: bool,
    /// Print the export report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("vecdump=info,vecdump_store=info")
            }),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::All(args) => {
            let (values, length, config) = prepare(&args)?;
            let report = export_all(&values, length, &args.out, &config)
                .with_context(|| format!("exporting to {}", args.out.display()))?;
            print_report(&report, args.json)
        }
        Command::Sampled { args, step } => {
            let (values, length, config) = prepare(&args)?;
            let step = step_from_host(step)?;
            let report = export_sampled(&values, length, &args.out, step, &config)
                .with_context(|| format!("exporting to {}", args.out.display()))?;
            print_report(&report, args.json)
        }
        Command::Count { file } => {
            let values = AppendFile::replay(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            println!("{}", values.len());
            Ok(())
        }
    }
}

/// Load values, resolve the length, and merge CLI flags over the env config.
fn prepare(args: &ExportArgs) -> Result<(Vec<f64>, usize, ExportConfig)> {
    let mut config = ExportConfig::from_env()?;
    if args.quiet {
        config.progress = false;
    }
    if args.no_sync {
        config.sync = false;
    }
    if args.create_dirs {
        config.create_dirs = true;
    }

    let values = read_values(args.input.as_deref())?;
    let length = match args.length {
        Some(length) => length_from_host(length)?,
        None => values.len(),
    };

    tracing::debug!("read {} values, exporting {}", values.len(), length);
    Ok((values, length, config))
}

fn read_values(input: Option<&Path>) -> Result<Vec<f64>> {
    let text = match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    parse_values(&text)
}

/// Parse numbers separated by whitespace and/or commas.
fn parse_values(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        match token.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => bail!("not a number: {:?}", token),
        }
    }
    Ok(values)
}

fn print_report(report: &ExportReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!(
            "wrote {} of {} values to {}",
            report.written,
            report.requested,
            report.path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_values_accepts_mixed_separators() {
        let values = parse_values("1, 2.5\n-3e2\t0,,4\n").unwrap();
        assert_eq!(values, vec![1.0, 2.5, -300.0, 0.0, 4.0]);
    }

    #[test]
    fn parse_values_empty_input() {
        assert!(parse_values("  \n").unwrap().is_empty());
    }

    #[test]
    fn parse_values_rejects_garbage() {
        let err = parse_values("1 two 3").unwrap_err();
        assert!(err.to_string().contains("two"));
    }

    #[test]
    fn cli_parses_sampled_subcommand() {
        let cli = Cli::try_parse_from([
            "vecdump", "sampled", "--out", "o.txt", "--step", "2", "--length", "4.7", "--quiet",
        ])
        .unwrap();
        match cli.command {
            Command::Sampled { args, step } => {
                assert_eq!(step, 2.0);
                assert_eq!(args.length, Some(4.7));
                assert!(args.quiet);
                assert_eq!(args.out, PathBuf::from("o.txt"));
            }
            _ => panic!("expected sampled"),
        }
    }

    #[test]
    fn prepare_reads_input_file_and_truncates_length() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "1 2 3 4").unwrap();

        let args = ExportArgs {
            out: dir.path().join("out.txt"),
            input: Some(input),
            length: Some(2.9),
            quiet: true,
            no_sync: true,
            create_dirs: false,
            json: false,
        };
        let (values, length, config) = prepare(&args).unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(length, 2);
        assert!(!config.progress);
        assert!(!config.sync);
    }
}
