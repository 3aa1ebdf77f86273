use anyhow::{Context, Result};
use clap::Parser;
use ctbase64::{Alphabet, Strategy, Variant};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ctbase64")]
#[command(about = "Base64 encode or decode FILE, or standard input, to standard output", long_about = None)]
struct Args {
    /// Input file ("-" or absent for standard input)
    file: Option<PathBuf>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// Use the URL-safe alphabet ('-' and '_')
    #[arg(short, long)]
    url_safe: bool,

    /// Omit '=' padding when encoding, reject it when decoding
    #[arg(short, long)]
    no_padding: bool,

    /// Variant by name (overrides --url-safe and --no-padding)
    #[arg(long, value_name = "NAME")]
    variant: Option<Variant>,

    /// Use the branch-free codec for secret data
    #[arg(short = 'c', long)]
    constant_time: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn variant(&self) -> Variant {
        self.variant.unwrap_or_else(|| {
            let alphabet = if self.url_safe {
                Alphabet::UrlSafe
            } else {
                Alphabet::Standard
            };
            Variant::new(alphabet, !self.no_padding)
        })
    }

    fn strategy(&self) -> Strategy {
        if self.constant_time {
            Strategy::ConstantTime
        } else {
            Strategy::Fast
        }
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => {
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))
            }
            _ => {
                let mut input = Vec::new();
                io::stdin()
                    .read_to_end(&mut input)
                    .context("failed to read standard input")?;
                Ok(input)
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let variant = args.variant();
    let strategy = args.strategy();
    tracing::debug!(%variant, ?strategy, decode = args.decode, "starting");

    let input = args.read_input()?;
    let mut stdout = io::stdout().lock();

    if args.decode {
        let trimmed = input.trim_ascii_end();
        let decoded = strategy
            .decoder()
            .decode(trimmed, variant)
            .with_context(|| format!("invalid {} input", variant))?;
        stdout.write_all(&decoded)?;
    } else {
        let encoded = strategy.encoder().encode(&input, variant);
        writeln!(stdout, "{}", encoded)?;
    }

    stdout.flush()?;
    Ok(())
}
