//! BITS transmission decoder
//! Reads hex transmissions (one per line) and prints the version sum and value of each

use anyhow::Context;
use bits_rs::formats::{load_config, load_transmissions};
use bits_rs::{DecoderConfig, Transmission};
use std::env;
use tracing_subscriber::{prelude::*, EnvFilter};

struct Options {
    input: String,
    config: Option<String>,
    json: bool,
    expr: bool,
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} [--config <file.json>] [--json] [--expr] <input.txt>", program);
    eprintln!("\nEach non-empty line of the input is decoded as one transmission.");
    eprintln!("Prints the version sum and then the evaluated value.");
    eprintln!("\nOptions:");
    eprintln!("  --config <file>   decoder settings (max_depth, arity_check)");
    eprintln!("  --json            also dump the packet tree as JSON");
    eprintln!("  --expr            also print the expression in prefix form");
    std::process::exit(1);
}

fn parse_args() -> Options {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("bits-decode");

    let mut input = None;
    let mut config = None;
    let mut json = false;
    let mut expr = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--expr" => expr = true,
            "--config" => match iter.next() {
                Some(path) => config = Some(path.clone()),
                None => usage(program),
            },
            "-h" | "--help" => usage(program),
            other if input.is_none() && !other.starts_with("--") => {
                input = Some(other.to_string())
            }
            _ => usage(program),
        }
    }

    match input {
        Some(input) => Options {
            input,
            config,
            json,
            expr,
        },
        None => usage(program),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    let options = parse_args();

    let config = match &options.config {
        Some(path) => load_config(path).with_context(|| format!("loading config {}", path))?,
        None => DecoderConfig::default(),
    };
    tracing::debug!(?config, "decoder settings");

    let transmissions = load_transmissions(&options.input)
        .with_context(|| format!("reading {}", options.input))?;
    tracing::info!("Loaded {} transmission(s)", transmissions.len());

    for line in &transmissions {
        let transmission = Transmission::decode(&line.hex, &config)
            .with_context(|| format!("decoding transmission on line {}", line.number))?;
        let report = transmission
            .report()
            .with_context(|| format!("evaluating transmission on line {}", line.number))?;

        println!("{}", report.version_sum);
        println!("{}", report.value);

        if options.expr {
            println!("{}", transmission.packet);
        }
        if options.json {
            println!("{}", serde_json::to_string_pretty(&transmission.packet)?);
        }
    }

    Ok(())
}
