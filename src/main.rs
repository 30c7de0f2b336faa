use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use textcanon::{Pipeline, PipelineOptions, PipelineWarning, registry};

/// Canonicize text: collapse whitespace, unify case, strip punctuation, and more.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Input files. Omit to read from stdin.
    #[arg()]
    files: Vec<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Canonicizer to apply (repeatable, applied in order).
    #[arg(
        short,
        long = "canonicizer",
        value_name = "NAME",
        default_value = "normalize-whitespace"
    )]
    canonicizers: Vec<String>,

    /// Treat unknown canonicizer names as hard errors.
    #[arg(long)]
    strict: bool,

    /// List available canonicizers and exit.
    #[arg(long)]
    list: bool,

    /// Log level (RUST_LOG overrides).
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn init_logging(level: &LogLevel) {
    let level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn print_warnings(warnings: &[PipelineWarning]) {
    for w in warnings {
        eprintln!("warning: [{:?}] {}", w.code, w.message);
    }
}

fn print_list() -> Result<ExitCode, ExitCode> {
    let mut out = String::new();
    for name in registry::available() {
        if let Some(c) = registry::lookup(name) {
            out.push_str(&format!("{:<24}{}\n", name, c.description()));
        }
    }
    io::stdout().write_all(out.as_bytes()).map_err(|e| {
        eprintln!("error: stdout: {e}");
        ExitCode::from(1)
    })?;
    Ok(ExitCode::SUCCESS)
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    if cli.list {
        return print_list();
    }

    let options = PipelineOptions { strict: cli.strict };
    let (pipeline, warnings) = Pipeline::from_names(&cli.canonicizers, &options).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(2)
    })?;
    print_warnings(&warnings);
    tracing::info!(stages = ?pipeline.names(), "pipeline ready");

    let mut output_buf: Vec<u8> = Vec::new();
    let mut had_error = false;

    if cli.files.is_empty() {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data).map_err(|e| {
            eprintln!("error: stdin: {e}");
            ExitCode::from(1)
        })?;
        output_buf.extend_from_slice(&pipeline.process(&data));
    } else {
        let mut first = true;
        for path in &cli.files {
            let data = match std::fs::read(path) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("error: {}: {e}", path.display());
                    had_error = true;
                    continue;
                }
            };
            tracing::debug!(path = %path.display(), bytes = data.len(), "read input");

            // Separate outputs of multiple files with a newline
            if !first {
                output_buf.push(b'\n');
            }
            first = false;
            output_buf.extend_from_slice(&pipeline.process(&data));
        }
    }

    if let Some(ref out_path) = cli.output {
        std::fs::write(out_path, &output_buf).map_err(|e| {
            eprintln!("error: {}: {e}", out_path.display());
            ExitCode::from(1)
        })?;
    } else {
        io::stdout().write_all(&output_buf).map_err(|e| {
            eprintln!("error: stdout: {e}");
            ExitCode::from(1)
        })?;
    }

    if had_error {
        Err(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    match run(cli) {
        Ok(code) => code,
        Err(code) => code,
    }
}
