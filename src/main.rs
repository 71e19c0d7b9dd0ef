use clap::Parser;
use rust_chess_capture::console::{Session, SessionConfig};
use std::io;
use std::process;

/// Chess capture query
///
/// Enter one white piece (knight or rook) and up to sixteen black pieces,
/// then see which black pieces the white piece can capture in one move.
///
/// ```bash
/// # Interactive
/// ./rust-chess-capture
///
/// # Piped, without prompts
/// printf 'rook a1\npawn a4\ndone\n' | ./rust-chess-capture --quiet
/// ```
#[derive(Parser)]
#[command(name = "rust-chess-capture")]
#[command(about = "Find which black pieces a white knight or rook can capture")]
#[command(version)]
struct Args {
    /// Do not print input prompts (useful when piping input)
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn default_filter(&self) -> &'static str {
        match self.verbose {
            0 => "rust_chess_capture=warn",
            1 => "rust_chess_capture=info",
            2 => "rust_chess_capture=debug",
            _ => "rust_chess_capture=trace",
        }
    }
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the dialogue
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.default_filter().into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig { prompts: !args.quiet };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
