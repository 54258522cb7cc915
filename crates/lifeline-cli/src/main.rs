//! Lifeline CLI - Render text sequence diagrams as box-drawing art

mod cli;

use clap::Parser;

fn main() {
    // Logging is installed by the app once the flags are known
    let cli_args = cli::Cli::parse();

    let mut app = cli::LifelineApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
