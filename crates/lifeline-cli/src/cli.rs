//! Command-line interface for the lifeline utility
//!
//! Converts sequence diagram text into box-drawing art, validates it, or
//! runs an interactive session that redraws the diagram after every line.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use lifeline::core::logging::init_logging;
use lifeline::sequence::{SequenceParser, SequenceRenderer};
use lifeline::{CharacterSet, DiagramError, LifelineFill, RenderConfig};

/// Lifeline - Render text sequence diagrams as box-drawing art
#[derive(Parser)]
#[command(name = "lifeline")]
#[command(about = "Render text sequence diagrams as Unicode or ASCII box-drawing art")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a sequence diagram to box-drawing art
    Convert {
        /// Input file containing the diagram (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the rendered diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Character set to use for rendering output
        #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
        style: StyleChoice,

        /// How lifelines are drawn behind events
        #[arg(long, value_enum, default_value_t = FillChoice::PerEvent)]
        fill: FillChoice,

        /// Write a JSON object with `diagram` and `error` fields
        #[arg(long)]
        json: bool,
    },

    /// Validate sequence diagram syntax
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Read statements from stdin and redraw the diagram after each one
    Interactive {
        /// Character set to use for rendering output
        #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
        style: StyleChoice,

        /// How lifelines are drawn behind events
        #[arg(long, value_enum, default_value_t = FillChoice::PerEvent)]
        fill: FillChoice,
    },
}

/// Supported output character sets
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum StyleChoice {
    Ascii,
    #[default]
    Unicode,
}

impl From<StyleChoice> for CharacterSet {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Ascii => CharacterSet::Ascii,
            StyleChoice::Unicode => CharacterSet::Unicode,
        }
    }
}

/// Lifeline fill granularity
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum FillChoice {
    /// Alternate events get their lifelines drawn
    #[default]
    PerEvent,
    /// Alternate rows get their lifelines drawn, giving dashed lifelines
    PerRow,
}

impl From<FillChoice> for LifelineFill {
    fn from(value: FillChoice) -> Self {
        match value {
            FillChoice::PerEvent => LifelineFill::PerEvent,
            FillChoice::PerRow => LifelineFill::PerRow,
        }
    }
}

/// JSON shape written by `convert --json`
///
/// Exactly one of the fields is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResult {
    pub diagram: String,
    pub error: String,
}

/// Main CLI application
pub struct LifelineApp {
    parser: SequenceParser,
}

impl LifelineApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self {
            parser: SequenceParser::new(),
        }
    }

    fn build_config(style: StyleChoice, fill: FillChoice) -> RenderConfig {
        RenderConfig::new(style.into(), fill.into())
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("LIFELINE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("LIFELINE_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Lifeline v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Convert {
                input,
                output,
                style,
                fill,
                json,
            } => self.convert_command(
                input,
                output,
                Self::build_config(style, fill),
                json,
                cli.verbose,
            ),
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
            Commands::Interactive { style, fill } => {
                let stdin = io::stdin();
                let prompt = crossterm::tty::IsTty::is_tty(&stdin);
                let mut stdout = io::stdout();
                let mut stderr = io::stderr();
                self.interactive_session(
                    stdin.lock(),
                    &mut stdout,
                    &mut stderr,
                    Self::build_config(style, fill),
                    prompt,
                )
            }
        }
    }

    /// Handle the convert command
    fn convert_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        config: RenderConfig,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let text = if json {
            serde_json::to_string(&self.convert_to_result(&content, config))?
        } else {
            self.convert(&content, config)?
        };

        if verbose {
            eprintln!("Successfully rendered diagram");
        }

        self.write_output(output, &text)
    }

    /// Parse and render, dropping a single trailing line ending from the input
    pub fn convert(&self, content: &str, config: RenderConfig) -> Result<String> {
        let diagram = self.parser.parse(&normalize_input(content))?;
        Ok(SequenceRenderer::with_config(config).render(&diagram))
    }

    /// Like [`LifelineApp::convert`], with failures folded into the result
    pub fn convert_to_result(&self, content: &str, config: RenderConfig) -> ConvertResult {
        match self.convert(content, config) {
            Ok(diagram) => ConvertResult {
                diagram,
                error: String::new(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse sequence diagram");
                ConvertResult {
                    diagram: String::new(),
                    error: e.to_string(),
                }
            }
        }
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        match self.parser.parse(&normalize_input(&content)) {
            Ok(diagram) => {
                println!(
                    "✓ Valid sequence diagram ({} participants, {} events)",
                    diagram.participant_count(),
                    diagram.events().len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ {}", e);
                Err(e.into())
            }
        }
    }

    /// Read statements one line at a time and redraw the accepted session
    ///
    /// Each line is checked on its own first; rejected lines are reported on
    /// `errors` and never become part of the session.
    pub fn interactive_session<R: BufRead, W: Write, E: Write>(
        &self,
        input: R,
        out: &mut W,
        errors: &mut E,
        config: RenderConfig,
        prompt: bool,
    ) -> Result<()> {
        let renderer = SequenceRenderer::with_config(config);
        let mut session: Vec<String> = Vec::new();

        if prompt {
            write!(errors, "> ")?;
            errors.flush()?;
        }

        for (index, line) in input.lines().enumerate() {
            let line = line.map_err(DiagramError::from)?;

            if let Err(e) = self.parser.parse(&line) {
                tracing::debug!(input_line = index + 1, "rejected interactive line");
                writeln!(errors, "✗ input line {}: {}", index + 1, e)?;
            } else {
                session.push(line);
                let diagram = self.parser.parse(&session.join("\n"))?;
                writeln!(out)?;
                writeln!(out, "{}", renderer.render(&diagram))?;
                out.flush()?;
            }

            if prompt {
                write!(errors, "> ")?;
                errors.flush()?;
            }
        }

        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .map_err(DiagramError::from)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    ///
    /// Stdout always gets a trailing newline; files get the text as is.
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout();
                if content.is_empty() || content.ends_with('\n') {
                    write!(stdout, "{}", content)?;
                } else {
                    writeln!(stdout, "{}", content)?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// CRLF line endings become LF and one trailing line ending is dropped
fn normalize_input(content: &str) -> String {
    let mut content = content.replace("\r\n", "\n");
    if content.ends_with('\n') {
        content.pop();
    }
    content
}

impl Default for LifelineApp {
    fn default() -> Self {
        Self::new()
    }
}
