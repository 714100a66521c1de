//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use factlens::output::OutputMode;

/// factlens - Mock misinformation and deepfake checks
#[derive(Parser, Debug)]
#[command(
    name = "factlens",
    version,
    about = "Mock misinformation and deepfake checks",
    long_about = "Score text, URLs and videos with heuristic mock analyzers.\n\n\
                  Verdicts are synthetic: a few surface heuristics plus randomness.\n\
                  Results and contact messages can be forwarded to webhooks."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by both analyzers
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    /// Seed the random source for a reproducible verdict
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the HTML result fragment instead of the report
    #[arg(long)]
    pub html: bool,

    /// Also post the verdict to the workflow webhook
    #[arg(long)]
    pub forward: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check text or an article URL for misinformation signals
    Text {
        /// Text to analyze
        text: Option<String>,

        /// Article URL, used when no text is given
        #[arg(short, long)]
        url: Option<String>,

        #[command(flatten)]
        options: AnalysisOptions,
    },

    /// Check a video file or URL for deepfake signals
    Video {
        /// Video file to analyze
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Video URL, used when no file is given
        #[arg(short, long)]
        url: Option<String>,

        /// MIME type of the file (guessed from the extension otherwise)
        #[arg(long)]
        mime: Option<String>,

        #[command(flatten)]
        options: AnalysisOptions,
    },

    /// Select a video file and show the upload preview
    Select {
        /// Video file
        file: PathBuf,

        /// MIME type of the file (guessed from the extension otherwise)
        #[arg(long)]
        mime: Option<String>,
    },

    /// Send a message through the contact webhook
    Contact {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Your email
        #[arg(short, long)]
        email: String,

        /// Message body
        #[arg(short, long)]
        message: String,
    },

    /// Post a JSON payload to the workflow webhook
    Forward {
        /// JSON payload, or "-" to read it from stdin
        payload: String,
    },

    /// Serve the analyzers over a local HTTP API
    #[cfg(feature = "ui")]
    Serve {
        /// Port to listen on (defaults to the configured one)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show the effective configuration
    Config {
        /// Write the defaults to the config file if it does not exist
        #[arg(long)]
        init: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Text { text, url, options }) => {
            commands::analyze_text(text.as_deref(), url.as_deref(), options, output_mode)
        },
        Some(Command::Video {
            file,
            url,
            mime,
            options,
        }) => commands::analyze_video(
            file.as_deref(),
            url.as_deref(),
            mime.as_deref(),
            options,
            output_mode,
        ),
        Some(Command::Select { file, mime }) => {
            commands::select(&file, mime.as_deref(), output_mode)
        },
        Some(Command::Contact {
            name,
            email,
            message,
        }) => commands::contact(&name, &email, &message, output_mode),
        Some(Command::Forward { payload }) => commands::forward(&payload, output_mode),
        #[cfg(feature = "ui")]
        Some(Command::Serve { port }) => commands::serve(port),
        Some(Command::Config { init }) => commands::config(init, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("factlens v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("factlens v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'factlens --help' for usage");
                println!("Run 'factlens text \"...\"' to analyze some text");
            }
            Ok(())
        },
    }
}
