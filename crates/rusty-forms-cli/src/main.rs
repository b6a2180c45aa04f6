mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rusty-forms")]
#[command(
    version,
    about = "Validate submissions and render forms declared in forms.toml",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON submission against a declared form
    Validate {
        /// Forms configuration file
        #[arg(short, long, default_value = "forms.toml")]
        config: PathBuf,

        /// Name of the form to validate against
        #[arg(short, long)]
        form: String,

        /// JSON object with the submitted values
        #[arg(short, long)]
        data: PathBuf,

        /// Print the validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a declared form as HTML
    Render {
        /// Forms configuration file
        #[arg(short, long, default_value = "forms.toml")]
        config: PathBuf,

        /// Name of the form to render
        #[arg(short, long)]
        form: String,

        /// JSON object with submitted values to pre-fill
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Validate before rendering so feedback rows are included
        #[arg(long)]
        validate: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Validate { config, form, data, json } => {
            let valid = commands::validate::execute(&config, &form, &data, json)?;
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Render { config, form, data, validate } => {
            commands::render::execute(&config, &form, data.as_deref(), validate)?;
        }
    }

    Ok(())
}
