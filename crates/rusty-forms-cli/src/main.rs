mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rusty-forms")]
#[command(version, about = "rusty-forms CLI - binding rules and form error rendering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a binding rule string and list its rules
    Rules {
        /// Rule string, e.g. "Required;MinSize(6);MaxSize(30)"
        rules: String,

        /// Print the parsed rules as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a violation set for a form and print the resulting context as JSON
    Render {
        /// Form to render against
        #[arg(short, long)]
        form: FormKind,

        /// JSON file with the submitted values, keyed by wire name
        #[arg(long)]
        values: PathBuf,

        /// JSON file with the violation set ({"overall": [...], "fields": {...}})
        #[arg(long)]
        violations: PathBuf,

        /// Config file with message template overrides
        #[arg(short, long, default_value = rusty_forms::config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FormKind {
    /// Account registration
    Register,
    /// Sign-in
    Login,
    /// First-run installation
    Install,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rules { rules, json } => {
            commands::rules::execute(&rules, json)?;
        }
        Commands::Render {
            form,
            values,
            violations,
            config,
        } => {
            commands::render::execute(form, &values, &violations, &config)?;
        }
    }

    Ok(())
}
