//! Combo CLI
//!
//! Drive the combobox from a config file and an event script, printing the
//! rendered widget after every event.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod script;
mod session;

use config::{DemoConfig, CONFIG_FILE};
use session::DemoSession;

#[derive(Parser)]
#[command(name = "combo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Searchable combobox demo driver", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed an event script to the widget and print each rendered state
    Run {
        /// Config file (defaults to ./combo.toml, then built-in defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Event script (reads stdin when omitted)
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Print one JSON object per event instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write a default combo.toml in the current directory
    Init {
        /// Overwrite an existing combo.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a config file
    Check {
        /// Config file (defaults to ./combo.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version and the event script grammar
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            config,
            script,
            json,
        } => cmd_run(config.as_deref(), script.as_deref(), json),

        Commands::Init { force } => cmd_init(force),

        Commands::Check { config } => cmd_check(config.as_deref()),

        Commands::Info => cmd_info(),
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    if let Some(path) = path {
        return DemoConfig::load(path);
    }

    let cwd = std::env::current_dir()?;
    if cwd.join(CONFIG_FILE).exists() {
        DemoConfig::load_from_dir(&cwd)
    } else {
        info!("No {} found, using built-in demo data", CONFIG_FILE);
        Ok(DemoConfig::default())
    }
}

fn cmd_run(config_path: Option<&Path>, script_path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;

    let text = match script_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };
    let commands = script::parse_script(&text)?;

    let mut session = DemoSession::new(&config).context("Invalid option data")?;
    info!(
        "Running {} events against {} options",
        commands.len(),
        config.data.options.len()
    );

    let initial = session.view();
    if json {
        println!("{}", serde_json::to_string(&initial)?);
    } else {
        print!("{}", initial.render_text());
    }

    for command in &commands {
        let step = session.apply(command);
        if json {
            println!("{}", serde_json::to_string(&step)?);
            continue;
        }

        println!();
        println!("> {}", step.command);
        if let Some(ref reason) = step.dropped {
            println!("  (dropped: {})", reason);
        }
        print!("{}", step.view.render_text());
    }

    if let Some(selected) = session.selected() {
        info!("Selected: {}", selected);
    }
    info!(
        "Load-more requests: {} ({} pages revealed for {:?})",
        session.load_requests(),
        session.pages(),
        session.query()
    );
    tracing::debug!(state = ?session.widget(), "final widget state");

    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let path = cwd.join(CONFIG_FILE);

    if path.exists() && !force {
        anyhow::bail!(
            "This directory already contains a {} (use --force to overwrite)",
            CONFIG_FILE
        );
    }

    let content = DemoConfig::default().to_toml()?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {}", path.display());
    info!("Run `combo run` to try it");

    Ok(())
}

fn cmd_check(config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::load_from_dir(&std::env::current_dir()?)?,
    };

    let widget = combo_shell::combobox()
        .options(config.data.options.clone())
        .selected(config.widget.selected())
        .placeholder(config.widget.placeholder())
        .try_build()
        .context("Invalid option data")?;

    info!(
        "Config OK: {} options, page size {}, initial selection {:?}",
        config.data.options.len(),
        config.data.page_size,
        widget.selection()
    );

    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("Combo");
    println!("=====");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Event script (one per line, # after whitespace starts a comment):");
    println!("  type <text>             append the rest of the line, as written");
    println!("  backspace               remove the last character");
    println!("  key <name> [field|list] key press (source defaults to list)");
    println!("  hover <row>             pointer enters a row");
    println!("  click <row>             select a row");
    println!("  add <row>               select via the row's add control");
    println!("  clear                   click the clear control");
    println!();
    println!("Config: {} ([widget] and [data] tables)", CONFIG_FILE);

    Ok(())
}
