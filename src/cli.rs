use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

use crate::command::{self, render::RenderArgs};
use crate::config::Config;
use crate::icons;
use crate::skin::Skin;

#[derive(Parser)]
#[command(name = "running-indicator")]
#[command(about = "Render animated 'operation in progress' glyphs for status widgets")]
#[command(version)]
struct Cli {
    /// Read configuration from this file instead of the global and project configs
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the indicator as an HTML fragment with its scoped stylesheet
    Render {
        /// Skin to render (overrides the config)
        #[arg(short, long, value_enum)]
        skin: Option<Skin>,

        /// Color for the faded text token (overrides the config theme)
        #[arg(long, value_name = "COLOR")]
        faded_color: Option<String>,

        /// Color for the primary accent token (overrides the config theme)
        #[arg(long, value_name = "COLOR")]
        primary_color: Option<String>,

        /// Emit JSON with separate markup and stylesheet fields
        #[arg(long)]
        json: bool,
    },

    /// List available skins
    Skins,

    /// Animate the indicator in the terminal while a simulated operation runs
    Demo {
        /// Skin to animate (overrides the config)
        #[arg(short, long, value_enum)]
        skin: Option<Skin>,

        /// Duration of the simulated operation
        #[arg(long, default_value_t = 3)]
        seconds: u64,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    dispatch(Cli::parse())
}

fn dispatch(cli: Cli) -> Result<()> {
    let load_config = || -> Result<Config> {
        let config = Config::load(cli.config.as_deref())?;
        icons::init(config.nerdfont);
        Ok(config)
    };

    match cli.command {
        Commands::Render {
            skin,
            faded_color,
            primary_color,
            json,
        } => command::render::run(
            &load_config()?,
            RenderArgs {
                skin,
                faded_color,
                primary_color,
                json,
            },
        ),
        Commands::Skins => command::skins::run(load_config()?.skin),
        Commands::Demo { skin, seconds } => command::demo::run(&load_config()?, skin, seconds),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "running-indicator", &mut io::stdout());
            Ok(())
        }
    }
}
