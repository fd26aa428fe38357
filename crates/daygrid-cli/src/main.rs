use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "daygrid-cli", version, about = "Daygrid CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Day layout computation
    Layout {
        #[command(subcommand)]
        action: commands::layout::LayoutAction,
    },
    /// Plain-text day grid rendering
    Render {
        #[command(subcommand)]
        action: commands::render::RenderAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Map link utilities
    Map {
        #[command(subcommand)]
        action: commands::map::MapAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Layout { action } => commands::layout::run(action),
        Commands::Render { action } => commands::render::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Map { action } => commands::map::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
