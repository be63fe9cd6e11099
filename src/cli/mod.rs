// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipe-finder")]
#[command(about = "Find recipes that use the ingredients you have", long_about = None)]
pub struct Cli {
    /// Recipe catalog CSV file
    #[arg(long, global = true, env = "CATALOG_PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask for ingredients interactively (default)
    Interactive,

    /// Search once and print the ranked recipes
    Search {
        /// Free-text description of the ingredients you have
        query: String,

        /// Maximum number of recipes to list
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print a recipe from the catalog
    Show {
        /// Recipe ID
        recipe_id: i64,
    },

    /// Serve the search API over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },
}
