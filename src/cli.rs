//! CLI command structure using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "craftwiki")]
#[command(version, about = "Export crafting tables as wiki markup or HTML", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to the usual search locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the page of one item
    Item {
        /// Item id (e.g. "Iron_Plate")
        item_id: String,

        #[command(flatten)]
        source: CatalogSource,

        /// Render HTML instead of wiki markup
        #[arg(long)]
        html: bool,
    },

    /// Print the comparison chart of planner results
    Compchart {
        /// JSON file holding an array of planner results
        #[arg(long)]
        results: PathBuf,

        /// Candidate ingredient ids, in column order
        #[arg(long, value_delimiter = ',', required = true)]
        ingredients: Vec<String>,

        #[command(flatten)]
        source: CatalogSource,

        /// Render HTML instead of wiki markup
        #[arg(long)]
        html: bool,
    },
}

/// Where the catalog comes from.
#[derive(Args)]
pub struct CatalogSource {
    /// Catalog dump (overrides the configured one)
    #[arg(long, conflicts_with = "demo")]
    pub catalog: Option<PathBuf>,

    /// Use the built-in sample catalog
    #[arg(long)]
    pub demo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_item_command() {
        let cli = Cli::try_parse_from(["craftwiki", "item", "Screw", "--demo", "--html"]).unwrap();
        let Commands::Item {
            item_id,
            source,
            html,
        } = cli.command
        else {
            panic!("expected item command");
        };
        assert_eq!(item_id, "Screw");
        assert!(source.demo);
        assert!(html);
    }

    #[test]
    fn splits_ingredient_list() {
        let cli = Cli::try_parse_from([
            "craftwiki",
            "--config",
            "cw.json5",
            "compchart",
            "--results",
            "results.json",
            "--ingredients",
            "Iron_Ore,Copper_Ore",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cw.json5")));
        let Commands::Compchart { ingredients, .. } = cli.command else {
            panic!("expected compchart command");
        };
        assert_eq!(ingredients, ["Iron_Ore", "Copper_Ore"]);
    }

    #[test]
    fn catalog_and_demo_conflict() {
        let result = Cli::try_parse_from([
            "craftwiki",
            "item",
            "Screw",
            "--demo",
            "--catalog",
            "c.json",
        ]);
        assert!(result.is_err());
    }
}
