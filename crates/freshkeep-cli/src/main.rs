use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use freshkeep_core::{FoodCategory, ResolvedItem};

// ── CLI Definition ──

#[derive(Parser)]
#[command(name = "freshkeep", about = "Resolve noisy food labels to pantry metadata")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more free-text labels
    Resolve {
        /// Labels to resolve (quote labels that contain spaces)
        #[arg(required = true)]
        labels: Vec<String>,
        /// Emit each resolution as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the knowledge-base entries
    Catalog {
        /// Only show entries in this category (e.g. "Produce")
        #[arg(long)]
        category: Option<String>,
    },
}

// ── Main ──

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve { labels, json } => {
            for label in &labels {
                let item = freshkeep_resolve::resolve(label);
                if json {
                    println!("{}", serde_json::to_string_pretty(&item)?);
                } else {
                    println!("{}", format_resolution(&item));
                }
            }
        }
        Commands::Catalog { category } => {
            let filter = category
                .as_deref()
                .map(str::parse::<FoodCategory>)
                .transpose()?;
            for (keyword, record) in freshkeep_catalog::entries() {
                if let Some(cat) = filter {
                    if record.category != cat {
                        continue;
                    }
                }
                println!(
                    "{:<18} {} {} ({}, {} days, {})",
                    keyword, record.emoji, record.name, record.category, record.expiry_days, record.unit
                );
            }
        }
    }
    Ok(())
}

fn format_resolution(item: &ResolvedItem) -> String {
    format!(
        "{} {} ({}) expires in {} days, {} {} [{}]",
        item.record.emoji,
        item.record.name,
        item.record.category,
        item.record.expiry_days,
        item.record.quantity,
        item.record.unit,
        item.match_kind
    )
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_resolution() {
        let item = freshkeep_resolve::resolve("banana");
        let line = format_resolution(&item);
        assert!(line.contains("🍌"));
        assert!(line.contains("Banana"));
        assert!(line.contains("5 days"));
        assert!(line.contains("[exact]"));
    }

    #[test]
    fn test_resolve_json_output_round_trips() {
        let item = freshkeep_resolve::resolve("yellow fruit");
        let json = serde_json::to_string_pretty(&item).unwrap();
        let back: ResolvedItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.record.name, "Banana");
    }

    #[test]
    fn test_category_filter_parses() {
        let cat: FoodCategory = "produce".parse().unwrap();
        assert_eq!(cat, FoodCategory::Produce);
        assert!("gadgets".parse::<FoodCategory>().is_err());
    }
}
