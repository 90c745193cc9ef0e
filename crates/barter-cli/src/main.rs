// ============================================================================
// barter — command-line front end for the local barter catalog
// ============================================================================
// Usage:
//   barter items [--zip ZIP] [--radius MILES]   Browse listings
//   barter users                                List known owners
//   barter user ID                              Show one owner
//   barter show ID                              Show one item
//   barter add --name N --description D --zipcode Z [--find-similar]
//   barter similar --item ID | --name N --description D
//   barter stats                                Catalog statistics
//   barter export                               Dump the catalog as JSON
//
// The catalog lives only as long as this process: every run starts from the
// built-in demo seed or from --seed / BARTER_SEED_PATH.
// ============================================================================

use anyhow::{Context, Result};
use barter_core::{
    validate_new_item, BarterConfig, Category, Item, ItemCatalog, ItemId, NewItem, ScoredItem,
    TargetItem, UserId,
};
use chrono::{TimeZone, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Local barter catalog tool
#[derive(Parser)]
#[command(name = "barter", version, about = "Browse, list and match items for local trades")]
struct Cli {
    /// JSON seed file with items and users (default: built-in demo data)
    #[arg(long, global = true)]
    seed: Option<String>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List items, optionally limited to a zipcode and radius
    Items {
        #[arg(long)]
        zip: Option<String>,

        /// Search radius in miles (default: BARTER_SEARCH_RADIUS or 10)
        #[arg(long)]
        radius: Option<u32>,
    },

    /// List known users
    Users,

    /// Show a single user
    User { id: UserId },

    /// Show a single item
    Show { id: ItemId },

    /// List a new item
    Add(AddArgs),

    /// Rank items similar to an existing item or a draft
    Similar(SimilarArgs),

    /// Show catalog statistics
    Stats,

    /// Export the catalog contents as JSON
    Export,
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    description: String,

    #[arg(long)]
    zipcode: String,

    /// electronics, clothing, furniture, sports, music, books, other
    #[arg(long, default_value = "other")]
    category: String,

    /// Miles you are willing to travel for a trade
    #[arg(long, default_value = "10")]
    radius: u32,

    /// Estimated value in USD
    #[arg(long)]
    estimated_value: Option<u32>,

    /// Owner user id, or "random" to pick a demo owner
    #[arg(long, default_value = "random")]
    owner: String,

    /// Also list items similar to the new one
    #[arg(long)]
    find_similar: bool,
}

#[derive(Args)]
struct SimilarArgs {
    /// Use an existing item as the target
    #[arg(long, conflicts_with_all = ["name", "description"])]
    item: Option<ItemId>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    zipcode: Option<String>,

    /// Show at most this many matches
    #[arg(long)]
    limit: Option<usize>,
}

fn init_tracing(config: &BarterConfig) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(
        config
            .log_directive
            .parse()
            .with_context(|| format!("Invalid log directive '{}'", config.log_directive))?,
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn open_catalog(cli_seed: Option<&str>, config: &BarterConfig) -> Result<ItemCatalog> {
    let seed_path = cli_seed
        .map(std::path::PathBuf::from)
        .or_else(|| config.seed_path.clone());

    match seed_path {
        Some(path) => ItemCatalog::from_seed_file(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Ok(ItemCatalog::seeded()),
    }
}

fn parse_owner(raw: &str) -> Result<Option<UserId>> {
    if raw.eq_ignore_ascii_case("random") {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .with_context(|| format!("Owner must be a user id or 'random', got '{}'", raw))
}

fn format_timestamp(ts: i64) -> String {
    Utc.timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("(invalid: {})", ts))
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Could not load .env file: {}", e);
        }
    }

    let cli = Cli::parse();
    let config = BarterConfig::from_env();
    init_tracing(&config)?;

    let catalog = open_catalog(cli.seed.as_deref(), &config)?;
    let json = cli.json;

    match cli.command {
        Commands::Items { zip, radius } => {
            cmd_items(&catalog, zip, radius.unwrap_or(config.search_radius), json)
        }
        Commands::Users => cmd_users(&catalog, json),
        Commands::User { id } => cmd_user(&catalog, id, json),
        Commands::Show { id } => cmd_show(&catalog, id, json),
        Commands::Add(args) => cmd_add(&catalog, args, json),
        Commands::Similar(args) => cmd_similar(&catalog, args, json),
        Commands::Stats => cmd_stats(&catalog, json),
        Commands::Export => cmd_export(&catalog),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_items(catalog: &ItemCatalog, items: &[Item]) {
    println!(
        "{:<4}  {:<26}  {:<12}  {:<6}  {:>6}  {:<16}  {}",
        "ID", "NAME", "CATEGORY", "ZIP", "RADIUS", "OWNER", "DESCRIPTION"
    );
    println!("{}", "-".repeat(110));

    for item in items {
        println!(
            "{:<4}  {:<26}  {:<12}  {:<6}  {:>6}  {:<16}  {}",
            item.id,
            truncate(&item.name, 26),
            item.category,
            item.zipcode,
            format!("{}mi", item.radius),
            truncate(&catalog.owner_name(item.owner_id), 16),
            truncate(&item.description, 40)
        );
    }
}

fn print_matches(matches: &[ScoredItem]) {
    println!("{:>5}  {:<4}  {:<26}  {:<12}  {}", "SCORE", "ID", "NAME", "CATEGORY", "ZIP");
    println!("{}", "-".repeat(64));
    for scored in matches {
        println!(
            "{:>5}  {:<4}  {:<26}  {:<12}  {}",
            scored.similarity_score,
            scored.item.id,
            truncate(&scored.item.name, 26),
            scored.item.category,
            scored.item.zipcode
        );
    }
}

fn cmd_items(catalog: &ItemCatalog, zip: Option<String>, radius: u32, json: bool) -> Result<()> {
    let items = match zip.as_deref() {
        Some(zip) => catalog.search(zip, radius),
        None => catalog.items(),
    };

    if json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("No results. Try widening the radius or a different zip.");
        return Ok(());
    }

    print_items(catalog, &items);
    match zip {
        Some(zip) => println!("\n{} items found in {} within {} miles", items.len(), zip, radius),
        None => println!("\nTotal: {} items", items.len()),
    }
    Ok(())
}

fn cmd_users(catalog: &ItemCatalog, json: bool) -> Result<()> {
    let users = catalog.users();
    if json {
        return print_json(&users);
    }

    println!("{:<4}  {}", "ID", "NAME");
    println!("{}", "-".repeat(30));
    for user in &users {
        println!("{:<4}  {}", user.id, user.name);
    }
    Ok(())
}

fn cmd_user(catalog: &ItemCatalog, id: UserId, json: bool) -> Result<()> {
    let user = catalog.user_by_id(id);
    let listings: Vec<Item> = catalog
        .items()
        .into_iter()
        .filter(|item| item.owner_id == Some(id))
        .collect();

    if json {
        return print_json(&serde_json::json!({ "user": user, "items": listings }));
    }

    match user {
        Some(user) => println!("User {}: {}", user.id, user.name),
        None => println!("User {}: {}", id, catalog.owner_name(Some(id))),
    }
    println!("Listings: {}", listings.len());
    for item in &listings {
        println!("  - [{}] {}", item.id, item.name);
    }
    Ok(())
}

fn cmd_show(catalog: &ItemCatalog, id: ItemId, json: bool) -> Result<()> {
    let item = catalog
        .item_by_id(id)
        .with_context(|| format!("Item not found: {}", id))?;

    if json {
        return print_json(&item);
    }

    println!("=== {} (#{}) ===", item.name, item.id);
    println!("Category:    {}", item.category);
    println!("Description: {}", item.description);
    println!("Location:    {} (travels up to {} miles)", item.zipcode, item.radius);
    println!("Owner:       {}", catalog.owner_name(item.owner_id));
    println!("Est. value:  ${}", item.estimated_value_or_default());
    println!("Listed:      {}", format_timestamp(item.listed_at));
    Ok(())
}

fn cmd_add(catalog: &ItemCatalog, args: AddArgs, json: bool) -> Result<()> {
    let category: Category = args.category.parse()?;
    let owner = parse_owner(&args.owner)?;

    let mut upload = NewItem::new(args.name.trim(), args.description.trim(), args.zipcode.trim())
        .with_category(category)
        .with_radius(args.radius);
    if let Some(value) = args.estimated_value {
        upload = upload.with_estimated_value(value);
    }
    validate_new_item(&upload)?;

    let item = match owner {
        Some(owner_id) => {
            if catalog.user_by_id(owner_id).is_none() {
                anyhow::bail!("Unknown owner id {}", owner_id);
            }
            catalog.add_item(upload, Some(owner_id))
        }
        None => catalog.add_item_with_random_owner(upload, &mut rand::thread_rng()),
    };
    info!("Added item {} via CLI", item.id);

    let matches = if args.find_similar {
        catalog.find_similar(&TargetItem::from(&item))
    } else {
        Vec::new()
    };

    if json {
        return print_json(&serde_json::json!({ "item": item, "similar": matches }));
    }

    println!(
        "Listed #{} {} for {}",
        item.id,
        item.name,
        catalog.owner_name(item.owner_id)
    );
    if args.find_similar {
        println!();
        if matches.is_empty() {
            println!("No similar items found.");
        } else {
            print_matches(&matches);
        }
    }
    Ok(())
}

fn cmd_similar(catalog: &ItemCatalog, args: SimilarArgs, json: bool) -> Result<()> {
    let target = match args.item {
        Some(id) => {
            let item = catalog
                .item_by_id(id)
                .with_context(|| format!("Item not found: {}", id))?;
            TargetItem::from(&item)
        }
        None => {
            let mut target = TargetItem::new(
                args.name.unwrap_or_default(),
                args.description.unwrap_or_default(),
            );
            if let Some(category) = args.category.as_deref() {
                target = target.with_category(category.parse()?);
            }
            if let Some(zipcode) = args.zipcode {
                target = target.with_zipcode(zipcode);
            }
            target
        }
    };

    if target.name.is_empty() || target.description.is_empty() {
        anyhow::bail!("A name and description are required to find similar items");
    }

    let mut matches = catalog.find_similar(&target);
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }

    if json {
        return print_json(&matches);
    }

    if matches.is_empty() {
        println!("No similar items found.");
        return Ok(());
    }
    print_matches(&matches);
    Ok(())
}

fn cmd_stats(catalog: &ItemCatalog, json: bool) -> Result<()> {
    let stats = catalog.stats();
    if json {
        return print_json(&stats);
    }

    println!("=== Barter Catalog Stats ===");
    println!("Items:  {} total ({} without owner)", stats.total_items, stats.unowned_items);
    for (category, count) in &stats.category_counts {
        println!("  {:12} {}", category.as_str(), count);
    }
    println!("Users:  {}", stats.total_users);
    Ok(())
}

fn cmd_export(catalog: &ItemCatalog) -> Result<()> {
    let export = serde_json::json!({
        "exported_at": Utc::now().to_rfc3339(),
        "stats": catalog.stats(),
        "items": catalog.items(),
        "users": catalog.users(),
    });

    print_json(&export)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner() {
        assert_eq!(parse_owner("random").unwrap(), None);
        assert_eq!(parse_owner("RANDOM").unwrap(), None);
        assert_eq!(parse_owner("3").unwrap(), Some(3));
        assert!(parse_owner("alice").is_err());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("héllo wörld", 5), "héllo");
        assert_eq!(truncate("short", 40), "short");
    }

    #[test]
    fn test_cli_parses_similar_draft() {
        let cli = Cli::try_parse_from([
            "barter",
            "similar",
            "--name",
            "Gaming Console",
            "--description",
            "used console",
            "--category",
            "electronics",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Similar(_)));
    }

    #[test]
    fn test_cli_parses_item_ids() {
        let cli = Cli::try_parse_from(["barter", "show", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { id: 3 }));

        let cli = Cli::try_parse_from(["barter", "similar", "--item", "2"]).unwrap();
        match cli.command {
            Commands::Similar(args) => assert_eq!(args.item, Some(2 as ItemId)),
            _ => panic!("expected similar"),
        }

        assert!(Cli::try_parse_from(["barter", "show", "-1"]).is_err());
    }

    #[test]
    fn test_cli_rejects_item_with_draft_fields() {
        let result = Cli::try_parse_from(["barter", "similar", "--item", "2", "--name", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_open_catalog_defaults_to_demo_seed() {
        let catalog = open_catalog(None, &BarterConfig::default()).unwrap();
        assert_eq!(catalog.len(), 5);
    }
}
