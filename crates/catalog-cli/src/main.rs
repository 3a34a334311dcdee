use anyhow::Context;
use catalog_cli::admin::upsert_admin;
use catalog_cli::seeder::{self, SeedConfig};
use catalog_config::DatabaseConfig;
use catalog_db::{PgPool, init_db_pool};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Catalog CLI - Administrative tools for Catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or promote an active administrator account
    CreateAdmin {
        /// Username (prompted if not provided)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake countries and districts
    Seed {
        /// Number of countries to create
        #[arg(short = 'c', long, default_value = "10")]
        countries: usize,

        /// Number of districts to create, spread across the new countries
        #[arg(short = 'd', long, default_value = "50")]
        districts: usize,
    },
    /// Remove seeded countries and districts (keeps hand-entered rows)
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let database = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&database)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::CreateAdmin { username, password } => {
            handle_create_admin(&pool, username, password).await
        }
        Commands::Seed {
            countries,
            districts,
        } => seeder::seed_all(&pool, SeedConfig::new(countries, districts))
            .await
            .context("Error seeding database"),
        Commands::ClearSeed => seeder::clear_all(&pool)
            .await
            .context("Error clearing seeded data"),
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    upsert_admin(pool, &username, &password)
        .await
        .context("Error creating administrator")?;

    println!("\n✅ Administrator ready!");
    println!("   Username: {}", username);
    Ok(())
}
