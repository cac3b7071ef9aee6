//! CLI administration tool for shortlink.
//!
//! Provides commands for registering users, managing API tokens, and
//! checking the database without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Register a user
//! cargo run --bin admin -- user create
//!
//! # Issue a token for a user (printed once, stored hashed)
//! cargo run --bin admin -- token issue --email test@example.com
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke tokens by label
//! cargo run --bin admin -- token revoke "laptop"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for token commands): HMAC key, must
//!   match the server's

use shortlink::application::services::hash_token;
use shortlink::domain::entities::NewUser;
use shortlink::domain::repositories::{TokenRepository, UserRepository};
use shortlink::infrastructure::persistence::{PgTokenRepository, PgUserRepository};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use rand::Rng;
use rand::distr::Alphanumeric;
use sqlx::PgPool;
use std::sync::Arc;

/// Length of raw tokens issued by `token issue`.
const TOKEN_LENGTH: usize = 40;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Register a new user
    Create {
        /// Email address (prompted if omitted)
        #[arg(long)]
        email: Option<String>,

        /// Display name (prompted if omitted)
        #[arg(long)]
        name: Option<String>,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Issue a new API token for a user
    Issue {
        /// Email of the owning user
        #[arg(long)]
        email: String,

        /// Label describing where the token is used
        #[arg(long, default_value = "default")]
        label: String,
    },

    /// List all tokens
    List,

    /// Revoke all tokens with the given label
    Revoke {
        /// Label to revoke
        label: String,
    },
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = Arc::new(PgPool::connect(&database_url).await?);

    match cli.command {
        Commands::User { action } => match action {
            UserAction::Create { email, name } => create_user(pool, email, name).await,
        },
        Commands::Token { action } => match action {
            TokenAction::Issue { email, label } => issue_token(pool, &email, &label).await,
            TokenAction::List => list_tokens(pool).await,
            TokenAction::Revoke { label } => revoke_tokens(pool, &label).await,
        },
        Commands::Db { action } => match action {
            DbAction::Check => db_check(pool).await,
        },
    }
}

async fn create_user(pool: Arc<PgPool>, email: Option<String>, name: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("Email")
            .interact_text()?,
    };
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("Display name")
            .interact_text()?,
    };

    let repository = PgUserRepository::new(pool);
    let user = repository
        .insert(NewUser {
            email,
            name,
            image: None,
        })
        .await?;

    println!(
        "{} user {} ({})",
        "Created".green().bold(),
        user.email.cyan(),
        user.id
    );

    Ok(())
}

async fn issue_token(pool: Arc<PgPool>, email: &str, label: &str) -> Result<()> {
    let signing_secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;

    let users = PgUserRepository::new(pool.clone());
    let Some(user) = users.find_by_email(email).await? else {
        bail!("No user with email '{email}'");
    };

    let raw_token = generate_token();
    let token_hash = hash_token(&signing_secret, &raw_token);

    let tokens = PgTokenRepository::new(pool);
    tokens.insert(user.id, &token_hash, label).await?;

    println!("{} token for {}:", "Issued".green().bold(), user.email.cyan());
    println!();
    println!("    {}", raw_token.yellow().bold());
    println!();
    println!("Store it now. Only the hash is kept server-side.");

    Ok(())
}

async fn list_tokens(pool: Arc<PgPool>) -> Result<()> {
    let repository = PgTokenRepository::new(pool);
    let tokens = repository.list().await?;

    if tokens.is_empty() {
        println!("No tokens issued.");
        return Ok(());
    }

    for token in tokens {
        let status = if token.revoked {
            "revoked".red()
        } else {
            "active".green()
        };
        let last_used = token
            .last_used_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "{:<20} user={:<5} {} created={} last_used={}",
            token.label.bold(),
            token.user_id,
            status,
            token.created_at.to_rfc3339(),
            last_used
        );
    }

    Ok(())
}

async fn revoke_tokens(pool: Arc<PgPool>, label: &str) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(format!("Revoke all tokens labeled '{label}'?"))
        .default(false)
        .interact()?;

    if !confirmed {
        println!("Aborted.");
        return Ok(());
    }

    let repository = PgTokenRepository::new(pool);
    let revoked = repository.revoke_by_label(label).await?;

    if revoked == 0 {
        println!("{} no active tokens labeled '{label}'", "Warning:".yellow());
    } else {
        println!("{} {revoked} token(s)", "Revoked".green().bold());
    }

    Ok(())
}

async fn db_check(pool: Arc<PgPool>) -> Result<()> {
    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(pool.as_ref())
        .await?;
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool.as_ref())
        .await?;

    println!("{}", "Database connection OK".green().bold());
    println!("  short links: {links}");
    println!("  users:       {users}");

    Ok(())
}

fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
