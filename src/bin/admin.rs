//! CLI administration tool for train-booking.
//!
//! Manages accounts and checks the database without going through the HTTP
//! API. This is how the first `admin` account is created: registration over
//! HTTP only ever yields `user` accounts.
//!
//! # Usage
//!
//! ```bash
//! # Create an administrator (prompts for missing fields)
//! cargo run --bin admin -- user create --role admin
//!
//! # List accounts
//! cargo run --bin admin -- user list
//!
//! # Promote or demote an account
//! cargo run --bin admin -- user role ada@example.com admin
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required)
//! - `BCRYPT_COST` (optional, default 12)

use train_booking::auth::Role;
use train_booking::auth::password::hash_password;
use train_booking::config::{Config, DEFAULT_BCRYPT_COST};
use train_booking::domain::entities::NewUser;
use train_booking::domain::repositories::UserRepository;
use train_booking::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing train-booking.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create an account
    Create {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Login email
        #[arg(short, long)]
        email: Option<String>,

        /// Password (a random one is generated if omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Role: user or admin
        #[arg(short, long, default_value = "user")]
        role: Role,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,

    /// Change the role of an account
    Role {
        /// Account email
        email: String,

        /// New role: user or admin
        role: Role,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            name,
            email,
            password,
            role,
            yes,
        } => create_user(repo, name, email, password, role, yes).await?,
        UserAction::List => list_users(repo).await?,
        UserAction::Role { email, role } => set_role(repo, email, role).await?,
    }

    Ok(())
}

/// Creates an account with interactive prompts.
///
/// A generated password is printed once and is not stored anywhere but as a
/// bcrypt hash.
async fn create_user(
    repo: Arc<PgUserRepository>,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: Role,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create account".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email: String = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let email = email.trim().to_lowercase();

    let (password, generated) = match password {
        Some(p) => (p, false),
        None => (generate_password(), true),
    };

    if password.len() < 8 {
        anyhow::bail!("Password must be at least 8 characters");
    }

    if repo
        .find_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {e}"))?
        .is_some()
    {
        anyhow::bail!("An account with email {email} already exists");
    }

    println!("{}", "Account details:".bright_white().bold());
    println!("  Name:  {}", name.cyan());
    println!("  Email: {}", email.cyan());
    println!("  Role:  {}", role.to_string().cyan());
    if generated {
        println!("  Password: {}", password.bright_yellow().bold());
        println!();
        println!(
            "{}",
            "⚠️  Save this password now! It will not be shown again."
                .red()
                .bold()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let password_hash = hash_password(&password, bcrypt_cost())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    let user = repo
        .create(NewUser {
            name,
            email,
            password_hash,
            role,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {e}"))?;

    println!(
        "{} (id {})",
        "✅ Account created".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();
    println!("{}", "Sign in with:".bright_white());
    println!(
        "  curl -X POST http://localhost:3000/api/v1/login -H 'Content-Type: application/json' -d '{{\"email\":\"{}\",\"password\":\"...\"}}'",
        user.email
    );
    println!();

    Ok(())
}

/// Lists all accounts.
///
/// ```text
///   ID  Name                 Email                          Role   Created
///   1   Ada                  ada@example.com                admin  2025-01-15 10:30
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {e}"))?;

    if users.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create --role admin",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<30} {:<6} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Role".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for user in &users {
        let role = match user.role {
            Role::Admin => user.role.to_string().magenta(),
            Role::User => user.role.to_string().green(),
        };

        println!(
            "  {:<4} {:<20} {:<30} {:<6} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email,
            role,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn set_role(repo: Arc<PgUserRepository>, email: String, role: Role) -> Result<()> {
    let email = email.trim().to_lowercase();

    let user = repo
        .find_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {e}"))?
        .context("Account not found")?;

    if user.role == role {
        println!("{} already has role {}", user.email.cyan(), role.to_string().yellow());
        return Ok(());
    }

    let user = repo
        .set_role(user.id, role)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to change role: {e}"))?;

    println!(
        "{} {} is now {}",
        "✅".green(),
        user.email.cyan(),
        user.role.to_string().bright_white().bold()
    );
    println!(
        "{}",
        "   Credentials issued earlier keep the old role until they expire.".bright_black()
    );

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();

            for table in ["users", "stations", "trains", "train_carriages"] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(pool)
                    .await
                    .with_context(|| format!("Failed to count {table}"))?;

                println!("  {:<16} {}", table, count.to_string().bright_green().bold());
            }
            println!();
        }
    }

    Ok(())
}

fn bcrypt_cost() -> u32 {
    std::env::var("BCRYPT_COST")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|c| (4..=31).contains(c))
        .unwrap_or(DEFAULT_BCRYPT_COST)
}

/// Generates a random 20-character alphanumeric password.
fn generate_password() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const PASSWORD_LEN: usize = 20;

    let mut rng = rand::rng();

    (0..PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
