//! Spendlog CLI - a thin command driver over the expense tracker client core.
//!
//! The session is never persisted, so `list` and `add` take the token from
//! the `SPENDLOG_TOKEN` environment variable; `login` prints a token to
//! export for the rest of the shell session.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spendlog::auth::Credential;
use spendlog::models::Expense;
use spendlog::{Config, Tracker};

/// Environment variable carrying the session token between invocations
const TOKEN_ENV: &str = "SPENDLOG_TOKEN";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let config = Config::load().context("Failed to load configuration")?;
    info!(base_url = %config.api_base_url, "spendlog starting");
    let mut tracker = Tracker::new(config)?;

    match args.get(1).map(String::as_str) {
        Some("register") => {
            let username = required_arg(&args, 2, "username")?;
            let password = prompt_password()?;
            tracker.register(username, &password).await?;
            println!("Registered {}. You can now log in.", username);
        }
        Some("login") => {
            let username = required_arg(&args, 2, "username")?;
            let password = prompt_password()?;
            tracker.login(username, &password).await?;
            let token = tracker
                .session()
                .token()
                .context("Login succeeded but no token was stored")?;
            println!("Logged in. For this shell session run:");
            println!("  export {}={}", TOKEN_ENV, token);
            print_expenses(tracker.expenses());
        }
        Some("list") => {
            tracker.session().login(Credential::new(env_token()?));
            tracker.refresh().await?;
            print_expenses(tracker.expenses());
        }
        Some("add") => {
            let description = required_arg(&args, 2, "description")?;
            let amount = required_arg(&args, 3, "amount")?;
            tracker.session().login(Credential::new(env_token()?));
            let created = tracker.add(description, amount).await?;
            println!("Added #{}: {} ({})", created.id, created.description, created.amount);
        }
        _ => {
            eprintln!("Usage: spendlog <command>");
            eprintln!();
            eprintln!("Commands:");
            eprintln!("  register <username>           create an account");
            eprintln!("  login <username>              log in and print a session token");
            eprintln!("  list                          list expenses ({} must be set)", TOKEN_ENV);
            eprintln!("  add <description> <amount>    add an expense ({} must be set)", TOKEN_ENV);
            std::process::exit(2);
        }
    }

    Ok(())
}

fn required_arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("missing <{}> argument", name))
}

fn env_token() -> Result<String> {
    match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => bail!("{} is not set - run `spendlog login <username>` first", TOKEN_ENV),
    }
}

fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("empty password");
    }
    Ok(password)
}

fn print_expenses(expenses: &[Expense]) {
    if expenses.is_empty() {
        println!("No expenses yet.");
        return;
    }
    println!("{:>6}  {:<40}  {:>10}", "id", "description", "amount");
    for expense in expenses {
        println!(
            "{:>6}  {:<40}  {:>10}",
            expense.id,
            expense.description,
            expense.amount.to_string()
        );
    }
}
