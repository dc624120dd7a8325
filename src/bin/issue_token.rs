use std::env;

use anyhow::{Context, Result};

use editorial_tracker::{auth::jwt::JwtService, config::AppConfig, seed::seed_users};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let usage = "Usage: issue-token <user-id>";
    let user_id: i64 = match env::args().nth(1) {
        Some(raw) => raw.parse().context("user id must be an integer")?,
        None => {
            eprintln!("{usage}");
            std::process::exit(1);
        }
    };

    let config = AppConfig::from_env()?;
    let jwt = JwtService::from_config(&config)?;

    let users = seed_users();
    let Some(user) = users.iter().find(|user| user.id == user_id) else {
        eprintln!("Unknown user {user_id}. Known users:");
        for user in &users {
            eprintln!("  {} {} ({})", user.id, user.name, user.role);
        }
        std::process::exit(1);
    };

    println!("{}", jwt.generate_token(user)?);
    Ok(())
}
