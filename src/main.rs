use std::env;
use std::io::IsTerminal;

use clap::Parser;
use dialoguer::Confirm;
use locsync::AppError;

#[derive(Parser)]
#[command(name = "locsync")]
#[command(version)]
#[command(
    about = "Pull finished Crowdin translation builds into the local locale tree",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let repo_root = env::current_dir()?;
    let locale_dir = repo_root.join("locale");

    let outcome = locsync::pull(&locale_dir, None)?;
    println!(
        "✅ Local updates done: {} files across {} languages",
        outcome.files_written,
        outcome.languages.len()
    );

    if !confirm_commit()? {
        return Ok(());
    }

    println!("Preparing git commit...");
    let staged = locsync::commit(&repo_root, &locale_dir)?;
    println!("✅ Committed {} translation files", staged);
    println!("please push");
    Ok(())
}

fn confirm_commit() -> Result<bool, AppError> {
    if !std::io::stdin().is_terminal() {
        println!("Not an interactive session, skipping git commit.");
        return Ok(false);
    }

    Confirm::new()
        .with_prompt("Do you want to git commit this?")
        .default(false)
        .interact()
        .map_err(|err| AppError::config_error(format!("Failed to read confirmation: {}", err)))
}
