use clap::Parser;
use tracing_subscriber::EnvFilter;

use wheel_of_meals_rs::analysis::GeminiClient;
use wheel_of_meals_rs::catalog::{builtin_menu, filter_by_category, load_menu};
use wheel_of_meals_rs::cli::{parse_category, Cli, Command};
use wheel_of_meals_rs::error::{Result, WheelError};
use wheel_of_meals_rs::game::GameSession;
use wheel_of_meals_rs::interface::{
    display_menu, display_result_card, display_spinning, display_wheel, prompt_category_filter,
    prompt_play_again, prompt_spin,
};
use wheel_of_meals_rs::models::{CategoryFilter, MenuItem};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or_default();

    match command {
        Command::Play => cmd_play(&cli).await,
        Command::Menu { ref category } => cmd_menu(&cli, category.as_deref()),
    }
}

fn load_catalog(cli: &Cli) -> Result<Vec<MenuItem>> {
    match &cli.menu {
        Some(path) => load_menu(path),
        None => Ok(builtin_menu()),
    }
}

/// Interactive play loop: filter, spin, result card, repeat.
async fn cmd_play(cli: &Cli) -> Result<()> {
    let catalog = load_catalog(cli)?;
    if catalog.is_empty() {
        return Err(WheelError::EmptyMenu);
    }

    let advisor = GeminiClient::from_env();
    if !advisor.is_configured() {
        println!("Note: GEMINI_API_KEY is not set; spins will work without AI ratings.");
    }

    let mut session = match cli.seed {
        Some(seed) => GameSession::with_seed(catalog, advisor, seed),
        None => GameSession::new(catalog, advisor),
    };

    loop {
        let filter = prompt_category_filter()?;
        session.set_filter(filter);

        if session.segments().is_empty() {
            println!("No menu items match {}.", filter.label());
            continue;
        }
        display_wheel(session.segments());

        if !prompt_spin()? {
            break;
        }
        if !session.start_spin() {
            continue;
        }
        display_spinning();

        match session.await_winner().await.cloned() {
            Some(winner) => {
                println!("The wheel chose: {}", winner.display_label());
                println!("Asking the nutritionist AI...");
            }
            None => continue,
        }
        session.run_analysis().await;

        if let Some(item) = session.winning_item() {
            display_result_card(item, session.current_analysis());
        }
        session.dismiss();

        if !prompt_play_again()? {
            break;
        }
    }

    Ok(())
}

/// List the catalog, optionally filtered to one category.
fn cmd_menu(cli: &Cli, category: Option<&str>) -> Result<()> {
    let catalog = load_catalog(cli)?;

    let filter = match category {
        Some(value) => CategoryFilter::Only(parse_category(value)?),
        None => CategoryFilter::All,
    };

    display_menu(&filter_by_category(&catalog, filter));
    Ok(())
}
