//! Serve command - expose the classifier as a local JSON API.

use colored::Colorize;
use foodguard::{Classifier, Strategy};

use crate::server::{app, state::AppState};

pub fn run(port: u16, strategy: Strategy, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(Classifier::new().with_strategy(strategy), verbose);

    let url = format!("http://localhost:{}/api", port);
    println!();
    println!(
        "{} {}",
        "Starting FoodGuard server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Strategy: {:?}", strategy);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        app::run_server(state, port).await
    })
}
