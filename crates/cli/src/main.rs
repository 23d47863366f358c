use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use medquery_client::{
    metrics, named_substitutes, search, ClientConfig, LookupClient, MedicineLookup, Phase,
    Screen, SearchOutcome,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[derive(Parser)]
#[command(name = "medq")]
#[command(about = "MedQuery medicine lookup CLI")]
struct Cli {
    /// Lookup service base URL (overrides MEDQUERY_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Suggestion debounce in milliseconds (overrides MEDQUERY_SUGGEST_DEBOUNCE_MS)
    #[arg(long, global = true)]
    debounce_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Autocomplete a medicine name
    Suggest {
        /// Name fragment
        fragment: String,
    },
    /// Show full details of one medicine
    Show {
        /// Exact medicine name (case-insensitive)
        name: String,
    },
    /// List medicines with the given composition
    Similar {
        /// First composition string, matched exactly
        comp1: String,
        /// Second composition string (optional)
        #[arg(long)]
        comp2: Option<String>,
    },
    /// Show a medicine and the medicines sharing its composition
    Search {
        /// Exact medicine name (case-insensitive)
        name: String,
    },
    /// Show details of each substitute the medicine lists by name
    Substitutes {
        /// Exact medicine name (case-insensitive)
        name: String,
    },
    /// Line-driven lookup screen with live suggestions
    Interactive,
    /// Body-mass index and basal metabolic rate
    Metrics {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Height in centimetres
        #[arg(long)]
        height: f64,
        /// Age in years
        #[arg(long)]
        age: u32,
        /// male or female
        #[arg(long, default_value = "male")]
        sex: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medquery_client=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let cfg = ClientConfig::from_env_values(
        cli.api_base
            .or_else(|| std::env::var("MEDQUERY_API_BASE").ok()),
        cli.debounce_ms
            .map(|ms| ms.to_string())
            .or_else(|| std::env::var("MEDQUERY_SUGGEST_DEBOUNCE_MS").ok()),
    )?;
    let client = LookupClient::new(&cfg);

    match cli.command {
        Some(Commands::Suggest { fragment }) => {
            let names = client.suggestions(&fragment).await?;
            if names.is_empty() {
                println!("No suggestions.");
            }
            for name in names {
                println!("{name}");
            }
        }
        Some(Commands::Show { name }) => match client.medicine(&name).await? {
            Some(medicine) => print!("{}", render::medicine(&medicine)),
            None => println!("Medicine not found."),
        },
        Some(Commands::Similar { comp1, comp2 }) => {
            let found = client.similar(&comp1, comp2.as_deref()).await?;
            print!("{}", render::similar_list(&found));
        }
        Some(Commands::Search { name }) => {
            let outcome = search(&client, &name).await?;
            print_outcome(&outcome);
        }
        Some(Commands::Substitutes { name }) => match client.medicine(&name).await? {
            Some(medicine) => {
                let found = named_substitutes(&client, &medicine).await;
                if found.is_empty() {
                    println!("No listed substitutes could be loaded.");
                }
                for substitute in found {
                    print!("{}", render::medicine(&substitute));
                }
            }
            None => println!("Medicine not found."),
        },
        Some(Commands::Interactive) => interactive(client, cfg.suggest_debounce()).await?,
        Some(Commands::Metrics {
            weight,
            height,
            age,
            sex,
        }) => {
            let sex: metrics::Sex = sex.parse()?;
            println!("BMI: {:.2}", metrics::bmi(weight, height)?);
            println!(
                "BMR: {:.2} cal/day",
                metrics::bmr(sex, weight, height, age)?
            );
        }
        None => {
            println!("Use 'medq --help' for commands");
        }
    }

    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    match &outcome.medicine {
        Some(medicine) => {
            print!("{}", render::medicine(medicine));
            println!("Similar medicines:");
            print!("{}", render::similar_list(&outcome.substitutes));
        }
        None => println!("Medicine not found."),
    }
}

/// Runs the lookup screen over stdin.
///
/// Plain lines replace the text field. `:go` submits, `:open N` opens the N-th similar
/// medicine, `:close` closes it, and `:q` quits.
async fn interactive(client: LookupClient, debounce: Duration) -> anyhow::Result<()> {
    let mut screen = Screen::new(Arc::new(client), debounce);
    let mut rx = screen.subscribe_suggestions();

    let printer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let shown = rx.borrow_and_update().clone();
            if !shown.names.is_empty() {
                println!("  > {}", shown.names.join(" | "));
            }
        }
    });

    println!("Type a medicine name. Commands: :go, :open N, :close, :q");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":q" | ":quit" => break,
            ":go" => {
                if screen.submit().await {
                    print_outcome(screen.outcome());
                } else {
                    println!("Type a medicine name first.");
                }
            }
            ":close" => screen.close_detail(),
            command if command.starts_with(":open") => {
                let index = command
                    .trim_start_matches(":open")
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1));
                let opened = match index {
                    Some(index) => screen.open_detail(index).await,
                    None => false,
                };
                match screen.detail() {
                    Some(detail) if opened => print!("{}", render::medicine(detail)),
                    _ if matches!(screen.phase(), Phase::ResultShown | Phase::DetailOpen) => {
                        println!("No detail available for that entry.")
                    }
                    _ => println!("Search with :go first."),
                }
            }
            _ => screen.type_text(&line),
        }
    }

    printer.abort();
    Ok(())
}
