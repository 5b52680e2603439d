use clap::Parser;
use log::debug;
use meal_finder::{load_config, DisplayState, MealDbClient, ViewController};
use std::process::ExitCode;

/// Search TheMealDB and print the results as HTML
#[derive(Parser, Debug)]
#[command(name = "meal-finder", version, about)]
struct Args {
    /// Recipe name to search for
    query: String,

    /// Open the detail overlay for this recipe id
    #[arg(long, value_name = "ID")]
    open: Option<String>,

    /// Render with the dark colour scheme
    #[arg(long)]
    dark: bool,

    /// Print a complete HTML page instead of the card list
    #[arg(long)]
    page: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config()?;
    debug!("{:#?}", config);
    let client = MealDbClient::new(&config)?;
    let mut view = ViewController::new(client, &config);
    view.set_prefers_dark(args.dark);

    let state = view.submit(&args.query).await;

    if let Some(id) = args.open.as_deref() {
        if view.open_detail(id).is_none() {
            eprintln!("No recipe with id {} in the results", id);
        }
    }

    if args.page {
        println!("{}", view.render_page());
    } else {
        match state {
            DisplayState::Results => {
                if let Some(results) = view.results() {
                    println!("<h2>{}</h2>", html_escape::encode_text(&results.header));
                    println!("<p>{}</p>", html_escape::encode_text(&results.count));
                    println!("{}", results.cards);
                }
                if let Some(detail) = view.overlay().detail() {
                    println!("<h2>{}</h2>", html_escape::encode_text(&detail.title));
                    println!("{}", detail.body);
                }
            }
            DisplayState::NoResults => eprintln!("No recipes found for \"{}\"", args.query.trim()),
            DisplayState::Error => eprintln!("Something went wrong. Please try again."),
            DisplayState::Welcome | DisplayState::Loading => {
                eprintln!("Please provide a recipe name to search for")
            }
        }
    }

    Ok(match state {
        DisplayState::Error => ExitCode::FAILURE,
        DisplayState::Welcome | DisplayState::Loading => ExitCode::from(2),
        _ => ExitCode::SUCCESS,
    })
}
