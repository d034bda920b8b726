use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pitchside::board::Scoreboard;
use pitchside::config::AppConfig;

#[derive(Parser)]
#[command(name = "pitchside")]
#[command(about = "Live scoreboard for a football competition")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./pitchside.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Comma-separated roster override (e.g. "Mexico,Canada,Spain")
    #[arg(long)]
    teams: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_file_or_default(&cli.config)?;

    // Initialize tracing
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting pitchside v{}", env!("CARGO_PKG_VERSION"));

    let roster: Vec<String> = match &cli.teams {
        Some(list) => list
            .split(',')
            .map(|team| team.trim().to_string())
            .filter(|team| !team.is_empty())
            .collect(),
        None => config.competition.teams.clone(),
    };

    if roster.is_empty() {
        tracing::warn!(
            "Roster is empty; every match start will be rejected. \
             Add [competition] teams to the config or pass --teams"
        );
    }

    let mut board = Scoreboard::builder().with_team_roster(roster).build()?;

    println!(
        "{} — live scoreboard. Type 'help' for commands.",
        config.competition.name
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        if !dispatch(&mut board, line.trim()) {
            break;
        }
    }

    Ok(())
}

/// Run one shell command against the board. Returns false on quit.
fn dispatch(board: &mut Scoreboard, line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => {}

        ["help"] => print_help(),

        ["start", home, away] => match board.start_match(home, away) {
            Ok(()) => println!("Started: {} vs {}", home, away),
            Err(err) => eprintln!("error: {}", err),
        },

        ["score", home, away, home_score, away_score] => {
            match (home_score.parse(), away_score.parse()) {
                (Ok(home_score), Ok(away_score)) => {
                    match board.update_score(home, away, home_score, away_score) {
                        Ok(()) => println!("{}", board.get_match(home, away).expect("just updated")),
                        Err(err) => eprintln!("error: {}", err),
                    }
                }
                _ => eprintln!("error: scores must be non-negative integers"),
            }
        }

        ["end", home, away] => match board.end_match(home, away) {
            Ok(()) => println!("Ended: {} vs {}", home, away),
            Err(err) => eprintln!("error: {}", err),
        },

        ["get", home, away] => match board.get_match(home, away) {
            Ok(m) => println!("{}", m),
            Err(err) => eprintln!("error: {}", err),
        },

        ["board"] => {
            let matches = board.current_matches();
            if matches.is_empty() {
                println!("No matches in play.");
            }
            for (position, m) in matches.iter().enumerate() {
                println!("{}. {}", position + 1, m);
            }
        }

        ["json"] => match serde_json::to_string_pretty(&board.current_matches()) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("error: {}", err),
        },

        ["history"] => {
            let history = board.match_history();
            if history.is_empty() {
                println!("No finished matches yet.");
            }
            for m in &history {
                println!("FT  {}", m);
            }
        }

        ["quit"] | ["exit"] => return false,

        _ => eprintln!("error: unrecognized command; type 'help'"),
    }

    true
}

fn print_help() {
    println!("Commands:");
    println!("  start <home> <away>                  start a match at 0-0");
    println!("  score <home> <away> <hs> <as>        propose the new score after a goal");
    println!("  end <home> <away>                    end a match and move it to history");
    println!("  get <home> <away>                    show one active match");
    println!("  board                                list active matches, ranked");
    println!("  json                                 dump the ranked list as JSON");
    println!("  history                              list finished matches");
    println!("  quit                                 leave");
}
