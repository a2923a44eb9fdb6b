//! Gridmatch - interactive match driver.
//!
//! Drives the match state machine from the terminal: player setup,
//! five rounds of play, and the persistent leaderboard.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use gridmatch::{MatchConfig, MatchStore, SnapshotStore};
use gridmatch_engine::{Action, CellIndex, Leaderboard, MatchState, PlayerSlot, Transition};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            player_one,
            player_two,
            config,
            snapshot,
        } => run_play(player_one, player_two, config, snapshot),
        Command::Leaderboard { snapshot } => run_leaderboard(snapshot),
    }
}

/// Play a match interactively over stdin.
fn run_play(
    player_one: Option<String>,
    player_two: Option<String>,
    config_path: PathBuf,
    snapshot_path: PathBuf,
) -> Result<()> {
    let config = if config_path.exists() {
        MatchConfig::from_file(&config_path)?
    } else {
        debug!(path = %config_path.display(), "No config file; using defaults");
        MatchConfig::default()
    };

    let snapshots = SnapshotStore::new(snapshot_path);
    let store = MatchStore::new(snapshots.load_or(config.initial_state()));

    let (name_one, name_two) = read_player_names(player_one, player_two)?;
    store.dispatch(Action::StartMatch {
        player_one: name_one,
        player_two: name_two,
    });

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let state = store.snapshot();

        if state.current_round().is_complete() {
            announce_round_result(&state);

            // The advance out of the final round completes the match.
            if let Transition::Applied(next) = store.dispatch(Action::AdvanceRound)
                && next.is_match_complete()
            {
                announce_match_result(&next);
                break;
            }

            println!();
            continue;
        }

        print_round_header(&state);
        println!("{}\n", state.current_round().board().render());

        let mover = state
            .players()
            .get(state.current_round().to_move())
            .map(|p| format!("{} ({})", p.name(), p.mark()))
            .unwrap_or_else(|| "?".to_string());
        print!("{mover} - cell [1-9], r to restart round, q to quit: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            info!("Input closed; leaving match unfinished");
            snapshots.save(&store.snapshot())?;
            return Ok(());
        };

        match line.trim() {
            "q" => {
                snapshots.save(&store.snapshot())?;
                println!("Match saved.");
                return Ok(());
            }
            "r" => {
                store.dispatch(Action::ResetRound);
            }
            input => match parse_cell(input) {
                Some(cell) => {
                    if let Transition::Rejected(reason) = store.dispatch(Action::PlayCell { cell })
                    {
                        println!("{reason}");
                    }
                }
                None => println!("Enter a cell number from 1 to 9."),
            },
        }
        println!();
    }

    // Fold the finished match into the leaderboard and persist it.
    store.dispatch(Action::ResetMatch);
    let state = store.snapshot();
    snapshots.save(&state)?;
    print_standings(state.leaderboard());
    Ok(())
}

/// Print the persisted leaderboard.
fn run_leaderboard(snapshot_path: PathBuf) -> Result<()> {
    let snapshots = SnapshotStore::new(snapshot_path);
    let state = snapshots.load_or(MatchState::default());
    print_standings(state.leaderboard());
    Ok(())
}

/// Resolves player names from flags or interactive prompts.
fn read_player_names(
    player_one: Option<String>,
    player_two: Option<String>,
) -> Result<(String, String)> {
    let mut raw_one = player_one;
    let mut raw_two = player_two;

    loop {
        let one = match raw_one.take() {
            Some(name) => name,
            None => prompt("Player 1 (X): ")?,
        };
        let two = match raw_two.take() {
            Some(name) => name,
            None => prompt("Player 2 (O): ")?,
        };

        match gridmatch::validate_names(&one, &two) {
            Ok(pair) => return Ok(pair),
            Err(error) => println!("{error}"),
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Parses a 1-based cell number into a cell index.
fn parse_cell(input: &str) -> Option<CellIndex> {
    let number: usize = input.trim().parse().ok()?;
    CellIndex::from_index(number.checked_sub(1)?)
}

fn print_round_header(state: &MatchState) {
    let (p1, p2) = match state.players().both() {
        Some(pair) => pair,
        None => return,
    };
    println!(
        "Round {} of {} | {} (X): {} pts | {} (O): {} pts",
        state.round_number(),
        state.total_rounds(),
        p1.name(),
        p1.score(),
        p2.name(),
        p2.score()
    );
}

fn announce_round_result(state: &MatchState) {
    println!("{}\n", state.current_round().board().render());
    match state.current_round().winning_mark() {
        Some(mark) => {
            let winner = [PlayerSlot::One, PlayerSlot::Two]
                .into_iter()
                .filter_map(|slot| state.players().get(slot))
                .find(|p| p.mark() == mark);
            match winner {
                Some(player) => println!("{} wins round {}!", player.name(), state.round_number()),
                None => println!("{mark} wins round {}!", state.round_number()),
            }
        }
        None => println!("Round {} is a draw.", state.round_number()),
    }
}

fn announce_match_result(state: &MatchState) {
    println!("\nMatch complete!");
    if let Some((p1, p2)) = state.players().both() {
        println!(
            "Final score: {} {} - {} {}",
            p1.name(),
            p1.score(),
            p2.name(),
            p2.score()
        );
    }
    match state.match_winner() {
        Some(winner) => println!("{} takes the match!", winner.name()),
        None => println!("The match is tied."),
    }
}

fn print_standings(leaderboard: &Leaderboard) {
    if leaderboard.is_empty() {
        println!("No players on the leaderboard yet.");
        return;
    }
    println!("Leaderboard:");
    for (rank, entry) in leaderboard.standings().iter().enumerate() {
        println!("{:>3}. {:<20} {:>4} pts", rank + 1, entry.name(), entry.score());
    }
}
