//! Minimax engine - command-line front end
//!
//! Interactive play, single-position analysis and engine self-play.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use minimax_engine::{
    AppConfig, Board, Engine, EnginePlayer, HumanPlayer, Mark, Orchestrator, Player, PlayerKind,
    Role, SearchMode,
};
use std::io;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Largest board the exhaustive search finishes on in reasonable time.
const EXHAUSTIVE_CELL_LIMIT: usize = 9;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(search) = cli.search {
        let section = config.engine().with_search(search);
        config = config.with_engine(section);
    }
    let engine = Engine::new(*config.engine().search());

    match cli.command {
        Command::Play { x, o } => {
            let mut players = config.players().clone();
            if let Some(kind) = x {
                players = players.with_x(kind);
            }
            if let Some(kind) = o {
                players = players.with_o(kind);
            }
            run_play(config.with_players(players), engine)
        }
        Command::BestMove { board, role, json } => run_best_move(&board, role, json, engine),
        Command::SelfPlay { json } => run_self_play(&config, engine, json),
    }
}

/// Builds the player for one side.
fn make_player(kind: PlayerKind, name: &str, mark: Mark, engine: Engine) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio(name)),
        PlayerKind::Engine => Box::new(EnginePlayer::new(name, Role::for_mark(mark), engine)),
    }
}

/// Creates the starting board, warning when exhaustive search would be slow.
fn starting_board(config: &AppConfig, engine: Engine) -> Result<Board> {
    let geometry = config.board().geometry()?;
    if geometry.cell_count() > EXHAUSTIVE_CELL_LIMIT
        && engine.mode() == SearchMode::Exhaustive
    {
        warn!(
            cells = geometry.cell_count(),
            "Exhaustive search on a board this size may not finish; consider --search alpha-beta"
        );
    }
    Ok(Board::with_geometry(geometry))
}

/// Run an interactive game
#[instrument(skip_all)]
fn run_play(config: AppConfig, engine: Engine) -> Result<()> {
    let players = config.players();
    let board = starting_board(&config, engine)?;
    info!(x = %players.x(), o = %players.o(), "Starting interactive game");

    println!("Welcome to Tic Tac Toe!");
    let player_x = make_player(*players.x(), players.x_name(), Mark::X, engine);
    let player_o = make_player(*players.o(), players.o_name(), Mark::O, engine);

    let mut game = Orchestrator::with_board(board, player_x, player_o);
    game.run(&mut io::stdout().lock())?;
    Ok(())
}

/// Print the optimal move for one position
#[instrument(skip(engine))]
fn run_best_move(text: &str, role: Role, json: bool, engine: Engine) -> Result<()> {
    let board: Board = text.parse().context("Failed to parse --board")?;
    let report = engine.search(&board, role)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{board}\n");
    match report.result().best_move {
        Some(index) => println!(
            "Best move for {} ({}): {} (index {}), score {}",
            role,
            role.mark(),
            index + 1,
            index,
            report.result().score
        ),
        None => println!("No move available, score {}", report.result().score),
    }
    println!("Searched {} positions", report.stats().nodes);
    Ok(())
}

/// Let the engine play itself
#[instrument(skip_all)]
fn run_self_play(config: &AppConfig, engine: Engine, json: bool) -> Result<()> {
    let board = starting_board(config, engine)?;
    let player_x = Box::new(EnginePlayer::new("Engine X", Role::Maximizing, engine));
    let player_o = Box::new(EnginePlayer::new("Engine O", Role::Minimizing, engine));
    let mut game = Orchestrator::with_board(board, player_x, player_o);

    if json {
        let record = game.run(&mut io::sink())?;
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        let record = game.run(&mut io::stdout().lock())?;
        info!(outcome = %record.outcome(), "Self-play finished");
    }
    Ok(())
}
