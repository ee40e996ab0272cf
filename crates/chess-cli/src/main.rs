//! Command-line front end for the chess rules engine.
//!
//! Reads a position from `--fen` (or the configured start position), then
//! lists legal moves, plays UCI moves, counts perft nodes or reports the
//! game status.

mod config;

use anyhow::Context;
use chess_core::{Move, Square};
use chess_rules::{legal_destinations, legal_moves, perft, perft_divide, status, Board, GameStatus};
use clap::{Parser, Subcommand};
use config::CliConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Inspect and play chess positions")]
struct Cli {
    /// Position to start from, as FEN (defaults to the configured start position)
    #[arg(long, global = true)]
    fen: Option<String>,

    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List legal moves, for one square or for every piece of the side to move
    Moves {
        /// Origin square in algebraic notation (e.g. e2)
        square: Option<String>,
    },
    /// Apply moves in UCI notation and print the resulting FEN
    Play {
        /// Moves such as e2e4 or e7e8n
        moves: Vec<String>,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        /// Search depth in plies
        depth: u32,
        /// Print the node count below each root move
        #[arg(short, long)]
        divide: bool,
    },
    /// Report check, checkmate or stalemate for the side to move
    Status,
    /// Print the board diagram
    Show,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(CliConfig::default_path);
    let config = CliConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let fen = cli.fen.as_deref().unwrap_or(&config.start_fen);
    tracing::info!("Position: {}", fen);

    let board = Board::from_fen(fen).map_err(|e| {
        tracing::warn!("Rejected position: {}", e);
        e
    })?;

    let output = run(&cli.command, board)?;
    println!("{}", output);
    Ok(())
}

/// Executes one subcommand against `board` and returns the text to print.
fn run(command: &Commands, board: Board) -> anyhow::Result<String> {
    match command {
        Commands::Moves { square } => {
            tracing::info!("Listing legal moves");
            match square {
                Some(name) => {
                    let from = parse_square(name)?;
                    let dests: Vec<String> = legal_destinations(&board, from)
                        .iter()
                        .map(|sq| sq.to_algebraic())
                        .collect();
                    Ok(dests.join(" "))
                }
                None => {
                    let lines: Vec<String> = legal_moves(&board)
                        .iter()
                        .map(|(from, dests)| {
                            let dests: Vec<String> =
                                dests.iter().map(|sq| sq.to_algebraic()).collect();
                            format!("{}: {}", from, dests.join(" "))
                        })
                        .collect();
                    Ok(lines.join("\n"))
                }
            }
        }
        Commands::Play { moves } => {
            tracing::info!("Playing {} moves", moves.len());
            let mut board = board;
            for text in moves {
                let mv = Move::from_uci(text).ok_or_else(|| {
                    tracing::warn!("Unparseable move: {}", text);
                    anyhow::anyhow!("invalid move notation: {}", text)
                })?;
                board.apply(mv).map_err(|e| {
                    tracing::warn!("Rejected move {}: {}", text, e);
                    e
                })?;
                tracing::debug!("Applied {}: {}", mv, board.to_fen());
            }
            Ok(board.to_fen())
        }
        Commands::Perft { depth, divide } => {
            tracing::info!("Running perft to depth {}", depth);
            if *divide && *depth > 0 {
                let results = perft_divide(&board, *depth);
                let total: u64 = results.iter().map(|(_, n)| n).sum();
                let mut lines: Vec<String> = results
                    .into_iter()
                    .map(|(mv, n)| format!("{}: {}", mv, n))
                    .collect();
                lines.push(String::new());
                lines.push(format!("Nodes: {}", total));
                Ok(lines.join("\n"))
            } else {
                Ok(perft(&board, *depth).to_string())
            }
        }
        Commands::Status => {
            tracing::info!("Classifying position");
            let label = match status(&board)? {
                GameStatus::Ongoing => "ongoing",
                GameStatus::Check => "check",
                GameStatus::Checkmate => "checkmate",
                GameStatus::Stalemate => "stalemate",
            };
            Ok(label.to_string())
        }
        Commands::Show => Ok(board.to_string()),
    }
}

fn parse_square(name: &str) -> anyhow::Result<Square> {
    Square::from_algebraic(name).ok_or_else(|| {
        tracing::warn!("Unknown square: {}", name);
        anyhow::anyhow!("invalid square: {}", name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_rules::ChessError;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let fen = cli.fen.as_deref().unwrap_or(chess_core::FenFields::STARTPOS);
        run(&cli.command, Board::from_fen(fen)?)
    }

    #[test]
    fn test_cli_parses_global_fen_after_subcommand() {
        let cli = Cli::try_parse_from([
            "chess-cli",
            "status",
            "--fen",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1",
        ])
        .unwrap();
        assert_eq!(cli.fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_cli_parses_perft_divide() {
        let cli = Cli::try_parse_from(["chess-cli", "perft", "3", "-d"]).unwrap();
        match cli.command {
            Commands::Perft { depth, divide } => {
                assert_eq!(depth, 3);
                assert!(divide);
            }
            _ => panic!("expected perft"),
        }
    }

    #[test]
    fn test_cli_rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["chess-cli"]).is_err());
    }

    #[test]
    fn moves_for_one_square() {
        assert_eq!(run_args(&["chess-cli", "moves", "g1"]).unwrap(), "f3 h3");
        assert_eq!(run_args(&["chess-cli", "moves", "e7"]).unwrap(), "");
        assert!(run_args(&["chess-cli", "moves", "z9"]).is_err());
    }

    #[test]
    fn moves_for_every_piece() {
        let out = run_args(&["chess-cli", "moves"]).unwrap();
        assert_eq!(out.lines().count(), 10);
        assert!(out.lines().any(|l| l == "b1: a3 c3"));
    }

    #[test]
    fn play_prints_resulting_fen() {
        let out = run_args(&["chess-cli", "play", "e2e4", "c7c5", "g1f3"]).unwrap();
        assert_eq!(
            out,
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
    }

    #[test]
    fn play_reports_illegal_move() {
        let err = run_args(&["chess-cli", "play", "e2e5"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChessError>(),
            Some(ChessError::IllegalMove(_))
        ));
        assert!(run_args(&["chess-cli", "play", "e2"]).is_err());
    }

    #[test]
    fn perft_counts() {
        assert_eq!(run_args(&["chess-cli", "perft", "2"]).unwrap(), "400");
        let out = run_args(&["chess-cli", "perft", "2", "--divide"]).unwrap();
        assert!(out.ends_with("Nodes: 400"));
        assert!(out.lines().any(|l| l == "e2e4: 20"));
    }

    #[test]
    fn status_labels() {
        assert_eq!(run_args(&["chess-cli", "status"]).unwrap(), "ongoing");
        assert_eq!(
            run_args(&[
                "chess-cli",
                "status",
                "--fen",
                "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
            ])
            .unwrap(),
            "checkmate"
        );
    }
}
