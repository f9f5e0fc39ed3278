//! Interactive terminal chess
//!
//! Two players share one keyboard. Moves are typed in coordinate
//! notation; a handful of commands inspect the game, hand a turn to the
//! random bot, or save the record.

mod bot;
mod display;
mod notation;
mod record;
mod settings;

use anyhow::Result;
use chess_core::{board_report, Board};
use record::GameRecord;
use settings::Settings;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

fn print_usage() {
    println!("Terminal Chess");
    println!();
    println!("Usage:");
    println!("  chess_cli [--config FILE] [--ascii]");
    println!();
    println!("Options:");
    println!("  --config FILE   Read settings from FILE (TOML)");
    println!("  --ascii         Draw the board with ASCII pieces");
    println!("  -h, --help      Show this message");
}

fn print_help() {
    println!("Commands:");
    println!("  e2-e4 (or e2 e4, e2e4)  Move a piece");
    println!("  moves                   List every move for the side to play");
    println!("  history                 Show the moves played so far");
    println!("  analyze                 Survey mobility and safety");
    println!("  bot                     Let the computer play this turn");
    println!("  save [file]             Write the game record as JSON");
    println!("  load [file]             Show the moves of a saved record");
    println!("  reset (r)               Start over");
    println!("  quit (q)                Leave the game");
    println!("  help (h)                This message");
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut config_path: Option<PathBuf> = None;
    let mut force_ascii = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--ascii" => force_ascii = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                return Ok(());
            }
        }
        i += 1;
    }

    let mut settings = match config_path {
        Some(path) => Settings::load_or_default(&path)?,
        None => Settings::load_or_default(Path::new("chess_cli.toml"))?,
    };
    if force_ascii {
        settings.unicode_pieces = false;
    }

    run(&settings)
}

fn run(settings: &Settings) -> Result<()> {
    let mut board = Board::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Terminal Chess. Type 'help' for commands.");
    print!("{}", display::render_board(&board, settings));
    prompt(&mut stdout, &board)?;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let input = line.trim();
        if input.is_empty() {
            prompt(&mut stdout, &board)?;
            continue;
        }
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts[0] {
            "quit" | "q" => break,
            "help" | "h" => print_help(),
            "reset" | "r" => {
                board.reset_board();
                println!("New game.");
                print!("{}", display::render_board(&board, settings));
            }
            "history" => print!("{}", display::render_history(&board, settings)),
            "moves" => print!("{}", display::render_moves(&board)),
            "analyze" => print!("{}", display::render_report(&board_report(&board))),
            "bot" => match bot::random_move(&board) {
                Some((fr, fc, tr, tc)) => apply_move(&mut board, settings, fr, fc, tr, tc),
                None => println!(
                    "{} has no moves.",
                    display::color_name(board.current_player())
                ),
            },
            "save" => {
                let path = parts.get(1).copied().unwrap_or(settings.record_path.as_str());
                match GameRecord::from_board(&board).save(Path::new(path)) {
                    Ok(()) => println!(
                        "Saved {} moves to {}.",
                        board.move_history().len(),
                        path
                    ),
                    Err(e) => eprintln!("Save failed: {:#}", e),
                }
            }
            "load" => {
                let path = parts.get(1).copied().unwrap_or(settings.record_path.as_str());
                match GameRecord::load(Path::new(path)) {
                    Ok(saved) => {
                        println!("Record from {} ({} moves):", saved.saved_at, saved.moves.len());
                        for (i, mv) in saved.moves.iter().enumerate() {
                            println!("{}", display::format_record(i + 1, mv, settings));
                        }
                    }
                    Err(e) => eprintln!("Load failed: {:#}", e),
                }
            }
            _ => match notation::parse_move(input) {
                Some((fr, fc, tr, tc)) => apply_move(&mut board, settings, fr, fc, tr, tc),
                None => println!("Unrecognized input. Type 'help' for commands, or a move like e2-e4."),
            },
        }

        // Only a just-played move can end the game; the session ends with it
        if board.game_over() {
            if let Some(winner) = board.winner() {
                println!(
                    "Game over: {} wins by capturing the king.",
                    display::color_name(winner)
                );
            }
            print!("{}", display::render_history(&board, settings));
            break;
        }

        prompt(&mut stdout, &board)?;
    }

    Ok(())
}

fn apply_move(board: &mut Board, settings: &Settings, fr: u8, fc: u8, tr: u8, tc: u8) {
    match board.try_move_piece(fr, fc, tr, tc) {
        Ok(()) => {
            if let Some(mv) = board.move_history().last() {
                println!(
                    "{}",
                    display::format_record(board.move_history().len(), mv, settings)
                );
            }
            print!("{}", display::render_board(board, settings));
        }
        Err(e) => println!("Move rejected: {}.", e),
    }
}

fn prompt(stdout: &mut io::Stdout, board: &Board) -> Result<()> {
    write!(stdout, "{} > ", display::color_name(board.current_player()))?;
    stdout.flush()?;
    Ok(())
}
