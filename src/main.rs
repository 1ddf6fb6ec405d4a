use anyhow::Result;

use std::io::{stdin, stdout, Stdin, Write};
use std::thread;
use std::time::Duration;

use fourline::board::Piece;
use fourline::heuristic::score_position;
use fourline::search::Searcher;

mod session;
use session::*;

#[derive(Copy, Clone, PartialEq)]
enum Mode {
    HumanVsHuman,
    HumanVsAi,
    AiVsAi,
}

fn side_label(mode: Mode, side: Piece) -> &'static str {
    match (mode, side) {
        (Mode::HumanVsHuman, Piece::Player) => "Player 1",
        (Mode::HumanVsHuman, _) => "Player 2",
        (Mode::HumanVsAi, Piece::Player) => "Player",
        (Mode::HumanVsAi, _) => "AI",
        (Mode::AiVsAi, Piece::Ai) => "AI 1",
        (Mode::AiVsAi, _) => "AI 2",
    }
}

fn ask_restart(stdin: &Stdin) -> Result<bool> {
    println!("\nDo you want to restart the game?");
    print!("Enter 'y' to restart or anything else to exit: ");
    stdout().flush().expect("failed to flush to stdout!");

    let mut buffer = String::new();
    stdin.read_line(&mut buffer)?;
    Ok(buffer.trim().eq_ignore_ascii_case("y"))
}

fn main() -> Result<()> {
    env_logger::init();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose the search depth via a difficulty level
    println!("Select difficulty level:");
    println!("1. Easy");
    println!("2. Medium");
    println!("3. Hard");
    print!("Enter choice (1-3): ");
    stdout().flush().expect("failed to flush to stdout!");

    let mut buffer = String::new();
    stdin.read_line(&mut buffer)?;
    let depth = match buffer.trim().parse::<u32>() {
        Ok(1) => 2,
        Ok(2) => 4,
        Ok(3) => 6,
        _ => {
            println!("Defaulting to Medium difficulty.");
            4
        }
    };

    // choose the game mode and starting side
    println!("\nChoose game mode:");
    println!("1. Player vs Player");
    println!("2. Player vs AI");
    println!("3. AI vs AI");
    print!("Enter choice (1-3): ");
    stdout().flush().expect("failed to flush to stdout!");

    let mut buffer = String::new();
    stdin.read_line(&mut buffer)?;
    let (mode, first) = match buffer.trim().parse::<u32>() {
        Ok(1) => (Mode::HumanVsHuman, Piece::Player),
        Ok(2) => {
            print!("Who should start the game? (1. Player / 2. AI): ");
            stdout().flush().expect("failed to flush to stdout!");

            let mut buffer = String::new();
            stdin.read_line(&mut buffer)?;
            let first = match buffer.trim().parse::<u32>() {
                Ok(2) => Piece::Ai,
                _ => Piece::Player,
            };
            (Mode::HumanVsAi, first)
        }
        Ok(3) => (Mode::AiVsAi, Piece::Ai),
        _ => {
            println!("Invalid mode. Defaulting to Player vs AI.");
            (Mode::HumanVsAi, Piece::Player)
        }
    };

    let ai_controls = |side: Piece| match mode {
        Mode::HumanVsHuman => false,
        Mode::HumanVsAi => side == Piece::Ai,
        Mode::AiVsAi => true,
    };

    // each automated side maximizes for its own piece
    let mut searchers = (Searcher::new(Piece::Player), Searcher::new(Piece::Ai));

    let mut session = GameSession::new(first);

    // game loop
    loop {
        session.display().expect("Failed to draw board!");

        match session.state {
            GameState::Playing => {
                let side = session.to_move;

                let next_move = if ai_controls(side) {
                    println!("AI is thinking...");
                    stdout().flush().expect("Failed to flush to stdout!");

                    // slow down play when no human is waiting on it
                    if mode == Mode::AiVsAi {
                        thread::sleep(Duration::from_millis(500));
                    }

                    let searcher = match side {
                        Piece::Player => &mut searchers.0,
                        _ => &mut searchers.1,
                    };
                    let (column, score) = searcher.select_move(&session.board, depth)?;

                    println!("Best move: {}", column + 1);
                    log::debug!("search score {}, {} nodes", score, searcher.node_count);
                    column + 1

                // human player
                } else {
                    print!("Move input > ");
                    stdout().flush().expect("Failed to flush to stdout!");
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str);
                            continue;
                        }
                        Ok(column) => column,
                    }
                };

                if let Err(err) = session.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
                println!(
                    "Score for {}: {}",
                    side_label(mode, side),
                    score_position(&session.board, side)
                );
            }

            // end states
            GameState::PlayerWin => {
                println!("{} wins!", side_label(mode, Piece::Player));
                if !ask_restart(&stdin)? {
                    break;
                }
                session.reset(first);
            }
            GameState::AiWin => {
                println!("{} wins!", side_label(mode, Piece::Ai));
                if !ask_restart(&stdin)? {
                    break;
                }
                session.reset(first);
            }
            GameState::Draw => {
                println!("Draw!");
                if !ask_restart(&stdin)? {
                    break;
                }
                session.reset(first);
            }
        }
    }
    Ok(())
}
