use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use twenty48::engine::{self, Board, GameState, Move, DEFAULT_SIZE};

#[derive(Debug, Parser)]
#[command(name = "twenty48", about = "Play 2048 in the terminal")]
struct Args {
    /// Board side length
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed for the tile spawner; omit for a fresh game every run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("starting {0}x{0} game", args.size);

    let (mut board, mut state) = engine::new_game(args.size, &mut rng);
    render(&board, state);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let direction = match line.trim().to_ascii_lowercase().as_str() {
            "w" | "up" => Some(Move::Up),
            "s" | "down" => Some(Move::Down),
            "a" | "left" => Some(Move::Left),
            "d" | "right" => Some(Move::Right),
            "n" | "new" => {
                info!("starting a new game");
                let fresh = engine::new_game(args.size, &mut rng);
                board = fresh.0;
                state = fresh.1;
                render(&board, state);
                continue;
            }
            "q" | "quit" => break,
            _ => None,
        };
        match direction {
            Some(dir) => {
                let (next, next_state) = board.make_move(dir, state, &mut rng);
                board = next;
                state = next_state;
                render(&board, state);
            }
            None => {
                println!("controls: w/a/s/d or up/left/down/right to move, n for a new game, q to quit");
            }
        }
    }

    info!("final board: highest tile {}", board.highest_tile());
    Ok(())
}

fn render(board: &Board, state: GameState) {
    println!("{board}");
    match state {
        GameState::InProgress => println!("Playing..."),
        GameState::Won => println!("WON - press n for a new game or q to quit"),
        GameState::Lost => println!("LOST - press n for a new game or q to quit"),
    }
}
