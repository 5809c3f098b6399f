mod agents;
mod board;
mod draughts_errors;
mod game;
mod game_state;
mod moves;
mod pieces;
mod positions;

use agents::*;
use game::*;
use std::io::{stdout, Write};
use text_io::read;

// ---------------------------------------------
// Main
// ---------------------------------------------

// Delay before the computer answers, for better visibility of its moves.
const COMPUTER_RESPONSE_MILLIS: u64 = 500;

fn main() {
    let computer = SlowAgent::new(RandomAgent::new(), COMPUTER_RESPONSE_MILLIS);
    let mut game = Game::new(HumanAgent::new(), computer);

    loop {
        match game.play() {
            Ok(outcome) => {
                println!("{}", game.state());
                println!("{}", outcome);
            }
            Err(e) => {
                println!("{}", e);
                return;
            }
        }

        print!("Play again? (y/n): ");
        stdout().flush().unwrap();
        let answer: String = read!();
        if !answer.eq_ignore_ascii_case("y") {
            return;
        }
        game.reset();
    }
}
