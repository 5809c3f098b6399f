/// Differing kinds of agents that can play the game
use crate::draughts_errors::*;
use crate::game::Agent;
use crate::game_state::GameState;
use crate::moves::Move;
use crate::positions::Position;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::{stdout, Write};
use text_io::read;

/// Reads moves from stdin in algebraic notation ("a3", "b4"). Keeps
/// prompting until the entered move is accepted, so a typo or an illegal
/// square only cancels the current attempt.
pub struct HumanAgent {}

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent {}
    }

    fn read_square(prompt: &str) -> Option<Position> {
        print!("{}", prompt);
        stdout().flush().unwrap();
        let raw: String = read!();
        match raw.parse() {
            Ok(pos) => Some(pos),
            Err(e) => {
                println!("{}", e);
                None
            }
        }
    }
}

impl Agent for HumanAgent {
    fn play_move(&mut self, g: &mut GameState) -> DraughtsResult<Move> {
        loop {
            let start = match HumanAgent::read_square("From: ") {
                Some(pos) => pos,
                None => continue,
            };

            let targets = g.legal_targets(start);
            if targets.is_empty() {
                println!("No moves from {}.", start);
                continue;
            }
            let shown: Vec<String> = targets.iter().map(|p| p.to_string()).collect();
            println!("Moves: {}", shown.join(" "));

            let end = match HumanAgent::read_square("To: ") {
                Some(pos) => pos,
                None => continue,
            };

            match g.submit_player_move(start, end) {
                Ok(m) => return Ok(m),
                Err(e) => println!("{}", e),
            }
        }
    }
}

/// Picks a random piece of the side to move and plays a random jump of it
/// if it has one, a random simple move otherwise. Pieces without moves are
/// dropped from a fresh candidate list and the draw repeats.
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seeded variant with reproducible choices.
    pub fn from_seed(seed: u64) -> Self {
        RandomAgent {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn play_move(&mut self, state: &mut GameState) -> DraughtsResult<Move> {
        let mut candidates = state.pieces(state.active_side());
        loop {
            let chosen = match candidates.choose(&mut self.rng) {
                Some(&pos) => pos,
                None => return Err("No playable moves left".into()),
            };

            let (jumps, steps): (Vec<Move>, Vec<Move>) = state
                .piece_moves(chosen)
                .into_iter()
                .partition(|m| m.is_capture());

            let pick = if !jumps.is_empty() {
                jumps.choose(&mut self.rng).cloned()
            } else {
                steps.choose(&mut self.rng).cloned()
            };

            match pick {
                Some(m) => {
                    state.make_move(&m);
                    return Ok(m);
                }
                None => {
                    candidates = candidates.into_iter().filter(|&p| p != chosen).collect();
                }
            }
        }
    }
}

/// Wraps another agent and delays its reply, so the computer's moves stay
/// visible at human reading speed.
pub struct SlowAgent<A: Agent> {
    inner: A,
    response_time_millis: u64,
}

impl<A: Agent> SlowAgent<A> {
    pub fn new(agent: A, response_time_millis: u64) -> Self {
        SlowAgent {
            inner: agent,
            response_time_millis: response_time_millis,
        }
    }
}

impl<A: Agent> Agent for SlowAgent<A> {
    fn play_move(&mut self, state: &mut GameState) -> DraughtsResult<Move> {
        std::thread::sleep(std::time::Duration::from_millis(self.response_time_millis));
        self.inner.play_move(state)
    }
}
