use crate::draughts_errors::*;
use crate::game_state::*;
use crate::moves::Move;
use crate::pieces::Side;
use std::thread;
use std::time::Duration;

/// An agent is an object that can play draughts by choosing moves
/// appropriate to a current game state. It applies its chosen move to the
/// state before returning it.
pub trait Agent {
    fn play_move(&mut self, state: &mut GameState) -> DraughtsResult<Move>;
}

// Pause after the no-moves notice so it stays readable before play
// continues.
const NO_MOVES_PAUSE_MILLIS: u64 = 1000;

pub struct Game<A1: Agent, A2: Agent> {
    player: A1,
    opponent: A2,
    state: GameState,
}

impl<A1: Agent, A2: Agent> Game<A1, A2> {
    pub fn new(player: A1, opponent: A2) -> Game<A1, A2> {
        Game::from_state(player, opponent, GameState::standard_setup())
    }

    /// Continues a game from an arbitrary state.
    pub fn from_state(player: A1, opponent: A2, state: GameState) -> Game<A1, A2> {
        Game {
            player: player,
            opponent: opponent,
            state: state,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Runs turns until one side has no pieces left, then reports the
    /// outcome. A side that cannot move passes its turn; the game only
    /// ends through captures.
    pub fn play(&mut self) -> DraughtsResult<Outcome> {
        loop {
            if let Some(outcome) = self.state.outcome() {
                return Ok(outcome);
            }

            let active = self.state.active_side();
            if self.state.gen_moves(active).is_empty() {
                println!("No Moves Available!");
                self.state.skip_turn();
                thread::sleep(Duration::from_millis(NO_MOVES_PAUSE_MILLIS));
                continue;
            }

            match active {
                Side::Player => {
                    println!("{}", self.state);
                    println!("Player's Turn");
                    self.player.play_move(&mut self.state)?;
                }
                Side::Opponent => {
                    let mv = self.opponent.play_move(&mut self.state)?;
                    println!("Computer plays {}", mv);
                }
            }
        }
    }
}
