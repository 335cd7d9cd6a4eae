//! The toy game from the original project's own test suite: player 1 picks
//! between an immediate draw and handing the turn to player 2, who then
//! picks among five outcomes, `X` of which make player 1 the winner.

use std::fmt;

use rmcts::{Game, Player, Rng};

#[derive(Clone)]
pub struct TestGame {
    player_to_move: Player,
    /// `None` while the game is ongoing, `Some(0)` for a draw, `Some(1)` or
    /// `Some(2)` once a player has won.
    winner: Option<u8>,
    x: i32,
}

impl TestGame {
    pub fn new(x: i32) -> Self {
        TestGame {
            player_to_move: 1,
            winner: None,
            x,
        }
    }
}

impl fmt::Display for TestGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestGame(winner={:?})", self.winner)
    }
}

impl Game for TestGame {
    type Move = i32;
    const NO_MOVE: i32 = -1;

    fn legal_moves(&self) -> Vec<i32> {
        if self.winner.is_some() {
            vec![]
        } else if self.player_to_move == 1 {
            vec![1, 2]
        } else {
            vec![1, 2, 3, 4, 5]
        }
    }

    fn apply(&mut self, mv: i32) {
        if self.player_to_move == 1 {
            if mv == 1 {
                self.winner = Some(0);
            }
            // mv == 2: nothing happens but the turn passes.
        } else if mv == 1 {
            self.winner = Some(1);
        } else {
            self.winner = Some(self.x as u8);
        }
        self.player_to_move = 3 - self.player_to_move;
    }

    fn apply_random<R: Rng>(&mut self, rng: &mut R) {
        let moves = self.legal_moves();
        let idx = rng.gen_range(0..moves.len());
        self.apply(moves[idx]);
    }

    fn result(&self, perspective: Player) -> f64 {
        match self.winner {
            Some(0) => 0.5,
            Some(w) if w == perspective => 0.0,
            Some(_) => 1.0,
            None => panic!("result() called on a non-terminal TestGame"),
        }
    }

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }
}
