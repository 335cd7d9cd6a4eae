//! Subtraction-game Nim: players alternate removing 1–3 chips from a shared
//! pile, and whoever cannot move (the pile is empty on their turn) loses.
//! The optimal strategy is to always leave a multiple of 4 chips.

use std::fmt;

use rmcts::{Game, Player, Rng};

#[derive(Clone)]
pub struct NimGame {
    chips: i32,
    player_to_move: Player,
}

impl NimGame {
    pub fn new(chips: i32) -> Self {
        NimGame {
            chips,
            player_to_move: 1,
        }
    }
}

impl fmt::Display for NimGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NimGame(chips={})", self.chips)
    }
}

impl Game for NimGame {
    type Move = i32;
    const NO_MOVE: i32 = -1;

    fn legal_moves(&self) -> Vec<i32> {
        if self.chips == 0 {
            vec![]
        } else {
            (1..=self.chips.min(3)).collect()
        }
    }

    fn apply(&mut self, mv: i32) {
        self.chips -= mv;
        self.player_to_move = 3 - self.player_to_move;
    }

    fn apply_random<R: Rng>(&mut self, rng: &mut R) {
        let moves = self.legal_moves();
        let idx = rng.gen_range(0..moves.len());
        self.apply(moves[idx]);
    }

    /// The player who is to move when the pile runs dry has no move left and
    /// loses, so `perspective` lost iff it's the one stuck on the empty pile.
    fn result(&self, perspective: Player) -> f64 {
        if self.player_to_move == perspective {
            1.0
        } else {
            0.0
        }
    }

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }
}
