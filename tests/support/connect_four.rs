//! Connect Four: drop a disc into a column, first to connect four in any
//! direction wins, a full board with no winner is a draw.

use std::fmt;

use rmcts::{Game, Player, Rng};

const WIDTH: usize = 7;
const HEIGHT: usize = 6;

#[derive(Clone)]
pub struct ConnectFourState {
    board: Vec<u8>,
    heights: [usize; WIDTH],
    player_to_move: Player,
    last_move: Option<(usize, usize)>,
    winner: Option<Player>,
}

impl ConnectFourState {
    pub fn new() -> Self {
        ConnectFourState {
            board: vec![0; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            player_to_move: 1,
            last_move: None,
            winner: None,
        }
    }

    fn get(&self, row: usize, col: usize) -> u8 {
        self.board[row * WIDTH + col]
    }

    fn count_direction(&self, row: usize, col: usize, drow: isize, dcol: isize, player: u8) -> usize {
        let mut count = 0;
        let mut r = row as isize + drow;
        let mut c = col as isize + dcol;
        while r >= 0 && r < HEIGHT as isize && c >= 0 && c < WIDTH as isize {
            if self.get(r as usize, c as usize) == player {
                count += 1;
                r += drow;
                c += dcol;
            } else {
                break;
            }
        }
        count
    }

    fn connects_four(&self, row: usize, col: usize, player: u8) -> bool {
        let directions: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        directions.iter().any(|&(dr, dc)| {
            1 + self.count_direction(row, col, dr, dc, player)
                + self.count_direction(row, col, -dr, -dc, player)
                >= 4
        })
    }
}

impl Default for ConnectFourState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectFourState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConnectFourState(winner={:?})", self.winner)
    }
}

impl Game for ConnectFourState {
    type Move = i32;
    const NO_MOVE: i32 = -1;

    fn legal_moves(&self) -> Vec<i32> {
        if self.winner.is_some() {
            return vec![];
        }
        (0..WIDTH as i32)
            .filter(|&col| self.heights[col as usize] < HEIGHT)
            .collect()
    }

    fn apply(&mut self, mv: i32) {
        let col = mv as usize;
        let row = self.heights[col];
        self.board[row * WIDTH + col] = self.player_to_move;
        self.heights[col] += 1;
        self.last_move = Some((row, col));

        if self.connects_four(row, col, self.player_to_move) {
            self.winner = Some(self.player_to_move);
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
            Some(w) if w == perspective => 0.0,
            Some(_) => 1.0,
            None => 0.5,
        }
    }

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }
}
