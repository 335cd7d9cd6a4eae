use std::fmt::Display;
use std::io::{self, Write};
use std::ops::Range;

use rmcts::{compute_move, ComputeOptions, DefaultRng, Game, Player, Rng};

const PASS: i32 = -1;

#[derive(Clone)]
struct KalahaState {
    pits: [u32; 14],
    player_to_move: Player,
    force_pass: bool,
    finished: bool,
}

impl Default for KalahaState {
    fn default() -> Self {
        let mut pits = [4u32; 14];
        pits[6] = 0;
        pits[13] = 0;
        KalahaState {
            pits,
            player_to_move: 1,
            force_pass: false,
            finished: false,
        }
    }
}

impl KalahaState {
    fn pit_range(player: Player) -> Range<usize> {
        if player == 1 {
            0..6
        } else {
            7..13
        }
    }

    fn store_of(player: Player) -> usize {
        if player == 1 {
            6
        } else {
            13
        }
    }

    fn collect_remaining_if_over(&mut self) {
        let p1_empty = Self::pit_range(1).all(|i| self.pits[i] == 0);
        let p2_empty = Self::pit_range(2).all(|i| self.pits[i] == 0);
        if p1_empty || p2_empty {
            for i in Self::pit_range(1) {
                self.pits[Self::store_of(1)] += self.pits[i];
                self.pits[i] = 0;
            }
            for i in Self::pit_range(2) {
                self.pits[Self::store_of(2)] += self.pits[i];
                self.pits[i] = 0;
            }
            self.finished = true;
        }
    }
}

impl Display for KalahaState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  {:?}", &self.pits[7..13].iter().rev().collect::<Vec<_>>())?;
        writeln!(f, "{:>2}{:>24}{:>2}", self.pits[13], "", self.pits[6])?;
        write!(f, "  {:?}", &self.pits[0..6])
    }
}

impl Game for KalahaState {
    type Move = i32;
    const NO_MOVE: i32 = -2;

    fn legal_moves(&self) -> Vec<i32> {
        if self.finished {
            return vec![];
        }
        if self.force_pass {
            return vec![PASS];
        }
        Self::pit_range(self.player_to_move)
            .filter(|&i| self.pits[i] > 0)
            .map(|i| i as i32)
            .collect()
    }

    fn apply(&mut self, mv: i32) {
        if mv == PASS {
            self.force_pass = false;
            self.player_to_move = 3 - self.player_to_move;
            return;
        }

        let stones = self.pits[mv as usize];
        self.pits[mv as usize] = 0;
        let opponent_store = Self::store_of(3 - self.player_to_move);

        let mut idx = mv as usize;
        for _ in 0..stones {
            loop {
                idx = (idx + 1) % 14;
                if idx != opponent_store {
                    break;
                }
            }
            self.pits[idx] += 1;
        }

        let own_store = Self::store_of(self.player_to_move);
        let mut extra_turn = false;
        if idx == own_store {
            extra_turn = true;
        } else if Self::pit_range(self.player_to_move).contains(&idx) && self.pits[idx] == 1 {
            let opposite = 12 - idx;
            let captured = self.pits[idx] + self.pits[opposite];
            self.pits[idx] = 0;
            self.pits[opposite] = 0;
            self.pits[own_store] += captured;
        }

        self.collect_remaining_if_over();

        self.player_to_move = 3 - self.player_to_move;
        if extra_turn && !self.finished {
            self.force_pass = true;
        }
    }

    fn apply_random<R: Rng>(&mut self, rng: &mut R) {
        let moves = self.legal_moves();
        let idx = rng.gen_range(0..moves.len());
        self.apply(moves[idx]);
    }

    fn result(&self, perspective: Player) -> f64 {
        let s1 = self.pits[6];
        let s2 = self.pits[13];
        if s1 == s2 {
            return 0.5;
        }
        let winner: Player = if s1 > s2 { 1 } else { 2 };
        if winner == perspective {
            0.0
        } else {
            1.0
        }
    }

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }
}

fn readline(prompt: &str) -> io::Result<String> {
    print!("{prompt} ");
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer)
}

fn get_pit_from_player(legal: &[i32]) -> i32 {
    loop {
        if let Ok(s) = readline(&format!("Choose a pit {legal:?}:")) {
            if let Ok(val) = s.trim().parse::<i32>() {
                if legal.contains(&val) {
                    return val;
                }
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut game = KalahaState::default();
    let options = ComputeOptions::default()
        .max_iterations(-1)
        .max_time(1.0)
        .verbose(true);

    loop {
        println!("{game}");
        if game.terminal() {
            println!("Game over. Store 1: {}, store 2: {}", game.pits[6], game.pits[13]);
            break;
        }

        if game.player_to_move() == 1 {
            let legal = game.legal_moves();
            if legal == [PASS] {
                println!("You get an extra turn, passing to yourself.");
                game.apply(PASS);
                continue;
            }
            let mv = get_pit_from_player(&legal);
            game.apply(mv);
        } else {
            let legal = game.legal_moves();
            if legal == [PASS] {
                println!("Computer gets an extra turn.");
                game.apply(PASS);
                continue;
            }
            let mv = compute_move::<KalahaState, DefaultRng>(game.clone(), &options)
                .expect("search over a non-terminal state cannot fail");
            println!("Computer sows from pit {mv}.");
            game.apply(mv);
        }
    }
}
