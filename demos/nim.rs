use std::fmt::Display;
use std::io::{self, Write};

use rmcts::{compute_move, ComputeOptions, DefaultRng, Game, Player, Rng};

const STARTING_CHIPS: i32 = 21;

#[derive(Clone)]
struct NimState {
    chips: i32,
    player_to_move: Player,
}

impl Default for NimState {
    fn default() -> Self {
        NimState {
            chips: STARTING_CHIPS,
            player_to_move: 1,
        }
    }
}

impl Display for NimState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} chips remaining", self.chips)
    }
}

impl Game for NimState {
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

fn readline(prompt: &str) -> io::Result<String> {
    print!("{prompt} ");
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer)
}

fn get_num_from_player(max: i32) -> i32 {
    let prompt = format!("Take 1 to {max} chips:");
    loop {
        if let Ok(s) = readline(&prompt) {
            if let Ok(val) = s.trim().parse::<i32>() {
                if (1..=max).contains(&val) {
                    return val;
                }
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut game = NimState::default();
    let options = ComputeOptions::default()
        .max_iterations(-1)
        .max_time(1.0)
        .verbose(true);

    loop {
        println!("{game}");

        let max = game.chips.min(3);
        let player_move = get_num_from_player(max);
        game.apply(player_move);
        println!("You take {player_move}. {game}");

        if game.chips == 0 {
            println!("Computer wins. You took the last chip.");
            break;
        }

        let computer_move = compute_move::<NimState, DefaultRng>(game.clone(), &options)
            .expect("search over a non-terminal state cannot fail");
        game.apply(computer_move);
        println!("Computer takes {computer_move}. {game}");

        if game.chips == 0 {
            println!("You win. The computer took the last chip.");
            break;
        }
    }
}
