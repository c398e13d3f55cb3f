use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{
    init_logging, render_board, GameController, Position, RandomOpponent, Status,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn parse_position(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let column: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row > 2 || column > 2 {
        return None;
    }
    Some(Position::new(row, column))
}

async fn ask_play_again(lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<bool> {
    println!("Play again? (y/n)");
    match lines.next_line().await? {
        Some(line) => Ok(line.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let controller = GameController::new(Box::new(RandomOpponent::new()), rng);
    let mut status_rx = controller.subscribe_status();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("{}", render_board(&controller.cells()));
        match controller.status_now() {
            Status::Won { mark, .. } => {
                if mark == controller.your_mark() {
                    println!("You win!");
                } else {
                    println!("You lose.");
                }
                if !ask_play_again(&mut lines).await? {
                    break;
                }
                controller.reset_round();
            }
            Status::Drawn => {
                println!("Draw.");
                if !ask_play_again(&mut lines).await? {
                    break;
                }
                controller.reset_round();
            }
            Status::Ongoing => {
                if controller.is_your_turn() {
                    println!("Your turn ({}). Enter: row col", controller.your_mark());
                    let Some(line) = lines.next_line().await? else {
                        break;
                    };
                    match parse_position(&line) {
                        Some(position) => {
                            if !controller.attempt_human_move(position) {
                                println!("That cell is taken.");
                            }
                        }
                        None => println!("Enter a row and column from 0 to 2, e.g. `1 2`."),
                    }
                } else {
                    println!("Opponent's turn...");
                    while !controller.is_your_turn() && controller.status_now() == Status::Ongoing
                    {
                        status_rx.changed().await?;
                    }
                }
            }
        }
    }
    Ok(())
}
