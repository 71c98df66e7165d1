use std::{
    io::{self, Read, Write},
    os::fd::AsRawFd,
    path::PathBuf,
};

use anyhow::{ensure, Result};
use clap::Parser;
use lib_2048::{
    ai::{self, random::RandomAi},
    FileStore, Game, GameConfig, MemoryStore, ScoreStore,
};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod input;
mod render;

use input::{Command, KeyDecoder};

#[derive(Parser, Debug)]
#[command(author, version, about = "Slide and merge tiles to reach 2048", long_about = None)]
struct Args {
    /// Seed for tile spawning; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// File holding the best score
    #[arg(long, default_value = "best-score.json")]
    best_score_file: PathBuf,

    /// Keep the best score in memory only
    #[arg(long)]
    no_persist: bool,

    /// Tile value that wins the game
    #[arg(long, default_value_t = 2048)]
    win_value: u32,

    /// Stop accepting moves once the game is won
    #[arg(long)]
    freeze_on_win: bool,

    /// Let a random player make every move
    #[arg(long)]
    random: bool,

    /// Turn limit for --random
    #[arg(long, default_value_t = 100_000)]
    max_steps: u32,
}

type BoxedStore = Box<dyn ScoreStore>;

fn draw<R: Rng, S: ScoreStore>(out: &mut impl Write, game: &Game<R, S>) -> io::Result<()> {
    render::draw_frame(
        out,
        game.board(),
        game.score(),
        game.best_score(),
        game.status(),
    )
}

fn redraw<R: Rng, S: ScoreStore>(out: &mut impl Write, game: &Game<R, S>) -> io::Result<()> {
    render::redraw_frame(
        out,
        game.board(),
        game.score(),
        game.best_score(),
        game.status(),
    )
}

fn play_interactive(
    out: &mut impl Write,
    input: &mut (impl AsRawFd + Read),
    game: &mut Game<ChaCha8Rng, BoxedStore>,
) -> Result<()> {
    let mut decoder = KeyDecoder::new()?;
    let _terminal = render::RawTerminal::new(&*input)?;

    let mut buf = [0u8; 128];

    draw(out, game)?;

    'session: loop {
        let len = input.read(&mut buf)?;

        if len == 0 {
            break;
        }

        for command in decoder.feed(&buf[..len]) {
            match command {
                Command::Move(direction) => {
                    game.step(direction);
                }
                Command::Restart => {
                    info!("restarting at score {}", game.score());
                    game.restart();
                }
                Command::Quit => break 'session,
            }

            redraw(out, game)?;
        }
    }

    writeln!(out, "Final score: {}", game.score())?;

    Ok(())
}

fn play_random(
    out: &mut impl Write,
    game: &mut Game<ChaCha8Rng, BoxedStore>,
    rng: ChaCha8Rng,
    max_steps: u32,
) -> Result<()> {
    let mut ai = RandomAi::new(rng);

    let report = ai::play_to_end(game, &mut ai, max_steps);
    info!("random play finished: {report:?}");

    draw(out, game)?;
    writeln!(
        out,
        "{} moves, score {}, status {:?}",
        report.steps, report.score, report.status
    )?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    ensure!(
        args.win_value >= 4 && args.win_value.is_power_of_two(),
        "win value must be a power of two of at least 4, got {}",
        args.win_value
    );

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let ai_rng = ChaCha8Rng::from_rng(&mut rng)?;

    let store: BoxedStore = if args.no_persist {
        Box::new(MemoryStore::default())
    } else {
        Box::new(FileStore::new(&args.best_score_file))
    };

    let config = GameConfig {
        win_value: args.win_value,
        freeze_on_win: args.freeze_on_win,
        ..GameConfig::default()
    };

    let mut game = Game::new(rng, store, config);
    info!("starting with best score {}", game.best_score());

    let mut stdout = io::stdout().lock();

    if args.random {
        play_random(&mut stdout, &mut game, ai_rng, args.max_steps)
    } else {
        let mut stdin = io::stdin().lock();
        play_interactive(&mut stdout, &mut stdin, &mut game)
    }
}
