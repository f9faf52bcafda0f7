use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use sweeper_core::{Board, CellCount, Coord, FieldState};

use command::{Command, CommandError};
use feedback::TerminalCues;
use settings::Settings;

mod command;
mod feedback;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// TOML file with game settings, flags below take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of columns
    #[arg(long)]
    width: Option<Coord>,

    /// Number of rows
    #[arg(long)]
    height: Option<Coord>,

    /// Number of mines for the first game
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start with sound cues muted
    #[arg(long)]
    mute: bool,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(mines) = self.mines {
            settings.mines = mines;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings.mute |= self.mute;
        Ok(settings)
    }
}

fn init_logging(verbose: &Verbosity<WarnLevel>) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let settings = args.settings()?;
    let config = settings.game_config();
    config.validate().context("Invalid game settings")?;
    log::debug!("config: {config:?}, seed: {:?}", settings.seed);

    let mut cues = TerminalCues::new(io::stdout());
    cues.set_muted(settings.mute);
    let mut board = Board::with_feedback(config, settings.seed, cues);

    println!("{}", command::HELP);
    play(&mut board, io::stdin().lock())
}

fn play<W: Write>(board: &mut Board<TerminalCues<W>>, input: impl BufRead) -> anyhow::Result<()> {
    let mut shown = None;
    let mut lines = input.lines();

    loop {
        if shown != Some(board.revision()) {
            print!("{}", render::board(board));
            println!("{}", render::status(board));
            if board.is_finished() {
                println!("{}? (r)", render::restart_label(board.phase()));
            }
            shown = Some(board.revision());
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        log::debug!("command: {command:?}");

        match command {
            Command::Uncover(coords) => match board.uncover(coords) {
                FieldState::ExplodedMine => println!("You hit a mine!"),
                FieldState::OutOfBounds if !board.is_finished() => {
                    println!("{coords:?} is not on the board")
                }
                _ => {}
            },
            Command::Flag(coords) => {
                if board.flag_mine(coords) {
                    println!("Flag placed, {} left", board.mines_left());
                }
            }
            Command::Restart => board.restart(),
            Command::Mute => {
                let muted = !board.feedback().is_muted();
                board.feedback_mut().set_muted(muted);
                println!("Sound {}", if muted { "off" } else { "on" });
            }
            Command::Dump => {
                println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
            }
            Command::Help => println!("{}", command::HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::Phase;

    #[test]
    fn scripted_game_is_won() {
        let mut board = Board::from_mine_coords(4, 4, &[(0, 0)])
            .unwrap()
            .replace_feedback(TerminalCues::new(Vec::new()));
        let script = "bogus\n\nf 0 0\nu 9 9\nu 3 3\nu 1 1\nq\nu 0 0\n";

        play(&mut board, script.as_bytes()).unwrap();

        assert_eq!(board.phase(), Phase::Won);
        assert_eq!(board.flag_count(), 1);
        assert_eq!(board.cell_at((0, 0)), FieldState::FlaggedMine);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from(["sweeper", "--width", "20", "-m", "9", "--mute"]);
        let settings = args.settings().unwrap();

        assert_eq!(settings.game_config(), sweeper_core::GameConfig::new(20, 15, 9));
        assert!(settings.mute);
        assert_eq!(settings.seed, None);
    }
}
