use crate::{
    charset::{CharacterClasses, CharacterPool},
    config::{Config, SpeedFactor},
    display::FrameWriter,
    scramble::{Scramble, Scrambler},
};
use anyhow::Context;
use clap::Parser;
use std::{
    ffi::OsString,
    io::{self, IsTerminal, Write},
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod charset;
mod config;
mod display;
mod input;
mod phrase;
mod scramble;

/// Unscramble a phrase into place, one character at a time.
///
/// The phrase is read from standard input when something is piped in, otherwise from the first
/// argument. With neither, a built-in phrase is used.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about)]
struct Cli {
    /// The phrase to unscramble.
    phrase: Option<String>,

    /// Include alpha characters.
    #[clap(short = 'a')]
    alpha: bool,

    /// Include numbers.
    #[clap(short = 'n')]
    numbers: bool,

    /// Include special characters.
    #[clap(short = 's')]
    special: bool,

    /// Include all characters, will override the alpha, number, and special flags.
    #[clap(short = 'A')]
    all: bool,

    /// Custom characters to include, will override the all, alpha, number and special flags.
    #[clap(short = 'c', value_name = "CHARS")]
    custom: Option<String>,

    /// Speed factor, in frames per second. Also accepted as `-sf` or `--sf`.
    #[clap(
        long = "speed-factor",
        value_name = "N",
        env = "SCRAM_SPEED_FACTOR",
        default_value_t = SpeedFactor::default()
    )]
    speed_factor: SpeedFactor,

    /// Seed the random number generator to get the same animation every run.
    #[clap(long)]
    seed: Option<u64>,

    /// Leave the phrase empty instead of picking a built-in one when none is given.
    #[clap(long)]
    no_default_phrase: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            speed_factor: self.speed_factor,
            classes: CharacterClasses {
                alpha: self.alpha,
                numeric: self.numbers,
                special: self.special,
                all: self.all,
                custom: self.custom.clone(),
            },
            default_phrase: !self.no_default_phrase,
            seed: self.seed,
        }
    }
}

/// Rewrite the legacy `-sf` flag, with one or two dashes, into `--speed-factor` so clap can parse it.
///
/// Anything after a `--` separator is a positional argument and is left alone.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .map(|arg| {
            if positional_only {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    positional_only = true;
                    None
                }
                Some("-sf" | "--sf") => Some(OsString::from("--speed-factor")),
                Some(other) => other
                    .strip_prefix("-sf=")
                    .or_else(|| other.strip_prefix("--sf="))
                    .map(|value| OsString::from(format!("--speed-factor={value}"))),
                None => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("SCRAM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_ansi(io::stderr().is_terminal()))
        .with(env_filter)
        .init();
}

/// Frames that can contain a line break can't be overwritten with `\r`, so those redraw the screen.
fn frame_writer<W: Write>(output: W, pool: &CharacterPool) -> FrameWriter<W> {
    FrameWriter::new(output, pool.has_line_breaks())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let mut rng = match config.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let phrase = phrase::resolve(input::read_piped_stdin(), cli.phrase.as_deref(), config.default_phrase, &mut rng);
    let pool = CharacterPool::build(&phrase, &config.classes);
    tracing::debug!(
        phrase_len = phrase.len(),
        pool_len = pool.len(),
        classes = %config.classes.describe(),
        speed_factor = %config.speed_factor,
        "starting scramble"
    );

    let mut writer = frame_writer(io::stdout().lock(), &pool);
    let scrambler = Scrambler::new(phrase, pool, rng)?;
    let mut frames = Scramble::new(scrambler, config.speed_factor.tick());

    writer.clear_screen().context("failed to clear the screen")?;
    for frame in frames.by_ref() {
        writer.show(&frame).context("failed to draw frame")?;
    }
    writer.finish().context("failed to finish output")?;

    let scrambler = frames.scrambler();
    tracing::debug!(steps = scrambler.steps(), locked = scrambler.locked(), "scramble finished");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_tracing();
    run(cli)
}
