use std::io::Read;

use eyre::{Context, Result};
use hexcube::{
    CubeState, DEFAULT_SCRAMBLE_LENGTH, Move, RenderMode, SOLVED_LAYOUT, ScrambleParams,
    format_sequence, invert_sequence, parse_facelet_list, parse_sequence,
};
use serde::Serialize;

/// Labeled 3x3x3 cube command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Render a labeled cube, apply a 20-move solution, and render it again.
    Demo {
        /// Render only by `color` or only by `label`.
        #[arg(short, long)]
        mode: Option<RenderMode>,
    },
    /// Apply a move sequence and print the resulting cube.
    Apply {
        /// Moves to apply, such as `R U2 F'`.
        #[arg(required = true)]
        moves: Vec<String>,

        /// Layout file of 54 `<color>:<label>` entries to start from, use '-'
        /// for stdin. Defaults to a solved cube.
        #[arg(short, long, value_parser)]
        layout: Option<clio::Input>,

        /// Print colors (`color`) or labels (`label`).
        #[arg(short, long, default_value_t)]
        mode: RenderMode,

        /// Print the cube as JSON instead of rendering it.
        #[arg(long)]
        json: bool,
    },
    /// Generate a scramble and print the scrambled cube.
    Scramble {
        /// Random seed. Defaults to a random value.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of moves.
        #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: u32,

        /// Print colors (`color`) or labels (`label`).
        #[arg(short, long, default_value_t)]
        mode: RenderMode,
    },
    /// Print the sequence that undoes a move sequence.
    Invert {
        /// Moves to invert, such as `R U2 F'`.
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Demo { mode } => {
            println!("{}", crate::demo::run(mode)?);
            Ok(())
        }

        Subcommand::Apply {
            moves,
            layout,
            mode,
            json,
        } => {
            let moves = parse_moves(&moves)?;
            let mut cube = match layout {
                Some(input) => read_layout(input)?,
                None => solved_with_string_labels()?,
            };
            cube.apply_sequence(moves);

            if json {
                write_json_output(&cube)
            } else {
                print!("{}", cube.render(mode));
                Ok(())
            }
        }

        Subcommand::Scramble { seed, length, mode } => {
            let params = match seed {
                Some(seed) => ScrambleParams { seed, length },
                None => ScrambleParams::new(length),
            };
            let scrambled = CubeState::scrambled(params);
            println!("seed: {}", scrambled.params.seed);
            println!("{}", format_sequence(&scrambled.moves));
            print!("{}", scrambled.state.render(mode));
            Ok(())
        }

        Subcommand::Invert { moves } => {
            let moves = parse_moves(&moves)?;
            println!("{}", format_sequence(&invert_sequence(&moves)));
            Ok(())
        }
    }
}

/// Parses move arguments, each of which may contain several
/// whitespace-separated moves.
pub(crate) fn parse_moves(args: &[String]) -> Result<Vec<Move>> {
    parse_sequence(&args.join(" ")).wrap_err("error parsing moves")
}

fn read_layout(mut input: clio::Input) -> Result<CubeState<String>> {
    let mut buffer = String::new();
    input
        .read_to_string(&mut buffer)
        .context("error reading layout file")?;
    parse_layout(&buffer)
}

pub(crate) fn parse_layout(s: &str) -> Result<CubeState<String>> {
    let facelets = parse_facelet_list(s).wrap_err("error parsing layout")?;
    CubeState::new(facelets).wrap_err("error building cube from layout")
}

fn solved_with_string_labels() -> Result<CubeState<String>> {
    let facelets = SOLVED_LAYOUT.map(|(color, label)| (color, label.to_string()));
    CubeState::new(facelets).wrap_err("error building solved cube")
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
