use eyre::{Context, Result};
use hexcube::{CubeState, RenderMode, parse_sequence};
use itertools::Itertools;

/// Labeled cube used by the demonstration, as `(color, label)` pairs in
/// construction order.
#[rustfmt::skip]
pub(crate) const DEMO_LAYOUT: [(&str, &str); 54] = [
    ("O", "22"), ("R", "5b"), ("G", "61"), ("O", "50"), ("O", "76"), ("B", "6d"),
    ("B", "77"), ("G", "2a"), ("O", "63"), ("G", "2a"), ("B", "6d"), ("R", "74"),
    ("W", "48"), ("Y", "6d"), ("G", "6f"), ("Y", "7c"), ("W", "7a"), ("W", "3a"),
    ("Y", "70"), ("W", "7c"), ("W", "72"), ("Y", "34"), ("G", "77"), ("O", "7a"),
    ("B", "78"), ("B", "78"), ("R", "7e"), ("B", "76"), ("Y", "76"), ("R", "3f"),
    ("Y", "6a"), ("W", "78"), ("R", "7e"), ("Y", "6f"), ("O", "6a"), ("W", "3a"),
    ("R", "77"), ("R", "61"), ("G", "2b"), ("B", "75"), ("R", "77"), ("G", "58"),
    ("B", "6a"), ("W", "76"), ("O", "79"), ("O", "6a"), ("O", "50"), ("G", "66"),
    ("R", "3f"), ("B", "75"), ("G", "68"), ("Y", "6b"), ("Y", "75"), ("W", "73"),
];

/// Sequence that solves [`DEMO_LAYOUT`].
pub(crate) const DEMO_SOLUTION: &str =
    "R2 U F' U B2 R F' U' D2 R' U L2 U2 D' B2 R2 U' R2 F2 R2";

/// Builds the demonstration cube.
pub(crate) fn demo_cube() -> Result<CubeState<&'static str>> {
    CubeState::from_symbols(DEMO_LAYOUT).wrap_err("error building demo cube")
}

/// Renders the demonstration cube, applies [`DEMO_SOLUTION`], and renders it
/// again. If `mode` is `None`, each state is rendered by color and then by
/// label.
pub(crate) fn run(mode: Option<RenderMode>) -> Result<String> {
    let modes = match mode {
        Some(mode) => vec![mode],
        None => vec![RenderMode::Color, RenderMode::Label],
    };
    let render_all = |cube: &CubeState<&str>| {
        modes.iter().map(|&mode| cube.render(mode)).join("\n")
    };

    let mut cube = demo_cube()?;
    let mut out = render_all(&cube);

    let solution = parse_sequence(DEMO_SOLUTION).wrap_err("error parsing demo solution")?;
    log::info!("applying {}-move demo solution", solution.len());
    cube.apply_sequence(solution);

    out += "\n";
    out += &render_all(&cube);
    if !cube.is_solved() {
        log::warn!("demo cube is not solved");
    }
    Ok(out)
}
