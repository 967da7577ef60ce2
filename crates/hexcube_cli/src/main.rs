//! Command-line interface for the labeled cube engine.

mod cli;
mod demo;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
