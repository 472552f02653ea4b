use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use spectrum::Spectrum;

use crate::cli::Args;

mod cli;
mod logger;
mod png;
mod render;

fn main() -> Result<()> {
    let args = Args::parse();

    logger::initialize_logger(args.log_level).context("could not install the logger")?;

    let mut spectrum = Spectrum::new(args.start, args.end, args.mode);
    let colors = spectrum
        .generate_from_input(&args.count)
        .context("could not generate colors")?;
    info!(
        "generated {} colors from {} to {} ({})",
        colors.len(),
        args.start.to_hex(),
        args.end.to_hex(),
        args.mode
    );

    if let Some(path) = &args.png {
        png::write_strip(spectrum.colors()?, args.width, args.height, path)?;
        info!("wrote the spectrum strip to {}", path.display());
    }

    if let Some(number) = args.copy {
        let index = number
            .checked_sub(1)
            .context("colors are numbered starting at 1")?;
        println!("{}", spectrum.copy(index, args.format)?);
        return Ok(());
    }

    if args.copy_all {
        println!("{}", spectrum.copy_all()?);
        return Ok(());
    }

    let colors = spectrum.colors()?;
    println!(
        "{}",
        render::render_strip(colors, render::table_width(args.columns))
    );
    println!("{}", render::render_table(colors, args.columns));

    Ok(())
}
