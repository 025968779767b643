// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use anyhow::{bail, Context, Result};
use clap::{App, Arg, ArgMatches};
use image::{GrayImage, Luma};
use itertools::{Itertools, MinMaxResult};
use seamcarve::imageio::{from_dynamic, to_dynamic};
use seamcarve::{Axis, Color, EnergyMap, SeamCarver, Strategy};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Stretch the energy map across the full eight-bit range so it can be
/// looked at.
fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (width, height) = energy.dimensions();
    let (low, high) = match energy.as_slice().iter().minmax() {
        MinMaxResult::NoElements => (0.0, 0.0),
        MinMaxResult::OneElement(e) => (*e, *e),
        MinMaxResult::MinMax(l, h) => (*l, *h),
    };
    let range = high - low;
    GrayImage::from_fn(width as u32, height as u32, |x, y| {
        let e = energy[(x as usize, y as usize)];
        let v = if range > 0.0 {
            ((e - low) / range * 255.0).round()
        } else {
            0.0
        };
        Luma([v as u8])
    })
}

fn dimension(matches: &ArgMatches, name: &str, default: usize) -> Result<usize> {
    match matches.value_of(name) {
        Some(v) => v
            .parse()
            .with_context(|| format!("--{} must be a whole number, got {:?}", name, v)),
        None => Ok(default),
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let input = Path::new(matches.value_of("input").unwrap_or_default());
    let output = Path::new(matches.value_of("output").unwrap_or_default());

    let decoded =
        image::open(input).with_context(|| format!("could not load {}", input.display()))?;
    let image = from_dynamic(&decoded)?;
    let (width, height) = image.dimensions();
    info!(width, height, "loaded {}", input.display());

    let strategy = if matches.is_present("greedy") {
        Strategy::Greedy
    } else {
        Strategy::Optimal
    };
    let mut carver = SeamCarver::new(image).with_strategy(strategy);

    if let Some(path) = matches.value_of("energy") {
        let energy = carver.energy()?;
        energy_to_image(energy.map())
            .save(path)
            .with_context(|| format!("could not write energy map to {}", path))?;
        info!("wrote energy map to {}", path);
    }

    if let Some(path) = matches.value_of("preview") {
        let (axis, color) = match matches.value_of("preview-axis") {
            Some("horizontal") => (Axis::Horizontal, Color::GREEN),
            _ => (Axis::Vertical, Color::RED),
        };
        let energy = carver.energy()?;
        let seam = carver.find_seam(&energy, axis)?;
        to_dynamic(&carver.visualize(&seam, color)?)?
            .save(path)
            .with_context(|| format!("could not write seam preview to {}", path))?;
        info!("wrote {} seam preview to {}", axis, path);
    }

    let target_width = dimension(matches, "width", width)?;
    let target_height = dimension(matches, "height", height)?;
    if target_width == 0 || target_height == 0 {
        bail!("target size {}x{} has no pixels", target_width, target_height);
    }
    carver.carve(target_width, target_height)?;

    let (vertical, horizontal) = carver.seams_removed();
    info!(vertical, horizontal, strategy = strategy.name(), "carving done");

    to_dynamic(carver.image())?
        .save(output)
        .with_context(|| format!("could not write {}", output.display()))?;
    Ok(())
}

fn main() {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .value_name("PIXELS")
                .help("Target width (defaults to the input width)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .value_name("PIXELS")
                .help("Target height (defaults to the input height)"),
        )
        .arg(
            Arg::with_name("greedy")
                .long("greedy")
                .help("Use the fast greedy seam search instead of the optimal one"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .takes_value(true)
                .value_name("FILE")
                .help("Also write the input's energy map as a grayscale image"),
        )
        .arg(
            Arg::with_name("preview")
                .long("preview")
                .takes_value(true)
                .value_name("FILE")
                .help("Also write the input with its next seam highlighted"),
        )
        .arg(
            Arg::with_name("preview-axis")
                .long("preview-axis")
                .takes_value(true)
                .possible_values(&["vertical", "horizontal"])
                .default_value("vertical")
                .help("Which seam --preview shows"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for more"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("seamcarve: {:#}", err);
        std::process::exit(1);
    }
}
