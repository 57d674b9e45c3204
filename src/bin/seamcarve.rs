// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use seamcarve::codec::encode;
use seamcarve::seamcarver::check_target;
use seamcarve::{compute_cost_map, compute_edge_map, grid_from_image, CarveError};
use std::fs;
use std::process;

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use image::ImageFormat;
use log::{info, LevelFilter};

fn app() -> App<'static, 'static> {
    App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image; the extension picks the format")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .short("W")
                .long("width")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("Target width (defaults to the source width)"),
        )
        .arg(
            Arg::with_name("height")
                .short("H")
                .long("height")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("Target height (defaults to the source height)"),
        )
        .arg(
            Arg::with_name("edges")
                .long("edges")
                .takes_value(true)
                .help("Also write the source's energy map to this file"),
        )
        .arg(
            Arg::with_name("costs")
                .long("costs")
                .takes_value(true)
                .help("Also write the source's first cost map to this file"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for more still"),
        )
}

fn init_logging(matches: &ArgMatches) {
    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn dimension(matches: &ArgMatches, name: &str, default: u32) -> Result<i64, Error> {
    match matches.value_of(name) {
        None => Ok(i64::from(default)),
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| format_err!("--{} expects a whole number, got {:?}", name, value)),
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let (input, output) = match (matches.value_of("input"), matches.value_of("output")) {
        (Some(input), Some(output)) => (input, output),
        _ => return Err(format_err!("both an input and an output file are required")),
    };

    let source = grid_from_image(&image::open(input).map_err(CarveError::Decode)?.to_rgba8());
    let (width, height) = source.dimensions();
    let (newwidth, newheight) = check_target(
        (width, height),
        dimension(matches, "width", width)?,
        dimension(matches, "height", height)?,
    )?;

    if let Some(path) = matches.value_of("edges") {
        compute_edge_map(&source)
            .save(path)
            .map_err(CarveError::Encode)?;
        info!("wrote energy map to {}", path);
    }
    if let Some(path) = matches.value_of("costs") {
        compute_cost_map(&source)?
            .save(path)
            .map_err(CarveError::Encode)?;
        info!("wrote cost map to {}", path);
    }

    let format = ImageFormat::from_path(output).map_err(CarveError::Encode)?;
    let carved = seamcarve::seamcarve(source, newwidth, newheight)?;
    fs::write(output, encode(&carved, format)?)?;
    info!(
        "carved {} from {}x{} to {}x{} into {}",
        input, width, height, newwidth, newheight, output
    );
    Ok(())
}

fn main() {
    let matches = app().get_matches();
    init_logging(&matches);

    if let Err(err) = run(&matches) {
        eprintln!("seamcarve: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
