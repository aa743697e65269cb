// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use escapetime::render::{to_luma, write_image};
use escapetime::{Domain, Formula, FractalGrid, Preset, Resolution};
use failure::{err_msg, Error};
use log::info;
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const XRANGE: &str = "xrange";
const YRANGE: &str = "yrange";
const ITERATIONS: &str = "iterations";
const FORMULA: &str = "formula";
const PRESET: &str = "preset";
const INVERT: &str = "invert";

fn args<'a>() -> ArgMatches<'a> {
    App::new("escapetime")
        .version("0.1.0")
        .about("Escape-time fractal renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; .png writes PNG, anything else a PGM graymap"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("500x500")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(XRANGE)
                .required(false)
                .long(XRANGE)
                .short("x")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2,2")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse real axis range"))
                .help("Range of the real axis, MIN,MAX"),
        )
        .arg(
            Arg::with_name(YRANGE)
                .required(false)
                .long(YRANGE)
                .short("y")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2,2")
                .validator(|s| {
                    validate_pair::<f64>(&s, ',', "Could not parse imaginary axis range")
                })
                .help("Range of the imaginary axis, MIN,MAX"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("50")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 100000",
                    )
                })
                .help("Number of times to iterate the grid"),
        )
        .arg(
            Arg::with_name(FORMULA)
                .required(false)
                .long(FORMULA)
                .short("f")
                .takes_value(true)
                .possible_values(Formula::NAMES)
                .default_value("cubic")
                .help("Recurrence to iterate"),
        )
        .arg(
            Arg::with_name(PRESET)
                .required(false)
                .long(PRESET)
                .short("p")
                .takes_value(true)
                .possible_values(Preset::NAMES)
                .help("Named fractal; supplies size, ranges and formula unless given"),
        )
        .arg(
            Arg::with_name(INVERT)
                .long(INVERT)
                .help("Draw escaped pixels white and bounded pixels black"),
        )
        .get_matches()
}

fn value<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, Error> {
    matches
        .value_of(name)
        .ok_or_else(|| err_msg(format!("Missing value for {}", name)))
}

fn range(matches: &ArgMatches, name: &str) -> Result<(f64, f64), Error> {
    parse_pair(value(matches, name)?, ',')
        .ok_or_else(|| err_msg(format!("Error parsing {}", name)))
}

fn render(matches: &ArgMatches) -> Result<(), Error> {
    let preset = match matches.value_of(PRESET) {
        Some(name) => Some(Preset::from_str(name).map_err(err_msg)?),
        None => None,
    };
    // A preset only fills in what the user left at its default.
    let from_preset = |name: &str| preset.filter(|_| matches.occurrences_of(name) == 0);

    let resolution = match from_preset(SIZE) {
        Some(p) => p.resolution(),
        None => {
            let (width, height) = parse_pair(value(matches, SIZE)?, 'x')
                .ok_or_else(|| err_msg("Error parsing image dimensions"))?;
            Resolution(width, height)
        }
    };
    let x = match from_preset(XRANGE) {
        Some(p) => p.domain().x,
        None => range(matches, XRANGE)?,
    };
    let y = match from_preset(YRANGE) {
        Some(p) => p.domain().y,
        None => range(matches, YRANGE)?,
    };
    let domain = Domain::new(x, y);
    let formula = match from_preset(FORMULA) {
        Some(p) => p.formula(),
        None => Formula::from_str(value(matches, FORMULA)?).map_err(err_msg)?,
    };
    let iterations = usize::from_str(value(matches, ITERATIONS)?)?;

    let mut grid = FractalGrid::with_recurrence(domain, resolution, formula)?;
    grid.run(iterations);
    info!(
        "{} of {} pixels escaped after {} iterations of {}",
        grid.escaped_count(),
        resolution.width() * resolution.height(),
        iterations,
        formula
    );

    let pixels = to_luma(grid.escaped_mask(), resolution, matches.is_present(INVERT))?;
    write_image(Path::new(value(matches, OUTPUT)?), &pixels, resolution)
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = render(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
