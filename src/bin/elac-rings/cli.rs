// The Cli gathers paths and ring settings, on top of an optional setup file.
use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};
use std::{fs::read_to_string, path::PathBuf};

use elac_rings::prelude::Config;

pub struct Cli {
    matches: ArgMatches,
}

impl Cli {
    pub fn new() -> Self {
        let cmd = Command::new("elac-rings")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Injects rings of air receivers around the source of an ElAc input file")
            .arg_required_else_help(true)
            .color(ColorChoice::Always)
            .arg(
                Arg::new("input")
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("ElAc input file"),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("Augmented ElAc input file to generate"),
            )
            .arg(
                Arg::new("cfg")
                    .short('c')
                    .action(ArgAction::Set)
                    .required(false)
                    .help("Load configuration script (Optional)"),
            )
            .arg(
                Arg::new("rings")
                    .long("rings")
                    .action(ArgAction::Set)
                    .value_delimiter(',')
                    .value_parser(value_parser!(f64))
                    .help("Ring radii in meters, comma separated (Optional)"),
            )
            .arg(
                Arg::new("points")
                    .long("points")
                    .action(ArgAction::Set)
                    .value_parser(value_parser!(usize))
                    .help("Number of points per semicircle, endpoints included (Optional)"),
            )
            .arg(
                Arg::new("offset")
                    .long("offset")
                    .action(ArgAction::Set)
                    .value_parser(value_parser!(f64))
                    .help("Vertical offset added above every arc, in meters (Optional)"),
            )
            .arg(
                Arg::new("sections")
                    .long("sections")
                    .action(ArgAction::Set)
                    .value_parser(value_parser!(PathBuf))
                    .help("Dump the generated cross sections as JSON (Optional)"),
            );
        Self {
            matches: cmd.get_matches(),
        }
    }

    pub fn input(&self) -> &PathBuf {
        self.matches
            .get_one::<PathBuf>("input")
            .unwrap_or_else(|| panic!("input is required"))
    }

    pub fn output(&self) -> &PathBuf {
        self.matches
            .get_one::<PathBuf>("output")
            .unwrap_or_else(|| panic!("output is required"))
    }

    pub fn sections(&self) -> Option<&PathBuf> {
        self.matches.get_one::<PathBuf>("sections")
    }

    /// Setup script first, then command line overrides.
    pub fn config(&self) -> Config {
        let mut cfg = match self.matches.get_one::<String>("cfg") {
            Some(path) => {
                let content = read_to_string(path)
                    .unwrap_or_else(|e| panic!("failed to read configuration: {}", e));
                serde_json::from_str::<Config>(&content)
                    .unwrap_or_else(|e| panic!("failed to parse configuration: {}", e))
            },
            None => Config::default(),
        };
        if let Some(rings) = self.matches.get_many::<f64>("rings") {
            cfg = cfg.with_rings(&rings.copied().collect::<Vec<_>>());
        }
        if let Some(points) = self.matches.get_one::<usize>("points") {
            cfg = cfg.with_points_per_arc(*points);
        }
        if let Some(offset) = self.matches.get_one::<f64>("offset") {
            cfg = cfg.with_vertical_offset(*offset);
        }
        cfg
    }
}
