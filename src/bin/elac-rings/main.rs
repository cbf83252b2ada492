#[macro_use]
extern crate log;

use env_logger::{Builder, Target};
use std::{fs::File, process::ExitCode};

mod cli;
use cli::Cli;

use elac_rings::prelude::{FileInput, FileOutput, Injector};

pub fn main() -> ExitCode {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();
    let injector = match Injector::new(cli.config()) {
        Ok(injector) => injector,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    info!("{:#?}", injector.config());

    let mut input = FileInput::new(cli.input());
    let mut output = FileOutput::new(cli.output());

    let injection = match injector.run(&mut input, &mut output) {
        Ok(injection) => injection,
        Err(e) => {
            error!("{}: {}", cli.input().display(), e);
            return ExitCode::FAILURE;
        },
    };

    info!("source position: {}", injection.source);
    info!("updated input written to {}", cli.output().display());

    if let Some(path) = cli.sections() {
        let dumped = File::create(path)
            .map_err(|e| e.to_string())
            .and_then(|fd| {
                serde_json::to_writer_pretty(fd, &injection.sections).map_err(|e| e.to_string())
            });
        match dumped {
            Ok(()) => info!("cross sections written to {}", path.display()),
            Err(e) => {
                error!("failed to write cross sections: {}", e);
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}
