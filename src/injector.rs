//! Air ring injection pipeline
use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use log::{error, info};

use crate::{
    arc::CrossSection,
    cfg::Config,
    coordinate::SourcePosition,
    error::Error,
    normalizer::normalize_receivers,
    parser::parse_source,
    record::{assemble, ReceiverRecord},
    station::{synthesize, Station},
};

/// Any input provider should implement [InputSource].
/// The input is entirely read before any transformation happens.
pub trait InputSource {
    /// Returns all lines of the input, line terminators removed.
    fn read_lines(&mut self) -> io::Result<Vec<String>>;
}

/// Any output consumer should implement [OutputSink].
pub trait OutputSink {
    /// Receives the complete output text, exactly once per successful run.
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

impl InputSource for &str {
    fn read_lines(&mut self) -> io::Result<Vec<String>> {
        Ok(self.lines().map(String::from).collect())
    }
}

impl OutputSink for String {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

/// [InputSource] reading a text file
#[derive(Debug, Clone)]
pub struct FileInput {
    path: PathBuf,
}

impl FileInput {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl InputSource for FileInput {
    fn read_lines(&mut self) -> io::Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().map(String::from).collect())
    }
}

/// [OutputSink] writing a text file. Parent directories are created.
#[derive(Debug, Clone)]
pub struct FileOutput {
    path: PathBuf,
}

impl FileOutput {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl OutputSink for FileOutput {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, text)
    }
}

/// Outcome of one [Injector] run
#[derive(Debug, Clone, PartialEq)]
pub struct Injection {
    /// Source position found in the input
    pub source: SourcePosition,
    /// Complete output text
    pub text: String,
    /// Synthesized stations, in emission order
    pub stations: Vec<Station>,
    /// Per plane cross sections, for diagnostics
    pub sections: Vec<CrossSection>,
}

/// [Injector] adds rings of air receivers around the source of an
/// ElAc input file. Each run is a single pass:
/// parse source, normalize receivers, synthesize stations, serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct Injector {
    cfg: Config,
}

impl Injector {
    /// Deploys a new [Injector]. [Config] must be valid.
    pub fn new(cfg: Config) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Returns the [Config] in use
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Transforms the input lines, without any I/O.
    pub fn inject_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<Injection, Error> {
        let source = parse_source(lines)?;
        let normalized = normalize_receivers(lines);
        let synthesis = synthesize(&source, &self.cfg)?;

        let records = synthesis
            .stations
            .iter()
            .map(|station| ReceiverRecord::from_station(station, &self.cfg))
            .collect::<Vec<_>>();

        let text = assemble(&normalized, &records);

        Ok(Injection {
            source,
            text,
            stations: synthesis.stations,
            sections: synthesis.sections,
        })
    }

    /// Transforms complete input text, without any I/O.
    pub fn inject(&self, text: &str) -> Result<Injection, Error> {
        let lines = text.lines().collect::<Vec<_>>();
        self.inject_lines(&lines)
    }

    /// Reads the whole input, transforms it and writes the output once.
    /// Nothing is written if any step fails.
    pub fn run<I: InputSource, O: OutputSink>(
        &self,
        input: &mut I,
        output: &mut O,
    ) -> Result<Injection, Error> {
        let lines = input.read_lines()?;

        let injection = self
            .inject_lines(&lines)
            .inspect_err(|e| error!("aborting: {}", e))?;

        output.write_text(&injection.text)?;
        info!(
            "wrote {} lines ({} air stations)",
            lines.len() + 1 + injection.stations.len(),
            injection.stations.len()
        );
        Ok(injection)
    }
}
