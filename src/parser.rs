//! Source line parsing
use log::{debug, error};

use crate::{
    constants::{SOURCE_TOKEN, X_KEY, Y_KEY},
    coordinate::SourcePosition,
    error::Error,
    keyval::{find_numeric, is_token_line},
};

fn parse_key(line: &str, key: &'static str) -> Result<f64, Error> {
    let field = find_numeric(line, key).ok_or(Error::MissingSource)?;
    field
        .value
        .parse::<f64>()
        .map_err(|_| Error::MalformedNumeric {
            key,
            value: field.value.to_string(),
        })
}

/// Locates the first `source` line and returns its horizontal position.
/// That line must define both `x=` and `y=`: other `source` lines are
/// not considered.
pub fn parse_source<S: AsRef<str>>(lines: &[S]) -> Result<SourcePosition, Error> {
    let line = lines
        .iter()
        .map(|line| line.as_ref())
        .find(|line| is_token_line(line, SOURCE_TOKEN))
        .ok_or(Error::MissingSource)
        .inspect_err(|_| error!("no '{}' line found", SOURCE_TOKEN))?;

    let x = parse_key(line, X_KEY)?;
    let y = parse_key(line, Y_KEY)?;

    let source = SourcePosition::new(x, y);
    debug!("parsed source position: {}", source);
    Ok(source)
}
