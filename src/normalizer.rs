//! Pre-existing receivers normalization
use log::{debug, warn};

use crate::{
    constants::{GROUND_LEVEL_M, RECEIVER_TOKEN, Z_KEY},
    keyval::{find_numeric, is_token_line},
    record::fixed2,
};

/// Receiver line moved to ground level, or None when `line` is
/// not a receiver or has no elevation to rewrite.
fn ground_receiver(line: &str) -> Option<String> {
    if !is_token_line(line, RECEIVER_TOKEN) {
        return None;
    }
    match find_numeric(line, Z_KEY) {
        Some(field) => {
            let mut out = String::with_capacity(line.len());
            out.push_str(&line[..field.span.start]);
            out.push_str(&fixed2(GROUND_LEVEL_M));
            out.push_str(&line[field.span.end..]);
            Some(out)
        },
        None => {
            warn!("receiver without elevation left unchanged: \"{}\"", line.trim());
            None
        },
    }
}

/// Rewrites one line: receiver lines have their first `z=` value
/// replaced by ground level. Any other line is returned as is.
pub fn normalize_line(line: &str) -> String {
    ground_receiver(line).unwrap_or_else(|| line.to_string())
}

/// Forces all pre-existing receivers to ground level, preserving
/// line order. Non receiver lines pass through untouched.
pub fn normalize_receivers<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut receivers = 0;
    let normalized = lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            match ground_receiver(line) {
                Some(grounded) => {
                    receivers += 1;
                    grounded
                },
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>();

    debug!("normalized {} pre-existing receiver(s)", receivers);
    normalized
}
