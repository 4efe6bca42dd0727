//! Accept Go-style single-dash long flags (`-profile cover.out`).
//!
//! clap reads `-profile` as a cluster of short flags, so known long flag
//! names are rewritten to `--profile` before parsing.

use super::config::LONG_FLAGS;
use std::ffi::OsString;

/// Rewrite single-dash long flags into their double-dash form
///
/// Anything after a bare `--` is passed through untouched, as are values
/// that merely look like flags but are not in the known list.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for arg in args {
        let arg: OsString = arg.into();
        if passthrough {
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) => rewrite(s),
            None => None,
        };

        out.push(rewritten.map(OsString::from).unwrap_or(arg));
    }

    out
}

fn rewrite(arg: &str) -> Option<String> {
    let body = arg.strip_prefix('-')?;
    if body.starts_with('-') {
        return None;
    }

    let name = body.split_once('=').map_or(body, |(name, _)| name);
    if LONG_FLAGS.contains(&name) {
        Some(format!("-{}", arg))
    } else {
        None
    }
}
