//! Parser for cover profiles written by `go test -coverprofile`.
//!
//! Format:
//! ```text
//! mode: set
//! github.com/acme/pkg/file.go:12.34,15.2 3 1
//! ```
//! Each record is `<file>:<startLine>.<startCol>,<endLine>.<endCol> <numStmt> <count>`.

use super::schema::{CoverMode, Profile, ProfileBlock};
use crate::utils::config::MODE_PREFIX;
use crate::utils::error::ParseError;
use log::debug;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a cover profile file
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::Open` - the file cannot be opened
/// * `ParseError::Io` - the file cannot be read
/// * any error from `parse_profiles_from_reader`
pub fn parse_profiles(path: impl AsRef<Path>) -> Result<Vec<Profile>, ParseError> {
    let path = path.as_ref();
    debug!("Parsing cover profile: {}", path.display());

    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_profiles_from_reader(BufReader::new(file))
}

/// Parse cover profile records from any buffered reader
///
/// Returns one `Profile` per file, sorted by file name. Blocks within a
/// profile are sorted by start position and duplicate regions are merged.
///
/// # Errors
/// * `ParseError::BadModeLine` - first line is not a `mode: <mode>` header
/// * `ParseError::MalformedLine` - a record does not match the block format
/// * `ParseError::InconsistentStatements` - one region reported with two statement counts
pub fn parse_profiles_from_reader(reader: impl BufRead) -> Result<Vec<Profile>, ParseError> {
    let mut mode: Option<CoverMode> = None;
    let mut files: BTreeMap<String, Vec<ProfileBlock>> = BTreeMap::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if mode.is_none() {
            mode = Some(parse_mode_line(line)?);
            continue;
        }

        // Concatenated profiles repeat the header
        if line.trim().is_empty() || line.starts_with(MODE_PREFIX) {
            continue;
        }

        let (file_name, block) = parse_line(line).map_err(|reason| ParseError::MalformedLine {
            line: line.to_string(),
            reason,
        })?;
        files.entry(file_name).or_default().push(block);
    }

    let Some(mode) = mode else {
        return Ok(Vec::new());
    };

    let mut profiles = Vec::with_capacity(files.len());
    for (file_name, blocks) in files {
        let blocks = merge_blocks(blocks, &mode)?;
        profiles.push(Profile {
            file_name,
            mode: mode.clone(),
            blocks,
        });
    }

    debug!("Parsed {} file profiles ({} mode)", profiles.len(), mode);

    Ok(profiles)
}

/// Parse the `mode: <mode>` header
///
/// **Private** - internal helper
fn parse_mode_line(line: &str) -> Result<CoverMode, ParseError> {
    match line.strip_prefix(MODE_PREFIX) {
        Some(mode) if !mode.is_empty() => Ok(CoverMode::from_header(mode)),
        _ => Err(ParseError::BadModeLine(line.to_string())),
    }
}

/// Parse one block record into its file name and block
///
/// The file name is everything before the last `:`, which keeps
/// Windows drive letters intact.
fn parse_line(line: &str) -> Result<(String, ProfileBlock), String> {
    let (file_name, rest) = line
        .rsplit_once(':')
        .ok_or_else(|| "missing ':' separator".to_string())?;

    if file_name.is_empty() {
        return Err("empty file name".to_string());
    }

    let mut fields = rest.split(' ');
    let (Some(span), Some(num_stmt), Some(count), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err("expected '<span> <numStmt> <count>'".to_string());
    };

    let (start, end) = span
        .split_once(',')
        .ok_or_else(|| format!("bad span {:?}", span))?;
    let (start_line, start_col) = parse_position(start)?;
    let (end_line, end_col) = parse_position(end)?;

    Ok((
        file_name.to_string(),
        ProfileBlock {
            start_line,
            start_col,
            end_line,
            end_col,
            num_stmt: parse_number(num_stmt, "statement count")?,
            count: parse_number(count, "execution count")?,
        },
    ))
}

fn parse_position(pos: &str) -> Result<(u32, u32), String> {
    let (line, col) = pos
        .split_once('.')
        .ok_or_else(|| format!("bad position {:?}", pos))?;
    Ok((parse_number(line, "line")?, parse_number(col, "column")?))
}

fn parse_number<N: std::str::FromStr>(text: &str, what: &str) -> Result<N, String> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("bad {} {:?}", what, text));
    }
    text.parse()
        .map_err(|_| format!("{} {:?} out of range", what, text))
}

/// Sort blocks by start position and merge records for the same region
///
/// `set` mode ORs the counts, every other mode sums them.
fn merge_blocks(
    mut blocks: Vec<ProfileBlock>,
    mode: &CoverMode,
) -> Result<Vec<ProfileBlock>, ParseError> {
    blocks.sort_by_key(|b| (b.start_line, b.start_col));

    let mut merged: Vec<ProfileBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match merged.last_mut() {
            Some(last) if last.same_region(&block) => {
                if last.num_stmt != block.num_stmt {
                    return Err(ParseError::InconsistentStatements {
                        previous: last.num_stmt,
                        current: block.num_stmt,
                    });
                }
                last.count = match mode {
                    CoverMode::Set => last.count | block.count,
                    _ => last.count.saturating_add(block.count),
                };
            }
            _ => merged.push(block),
        }
    }

    Ok(merged)
}
