//! Detection of machine-generated source files.
//!
//! A file is generated when any line starts with `//` and contains
//! `DO NOT EDIT`, e.g. `// Code generated by protoc-gen-go. DO NOT EDIT.`

use crate::utils::config::{COMMENT_MARKER, GENERATED_MARKER, SOURCE_EXTENSION};
use crate::utils::error::FilterError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Check whether `path` is a generated source file
///
/// **Public** - used by the aggregator when filtering is enabled
///
/// Paths without the source extension are never generated. A file that
/// cannot be opened is treated as not generated, but a read error after
/// the file was opened is returned.
///
/// # Errors
/// * `FilterError::Read` - I/O error while scanning lines
pub fn is_generated(path: &Path) -> Result<bool, FilterError> {
    if !path.to_string_lossy().ends_with(SOURCE_EXTENSION) {
        return Ok(false);
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("Cannot open {}, treating as hand-written: {}", path.display(), e);
            return Ok(false);
        }
    };

    scan_for_marker(BufReader::new(file)).map_err(|source| FilterError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan lines until one carries the generated marker
///
/// Lines are compared as bytes so non-UTF-8 content is not an error.
fn scan_for_marker(mut reader: impl BufRead) -> std::io::Result<bool> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(false);
        }
        if is_marker_line(&line) {
            return Ok(true);
        }
    }
}

fn is_marker_line(line: &[u8]) -> bool {
    let marker = GENERATED_MARKER.as_bytes();
    line.starts_with(COMMENT_MARKER.as_bytes())
        && line.windows(marker.len()).any(|window| window == marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    #[test]
    fn test_marker_line() {
        assert!(is_marker_line(b"// Code generated by stringer; DO NOT EDIT.\n"));
        assert!(is_marker_line(b"//DO NOT EDIT"));
        assert!(!is_marker_line(b"  // Code generated; DO NOT EDIT."));
        assert!(!is_marker_line(b"var s = \"DO NOT EDIT\" // note\n"));
        assert!(!is_marker_line(b"// Code generated by hand.\n"));
    }

    #[test]
    fn test_scan_stops_at_first_match() {
        let text = b"package x\n\n// Code generated. DO NOT EDIT.\nfunc f() {}\n";
        assert!(scan_for_marker(&text[..]).unwrap());
    }

    #[test]
    fn test_scan_without_marker() {
        let text = b"package x\n\nfunc f() {}\n";
        assert!(!scan_for_marker(&text[..]).unwrap());
    }

    #[test]
    fn test_scan_tolerates_invalid_utf8() {
        let text = b"\xff\xfe\n// DO NOT EDIT\n";
        assert!(scan_for_marker(&text[..]).unwrap());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_scan_propagates_read_errors() {
        let err = scan_for_marker(BufReader::new(FailingReader)).unwrap_err();
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[test]
    fn test_non_source_extension_is_never_generated() {
        assert!(!is_generated(Path::new("/definitely/missing/notes.txt")).unwrap());
    }

    #[test]
    fn test_missing_file_fails_open() {
        assert!(!is_generated(Path::new("/definitely/missing/file.go")).unwrap());
    }
}
