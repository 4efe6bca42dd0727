//! Raw per-bucket report writer.
//!
//! Writes one `<bucket> <statements> <covered>` line per bucket so other
//! tools can merge counts across runs without re-deriving percentages.

use crate::aggregator::Bucket;
use crate::utils::error::ReportError;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the raw bucket report to a new file
///
/// **Public** - used by the report command when `-out` is set
///
/// The file must not already exist; an existing file is never touched.
/// If writing fails after the file was created, the partial file is removed.
///
/// # Errors
/// * `ReportError::InvalidPath` - empty path or a directory
/// * `ReportError::AlreadyExists` - something already lives at `output_path`
/// * `ReportError::CreateFailed` - the file cannot be created
/// * `ReportError::WriteFailed` - I/O error while writing
pub fn write_report(
    buckets: &BTreeMap<String, Bucket>,
    output_path: impl AsRef<Path>,
) -> Result<(), ReportError> {
    let output_path = output_path.as_ref();

    info!("Writing bucket report to: {}", output_path.display());

    validate_report_path(output_path)?;

    // create_new closes the race between the check above and creation
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(output_path)
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::AlreadyExists => {
                ReportError::AlreadyExists(output_path.to_path_buf())
            }
            _ => ReportError::CreateFailed {
                path: output_path.to_path_buf(),
                source,
            },
        })?;

    let result = write_lines(BufWriter::new(file), buckets);

    if let Err(source) = result {
        if let Err(e) = fs::remove_file(output_path) {
            warn!("Could not remove partial report {}: {}", output_path.display(), e);
        }
        return Err(ReportError::WriteFailed {
            path: output_path.to_path_buf(),
            source,
        });
    }

    debug!("Report written: {} buckets", buckets.len());

    Ok(())
}

fn write_lines(mut writer: impl Write, buckets: &BTreeMap<String, Bucket>) -> std::io::Result<()> {
    for line in report_lines(buckets) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// Render raw report lines, one per bucket
pub fn report_lines(buckets: &BTreeMap<String, Bucket>) -> Vec<String> {
    buckets
        .iter()
        .map(|(name, bucket)| format!("{} {} {}", name, bucket.statements, bucket.covered))
        .collect()
}

/// Validate that the report path can be created
///
/// **Public** - lets the command reject a bad `-out` before parsing
pub fn validate_report_path(path: &Path) -> Result<(), ReportError> {
    if path.as_os_str().is_empty() {
        return Err(ReportError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(ReportError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if path.exists() {
        return Err(ReportError::AlreadyExists(path.to_path_buf()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn buckets() -> BTreeMap<String, Bucket> {
        let mut buckets = BTreeMap::new();
        buckets.insert("bar".to_string(), Bucket { statements: 10, covered: 7 });
        buckets.insert("other".to_string(), Bucket { statements: 3, covered: 0 });
        buckets
    }

    #[test]
    fn test_write_report() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("report.txt");

        write_report(&buckets(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "bar 10 7\nother 3 0\n");
    }

    #[test]
    fn test_existing_file_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("report.txt");
        fs::write(&path, "keep me\n").unwrap();

        let err = write_report(&buckets(), &path).unwrap_err();

        assert!(matches!(err, ReportError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me\n");
    }

    #[test]
    fn test_validate_report_path_empty() {
        let result = validate_report_path(Path::new(""));
        assert!(matches!(result, Err(ReportError::InvalidPath(_))));
    }

    #[test]
    fn test_validate_report_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_report_path(temp_dir.path());
        assert!(matches!(result, Err(ReportError::InvalidPath(_))));
    }

    #[test]
    fn test_missing_parent_dir_fails_create() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("no/such/dir/report.txt");

        let err = write_report(&buckets(), &path).unwrap_err();

        assert!(matches!(err, ReportError::CreateFailed { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_report_lines_empty() {
        assert!(report_lines(&BTreeMap::new()).is_empty());
    }
}
