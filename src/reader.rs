// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reads latency sample files: one decimal nanosecond value per line, blank
//! lines ignored.

use crate::error::{Error, Result};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a single line. Returns `Ok(None)` for a line which is blank once
/// surrounding whitespace is removed. `line` is the 1-based line number used
/// when reporting a failure.
pub fn parse_line(path: &Path, line: usize, content: &str) -> Result<Option<u64>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            line,
            content: trimmed.to_owned(),
            source,
        })
}

/// Read every sample from the file at `path`, in file order. The file handle
/// is dropped on return, whether or not the read succeeded.
pub fn read_times<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut times = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            line: number,
            source,
        })?;
        if let Some(value) = parse_line(path, number, &line)? {
            times.push(value);
        }
    }

    debug!("read {} samples from {}", times.len(), path.display());
    Ok(times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn skips_blank_lines() {
        let file = file_with(b"1000\n\n2000\n3000");
        assert_eq!(read_times(file.path()).unwrap(), vec![1000, 2000, 3000]);
    }

    #[test]
    fn preserves_order() {
        let file = file_with(b"30\n10\n20\n10\n");
        assert_eq!(read_times(file.path()).unwrap(), vec![30, 10, 20, 10]);
    }

    #[test]
    fn trims_whitespace() {
        let file = file_with(b"  42 \r\n\t7\n   \n\r\n+5\n");
        assert_eq!(read_times(file.path()).unwrap(), vec![42, 7, 5]);
    }

    #[test]
    fn empty_file() {
        let file = file_with(b"");
        assert!(read_times(file.path()).unwrap().is_empty());

        let file = file_with(b"\n\n  \n");
        assert!(read_times(file.path()).unwrap().is_empty());
    }

    #[test]
    fn large_values() {
        let file = file_with(format!("{}\n0\n", u64::MAX).as_bytes());
        assert_eq!(read_times(file.path()).unwrap(), vec![u64::MAX, 0]);
    }

    #[test]
    fn parse_error_reports_line() {
        let file = file_with(b"1000\n\nabc\n2000\n");
        match read_times(file.path()) {
            Err(Error::Parse {
                path,
                line,
                content,
                ..
            }) => {
                assert_eq!(path, file.path());
                assert_eq!(line, 3);
                assert_eq!(content, "abc");
            }
            other => panic!("expected parse error, got: {:?}", other),
        }
    }

    #[test]
    fn rejects_non_integers() {
        for bad in &["-5", "1.5", "1e3", "0x10", "12 34"] {
            let file = file_with(format!("1\n{}\n", bad).as_bytes());
            assert!(
                matches!(read_times(file.path()), Err(Error::Parse { line: 2, .. })),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market_times.txt");
        match read_times(&path) {
            Err(Error::FileNotFound { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected file not found, got: {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8() {
        let file = file_with(b"10\n\xff\xfe\n");
        assert!(matches!(
            read_times(file.path()),
            Err(Error::Read { line: 2, .. })
        ));
    }

    #[test]
    fn parse_line_blank() {
        let path = Path::new("x");
        assert_eq!(parse_line(path, 1, "   ").unwrap(), None);
        assert_eq!(parse_line(path, 1, " 12 ").unwrap(), Some(12));
    }
}
