//! Shared helpers for unit tests.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Build an in-memory zip archive from `(path, payload)` pairs.
///
/// A `None` payload emits a directory entry.
pub(crate) fn zip_archive(entries: &[(&str, Option<&[u8]>)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (path, payload) in entries {
        match payload {
            Some(bytes) => {
                writer.start_file(*path, options).expect("start zip entry");
                writer.write_all(bytes).expect("write zip entry");
            }
            None => {
                writer.add_directory(path.trim_end_matches('/'), options).expect("add zip dir");
            }
        }
    }

    writer.finish().expect("finish zip archive").into_inner()
}
