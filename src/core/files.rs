//! File helpers for the snapshot data source

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Path: {dir}/{resource}.json
pub fn snapshot_path(dir: &Path, resource: &str) -> PathBuf {
    dir.join(format!("{}.json", resource))
}
