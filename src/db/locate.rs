//! Best-effort scan for candidate database files, used when the configured
//! path does not exist. Diagnostic only: the result never affects control
//! flow beyond the error message.

use std::fs;
use std::path::{Path, PathBuf};

/// Walk `root` recursively and collect every `*.db` file found, sorted for
/// stable output. IO errors during the walk are ignored.
pub fn find_candidate_dbs(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    walk(root, &mut out);
    out.sort();
    out
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "db") {
            out.push(path);
        }
    }
}
