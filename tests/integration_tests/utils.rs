use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{crate_name, Command};
use tempfile::TempDir;

/// The master artwork shipped with the crate
pub fn logo_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/logo.svg")
}

/// A scratch directory holding a copy of the artwork as `logo.svg`,
/// so the default `--source` finds it.
pub fn workdir() -> TempDir {
    let dir = tempfile::tempdir().expect("could not create workdir");
    fs::copy(logo_path(), dir.path().join("logo.svg")).expect("could not copy logo");
    dir
}

/// The binary, run from `dir`
pub fn command(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(crate_name!()).expect("binary should be built");
    cmd.current_dir(dir);
    cmd
}

/// Sorted file names in `dir`
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .expect("readable dir")
        .map(|e| e.expect("dir entry").file_name().into_string().expect("UTF8 name"))
        .collect();
    names.sort();
    names
}

/// Width and height from a PNG's IHDR chunk
pub fn png_size(data: &[u8]) -> (u32, u32) {
    assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n", "not a PNG");
    let be = |b: &[u8]| u32::from_be_bytes([b[0], b[1], b[2], b[3]]);
    (be(&data[16..20]), be(&data[20..24]))
}
