// Moving rendered files from the staging directory to their destination.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Packaging {
    /// `<destination>.zip` archive of the staged files
    #[default]
    Zip,
    /// Plain directory at `<destination>`, replacing whatever was there
    Directory,
}

impl Packaging {
    /// Final output path for `destination` under this packaging mode.
    pub fn target(&self, destination: &Path) -> PathBuf {
        match self {
            Self::Zip => {
                let mut name = destination.as_os_str().to_owned();
                name.push(".zip");
                PathBuf::from(name)
            }
            Self::Directory => destination.to_path_buf(),
        }
    }

    /// Package the contents of `staging` at `destination`, returning the
    /// path of the archive or directory created.
    pub fn package(&self, staging: &Path, destination: &Path) -> Result<PathBuf> {
        let target = self.target(destination);
        match self {
            Self::Zip => zip_dir(staging, &target)?,
            Self::Directory => replace_dir(staging, &target)?,
        }
        info!("packaged {} into {}", staging.display(), target.display());
        Ok(target)
    }
}

/// Remove anything at `dest`, then copy the `src` tree there.
fn replace_dir(src: &Path, dest: &Path) -> Result<()> {
    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(dest)?,
        Ok(_) => fs::remove_file(dest)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let target = dest.join(relative(src, entry.path())?);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Write a deflated zip archive at `archive` holding the `src` tree, with
/// entry names relative to `src`.
fn zip_dir(src: &Path, archive: &Path) -> Result<()> {
    let mut zip = ZipWriter::new(File::create(archive)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let name = entry_name(relative(src, entry.path())?);
        if entry.file_type().is_dir() {
            zip.add_directory(name, options)?;
        } else {
            zip.start_file(name, options)?;
            io::copy(&mut File::open(entry.path())?, &mut zip)?;
        }
    }
    zip.finish()?;
    Ok(())
}

fn relative<'a>(base: &Path, path: &'a Path) -> Result<&'a Path> {
    path.strip_prefix(base).map_err(Error::from_err)
}

/// Zip entry names always use '/' separators
fn entry_name(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
