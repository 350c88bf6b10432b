use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::constants::modes;
use crate::error::{Error, Result};

/// Ensures the output directory is safe to write to.
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExists {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Creates `dest_path` and any missing ancestors as `rwxr-xr-x` directories.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(modes::DIRECTORY);
    }
    builder
        .create(dest_path)
        .map_err(|source| Error::CreateDirectory { path: dest_path.to_path_buf(), source })
}

/// Creates or truncates `dest_path` as an `rw-r--r--` file holding `content`.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(modes::FILE);
    }
    options
        .open(dest_path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|source| Error::WriteFile { path: dest_path.to_path_buf(), source })
}
