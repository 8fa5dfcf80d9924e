use log::debug;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::ImageFile;

/// Move a single file, preferring an atomic rename.
///
/// Rename fails across filesystem boundaries, in which case the move falls
/// back to copy-then-delete.
pub fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(e),
        Err(_) => {
            fs::copy(src, dst)?;
            fs::remove_file(src)?;
            Ok(())
        }
    }
}

/// Relocate the selected files into the destination directory, keeping the
/// original filenames. The destination is created (with parents) if absent.
///
/// A file that vanished between listing and moving aborts the remaining
/// moves; the returned `MoveConflict` carries how many files were already
/// relocated.
pub fn relocate_images(selected: &[ImageFile], destination: &Path) -> Result<usize> {
    fs::create_dir_all(destination).map_err(|e| Error::DestinationWrite {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let mut moved = 0;
    for file in selected {
        let file_name = match file.path.file_name() {
            Some(name) => name,
            None => {
                return Err(Error::MoveConflict {
                    path: file.path.clone(),
                    moved,
                })
            }
        };
        let dest_path = destination.join(file_name);

        match move_file(&file.path, &dest_path) {
            Ok(()) => {
                debug!("Moved {} -> {}", file.path.display(), dest_path.display());
                moved += 1;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::MoveConflict {
                    path: file.path.clone(),
                    moved,
                });
            }
            Err(e) => {
                return Err(Error::DestinationWrite {
                    path: dest_path,
                    source: e,
                });
            }
        }
    }

    Ok(moved)
}
