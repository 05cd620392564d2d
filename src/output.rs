use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    error::{OutputError, Result},
    raster::Raster,
};

/// Persists finished artifacts under collision-free filenames.
///
/// The output directory is created once at construction. Each save scans
/// integer suffixes from 1 and takes the lowest `{prefix}_{n}.png` not
/// already on disk, so existing files are never overwritten. The
/// check-then-write is not race-free across concurrent writers; single-writer
/// use is assumed.
pub struct OutputManager {
    dir: PathBuf,
}

impl OutputManager {
    /// Create a manager rooted at `dir`, creating the directory if absent
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| OutputError::DirectoryFailed {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the raster as a PNG under the lowest free `{prefix}_{n}.png`
    /// slot and return the path. On a failed write the partial file is
    /// removed and no path is returned.
    pub fn save(&self, raster: &Raster, prefix: &str) -> Result<PathBuf> {
        let path = self.allocate_slot(prefix);
        let bytes = raster.encode_png().map_err(OutputError::EncodeFailed)?;
        if let Err(source) = fs::write(&path, bytes) {
            let _ = fs::remove_file(&path);
            return Err(OutputError::WriteFailed { path, source }.into());
        }
        info!("Saved: {:?}", path);
        Ok(path)
    }

    fn allocate_slot(&self, prefix: &str) -> PathBuf {
        let mut n = 1u64;
        loop {
            let candidate = self.dir.join(format!("{}_{}.png", prefix, n));
            if !candidate.exists() {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn constructor_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("memes/out");
        let _manager = OutputManager::new(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn saves_allocate_sequential_slots() {
        let dir = tempdir().unwrap();
        let manager = OutputManager::new(dir.path()).unwrap();
        let raster = Raster::filled(4, 4, [1, 2, 3]);

        let first = manager.save(&raster, "meme").unwrap();
        let second = manager.save(&raster, "meme").unwrap();
        assert_eq!(first.file_name().unwrap(), "meme_1.png");
        assert_eq!(second.file_name().unwrap(), "meme_2.png");
    }

    #[test]
    fn freed_slots_are_reused() {
        let dir = tempdir().unwrap();
        let manager = OutputManager::new(dir.path()).unwrap();
        let raster = Raster::filled(4, 4, [9, 9, 9]);

        let first = manager.save(&raster, "meme").unwrap();
        let _second = manager.save(&raster, "meme").unwrap();
        fs::remove_file(&first).unwrap();

        // lowest-free-slot, not a monotonic counter
        let third = manager.save(&raster, "meme").unwrap();
        assert_eq!(third.file_name().unwrap(), "meme_1.png");
    }

    #[test]
    fn prefixes_do_not_collide() {
        let dir = tempdir().unwrap();
        let manager = OutputManager::new(dir.path()).unwrap();
        let raster = Raster::filled(2, 2, [0, 0, 0]);

        let a = manager.save(&raster, "alpha").unwrap();
        let b = manager.save(&raster, "beta").unwrap();
        assert_eq!(a.file_name().unwrap(), "alpha_1.png");
        assert_eq!(b.file_name().unwrap(), "beta_1.png");
    }

    #[test]
    fn saved_file_is_a_decodable_png() {
        let dir = tempdir().unwrap();
        let manager = OutputManager::new(dir.path()).unwrap();
        let raster = Raster::filled(6, 5, [10, 200, 30]);

        let path = manager.save(&raster, "meme").unwrap();
        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (6, 5));
        assert_eq!(decoded.get_pixel(3, 2).0, [10, 200, 30]);
    }
}
