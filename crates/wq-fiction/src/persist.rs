use std::fs;
use std::io;
use std::path::Path;

use tracing::info;
use wq_core::World;
use wq_core::snapshot::{self, Restored};

use crate::error::FictionResult;

/// Write a snapshot of `world` to `path`, creating parent directories.
pub fn save_file(world: &World, path: &Path) -> FictionResult<()> {
    let text = snapshot::encode(world)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    info!(path = %path.display(), "game saved");
    Ok(())
}

/// Read and decode a snapshot file into a fresh world.
pub fn load_file(path: &Path) -> FictionResult<Restored> {
    let text = fs::read_to_string(path)?;
    let restored = snapshot::decode(&text)?;
    info!(
        path = %path.display(),
        version = restored.version,
        warnings = restored.warnings.len(),
        "game loaded"
    );
    Ok(restored)
}

/// Remove a snapshot file. Returns whether a file was actually removed.
pub fn clear_file(path: &Path) -> FictionResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "save cleared");
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FictionError;
    use wq_core::{ItemId, WqError};

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots").join("one.json");

        let mut world = World::new();
        world.pick(ItemId::TeleportationStone);
        save_file(&world, &path).unwrap();

        let restored = load_file(&path).unwrap();
        assert_eq!(restored.world.to_snapshot(), world.to_snapshot());
        assert!(restored.warnings.is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, FictionError::Io(_)));
    }

    #[test]
    fn load_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, FictionError::Core(WqError::Decode(_))));
    }

    #[test]
    fn clear_reports_removal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auto.json");
        save_file(&World::new(), &path).unwrap();

        assert!(clear_file(&path).unwrap());
        assert!(!path.exists());
        assert!(!clear_file(&path).unwrap());
    }
}
