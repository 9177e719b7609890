use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use bevy_utils::tracing::debug;
use ron::de::{from_reader, SpannedError};
use lazy_static::lazy_static;
use crate::core::helix_error::{HelixError, HelixResult};
use crate::scenes::scene::Scene;

pub const SCENE_DIRECTORY: &str = "assets/scenes";
pub const SCENE_EXTENSION: &str = "ron";

lazy_static! {
    static ref SCENE_CACHE: Mutex<HashMap<PathBuf, Scene>> = Mutex::new(HashMap::new());
}

pub fn import_scene(scene_name: &str) -> HelixResult<Scene> {
    import_scene_from(Path::new(SCENE_DIRECTORY), scene_name)
}

pub fn scene_path(scene_dir: &Path, scene_name: &str) -> PathBuf {
    scene_dir.join(format!("{}.{}", scene_name, SCENE_EXTENSION))
}

/// Loads `{scene_dir}/{scene_name}.ron`, reusing the parsed scene on later calls.
pub fn import_scene_from(scene_dir: &Path, scene_name: &str) -> HelixResult<Scene> {
    let file_path = scene_path(scene_dir, scene_name);
    let mut cache = SCENE_CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(cached_scene) = cache.get(&file_path) {
        return Ok(cached_scene.clone());
    }

    debug!("scene cache miss, reading {}", file_path.display());
    let file = File::open(&file_path)
        .map_err(|e| HelixError::ImportFailed(format!("{}: {}", file_path.display(), e)))?;
    let deserialized: Result<Scene, SpannedError> = from_reader(file);

    match deserialized {
        Ok(scene) => {
            cache.insert(file_path, scene.clone());
            Ok(scene)
        }
        Err(e) => Err(HelixError::ImportFailed(format!("{}: {}", file_path.display(), e))),
    }
}

pub fn parse_scene(text: &str) -> HelixResult<Scene> {
    ron::from_str(text).map_err(|e| HelixError::ImportFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inline_scene() {
        let scene = parse_scene("Projection(params: (angle: 0.5, spin: 2.0, phase: 0.0, pitch: 0.1))").unwrap();
        assert_eq!(scene.variant_name(), "Projection");
        assert!(matches!(scene, Scene::Projection { sample_count: None, .. }));
    }

    #[test]
    fn bad_text_is_an_import_failure() {
        assert!(matches!(parse_scene("Projection(params: 3)"), Err(HelixError::ImportFailed(_))));
    }

    #[test]
    fn missing_file_is_an_import_failure() {
        let result = import_scene_from(Path::new("assets/does_not_exist"), "nothing");
        assert!(matches!(result, Err(HelixError::ImportFailed(_))));
    }
}
