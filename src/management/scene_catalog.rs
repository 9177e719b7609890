use std::fs;
use std::path::{Path, PathBuf};
use bevy_utils::tracing::{debug, warn};
use indexmap::IndexMap;
use walkdir::WalkDir;
use crate::core::helix_error::{HelixError, HelixResult};
use crate::management::scene_management::{parse_scene, SCENE_EXTENSION};
use crate::scenes::evaluation::{evaluate, SceneContext};
use crate::scenes::scene::Scene;
use crate::scenes::scene_output::SceneOutput;

/// Every scene file of one directory, keyed by file stem in name order.
#[derive(Debug, Clone, Default)]
pub struct SceneCatalog {
    scene_dir: PathBuf,
    scenes: IndexMap<String, Scene>,
}

impl SceneCatalog {
    pub fn load(scene_dir: impl AsRef<Path>) -> HelixResult<Self> {
        let scene_dir = scene_dir.as_ref();
        if !scene_dir.is_dir() {
            return Err(HelixError::ImportFailed(format!("{} is not a directory", scene_dir.display())));
        }

        let mut entries: Vec<(String, PathBuf)> = Vec::new();
        for entry in WalkDir::new(scene_dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable scene entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some(SCENE_EXTENSION) {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => entries.push((stem.to_string(), path.to_path_buf())),
                None => warn!("skipping scene file with a non-UTF-8 name: {}", path.display()),
            }
        }
        entries.sort();

        let mut scenes = IndexMap::with_capacity(entries.len());
        for (name, path) in entries {
            let text = fs::read_to_string(&path)
                .map_err(|e| HelixError::ImportFailed(format!("{}: {}", path.display(), e)))?;
            let scene = parse_scene(&text)
                .map_err(|e| HelixError::ImportFailed(format!("{}: {}", path.display(), e)))?;
            debug!("catalogued scene {} ({})", name, scene.variant_name());
            scenes.insert(name, scene);
        }

        Ok(SceneCatalog { scene_dir: scene_dir.to_path_buf(), scenes })
    }

    pub fn scene_dir(&self) -> &Path {
        &self.scene_dir
    }

    pub fn get(&self, name: &str) -> Option<&Scene> {
        self.scenes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scene)> {
        self.scenes.iter().map(|(name, scene)| (name.as_str(), scene))
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Evaluates every scene in name order. Anchors naming other scenes are
    /// resolved from the context's scene directory.
    pub fn evaluate_all(&self, ctx: &mut SceneContext) -> HelixResult<Vec<SceneOutput>> {
        self.iter().map(|(name, scene)| evaluate(name, scene, ctx)).collect()
    }
}
