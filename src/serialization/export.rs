use std::fs;
use std::path::Path;
use bevy_utils::tracing::debug;
use ron::ser::{to_string_pretty, PrettyConfig};
use crate::core::helix_error::{HelixError, HelixResult};
use crate::scenes::scene_output::SceneOutput;

pub fn export_scene_output(output: &SceneOutput) -> HelixResult<String> {
    let config = PrettyConfig::new().depth_limit(4).indentor("  ".to_string());
    to_string_pretty(output, config).map_err(|e| HelixError::Other(format!("failed to serialize scene {}: {}", output.name, e)))
}

pub fn write_scene_output(output: &SceneOutput, path: &Path) -> HelixResult<()> {
    let text = export_scene_output(output)?;
    fs::write(path, text).map_err(|e| HelixError::Other(format!("failed to write {}: {}", path.display(), e)))?;
    debug!("wrote scene {} to {}", output.name, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::Curve;
    use crate::scenes::scene_output::LabeledCurve;
    use bevy_math::DVec3;

    #[test]
    fn exports_labels_and_coordinates() {
        let mut output = SceneOutput::new("line");
        output.curves.push(LabeledCurve::new("segment", Curve::from_points([DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0)])));
        let text = export_scene_output(&output).unwrap();
        assert!(text.contains("name: \"line\""));
        assert!(text.contains("\"segment\""));
        assert!(text.contains("3.0"));
    }
}
