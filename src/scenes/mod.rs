pub mod anchor;
pub mod evaluation;
pub mod scene;
pub mod scene_output;
