pub mod scene_management;
pub mod scene_catalog;
