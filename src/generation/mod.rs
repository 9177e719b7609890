pub mod coupling;
pub mod helix;
pub mod helpers;
pub mod transformation;
