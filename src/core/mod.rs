pub mod coupling_point;
pub mod curve;
pub mod curve_params;
pub mod generator_config;
pub mod helix_error;
pub mod helix_spec;
pub mod rand_data;
pub mod sample_size;
pub mod seeded_or_not;
pub mod sub_spin;
pub mod surface;
