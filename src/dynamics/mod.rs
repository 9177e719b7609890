pub mod derivatives;
pub mod hbar;
pub mod lagrangian;
