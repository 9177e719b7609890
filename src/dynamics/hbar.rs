use crate::core::helix_error::{HelixError, HelixResult};
use crate::dynamics::lagrangian::HelicalMotion;

/// Moment of inertia of a uniform sphere, `2/5 m r²`.
pub fn moment_of_inertia(mass: f64, radius: f64) -> f64 {
    0.4 * mass * radius * radius
}

/// "Structural ħ": angular momentum `I ω` of the spinning sphere.
pub fn structural_hbar(motion: &HelicalMotion) -> HelixResult<f64> {
    motion.validate()?;
    Ok(moment_of_inertia(motion.mass, motion.radius) * motion.angular_frequency())
}

/// `½ m ω² r² (1 + ripple sin(ripple_frequency θ))` at each angle.
pub fn energy_profile(motion: &HelicalMotion, theta: &[f64], ripple: f64, ripple_frequency: f64) -> Vec<f64> {
    let omega = motion.angular_frequency();
    let base = 0.5 * motion.mass * omega * omega * motion.radius * motion.radius;
    theta
        .iter()
        .map(|t| base * (1.0 + ripple * (ripple_frequency * t).sin()))
        .collect()
}

/// Scales a profile by its maximum.
pub fn normalize_by_max(profile: &[f64]) -> HelixResult<Vec<f64>> {
    let max = profile.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max == 0.0 {
        return Err(HelixError::InvalidParameter(format!("cannot normalize a profile with maximum {}", max)));
    }
    Ok(profile.iter().map(|e| e / max).collect())
}

pub fn is_resonant(phase_offset: f64, window: f64) -> bool {
    phase_offset.abs() < window
}
