use rand::distributions::Distribution;
use serde::{Serialize, Deserialize};
use statrs::distribution::{Normal, Uniform};
use crate::core::helix_error::{HelixError, HelixResult};
use crate::generation::helpers::GenRng;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum RandData {
    Fixed(f64),
    Uniform { min: f64, max: f64 },
    Gaussian { mean: f64, std_dev: f64 },
}

impl RandData {
    /// Draws one value. `Fixed` leaves the generator untouched.
    pub fn sample(&self, gen_rng: &mut GenRng) -> HelixResult<f64> {
        match *self {
            RandData::Fixed(value) => Ok(value),
            RandData::Uniform { min, max } => {
                if min == max {
                    return Ok(min);
                }
                let uniform = Uniform::new(min, max)
                    .map_err(|e| HelixError::InvalidParameter(format!("uniform range [{}, {}]: {}", min, max, e)))?;
                Ok(uniform.sample(gen_rng.rng_mut()))
            }
            RandData::Gaussian { mean, std_dev } => {
                if !mean.is_finite() || !std_dev.is_finite() {
                    return Err(HelixError::InvalidParameter(format!("gaussian mean {} std dev {} must be finite", mean, std_dev)));
                }
                let normal = Normal::new(mean, std_dev)
                    .map_err(|e| HelixError::InvalidParameter(format!("gaussian mean {} std dev {}: {}", mean, std_dev, e)))?;
                Ok(normal.sample(gen_rng.rng_mut()))
            }
        }
    }
}
