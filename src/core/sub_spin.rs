use serde::{Serialize, Deserialize};

// Secondary rotation riding on the main turn: radius gains
// `amplitude * cos(frequency * theta + phase)` and height gains
// `vertical_amplitude * sin(frequency * theta + phase)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct SubSpin {
    pub amplitude: f64,
    pub frequency: f64,
    pub vertical_amplitude: f64,
    pub phase: f64,
}

impl SubSpin {
    pub fn with_phase(self, phase: f64) -> Self {
        SubSpin { phase, ..self }
    }

    pub fn is_zero(&self) -> bool {
        self.amplitude == 0.0 && self.vertical_amplitude == 0.0
    }
}
