use super::Pos;

/// Receives the state of the population after every completed step.
///
/// `positions[i]` pairs with `activations[i]`; agents appear in insertion
/// order.
pub trait StepObserver {
    fn on_step(&mut self, step: u64, positions: &[Pos], activations: &[f64]);
}

impl<F: FnMut(u64, &[Pos], &[f64])> StepObserver for F {
    fn on_step(&mut self, step: u64, positions: &[Pos], activations: &[f64]) {
        self(step, positions, activations)
    }
}

/// Observation of a single step.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub step: u64,
    pub positions: Vec<Pos>,
    pub activations: Vec<f64>,
}

/// Observer that records every frame of a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    pub frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Bit patterns of all recorded values, for exact comparisons between runs.
    pub fn fingerprint(&self) -> Vec<u64> {
        let mut bits = vec![];
        for frame in &self.frames {
            bits.push(frame.step);
            bits.push(frame.positions.len() as u64);
            for (&(x, y), a) in frame.positions.iter().zip(&frame.activations) {
                bits.extend([x as u64, y as u64, a.to_bits()]);
            }
        }
        bits
    }
}

impl StepObserver for Trajectory {
    fn on_step(&mut self, step: u64, positions: &[Pos], activations: &[f64]) {
        self.frames.push(Frame {
            step,
            positions: positions.to_vec(),
            activations: activations.to_vec(),
        });
    }
}
