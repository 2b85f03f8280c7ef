use std::fmt;

use crate::error::{NetworkError, Result};

/// Layer sizes of a network: input, hidden and output neuron counts.
/// Validated once at construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    inputs: usize,
    hidden: usize,
    outputs: usize,
}

impl Topology {
    pub fn new(inputs: usize, hidden: usize, outputs: usize) -> Result<Self> {
        for (name, count) in [("input", inputs), ("hidden", hidden), ("output", outputs)] {
            if count == 0 {
                return Err(NetworkError::InvalidTopology(format!(
                    "only a positive count of {} neurons is allowed",
                    name
                )));
            }
        }
        Ok(Self {
            inputs,
            hidden,
            outputs,
        })
    }

    /// Build a topology from a slice of layer sizes.
    /// The slice must contain exactly 3 entries.
    pub fn from_slice(sizes: &[usize]) -> Result<Self> {
        match sizes {
            &[inputs, hidden, outputs] => Self::new(inputs, hidden, outputs),
            _ => Err(NetworkError::InvalidTopology(format!(
                "exactly 3 layer sizes must be specified ({} passed)",
                sizes.len()
            ))),
        }
    }

    pub fn inputs(&self) -> usize {
        self.inputs
    }

    pub fn hidden(&self) -> usize {
        self.hidden
    }

    pub fn outputs(&self) -> usize {
        self.outputs
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{}:{})", self.inputs, self.hidden, self.outputs)
    }
}
