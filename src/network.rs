use ndarray::{Array, Array2, ArrayView2};
use ndarray_rand::rand_distr::Normal;
use ndarray_rand::RandomExt;

use crate::activation::Sigmoid;
use crate::error::{NetworkError, Result};
use crate::topology::Topology;

pub const DEFAULT_LEARNING_RATE: f64 = 0.3;

/// A feedforward network with one sigmoid hidden layer and a sigmoid output
/// layer, trained by online gradient descent.
///
/// Vectors flow through the network in the column convention: an input of
/// length `n` becomes an `(n, 1)` matrix. The four parameter tensors are
/// owned by the network and are mutated only by [`Network::train`].
pub struct Network {
    topology: Topology,
    weights_ih: Array2<f64>,
    weights_ho: Array2<f64>,
    bias_hidden: Array2<f64>,
    bias_output: Array2<f64>,
    learning_rate: f64,
}

impl Network {
    pub fn new(topology: Topology) -> Self {
        Network::with_learning_rate(topology, DEFAULT_LEARNING_RATE)
    }

    /// Create a network with randomly initialized parameters. Weights are
    /// drawn from a zero-mean normal with standard deviation
    /// `2 / (fan_in + fan_out)`, biases with `1 / sqrt(layer_size)`.
    pub fn with_learning_rate(topology: Topology, learning_rate: f64) -> Self {
        let (inputs, hidden, outputs) = (topology.inputs(), topology.hidden(), topology.outputs());
        let weight_dist = |fan_in: usize, fan_out: usize| {
            Normal::new(0.0, 2.0 / (fan_in + fan_out) as f64).unwrap()
        };
        let bias_dist = |size: usize| Normal::new(0.0, 1.0 / (size as f64).sqrt()).unwrap();

        let weights_ih = Array::random((hidden, inputs), weight_dist(inputs, hidden));
        let weights_ho = Array::random((outputs, hidden), weight_dist(hidden, outputs));
        let bias_hidden = Array::random((hidden, 1), bias_dist(hidden));
        let bias_output = Array::random((outputs, 1), bias_dist(outputs));

        Self {
            topology,
            weights_ih,
            weights_ho,
            bias_hidden,
            bias_output,
            learning_rate,
        }
    }

    /// Create a network from fixed parameter tensors. Shapes must agree with
    /// the topology. Intended for deterministic tests and tooling.
    pub fn with_parameters(
        topology: Topology,
        learning_rate: f64,
        weights_ih: Array2<f64>,
        weights_ho: Array2<f64>,
        bias_hidden: Array2<f64>,
        bias_output: Array2<f64>,
    ) -> Self {
        let (inputs, hidden, outputs) = (topology.inputs(), topology.hidden(), topology.outputs());
        assert_eq!(weights_ih.dim(), (hidden, inputs));
        assert_eq!(weights_ho.dim(), (outputs, hidden));
        assert_eq!(bias_hidden.dim(), (hidden, 1));
        assert_eq!(bias_output.dim(), (outputs, 1));

        Self {
            topology,
            weights_ih,
            weights_ho,
            bias_hidden,
            bias_output,
            learning_rate,
        }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn weights_ih(&self) -> ArrayView2<f64> {
        self.weights_ih.view()
    }

    pub fn weights_ho(&self) -> ArrayView2<f64> {
        self.weights_ho.view()
    }

    pub fn bias_hidden(&self) -> ArrayView2<f64> {
        self.bias_hidden.view()
    }

    pub fn bias_output(&self) -> ArrayView2<f64> {
        self.bias_output.view()
    }

    /// Run the forward pass without touching any parameter.
    /// Every returned element lies strictly in (0, 1).
    pub fn infer(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        let inputs = self.input_column(inputs)?;
        let (_, outputs) = self.forward(&inputs);
        Ok(outputs.into_raw_vec())
    }

    /// Run one atomic training pass: forward, backpropagation, and a
    /// gradient-descent step on all four parameter tensors. Returns the
    /// forward-pass output as it was before the update.
    ///
    /// Both gradients are derived from the parameter values at the start of
    /// the call; the deltas are held in temporaries and applied together, so
    /// the hidden-layer gradient never sees partially updated output weights.
    pub fn train(&mut self, inputs: &[f64], targets: &[f64]) -> Result<Vec<f64>> {
        if targets.len() != self.topology.outputs() {
            return Err(NetworkError::DimensionMismatch {
                role: "targets",
                actual: targets.len(),
                config: self.topology,
            });
        }
        let inputs = self.input_column(inputs)?;
        let targets = Array2::from_shape_vec((targets.len(), 1), targets.to_vec()).unwrap();

        let (hidden_outputs, outputs) = self.forward(&inputs);

        let output_errors = &targets - &outputs;
        let output_grad = output_errors * Sigmoid.derivative_from_output(&outputs);
        let hidden_grad =
            self.weights_ho.t().dot(&output_grad) * Sigmoid.derivative_from_output(&hidden_outputs);

        let weights_ho_delta = output_grad.dot(&hidden_outputs.t());
        let weights_ih_delta = hidden_grad.dot(&inputs.t());

        self.weights_ho.scaled_add(self.learning_rate, &weights_ho_delta);
        self.bias_output.scaled_add(self.learning_rate, &output_grad);
        self.weights_ih.scaled_add(self.learning_rate, &weights_ih_delta);
        self.bias_hidden.scaled_add(self.learning_rate, &hidden_grad);

        Ok(outputs.into_raw_vec())
    }

    /// Textual snapshot of all four parameter tensors. Debug aid only.
    pub fn dump_parameters(&self) -> String {
        format!(
            "W_IH:\n{}\nB_HIDDEN:\n{}\nW_HO:\n{}\nB_OUTPUT:\n{}\n",
            self.weights_ih, self.bias_hidden, self.weights_ho, self.bias_output
        )
    }

    fn input_column(&self, inputs: &[f64]) -> Result<Array2<f64>> {
        if inputs.len() != self.topology.inputs() {
            return Err(NetworkError::DimensionMismatch {
                role: "inputs",
                actual: inputs.len(),
                config: self.topology,
            });
        }
        Ok(Array2::from_shape_vec((inputs.len(), 1), inputs.to_vec()).unwrap())
    }

    fn forward(&self, inputs: &Array2<f64>) -> (Array2<f64>, Array2<f64>) {
        let hidden_outputs = Sigmoid.compute(&(self.weights_ih.dot(inputs) + &self.bias_hidden));
        let outputs = Sigmoid.compute(&(self.weights_ho.dot(&hidden_outputs) + &self.bias_output));
        (hidden_outputs, outputs)
    }
}
