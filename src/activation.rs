use ndarray::Array2;

/// Logistic activation, applied elementwise.
pub struct Sigmoid;

impl Sigmoid {
    fn compute_one(x: &f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    pub fn compute(&self, x: &Array2<f64>) -> Array2<f64> {
        x.map(Sigmoid::compute_one)
    }

    pub fn derivative(&self, x: &Array2<f64>) -> Array2<f64> {
        x.map(|v| {
            let w = Sigmoid::compute_one(v);
            w * (1.0 - w)
        })
    }

    /// Derivative expressed through the activation value itself,
    /// `y * (1 - y)`. Backpropagation retains layer outputs rather than
    /// pre-activations, so this is the form the training step uses.
    pub fn derivative_from_output(&self, y: &Array2<f64>) -> Array2<f64> {
        y.map(|v| v * (1.0 - v))
    }
}
