/// Compute accuracy of the predicted labels `y_pred` to the correct labels `y_true`.
pub fn accuracy<Label>(y_true: &[Label], y_pred: &[Label]) -> f64
where
    Label: Eq,
{
    let n_corrects = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    n_corrects as f64 / y_true.len() as f64
}

/// Sum of squared differences between outputs and targets.
pub fn sum_squared_error(outputs: &[f64], targets: &[f64]) -> f64 {
    assert_eq!(outputs.len(), targets.len());
    outputs
        .iter()
        .zip(targets.iter())
        .map(|(output, target)| (output - target).powi(2))
        .sum()
}
