use std::f64::consts::PI;

use axon::metrics::{accuracy, sum_squared_error};
use axon::{Network, Topology};
use ndarray_rand::rand::{seq::SliceRandom, thread_rng, Rng};

#[test]
fn fixed_pair_training_converges() {
    let mut network = Network::with_learning_rate(Topology::new(2, 4, 2).unwrap(), 0.3);
    let inputs = [0.1, 0.1];
    let targets = [0.9, 0.1];

    let initial_error = sum_squared_error(&network.infer(&inputs).unwrap(), &targets);
    for _ in 0..1000 {
        network.train(&inputs, &targets).unwrap();
    }
    let outputs = network.infer(&inputs).unwrap();

    assert!(sum_squared_error(&outputs, &targets) < initial_error);
    for (output, target) in outputs.iter().zip(targets.iter()) {
        assert!(
            (output - target).abs() < 0.05,
            "output {} strayed from target {}",
            output,
            target
        );
    }
}

fn scaled_cosine(x: f64) -> f64 {
    ((3.0 * PI * x).cos() + 1.0) / 2.0 * 0.9 + 0.05
}

#[test]
fn learns_scaled_cosine() {
    let samples = 50_000;
    let mut train_data = (0..samples)
        .map(|n| {
            let x = (n + 1) as f64 / (samples + 1) as f64;
            (x, scaled_cosine(x))
        })
        .collect::<Vec<_>>();

    let mut network = Network::with_learning_rate(Topology::new(1, 200, 1).unwrap(), 0.3);
    let mut rng = thread_rng();
    for _ in 0..4 {
        train_data.shuffle(&mut rng);
        for &(x, target) in &train_data {
            network.train(&[x], &[target]).unwrap();
        }
    }

    // cos(0) maps to 0.95, cos(3 * pi / 2) maps to 0.5.
    for (x, expected) in [(0.0, 0.95), (0.5, 0.5)] {
        let prediction = network.infer(&[x]).unwrap()[0];
        assert!(
            (prediction - expected).abs() < 0.1,
            "prediction {} at x = {} strayed from {}",
            prediction,
            x,
            expected
        );
    }
}

#[test]
fn classifies_xor_pairs() {
    fn xor_label(a: f64, b: f64) -> bool {
        (a.round() as u8) ^ (b.round() as u8) == 1
    }

    let mut network = Network::with_learning_rate(Topology::new(2, 4, 2).unwrap(), 0.3);
    let mut rng = thread_rng();
    for _ in 0..100_000 {
        let (a, b) = (rng.gen::<f64>(), rng.gen::<f64>());
        let targets = if xor_label(a, b) {
            [0.01, 0.99]
        } else {
            [0.99, 0.01]
        };
        network.train(&[a, b], &targets).unwrap();
    }

    let tries = 2_000;
    let mut labels = Vec::with_capacity(tries);
    let mut predictions = Vec::with_capacity(tries);
    for _ in 0..tries {
        let (a, b) = (rng.gen::<f64>(), rng.gen::<f64>());
        let outputs = network.infer(&[a, b]).unwrap();
        labels.push(xor_label(a, b));
        predictions.push(outputs[1] > outputs[0]);
    }

    let accuracy = accuracy(&labels, &predictions);
    assert!(accuracy > 0.9, "held-out accuracy was only {}", accuracy);
}
