use std::f64::consts::PI;

use axon::metrics::sum_squared_error;
use axon::{Network, Topology};
use ndarray_rand::rand::{seq::SliceRandom, thread_rng};

const SAMPLES: usize = 200_000;
const EPOCHS: usize = 4;

// Inputs cover (0, 1); targets are cos(3 * pi * x) squeezed from [-1, 1]
// into [0.05, 0.95] to stay inside the sigmoid output range.
fn input_at(sample: usize) -> f64 {
    (sample + 1) as f64 / (SAMPLES + 1) as f64
}

fn scaled_cosine(x: f64) -> f64 {
    let result = (3.0 * PI * x).cos();
    ((result + 1.0) / 2.0) * 0.9 + 0.05
}

fn main() -> axon::Result<()> {
    let topology = Topology::new(1, 200, 1)?;
    let mut network = Network::with_learning_rate(topology, 0.3);
    println!("network {} created", network.topology());
    println!("{}", network.dump_parameters());

    let mut train_data = (0..SAMPLES)
        .map(|n| {
            let x = input_at(n);
            (x, scaled_cosine(x))
        })
        .collect::<Vec<_>>();

    let mut rng = thread_rng();
    for epoch in 0..EPOCHS {
        train_data.shuffle(&mut rng);
        let mut total_error = 0.0;
        for &(x, target) in &train_data {
            let outputs = network.train(&[x], &[target])?;
            total_error += sum_squared_error(&outputs, &[target]);
        }
        println!(
            "epoch {}: mean squared error {}",
            epoch,
            total_error / SAMPLES as f64
        );
    }
    println!("{}", network.dump_parameters());

    for i in 0..=20 {
        let x = i as f64 / 20.0;
        let prediction = network.infer(&[x])?[0];
        println!(
            "x = {:.2}: predicted {:.3}, expected {:.3}",
            x,
            prediction,
            scaled_cosine(x)
        );
    }
    Ok(())
}
