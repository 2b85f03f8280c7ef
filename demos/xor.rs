use axon::metrics::accuracy;
use axon::{Network, Topology};
use ndarray_rand::rand::{thread_rng, Rng};

// The first output neuron votes for "false", the second for "true".
fn targets_for(label: bool) -> [f64; 2] {
    if label {
        [0.01, 0.99]
    } else {
        [0.99, 0.01]
    }
}

fn xor_label(a: f64, b: f64) -> bool {
    (a.round() as u8) ^ (b.round() as u8) == 1
}

fn main() -> axon::Result<()> {
    let topology = Topology::new(2, 4, 2)?;
    let mut network = Network::with_learning_rate(topology, 0.3);
    println!("network {} created", network.topology());

    let mut rng = thread_rng();
    for _ in 0..100_000 {
        let (a, b) = (rng.gen::<f64>(), rng.gen::<f64>());
        network.train(&[a, b], &targets_for(xor_label(a, b)))?;
    }

    let tries = 2_000;
    let mut labels = Vec::with_capacity(tries);
    let mut predictions = Vec::with_capacity(tries);
    for _ in 0..tries {
        let (a, b) = (rng.gen::<f64>(), rng.gen::<f64>());
        let outputs = network.infer(&[a, b])?;
        labels.push(xor_label(a, b));
        predictions.push(outputs[1] > outputs[0]);
    }

    println!("success rate: {:.1}%", 100.0 * accuracy(&labels, &predictions));
    Ok(())
}
