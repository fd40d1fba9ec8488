#![allow(dead_code)]

use ndarray::{array, Array3};

use topoclick::{AmplitudeSource, Channel, Dataset, Palette};

/// Three channels Fp1/Fp2/Cz over three samples, three epochs.
///
/// Fp1 at t=0 holds the epoch values 1, 3, 5.
pub fn three_channel_epochs() -> Dataset {
    let channels = vec![
        Channel::new("Fp1", [-0.3, 0.9]),
        Channel::new("Fp2", [0.3, 0.9]),
        Channel::new("Cz", [0.0, 0.0]),
    ];
    let times = vec![-0.1, 0.0, 0.1];
    let data = Array3::from_shape_fn((3, 3, 3), |(e, c, t)| {
        let base = (2 * e + 1) as f64;
        base + (c * 10) as f64 + t as f64 * 0.5
    });
    Dataset::new(channels, times, AmplitudeSource::Epochs(data)).unwrap()
}

/// Same channels, averaged only.
pub fn three_channel_averaged() -> Dataset {
    let channels = vec![
        Channel::new("Fp1", [-0.3, 0.9]),
        Channel::new("Fp2", [0.3, 0.9]),
        Channel::new("Cz", [0.0, 0.0]),
    ];
    let times = vec![-0.1, 0.0, 0.1];
    let data = array![[1.0, 2.0, 3.0], [-1.0, -2.0, -3.0], [0.5, 0.0, -0.5]];
    Dataset::new(channels, times, AmplitudeSource::Averaged(data)).unwrap()
}

pub fn blue_green_cyan() -> Palette {
    Palette::from_names(&["blue", "green", "cyan"]).unwrap()
}
