mod common;

use topoclick::data::trace::{extract_trace, mean_and_sd};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn mean_and_sd_divide_by_n() {
    let (m, sd) = mean_and_sd(&[1.0, 3.0, 5.0]);
    assert!(close(m, 3.0));
    assert!(close(sd, 1.633));
}

#[test]
fn mean_and_sd_of_single_sample_has_zero_sd() {
    let (m, sd) = mean_and_sd(&[2.5]);
    assert_eq!(m, 2.5);
    assert_eq!(sd, 0.0);
}

#[test]
fn epoch_trace_has_mean_and_band() {
    let ds = common::three_channel_epochs();
    let tr = extract_trace(&ds, 0).unwrap();
    assert_eq!(tr.channel, "Fp1");
    assert_eq!(tr.times, vec![-0.1, 0.0, 0.1]);
    assert!(close(tr.mean[0], 3.0));
    let band = tr.band.as_ref().unwrap();
    assert!(close(band[0][0], 1.367));
    assert!(close(band[0][1], 4.633));
    assert_eq!(band.len(), tr.mean.len());
}

#[test]
fn averaged_trace_has_no_band() {
    let ds = common::three_channel_averaged();
    let tr = extract_trace(&ds, 1).unwrap();
    assert_eq!(tr.channel, "Fp2");
    assert_eq!(tr.mean, vec![-1.0, -2.0, -3.0]);
    assert!(tr.band.is_none());
    assert!(tr.band_quads().is_empty());
}

#[test]
fn out_of_range_channel_has_no_trace() {
    let ds = common::three_channel_averaged();
    assert!(extract_trace(&ds, 3).is_none());
}

#[test]
fn extraction_is_pure() {
    let ds = common::three_channel_epochs();
    assert_eq!(extract_trace(&ds, 2), extract_trace(&ds, 2));
}

#[test]
fn band_quads_cover_consecutive_samples() {
    let ds = common::three_channel_epochs();
    let tr = extract_trace(&ds, 0).unwrap();
    let quads = tr.band_quads();
    assert_eq!(quads.len(), 2);
    let band = tr.band.as_ref().unwrap();
    assert_eq!(quads[0][0], [-0.1, band[0][0]]);
    assert_eq!(quads[0][1], [0.0, band[1][0]]);
    assert_eq!(quads[0][2], [0.0, band[1][1]]);
    assert_eq!(quads[0][3], [-0.1, band[0][1]]);
}

#[test]
fn value_extent_includes_band() {
    let ds = common::three_channel_epochs();
    let tr = extract_trace(&ds, 0).unwrap();
    let (lo, hi) = tr.value_extent().unwrap();
    assert!(close(lo, 1.367));
    assert!(hi > 5.0);
}
