mod common;

use aistrack::constants::SPEED_MAX;
use aistrack::outliers::speed_criterion::{remove_outliers, speed_anomaly_matrix};
use aistrack::outliers::{detect_outliers, AnomalyMatrix};
use aistrack::segmentation::SegmentationPipeline;
use common::eastbound_track;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, n: usize, density: f64) -> AnomalyMatrix {
    let mut a = AnomalyMatrix::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(density) {
                a[(i, j)] = 1;
                a[(j, i)] = 1;
            }
        }
    }
    a
}

/// `b[i, j] = a[perm[i], perm[j]]`
fn permute(a: &AnomalyMatrix, perm: &[usize]) -> AnomalyMatrix {
    let n = a.nrows();
    AnomalyMatrix::from_fn(n, n, |i, j| a[(perm[i], perm[j])])
}

#[test]
fn test_zero_matrix_has_no_outlier() {
    for n in [0, 1, 7, 64] {
        assert_eq!(detect_outliers(&AnomalyMatrix::zeros(n, n)), vec![false; n]);
    }
}

#[test]
fn test_star_center_is_flagged_wherever_it_sits() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 12;
    let mut star = AnomalyMatrix::zeros(n, n);
    for j in 1..n {
        star[(0, j)] = 1;
        star[(j, 0)] = 1;
    }

    for _ in 0..20 {
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(&mut rng);
        let flags = detect_outliers(&permute(&star, &perm));

        let center = perm.iter().position(|&p| p == 0).unwrap();
        let expected: Vec<bool> = (0..n).map(|i| i == center).collect();
        assert_eq!(flags, expected);
    }
}

#[test]
fn test_flags_cover_every_anomaly() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.random_range(2..40);
        let a = random_graph(&mut rng, n, 0.15);
        let flags = detect_outliers(&a);

        // No anomalous pair survives among the kept reports
        for i in 0..n {
            for j in 0..n {
                if a[(i, j)] == 1 {
                    assert!(flags[i] || flags[j], "pair ({i}, {j}) left uncovered");
                }
            }
        }
        // Isolated reports are never flagged
        for i in 0..n {
            if a.row(i).iter().all(|&v| v == 0) {
                assert!(!flags[i]);
            }
        }
    }
}

#[test]
fn test_flag_count_is_permutation_invariant_with_unique_maxima() {
    // Two disjoint stars of different sizes: the centers have strictly larger sums at every step
    let n = 15;
    let mut a = AnomalyMatrix::zeros(n, n);
    for j in 1..8 {
        a[(0, j)] = 1;
        a[(j, 0)] = 1;
    }
    for j in 9..12 {
        a[(8, j)] = 1;
        a[(j, 8)] = 1;
    }

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(&mut rng);
        let flags = detect_outliers(&permute(&a, &perm));

        let flagged: Vec<usize> = (0..n).filter(|&i| flags[i]).map(|i| perm[i]).collect();
        let mut flagged = flagged;
        flagged.sort_unstable();
        assert_eq!(flagged, vec![0, 8]);
    }
}

#[test]
fn test_glitches_removed_before_segmentation() {
    // 13 h at one report per minute, with three position glitches
    let mut track = eastbound_track(219_000_001, 0, 60, 13 * 60 + 1);
    for (i, dlat) in [(100, 0.5), (400, -0.8), (650, 1.2)] {
        track[i].lat += dlat;
    }

    let a = speed_anomaly_matrix(&track, SPEED_MAX);
    assert_eq!(a, a.transpose());
    let flags = detect_outliers(&a);
    let flagged: Vec<usize> = (0..track.len()).filter(|&i| flags[i]).collect();
    assert_eq!(flagged, vec![100, 400, 650]);

    let clean = remove_outliers(&track, SPEED_MAX);
    assert_eq!(clean.len(), track.len() - 3);
    assert!(clean.windows(2).all(|w| w[0].timestamp < w[1].timestamp));

    let segments = SegmentationPipeline::default().run([&clean]);
    assert_eq!(segments.len(), 1);
    assert!(segments[0].iter().all(|o| (o.lat - 54.0).abs() < 1e-6));
}

#[test]
#[should_panic(expected = "A must be a symmetric matrix")]
fn test_asymmetric_input_panics() {
    let mut a = AnomalyMatrix::zeros(3, 3);
    a[(0, 1)] = 1;
    detect_outliers(&a);
}
