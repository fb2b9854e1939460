//! # Outlier identification (Koyak's algorithm)
//!
//! Decide which reports of a track are outliers from a **pairwise** anomaly relation.
//!
//! ## Principle
//!
//! Every pair of reports `(r, s)` is first judged with an anomaly criterion: `a(r, s) = 1` if
//! the two reports cannot both be right (e.g. the speed needed to go from one to the other is
//! implausible), `0` otherwise. The relation is symmetric, so a single `1` does not tell which
//! of the two reports is wrong.
//!
//! A lone outlier is anomalous with respect to many other reports, so its row sum
//! `b(r) = Σ_s a(r, s)` is large while every other report only sees it once. The algorithm
//! greedily removes the report with the largest row sum, updates the other sums as if that
//! report never existed, and stops when no anomaly remains:
//!
//! ```text
//! b ← row sums of A
//! while max(b) > 0:
//!     r ← first index of max(b)
//!     flag r, b[r] ← 0
//!     for every unflagged j: b[j] ← b[j] − A[r, j]
//! ```
//!
//! The result is a deterministic, O(n²) approximation of a minimal cover of the anomaly graph,
//! not a global optimum. Ties are broken towards the **lowest index**.
//!
//! Reference: B. L. Young, *Predicting vessel trajectories from AIS data using R*, 2017.
//!
//! ## Modules
//!
//! * [`speed_criterion`] – Builds the anomaly matrix of a track from implied speeds and removes
//!   the flagged reports.
use nalgebra::DMatrix;

pub mod speed_criterion;

/// Symmetric binary matrix of pairwise anomaly indicators.
pub type AnomalyMatrix = DMatrix<u8>;

/// Index and value of the first maximum of `sums`.
#[inline]
fn first_argmax(sums: &[i64]) -> Option<(usize, i64)> {
    sums.iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, v)| match best {
            Some((_, bv)) if bv >= v => best,
            _ => Some((i, v)),
        })
}

/// Flag outliers from a pairwise anomaly matrix.
///
/// Arguments
/// -----------------
/// * `anomalies`: `n × n` symmetric matrix whose entries are `0` or `1`.
///
/// Return
/// ----------
/// * A vector of `n` flags, `true` for reports classified as outliers.
///
/// Panics
/// ----------
/// If `anomalies` is not square, not symmetric, or holds a value other than `0`/`1`. These
/// are programming errors of the caller, not data conditions.
///
/// Example
/// ----------
/// ```rust
/// use aistrack::outliers::{detect_outliers, AnomalyMatrix};
///
/// // Report 2 is anomalous with respect to every other report
/// let mut a = AnomalyMatrix::zeros(4, 4);
/// for j in [0, 1, 3] {
///     a[(2, j)] = 1;
///     a[(j, 2)] = 1;
/// }
/// assert_eq!(detect_outliers(&a), vec![false, false, true, false]);
/// ```
pub fn detect_outliers(anomalies: &AnomalyMatrix) -> Vec<bool> {
    assert!(anomalies.is_square(), "A must be a square matrix");
    assert!(
        anomalies == &anomalies.transpose(),
        "A must be a symmetric matrix"
    );
    assert!(
        anomalies.iter().all(|&v| v <= 1),
        "A must be a binary matrix"
    );

    let n = anomalies.nrows();
    let mut sums: Vec<i64> = anomalies
        .row_iter()
        .map(|row| row.iter().map(|&v| i64::from(v)).sum())
        .collect();
    let mut outliers = vec![false; n];

    while let Some((r, max)) = first_argmax(&sums) {
        if max <= 0 {
            break;
        }
        outliers[r] = true;
        sums[r] = 0;
        for j in 0..n {
            if !outliers[j] {
                sums[j] -= i64::from(anomalies[(r, j)]);
            }
        }
    }

    outliers
}
