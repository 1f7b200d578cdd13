use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::matrix::Matrix;
use crate::rings::fraction::Fraction;

pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Small integer cells keep powers and products well inside `i64`.
pub(crate) fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<i64> {
    let lines: Vec<Vec<i64>> = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(-4..=4)).collect())
        .collect();
    Matrix::from_list(lines).unwrap()
}

pub(crate) fn to_fractions(m: &Matrix<i64>) -> Matrix<Fraction> {
    m.map(|&v| Fraction::from(v))
}
