use crate::distr::Randomness;
use crate::error::IbpError;
use crate::feat::FeatureAllocation;
use crate::ibp::{self, IbpParameters};
use crate::prelude::*;

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::slice;

const STATUS_OK: i32 = 0;
const STATUS_INVALID: i32 = -1;

/// Draws one allocation and writes it column-major (1 = possessed) into
/// `matrix`, which must hold `n_items * truncation_level` entries. Returns the
/// number of features written.
pub fn sample_into_slice<R: Randomness + ?Sized>(
    parameters: &IbpParameters,
    matrix: &mut [i32],
    rng: &mut R,
) -> Result<usize, IbpError> {
    let expected = parameters.n_items * parameters.truncation_level();
    if matrix.len() < expected {
        return Err(IbpError::Shape {
            feature: 0,
            expected,
            found: matrix.len(),
        });
    }
    let allocation = ibp::sample(parameters, rng)?;
    let values = allocation.to_column_major();
    matrix[..values.len()].copy_from_slice(&values);
    matrix[values.len()..expected].fill(0);
    Ok(allocation.n_features())
}

pub fn left_order_slice(
    n_items: usize,
    n_features: usize,
    matrix: &mut [i32],
) -> Result<(), IbpError> {
    let allocation = FeatureAllocation::from_column_major(n_items, n_features, matrix)?;
    let values = allocation.left_ordered().to_column_major();
    matrix[..values.len()].copy_from_slice(&values);
    Ok(())
}

fn parameters_from_raw(
    n_items: i32,
    alpha: f64,
    reduced_proportion: f64,
) -> Result<IbpParameters, IbpError> {
    let n_items = usize::try_from(n_items).map_err(|_| IbpError::NoItems)?;
    IbpParameters::new(
        n_items,
        Concentration::new(alpha)?,
        Damping::new(reduced_proportion)?,
    )
}

#[no_mangle]
pub extern "C" fn dahl_ibp__truncation_level(n_items: i32, alpha: f64) -> i32 {
    match parameters_from_raw(n_items, alpha, 1.0) {
        Ok(parameters) => i32::try_from(parameters.truncation_level()).unwrap_or(STATUS_INVALID),
        Err(_) => STATUS_INVALID,
    }
}

/// # Safety
///
/// `matrix_ptr` must point to `n_items * dahl_ibp__truncation_level(n_items, alpha)`
/// writable values and `n_features_ptr` to one writable value.
#[no_mangle]
pub unsafe extern "C" fn dahl_ibp__sample(
    n_items: i32,
    alpha: f64,
    reduced_proportion: f64,
    seed: u64,
    matrix_ptr: *mut i32,
    n_features_ptr: *mut i32,
) -> i32 {
    let parameters = match parameters_from_raw(n_items, alpha, reduced_proportion) {
        Ok(parameters) => parameters,
        Err(error) => {
            tracing::trace!(%error, "rejected parameters");
            return STATUS_INVALID;
        }
    };
    if matrix_ptr.is_null() || n_features_ptr.is_null() {
        return STATUS_INVALID;
    }
    let len = parameters.n_items * parameters.truncation_level();
    let matrix: &mut [i32] = slice::from_raw_parts_mut(matrix_ptr, len);
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);
    match sample_into_slice(&parameters, matrix, rng) {
        Ok(n_features) => {
            *n_features_ptr = n_features as i32;
            STATUS_OK
        }
        Err(error) => {
            tracing::trace!(%error, "sampling failed");
            STATUS_INVALID
        }
    }
}

/// # Safety
///
/// `matrix_ptr` must point to `n_items * n_features` writable values.
#[no_mangle]
pub unsafe extern "C" fn dahl_ibp__left_order(
    n_items: i32,
    n_features: i32,
    matrix_ptr: *mut i32,
) -> i32 {
    let (Ok(ni), Ok(nf)) = (usize::try_from(n_items), usize::try_from(n_features)) else {
        return STATUS_INVALID;
    };
    if matrix_ptr.is_null() {
        return STATUS_INVALID;
    }
    let matrix: &mut [i32] = slice::from_raw_parts_mut(matrix_ptr, ni * nf);
    match left_order_slice(ni, nf, matrix) {
        Ok(()) => STATUS_OK,
        Err(_) => STATUS_INVALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_level() {
        assert_eq!(dahl_ibp__truncation_level(1, 1.0), 4);
        assert_eq!(dahl_ibp__truncation_level(0, 1.0), STATUS_INVALID);
        assert_eq!(dahl_ibp__truncation_level(5, -1.0), STATUS_INVALID);
        assert_eq!(dahl_ibp__truncation_level(2, 1e12), STATUS_INVALID);
    }

    #[test]
    fn test_sample_matches_safe_api() {
        let n_items = 10;
        let len = (n_items * dahl_ibp__truncation_level(n_items, 4.0)) as usize;
        let mut matrix = vec![-1; len];
        let mut n_features = -1;
        let status = unsafe {
            dahl_ibp__sample(n_items, 4.0, 0.5, 2024, matrix.as_mut_ptr(), &mut n_features)
        };
        assert_eq!(status, STATUS_OK);
        let parameters = parameters_from_raw(n_items, 4.0, 0.5).unwrap();
        let expected = ibp::sample(&parameters, &mut Pcg64Mcg::seed_from_u64(2024)).unwrap();
        assert_eq!(n_features as usize, expected.n_features());
        let nf = n_features as usize;
        let ni = n_items as usize;
        assert_eq!(
            FeatureAllocation::from_column_major(ni, nf, &matrix).unwrap(),
            expected
        );
        assert!(matrix[ni * nf..].iter().all(|&x| x == 0));
    }

    #[test]
    fn test_sample_invalid() {
        let mut matrix = vec![0; 4];
        let mut n_features = 0;
        let status =
            unsafe { dahl_ibp__sample(1, 1.0, 2.0, 1, matrix.as_mut_ptr(), &mut n_features) };
        assert_eq!(status, STATUS_INVALID);
    }

    #[test]
    fn test_sample_into_short_slice() {
        let parameters = parameters_from_raw(3, 1.0, 1.0).unwrap();
        let mut matrix = vec![0; 2];
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let result = sample_into_slice(&parameters, &mut matrix, rng);
        assert!(matches!(result, Err(IbpError::Shape { .. })));
    }

    #[test]
    fn test_left_order() {
        let mut matrix = vec![1, 0, 0, 1, 1, 1];
        let status = unsafe { dahl_ibp__left_order(2, 3, matrix.as_mut_ptr()) };
        assert_eq!(status, STATUS_OK);
        assert_eq!(matrix, vec![1, 1, 1, 0, 0, 1]);
    }
}
