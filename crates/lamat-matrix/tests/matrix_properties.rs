use approx::assert_relative_eq;
use lamat_matrix::{is_nan, Matrix, MatrixError};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<f64> {
    let data = (0..rows * cols)
        .map(|_| rng.random_range(-10.0..10.0))
        .collect();
    Matrix::from_shape_vec([rows, cols], data).unwrap()
}

fn identity(n: usize) -> Matrix<f64> {
    Matrix::identity(n)
}

#[test]
fn multiplication() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(0);
    let a = random_matrix(&mut rng, 2, 3);
    let b = random_matrix(&mut rng, 3, 2);

    assert_eq!((&a * &b)?.shape(), [2, 2]);

    let c = (&b * &a)?;
    assert!(!is_nan(&c));
    assert_eq!(c.shape(), [3, 3]);

    let id = identity(3);
    assert_eq!((&c * &id)?, c);
    assert_eq!((&id * &c)?, c);

    // b * a has rank two, its determinant vanishes up to rounding
    let det = c.det()?;
    assert!(det.is_finite());
    assert_relative_eq!(det, 0.0, epsilon = 1e-6);
    Ok(())
}

#[test]
fn multiplication_shapes() {
    let mut rng = StdRng::seed_from_u64(1);
    let a = random_matrix(&mut rng, 2, 3);

    let ok = a.matmul(&random_matrix(&mut rng, 3, 24));
    assert_eq!(ok.map(|m| m.shape()), Ok([2, 24]));

    let err = a.matmul(&random_matrix(&mut rng, 4, 24));
    assert!(err.is_err_and(|e| e.is_dimension_error()));
}

#[test]
fn addition() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(2);
    let a = random_matrix(&mut rng, 2, 3);
    let b = random_matrix(&mut rng, 2, 3);
    let c = random_matrix(&mut rng, 2, 3);

    let ab = (&a + &b)?;
    assert!(!is_nan(&ab));
    assert_eq!(ab, (&b + &a)?);

    let left = (&ab + &c)?;
    let right = (&a + &(&b + &c)?)?;
    assert_relative_eq!(left, right, epsilon = 1e-12);

    let zero = Matrix::new(2, 3);
    assert_eq!((&ab + &zero)?, ab);
    assert_eq!((&zero + &ab)?, ab);

    let mismatched = random_matrix(&mut rng, 4, 2);
    assert!((&a + &mismatched).unwrap_err().is_dimension_error());
    Ok(())
}

#[test]
fn transpose_is_involution() {
    let mut rng = StdRng::seed_from_u64(3);
    for (rows, cols) in [(1, 1), (2, 5), (4, 3), (0, 2)] {
        let a = random_matrix(&mut rng, rows, cols);
        assert_eq!(a.transposed().shape(), [cols, rows]);
        assert_eq!(a.transposed().transposed(), a);
    }
}

#[test]
fn specific_operations() -> Result<(), MatrixError> {
    let mut a = Matrix::<f64>::new(3, 3);
    for (i, row) in [[5.0, 1.0, 3.0], [-4.0, 1.0, -2.0], [0.0, 7.0, 0.0]]
        .iter()
        .enumerate()
    {
        for (j, &v) in row.iter().enumerate() {
            a[(i, j)] = v;
        }
    }

    assert_eq!(a.det()?, -14.0);

    let transposed = Matrix::from_rows(&[[5.0, -4.0, 0.0], [1.0, 1.0, 7.0], [3.0, -2.0, 0.0]])?;
    assert_eq!(a.transposed(), transposed);

    let adjugate = Matrix::from_rows(&[
        [14.0, 21.0, -5.0],
        [0.0, 0.0, -2.0],
        [-28.0, -35.0, 9.0],
    ])?;
    assert_eq!(a.adjoint()?, adjugate);

    let inv = a.inverse()?;
    assert_relative_eq!((&inv * &a)?, identity(3), epsilon = 1e-12);
    assert_relative_eq!((&a * &inv)?, identity(3), epsilon = 1e-12);
    Ok(())
}

#[test]
fn inverse_of_random_matrices() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(4);
    for n in 1..=5 {
        let a = random_matrix(&mut rng, n, n);
        let det = a.det()?;
        if det == 0.0 {
            continue;
        }
        let inv = a.inverse()?;
        assert_relative_eq!((&inv * &a)?, identity(n), epsilon = 1e-8);

        // inverse equals adjugate over determinant
        assert_relative_eq!(inv, (&a.adjugate()? / det)?, epsilon = 1e-12);

        // the cofactor matrix is the transposed adjugate
        assert_eq!(a.cofactor_matrix()?.transposed(), a.adjugate()?);
    }
    Ok(())
}

#[test]
fn integer_scalars_are_exact() -> Result<(), MatrixError> {
    let a = Matrix::from_rows(&[[1i64, 2, 3], [0, 1, 4], [5, 6, 0]])?;
    assert_eq!(a.det()?, 1);
    let adj = a.adjugate()?;
    assert_eq!((&adj * &a)?, Matrix::identity(3));
    assert!(!is_nan(&a));
    Ok(())
}

#[test]
fn singular_and_non_square() {
    let singular = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
    assert_eq!(singular.det(), Ok(0.0));
    assert_eq!(singular.inverse(), Err(MatrixError::SingularMatrix));

    let rect = Matrix::<f64>::new(2, 3);
    for err in [
        rect.det().unwrap_err(),
        rect.adjugate().unwrap_err(),
        rect.inverse().unwrap_err(),
    ] {
        assert!(err.is_dimension_error());
    }
}

#[test]
fn nan_is_detected_not_raised() -> Result<(), MatrixError> {
    let mut a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    assert!(!is_nan(&a));
    a[(0, 0)] = f64::NAN;
    assert!(is_nan(&a));

    // NaN flows through arithmetic without an error
    let b = (&a * &identity(2))?;
    assert!(is_nan(&b));
    Ok(())
}
