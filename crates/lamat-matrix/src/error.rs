use thiserror::Error;

/// An error type for matrix operations.
///
/// Every fallible operation validates its preconditions before allocating a
/// result, so an error never leaves an operand partially modified.
#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    /// The operand shapes are incompatible for the requested operation.
    ///
    /// # Examples
    /// - Adding a 2x3 matrix to a 4x2 matrix
    /// - Multiplying a 2x3 matrix by a 4x24 matrix (inner dimensions differ)
    #[error("Dimension mismatch in {operation}: lhs shape {lhs:?}, rhs shape {rhs:?}")]
    DimensionMismatch {
        /// Name of the operation that failed
        operation: &'static str,
        /// Shape of the left-hand operand as `[rows, cols]`
        lhs: [usize; 2],
        /// Shape of the right-hand operand as `[rows, cols]`
        rhs: [usize; 2],
    },

    /// The operation is only defined for square matrices.
    #[error("{operation} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Name of the operation that failed
        operation: &'static str,
        /// Number of rows of the operand
        rows: usize,
        /// Number of columns of the operand
        cols: usize,
    },

    /// Element index outside of `[0, rows) x [0, cols)`.
    #[error("Index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// The requested row
        row: usize,
        /// The requested column
        col: usize,
        /// Number of rows of the matrix
        rows: usize,
        /// Number of columns of the matrix
        cols: usize,
    },

    /// The provided data does not fill the requested shape.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// The determinant is exactly zero, so no inverse exists.
    #[error("Matrix is singular (determinant is zero) and cannot be inverted")]
    SingularMatrix,

    /// Division of a matrix by a zero scalar.
    #[error("Division of a matrix by a zero scalar")]
    DivisionByZero,

    /// The sampling range for a random matrix is empty or not finite.
    #[error("Invalid sampling range: {0}")]
    InvalidSampleRange(String),
}

impl MatrixError {
    /// Creates a DimensionMismatch error from the two operand shapes.
    pub fn dimension_mismatch(operation: &'static str, lhs: [usize; 2], rhs: [usize; 2]) -> Self {
        Self::DimensionMismatch {
            operation,
            lhs,
            rhs,
        }
    }

    /// Creates a NotSquare error for the given operand shape.
    pub fn not_square(operation: &'static str, rows: usize, cols: usize) -> Self {
        Self::NotSquare {
            operation,
            rows,
            cols,
        }
    }

    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(row: usize, col: usize, shape: [usize; 2]) -> Self {
        Self::IndexOutOfBounds {
            row,
            col,
            rows: shape[0],
            cols: shape[1],
        }
    }

    /// Creates an InvalidShape error.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Returns true if the operand shapes were incompatible with the operation.
    ///
    /// Both [`MatrixError::DimensionMismatch`] and [`MatrixError::NotSquare`]
    /// belong to this category.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. } | Self::NotSquare { .. })
    }
}
