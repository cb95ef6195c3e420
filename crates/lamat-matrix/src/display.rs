use std::io::Write;

use crate::matrix::Matrix;

/// Renders the matrix row by row, one bracketed row per line.
///
/// ```
/// use lamat_matrix::Matrix;
///
/// let m = Matrix::from_rows(&[[1, -2], [3, 4]]).unwrap();
/// assert_eq!(m.to_string(), "[1 -2]\n[3 4]\n");
/// ```
impl<T> std::fmt::Display for Matrix<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cols() == 0 {
            for _ in 0..self.rows() {
                writeln!(f, "[]")?;
            }
            return Ok(());
        }
        for row in self.iter_rows() {
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                // forward the caller's precision, e.g. `{:.3}`
                match f.precision() {
                    Some(p) => write!(f, "{v:.p$}")?,
                    None => write!(f, "{v}")?,
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl<T> Matrix<T>
where
    T: std::fmt::Display,
{
    /// Writes the rendering of the matrix to `out`.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying writer.
    pub fn print_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }

    /// Prints the matrix to stdout.
    ///
    /// A diagnostic helper: a failure to write to stdout is ignored.
    pub fn print(&self) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = self.print_to(&mut lock) {
            log::warn!("failed to print matrix: {e}");
        }
    }
}
