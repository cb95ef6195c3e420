use argh::FromArgs;
use lamat::{Matrix, MatrixError};
use rand::{rngs::StdRng, SeedableRng};

#[derive(FromArgs)]
/// Build random matrices and print their products, determinants and inverses
struct Args {
    /// order of the square matrix to invert
    #[argh(option, short = 'n', default = "3")]
    order: usize,

    /// seed for the random generator, drawn from the OS when omitted
    #[argh(option, short = 's')]
    seed: Option<u64>,

    /// lower bound of the sampled values
    #[argh(option, default = "-10.0")]
    low: f64,

    /// upper bound (exclusive) of the sampled values
    #[argh(option, default = "10.0")]
    high: f64,
}

fn section(title: &str, m: &Matrix<f64>) {
    println!("{title} ({}x{}):", m.rows(), m.cols());
    m.print();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    log::info!(
        "sampling from [{}, {}) with seed {:?}",
        args.low,
        args.high,
        args.seed
    );

    let a = Matrix::random_uniform(2, 3, args.low, args.high, &mut rng)?;
    let b = Matrix::random_uniform(3, 2, args.low, args.high, &mut rng)?;
    section("A", &a);
    section("B", &b);

    let c = (&b * &a)?;
    section("C = B * A", &c);
    log::info!("det(C) = {}", c.det()?);

    let d = (&a + &b.transposed())?;
    section("D = A + B^T", &d);

    // shape errors are reported, not fatal
    if let Err(e) = &a + &b {
        log::warn!("A + B rejected: {e}");
    }

    let m = Matrix::random_uniform(args.order, args.order, args.low, args.high, &mut rng)?;
    section("M", &m);
    println!("det(M) = {}", m.det()?);
    section("adj(M)", &m.adjugate()?);

    match m.inverse() {
        Ok(inv) => {
            section("inv(M)", &inv);
            section("inv(M) * M", &(&inv * &m)?);
        }
        Err(MatrixError::SingularMatrix) => log::warn!("M is singular"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
