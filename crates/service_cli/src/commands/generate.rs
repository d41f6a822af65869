//! Generate command implementation
//!
//! Produces a synthetic obligor book with log-normal exposures and a
//! plausible spread of default probabilities, for demos and load tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::info;

use crate::input::ObligorRecord;
use crate::{CliError, Result};

// Log-scale location and spread of the exposure distribution.
const EXPOSURE_MU: f64 = 12.0;
const EXPOSURE_SIGMA: f64 = 1.2;

/// Run the generate command.
pub fn run(obligors: usize, seed: u64, output: &str) -> Result<()> {
    if obligors == 0 {
        return Err(CliError::InvalidArgument(
            "obligor count must be positive".to_string(),
        ));
    }

    info!("Generating {} synthetic obligors (seed {})", obligors, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut writer = csv::Writer::from_path(output)?;

    for i in 0..obligors {
        writer.serialize(synthetic_record(&mut rng, i))?;
    }

    writer.flush()?;
    info!("Book written to {}", output);
    Ok(())
}

fn synthetic_record<R: Rng>(rng: &mut R, index: usize) -> ObligorRecord {
    let z: f64 = rng.sample(StandardNormal);
    let exposure = (EXPOSURE_MU + EXPOSURE_SIGMA * z).exp();
    let default_probability: f64 = rng.gen_range(0.0005..0.08);

    ObligorRecord {
        id: format!("OBL{index:06}"),
        exposure: (exposure * 100.0).round() / 100.0,
        default_probability: (default_probability * 1e6).round() / 1e6,
    }
}
