/// Output driver
///
/// Seeds one rng, calls the generator N times and streams each line to the sink
/// in order. Any I/O failure stops the run and is returned to the caller.

use crate::clock::Clock;
use crate::generator::MessageGenerator;
use crate::stats::GenerationStats;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const PROGRESS_INTERVAL: usize = 1000;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Write `count` messages to `out`, drawing from `rng` in call order
pub fn write_messages<W, R, C>(
    out: &mut W,
    rng: &mut R,
    generator: &MessageGenerator<C>,
    count: usize,
) -> io::Result<GenerationStats>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
    C: Clock,
{
    let mut stats = GenerationStats::new();
    stats.start();

    for i in 0..count {
        let line = generator.generate(rng);
        out.write_all(line.as_bytes())?;
        stats.record_message(line.len());

        if i % PROGRESS_INTERVAL == 0 && i > 0 {
            debug!("Generated {} messages", i);
        }
    }

    out.flush()?;
    stats.finish();
    Ok(stats)
}

/// Create (or truncate) `path` and fill it with `count` messages seeded from the
/// generator's config
pub fn generate_to_file<C: Clock>(
    path: &Path,
    count: usize,
    generator: &MessageGenerator<C>,
) -> GeneratorResult<GenerationStats> {
    let mut rng = StdRng::seed_from_u64(generator.config().seed);

    info!(path = %path.display(), "Generating {} FIX messages as JSON", count);

    let file = File::create(path).map_err(|source| GeneratorError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);

    let stats = write_messages(&mut out, &mut rng, generator, count).map_err(|source| {
        GeneratorError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    stats.log_summary();
    Ok(stats)
}
