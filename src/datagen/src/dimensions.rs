use std::fs::File;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::writer;
use crate::INSTALL_WINDOW_MS;
use crate::START_TMS;
use crate::USER_DIMENSIONS_FILE;

/// Writes `users` rows of `[user_id, install_tms]` to a single
/// `user_dimensions.csv.gz` in `dir`. Ids are v4 UUIDs, so pairwise
/// distinct; install times are uniform over one day from [`START_TMS`].
pub fn generate(dir: &Path, users: usize) -> Result<()> {
    let path = dir.join(USER_DIMENSIONS_FILE);
    info!("saving {:?}", path);

    let file = File::create(path)?;
    let mut wtr = writer::csv_writer(GzEncoder::new(file, Compression::default()));
    let mut rng = rand::thread_rng();
    for _ in 0..users {
        let user_id = Uuid::new_v4();
        let install_tms = START_TMS + rng.gen_range(0..INSTALL_WINDOW_MS);
        wtr.write_record([user_id.to_string(), install_tms.to_string()])?;
    }
    writer::finish(wtr)?;
    info!("done");

    Ok(())
}
