use std::fs;
use std::path::Path;

use tracing::info;

use crate::clickstream;
use crate::config::Config;
use crate::dimensions;
use crate::error::Result;
use crate::loader;

#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub total_users: usize,
    pub clickstream_max_lines: i64,
    pub events_per_user: usize,
}

/// Flat, non-recursive delete of every file in `path`. A subdirectory entry
/// makes `remove_file` fail and the error propagates.
pub fn clear_dir(path: &Path) -> Result<()> {
    for entry in fs::read_dir(path)? {
        fs::remove_file(entry?.path())?;
    }

    Ok(())
}

/// Runs the whole pipeline: clear both directories, generate the dimension
/// file, generate the clickstream, load the dimension file into the
/// database. Steps are sequential and there is no rollback; a failure
/// leaves the preceding steps applied.
pub async fn run(cfg: &Config, params: Params) -> Result<()> {
    clear_dir(cfg.data.input_dir.as_path())?;
    clear_dir(cfg.data.result_dir.as_path())?;

    info!("generating {} users in CSV", params.total_users);
    dimensions::generate(cfg.data.input_dir.as_path(), params.total_users)?;

    info!(
        "generating clickstream with {} lines per file, {} events per user",
        params.clickstream_max_lines, params.events_per_user
    );
    clickstream::generate(
        cfg.data.input_dir.as_path(),
        params.clickstream_max_lines,
        params.events_per_user,
    )?;

    info!("loading CSV file into database");
    loader::load(&cfg.db, cfg.data.input_dir.as_path()).await?;

    info!("done");

    Ok(())
}
