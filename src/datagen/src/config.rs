use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
    /// Staging directory for generated files.
    pub input_dir: PathBuf,
    /// Result directory. Cleared alongside the staging directory but not
    /// otherwise written by the pipeline.
    pub result_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Db {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data: Data,
    pub db: Db,
}
