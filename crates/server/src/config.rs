//! Server configuration. Bind address, catalog location, strictness.
//!
//! Every option can come from the command line or from a `COURSE_RECS_*`
//! environment variable; the command line wins.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog::CourseCatalog;
use clap::Parser;
use recommender::DEFAULT_LIMIT;
use tracing::warn;

#[derive(Parser, Debug, Clone)]
#[command(name = "course-recs-server")]
#[command(about = "HTTP service recommending courses from a static catalog", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "COURSE_RECS_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Path to the JSON course catalog
    #[arg(long, env = "COURSE_RECS_CATALOG", default_value = "data/courses.json")]
    pub catalog: PathBuf,

    /// Refuse to start when the catalog fails integrity checks
    #[arg(long, env = "COURSE_RECS_STRICT")]
    pub strict: bool,

    /// Number of ranked courses returned ahead of the mandatory course
    #[arg(long, env = "COURSE_RECS_LIMIT", default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

impl ServerConfig {
    /// Load the configured catalog and check its integrity.
    ///
    /// A catalog that cannot be read or parsed is always fatal. Integrity
    /// problems are fatal only in strict mode; otherwise they are logged
    /// and the affected requests fail with 500 at request time.
    pub fn load_catalog(&self) -> Result<CourseCatalog> {
        let catalog = CourseCatalog::load_from_file(&self.catalog)
            .with_context(|| format!("Failed to load course catalog {}", self.catalog.display()))?;

        if let Err(e) = catalog.validate() {
            if self.strict {
                return Err(e).context("Course catalog failed integrity checks");
            }
            warn!("Course catalog failed integrity checks: {}", e);
        }

        Ok(catalog)
    }
}
