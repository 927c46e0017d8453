// file: state.rs
// desc: explicitly owned viewer state and its derived request URL

use rand::Rng;

use crate::config::AppConfig;
use crate::params::{BoundsIssue, MazeRequestParams};
use crate::request_url::build_url_with_base;
use crate::seed::generate_seed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeState {
    pub params: MazeRequestParams,
    pub config: AppConfig,
}

impl MazeState {
    /// Default parameters with seed 0; callers randomize before first use.
    pub fn new(config: AppConfig) -> Self {
        Self {
            params: MazeRequestParams::default(),
            config,
        }
    }

    /// Recomputed from the current fields on every call.
    pub fn url(&self) -> String {
        build_url_with_base(&self.params, self.config.api_version, self.config.api_base)
    }

    /// Overwrites the seed with a fresh draw and returns it.
    pub fn randomize_seed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u64 {
        self.params.seed = generate_seed(self.config.api_version, rng);
        self.params.seed
    }

    pub fn server_bounds_issue(&self) -> Option<BoundsIssue> {
        self.params.server_bounds_issue(self.config.api_version)
    }
}
