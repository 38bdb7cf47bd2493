use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use tracing::debug;

use pipevis_content::Content;
use pipevis_core::{PipelineSimulator, SystemClock};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<AppConfig>,
    pub sim: Arc<Mutex<PipelineSimulator>>,
}

impl AppState {
    pub fn new(cfg: AppConfig) -> Result<Self> {
        let mut sim = PipelineSimulator::new(Content::builtin(), Box::new(SystemClock))?;
        sim.set_observer(Box::new(|snap| {
            debug!(
                revision = snap.revision,
                stage = snap.stage_id,
                status = snap.status.as_str(),
                score = snap.security_score,
                "pipeline state changed"
            );
        }));

        Ok(Self {
            cfg: Arc::new(cfg),
            sim: Arc::new(Mutex::new(sim)),
        })
    }
}
