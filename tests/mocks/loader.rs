use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use study_buddy::ai::EngineLoader;

use super::engine::MockEngine;

/// Loader that hands out clones of one engine, or fails, counting attempts.
#[derive(Debug, Clone)]
pub struct MockLoader {
    pub engine: MockEngine,
    pub fail_with: Option<String>,
    pub loads: Arc<AtomicUsize>,
}

impl MockLoader {
    pub fn new(engine: MockEngine) -> Self {
        Self {
            engine,
            fail_with: None,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            engine: MockEngine::new("unused"),
            fail_with: Some(msg.to_string()),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EngineLoader for MockLoader {
    type Engine = MockEngine;

    fn model_id(&self) -> &str {
        "mock/bart"
    }

    async fn load(&self) -> anyhow::Result<MockEngine> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = self.fail_with {
            anyhow::bail!("{msg}");
        }
        Ok(self.engine.clone())
    }
}
