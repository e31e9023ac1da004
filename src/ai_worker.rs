//! Runs the search off the input loop, one search at a time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;
use tracing::debug;
use xiangqi_engine::{Board, Config, Engine, Move, Player};

pub struct AiWorker {
    config: Config,
    thinking: Arc<AtomicBool>,
}

/// Clears the thinking flag when the blocking task ends, panics included.
struct ThinkingGuard(Arc<AtomicBool>);

impl Drop for ThinkingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AiWorker {
    pub fn new(config: Config) -> Self {
        Self { config, thinking: Arc::new(AtomicBool::new(false)) }
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking.load(Ordering::Acquire)
    }

    /// Starts a search for `player` on a snapshot of `board`.
    ///
    /// Returns `None` while an earlier request is still running.
    pub fn request(
        &self,
        board: Board,
        player: Player,
        depth: i32,
    ) -> Option<JoinHandle<Option<Move>>> {
        if self
            .thinking
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(%player, "search already running, request dropped");
            return None;
        }

        let guard = ThinkingGuard(Arc::clone(&self.thinking));
        let config = self.config.clone();
        Some(tokio::task::spawn_blocking(move || {
            let _guard = guard;
            Engine::with_config(config).search(&board, player, depth)
        }))
    }
}
