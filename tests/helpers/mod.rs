// Test helper modules
//
// Provides mock gateway/backend implementations with call recording, plus
// small polling utilities for asserting on background relay work.


pub use mocks::*;

use std::time::Duration;

/// Poll `cond` until it holds or one second elapses
///
/// Background relay work is fire-and-forget, so tests wait for its side
/// effects instead of joining the task.
pub async fn wait_until<F: Fn() -> bool>(cond: F) -> bool {
    for _ in 0..100 {
        if cond() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    cond()
}

/// Give any stray background task a moment to run, for zero-call assertions
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}
