//! Cancellable timer tasks behind a round.
//!
//! Two kinds of timer exist per round: one periodic 1 Hz tick source and
//! the one-shot advance delays scheduled by submissions. All of them
//! select against the round's cancellation token, so a reset (or the
//! countdown reaching zero) tears every pending wakeup down at once.
//! Cancellation is the primary mechanism; the engine's phase re-validation
//! is the safety net behind it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::core::Event;
use crate::driver::session::Inner;

/// Interval between countdown ticks.
pub(crate) const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Delay between scoring a submission and advancing to the next problem.
pub(crate) const ADVANCE_DELAY: Duration = Duration::from_secs(1);

/// Spawn the per-round tick loop.
///
/// The first tick lands one full period after arming, then once per
/// second. The loop exits when the token is cancelled or when a tick ends
/// the round; in the latter case it cancels the token itself so pending
/// advance delays die with it.
pub(crate) fn spawn_countdown(shared: Arc<Mutex<Inner>>, token: CancellationToken) {
    tokio::spawn(async move {
        let mut ticks = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                () = token.cancelled() => break,
                _ = ticks.tick() => {
                    let over = {
                        let mut inner = shared.lock().await;
                        inner.apply(&Event::Tick);
                        inner.state.is_over()
                    };
                    if over {
                        token.cancel();
                        break;
                    }
                }
            }
        }
        trace!("countdown task exited");
    });
}

/// Spawn the one-shot advance delay for a scored submission.
///
/// The engine re-validates the phase when the delay fires, so an advance
/// that outlives its round is a no-op even without cancellation.
pub(crate) fn spawn_advance(shared: Arc<Mutex<Inner>>, token: CancellationToken) {
    tokio::spawn(async move {
        tokio::select! {
            () = token.cancelled() => {
                trace!("advance delay cancelled");
            }
            () = sleep(ADVANCE_DELAY) => {
                shared.lock().await.apply(&Event::AdvanceProblem);
            }
        }
    });
}
