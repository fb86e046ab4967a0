//! Control cycle tick task
//!
//! Owns the control cadence. The navigation core never sleeps; it runs one
//! cycle per tick signalled from here.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use crate::channels::CYCLE_TICK;

/// Tick task - sends periodic tick signals with timestamp
#[embassy_executor::task]
pub async fn tick_task(period_ms: u16) {
    info!("Tick task started ({}ms period)", period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(period_ms as u64));
    let start = Instant::now();

    loop {
        ticker.next().await;

        let now_ms = start.elapsed().as_millis() as u32;

        // Overwrites an unconsumed tick, so a slow cycle skips rather than queues
        CYCLE_TICK.signal(now_ms);
    }
}
