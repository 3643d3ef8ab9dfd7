use std::thread;
use std::time::Duration;
use log::debug;

/// Blocks for a fixed delay so the page can finish rendering.
pub fn settle(delay: Duration, reason: &str) {
    if delay.is_zero() {
        return;
    }
    debug!("Waiting for {:?} ({})...", delay, reason);
    thread::sleep(delay);
}
