//! Terminal bell used to mark a work/break transition.

use std::io::Write;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::timer::Sleeper;

/// Pulses per alert.
pub const DEFAULT_REPEAT: usize = 2;

/// Pause after each pulse.
pub const PULSE_GAP: Duration = Duration::from_millis(200);

const BELL: &[u8] = b"\x07";

/// Ring the bell `repeat` times, pausing after each pulse, then end the line.
///
/// Stops ringing as soon as `cancel` fires. A muted or missing bell is not an
/// error, so write failures are only logged.
pub fn alert<W, S>(out: &mut W, sleeper: &mut S, repeat: usize, cancel: &CancellationToken)
where
    W: Write + ?Sized,
    S: Sleeper + ?Sized,
{
    for _ in 0..repeat {
        if cancel.is_cancelled() {
            break;
        }
        if let Err(e) = out.write_all(BELL).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "bell write failed");
        }
        sleeper.sleep(PULSE_GAP);
    }
    if let Err(e) = writeln!(out) {
        tracing::warn!(error = %e, "bell newline failed");
    }
}
