//! Ready-flag polling shared by the ADC and UART drivers.

use crate::config::WaitPolicy;

/// Spin on `ready` according to `policy`.
///
/// Returns `false` only when a bounded policy ran out of polls.
pub fn poll_until(policy: WaitPolicy, mut ready: impl FnMut() -> bool) -> bool {
    match policy {
        WaitPolicy::Forever => {
            while !ready() {}
            true
        }
        WaitPolicy::Bounded { max_polls } => (0..max_polls).any(|_| ready()),
    }
}
