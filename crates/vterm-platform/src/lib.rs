//! Platform capabilities injected into command handlers.
//!
//! Several simulated commands embed wall-clock time or random numbers in
//! their output (`date`, `uptime`, `ping`, ...). Handlers receive these
//! through the `Clock` and `Entropy` traits instead of reaching for the
//! system directly, so tests can pin exact output with the fixed fakes.

mod services;

pub use services::{Clock, DesktopPlatform, Entropy, FixedClock, FixedEntropy, SystemTime};
