pub mod clock;
pub mod random;
pub mod scheduler;

pub use clock::{Clock, SystemClock};
pub use random::{RandomSource, StdRandom};
pub use scheduler::{Scheduler, TokioScheduler};

#[cfg(any(test, feature = "test-support"))]
pub use clock::FixedClock;
#[cfg(any(test, feature = "test-support"))]
pub use random::ScriptedRandom;
#[cfg(any(test, feature = "test-support"))]
pub use scheduler::ManualScheduler;
