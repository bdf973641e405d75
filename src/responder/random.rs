use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Nguồn số ngẫu nhiên dùng cho độ trễ và việc chọn câu trả lời.
pub trait RandomSource {
    /// Uniform integer in `[0, upper)`. `upper` is never zero.
    fn below(&mut self, upper: u64) -> u64;
}

pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                log::info!("Using seeded random source ({seed})");
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for StdRandom {
    fn below(&mut self, upper: u64) -> u64 {
        self.rng.gen_range(0..upper.max(1))
    }
}

/// Replays a fixed list of values, wrapping each into range.
///
/// Mostly useful in tests where the reply pick and the delay must be known.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<u64>,
    cursor: usize,
}

#[cfg(any(test, feature = "test-support"))]
impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl RandomSource for ScriptedRandom {
    fn below(&mut self, upper: u64) -> u64 {
        let upper = upper.max(1);
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % upper
    }
}
