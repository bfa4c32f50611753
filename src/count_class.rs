use serde::{Deserialize, Serialize};

/// How many times a word showed up in one document, capped at `Lots`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountClass {
    Zero,
    One,
    Two,
    Lots,
}

impl CountClass {
    pub const ALL: [CountClass; 4] = [
        CountClass::Zero,
        CountClass::One,
        CountClass::Two,
        CountClass::Lots,
    ];

    pub fn index(self) -> usize {
        match self {
            CountClass::Zero => 0,
            CountClass::One => 1,
            CountClass::Two => 2,
            CountClass::Lots => 3,
        }
    }
}

/// Maps raw occurrence counts onto count classes. Counts of `lots_at` or
/// more are all treated as `Lots`; anything between 2 and `lots_at` is `Two`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucketing {
    pub lots_at: u32,
}

impl Default for Bucketing {
    fn default() -> Self {
        Bucketing { lots_at: 3 }
    }
}

impl Bucketing {
    pub fn new(lots_at: u32) -> Self {
        Bucketing { lots_at }
    }

    pub fn classify(&self, count: u32) -> CountClass {
        match count {
            0 => CountClass::Zero,
            1 => CountClass::One,
            n if n >= self.lots_at => CountClass::Lots,
            _ => CountClass::Two,
        }
    }
}
