//! Game managers
//!
//! The adaptive candidate-elimination engine: a pool of words consistent with
//! the visible pattern, partitioned by outcome on every guess, with a policy
//! choosing which outcome to report.

mod game;
mod mode;
mod partition;
pub mod policy;
mod pool;

pub use game::{Game, GameError, GameState, TurnReport};
pub use mode::{EASY_BUDGET, GameConfig, HARD_BUDGET, Mode, NORMAL_BUDGET};
pub use partition::{Partition, PartitionClass};
pub use policy::{Fixed, Harden, Policy, SelectionPolicy, Soften};
pub use pool::CandidatePool;
