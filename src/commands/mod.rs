//! Command implementations

pub mod analyze;
pub mod play;
pub mod simulate;

pub use analyze::{AnalysisResult, ClassSummary, DifficultyPick, analyze_letter};
pub use play::run_play;
pub use simulate::{
    DifficultyStatistics, Player, RoundResult, SimulationConfig, SimulationResult, play_round,
    run_simulation,
};
