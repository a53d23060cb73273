pub mod body_weight;
pub mod goals;
pub mod library;
pub mod plan;
pub mod record;
pub mod suggestion;

pub use body_weight::BodyWeightEntry;
pub use goals::{LiftTarget, StreakGoal, StreakProgress};
pub use library::{LibraryEntry, LibraryGroup};
pub use plan::{PlanItem, PlannedSet};
pub use record::{parse_records, LooseNumber, NewRecord, PerformanceRecord, RawRecord, StoredRecord};
pub use suggestion::{PlanSet, Suggestion, SuggestionSource};
