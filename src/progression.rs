//! Rule-Based Progression Engine
//!
//! Computes the next session for one exercise from its logged history:
//! - Epley 1RM estimate from the most recent top set
//! - trend, fatigue and form-depth diagnostics
//! - three intensity tiers (neural, strength, volume)
//! - tonnage cap against the recent average
//!
//! Key principles:
//! - Pure and deterministic, no I/O and no shared state
//! - Empty history means "no recommendation", never an error
//! - Malformed numbers are defaulted at the parsing boundary, not here

use serde::{Deserialize, Serialize};

use crate::models::PerformanceRecord;
use crate::plates;

// ---------------------------------------------------------------------------
/// Tuning Constants
// ---------------------------------------------------------------------------

/// Smallest prescribable load change (2 x 1.25 kg plates)
pub const WEIGHT_INCREMENT: f64 = 2.5;

/// Load change after a streak of increases or decreases
pub const PROGRESSION_STEP: f64 = 2.5;
pub const SUCCESS_STREAK_TO_PROGRESS: u32 = 2;
pub const FAILURE_STREAK_TO_DELOAD: u32 = 2;

/// Neural load reduction when form depth degrades
pub const FORM_CORRECTION_DROP: f64 = 2.5;

/// Number of most recent records used for fatigue and tonnage baselines
pub const RECENT_WINDOW: usize = 3;

/// Recent rep x set volume thresholds and the fatigue score each maps to
pub const FATIGUE_HIGH_VOLUME: u32 = 60;
pub const FATIGUE_MODERATE_VOLUME: u32 = 40;
pub const FATIGUE_SCORE_HIGH: u8 = 8;
pub const FATIGUE_SCORE_MODERATE: u8 = 6;
pub const FATIGUE_SCORE_LOW: u8 = 3;

/// Fatigue score at which the neural tier is dropped
pub const RECOVERY_FATIGUE_GATE: u8 = 7;

/// Projected tonnage may not exceed the recent average by more than this
pub const TONNAGE_CAP_RATIO: f64 = 1.2;
pub const MIN_VOLUME_SETS: u32 = 2;

/// Memo fragments that flag a shallow or partial range of motion
const SHALLOW_MARKERS: [&str; 3] = ["shallow", "浅い", "partial"];

// ---------------------------------------------------------------------------
/// Tier Taxonomy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierLabel {
    /// Heavy low-rep work at 90% 1RM
    Neural,
    /// Main working sets at 82.5% 1RM
    Strength,
    /// Back-off hypertrophy sets at 72.5% 1RM
    Volume,
}

impl std::fmt::Display for TierLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Neural => write!(f, "Neural"),
            Self::Strength => write!(f, "Strength"),
            Self::Volume => write!(f, "Volume"),
        }
    }
}

/// Intensity and dose for one tier before any adjustment
#[derive(Debug, Clone, Copy)]
pub struct TierPrescription {
    pub label: TierLabel,
    pub pct_one_rm: f64,
    pub reps: u32,
    pub sets: u32,
}

pub const NEURAL_TIER: TierPrescription = TierPrescription {
    label: TierLabel::Neural,
    pct_one_rm: 0.90,
    reps: 2,
    sets: 3,
};

pub const STRENGTH_TIER: TierPrescription = TierPrescription {
    label: TierLabel::Strength,
    pct_one_rm: 0.825,
    reps: 3,
    sets: 4,
};

pub const VOLUME_TIER: TierPrescription = TierPrescription {
    label: TierLabel::Volume,
    pct_one_rm: 0.725,
    reps: 6,
    sets: 3,
};

// ---------------------------------------------------------------------------
/// Focus and Form Depth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Focus {
    #[default]
    Balanced,
    /// Form degraded on the last session: paused, lighter neural work
    FormCorrection,
    /// Recent volume is high: neural work dropped, volume trimmed
    Recovery,
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balanced => write!(f, "balanced"),
            Self::FormCorrection => write!(f, "form_correction"),
            Self::Recovery => write!(f, "recovery"),
        }
    }
}

impl std::str::FromStr for Focus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balanced" => Ok(Self::Balanced),
            "form_correction" => Ok(Self::FormCorrection),
            "recovery" => Ok(Self::Recovery),
            _ => Err(format!("Unknown focus: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum FormDepth {
    #[default]
    Normal,
    Shallow,
}

impl std::fmt::Display for FormDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Shallow => write!(f, "shallow"),
        }
    }
}

// ---------------------------------------------------------------------------
/// Recommendation Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTier {
    pub label: TierLabel,
    pub weight: f64,
    pub reps: u32,
    pub sets: u32,
    /// Pause reps prescribed (neural tier only, after form degradation)
    pub paused: bool,
}

impl WorkoutTier {
    pub fn tonnage(&self) -> f64 {
        self.weight * self.reps as f64 * self.sets as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTiers {
    /// Absent when fatigue is high
    pub neural: Option<WorkoutTier>,
    pub strength: WorkoutTier,
    pub volume: WorkoutTier,
}

impl SessionTiers {
    /// Present tiers in session order
    pub fn iter(&self) -> impl Iterator<Item = &WorkoutTier> {
        self.neural
            .iter()
            .chain(std::iter::once(&self.strength))
            .chain(std::iter::once(&self.volume))
    }

    pub fn tonnage(&self) -> f64 {
        self.iter().map(WorkoutTier::tonnage).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub consecutive_success: u32,
    pub consecutive_failure: u32,
    /// Coarse 0-10 scale
    pub fatigue_score: u8,
    pub depth: FormDepth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub estimated_one_rep_max: f64,
    pub focus: Focus,
    pub tiers: SessionTiers,
    pub projected_tonnage: f64,
    /// Mean tonnage of the recent window the cap was measured against
    pub previous_tonnage: f64,
    pub progression_adjustment: f64,
    pub diagnostics: Diagnostics,
    /// One sentence per rule that shaped the session
    pub rationale: Vec<String>,
}

// ---------------------------------------------------------------------------
/// Building Blocks
// ---------------------------------------------------------------------------

/// Round to the nearest 2.5 kg. Exact midpoints go to the even multiple,
/// so 101.25 becomes 100.0 and 96.25 becomes 95.0.
pub fn round_to_increment(value: f64) -> f64 {
    (value / WEIGHT_INCREMENT).round_ties_even() * WEIGHT_INCREMENT
}

/// Epley estimate; a single rep is taken as the max itself
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if reps == 1 {
        weight
    } else {
        weight * (1.0 + reps as f64 / 30.0)
    }
}

/// Leading run of strict increases and strict decreases, walking from the
/// most recent pair backwards. `sorted` must be newest first. At most one of
/// the two counts is non-zero.
pub fn trend_streaks(sorted: &[PerformanceRecord]) -> (u32, u32) {
    let mut success = 0;
    let mut failure = 0;

    for pair in sorted.windows(2) {
        let (newer, older) = (pair[0].weight, pair[1].weight);
        if newer > older && failure == 0 {
            success += 1;
        } else if newer < older && success == 0 {
            failure += 1;
        } else {
            break;
        }
    }

    (success, failure)
}

/// Rep x set volume of the recent window bucketed into a 0-10 score
pub fn fatigue_score(sorted: &[PerformanceRecord]) -> u8 {
    let volume: u32 = sorted
        .iter()
        .take(RECENT_WINDOW)
        .map(|r| r.reps.saturating_mul(r.sets))
        .fold(0u32, u32::saturating_add);

    if volume > FATIGUE_HIGH_VOLUME {
        FATIGUE_SCORE_HIGH
    } else if volume > FATIGUE_MODERATE_VOLUME {
        FATIGUE_SCORE_MODERATE
    } else {
        FATIGUE_SCORE_LOW
    }
}

pub fn detect_depth(memo: &str) -> FormDepth {
    let memo = memo.to_lowercase();
    if SHALLOW_MARKERS.iter().any(|marker| memo.contains(marker)) {
        FormDepth::Shallow
    } else {
        FormDepth::Normal
    }
}

pub fn progression_adjustment(consecutive_success: u32, consecutive_failure: u32) -> f64 {
    if consecutive_success >= SUCCESS_STREAK_TO_PROGRESS {
        PROGRESSION_STEP
    } else if consecutive_failure >= FAILURE_STREAK_TO_DELOAD {
        -PROGRESSION_STEP
    } else {
        0.0
    }
}

/// Mean tonnage of the recent window; 0 for an empty slice
pub fn average_tonnage(sorted: &[PerformanceRecord]) -> f64 {
    let window: Vec<&PerformanceRecord> = sorted.iter().take(RECENT_WINDOW).collect();
    if window.is_empty() {
        return 0.0;
    }
    window.iter().map(|r| r.tonnage()).sum::<f64>() / window.len() as f64
}

fn build_tier(prescription: &TierPrescription, one_rm: f64, adjustment: f64) -> WorkoutTier {
    WorkoutTier {
        label: prescription.label,
        weight: round_to_increment(one_rm * prescription.pct_one_rm + adjustment).max(0.0),
        reps: prescription.reps,
        sets: prescription.sets,
        paused: false,
    }
}

/// Re-pick a weight one increment either side of `computed` that needs the
/// fewest plate changes from the main set. Ties keep `computed`.
fn plate_friendly_weight(computed: f64, main_weight: f64) -> f64 {
    let candidates = [
        computed,
        computed - WEIGHT_INCREMENT,
        computed + WEIGHT_INCREMENT,
    ];
    plates::rank_candidates(main_weight, &candidates)
        .first()
        .copied()
        .unwrap_or(computed)
}

// ---------------------------------------------------------------------------
/// Engine
// ---------------------------------------------------------------------------

/// Recommend the next session for one exercise.
///
/// Records may come in any order; the most recent one is the top set.
/// Returns `None` when there is no history.
pub fn recommend(records: &[PerformanceRecord]) -> Option<Recommendation> {
    if records.is_empty() {
        return None;
    }

    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    let top = &sorted[0];

    let one_rm = estimate_one_rep_max(top.weight, top.reps);
    let (consecutive_success, consecutive_failure) = trend_streaks(&sorted);
    let fatigue = fatigue_score(&sorted);
    let depth = detect_depth(&top.memo);
    let adjustment = progression_adjustment(consecutive_success, consecutive_failure);

    let mut rationale = vec![format!(
        "Estimated 1RM {} kg from {} kg x {}.",
        round_to_increment(one_rm),
        top.weight,
        top.reps
    )];

    if adjustment > 0.0 {
        rationale.push(format!(
            "{} consecutive increases: +{} kg on every tier.",
            consecutive_success, PROGRESSION_STEP
        ));
    } else if adjustment < 0.0 {
        rationale.push(format!(
            "{} consecutive decreases: -{} kg on every tier.",
            consecutive_failure, PROGRESSION_STEP
        ));
    }

    let mut neural = Some(build_tier(&NEURAL_TIER, one_rm, adjustment));
    let strength = build_tier(&STRENGTH_TIER, one_rm, adjustment);
    let mut volume = build_tier(&VOLUME_TIER, one_rm, adjustment);

    // Depth check runs first, the fatigue override second.
    let shallow = depth == FormDepth::Shallow;
    if shallow {
        if let Some(tier) = neural.as_mut() {
            tier.weight = (tier.weight - FORM_CORRECTION_DROP).max(0.0);
            tier.paused = true;
        }
        rationale.push(format!(
            "Last session's memo flags shallow depth: neural sets paused and {} kg lighter.",
            FORM_CORRECTION_DROP
        ));
    }

    let fatigued = fatigue >= RECOVERY_FATIGUE_GATE;
    if fatigued {
        neural = None;
        volume.sets = volume.sets.saturating_sub(1).max(MIN_VOLUME_SETS);
        rationale.push(format!(
            "Fatigue {}/10 from recent volume: neural tier skipped, volume cut to {} sets.",
            fatigue, volume.sets
        ));
    }

    let focus = if fatigued {
        Focus::Recovery
    } else if shallow {
        Focus::FormCorrection
    } else {
        Focus::Balanced
    };

    if let Some(tier) = neural.as_mut().filter(|t| !t.paused) {
        let chosen = plate_friendly_weight(tier.weight, strength.weight);
        if chosen != tier.weight {
            rationale.push(format!(
                "Neural load moved from {} to {} kg to save plate changes from the {} kg main set.",
                tier.weight, chosen, strength.weight
            ));
            tier.weight = chosen;
        }
    }

    let previous_tonnage = average_tonnage(&sorted);
    let cap = previous_tonnage * TONNAGE_CAP_RATIO;
    let mut tiers = SessionTiers {
        neural,
        strength,
        volume,
    };

    let planned_sets = tiers.volume.sets;
    while tiers.tonnage() > cap && tiers.volume.sets > MIN_VOLUME_SETS {
        tiers.volume.sets -= 1;
    }
    if tiers.volume.sets < planned_sets {
        rationale.push(format!(
            "Volume trimmed to {} sets to stay near {}% of recent tonnage.",
            tiers.volume.sets,
            (TONNAGE_CAP_RATIO * 100.0).round()
        ));
    }

    tracing::debug!(
        one_rm,
        consecutive_success,
        consecutive_failure,
        fatigue,
        %depth,
        %focus,
        "Computed progression recommendation"
    );

    Some(Recommendation {
        estimated_one_rep_max: round_to_increment(one_rm),
        focus,
        projected_tonnage: round_to_increment(tiers.tonnage()),
        tiers,
        previous_tonnage,
        progression_adjustment: adjustment,
        diagnostics: Diagnostics {
            consecutive_success,
            consecutive_failure,
            fatigue_score: fatigue,
            depth,
        },
        rationale,
    })
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
