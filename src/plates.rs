//! Barbell plate math
//!
//! Decomposes a bar load into per-side plate counts and scores how many
//! single plate add/remove actions separate two loads. Used to pick warm-up
//! weights that are cheap to reach from the main working set.

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

/// Olympic bar weight in kg
pub const BAR_WEIGHT: f64 = 20.0;

/// Available plate denominations in kg, heaviest first
pub const PLATES: [f64; 5] = [20.0, 10.0, 5.0, 2.5, 1.25];

/// Absorbs float noise when a load is an exact multiple of a plate
const EPSILON: f64 = 1e-9;

/// ---------------------------------------------------------------------------
/// Plate Combo
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateCombo {
  pub total_weight: f64,
  pub bar_weight: f64,
  /// (total - bar) / 2, negative when the load is lighter than the bar
  pub load_per_side: f64,
  /// Plates per side, index-aligned with `PLATES`
  pub plate_counts: [u32; 5],
  /// Set when the load cannot be built on the bar; counts are all zero
  pub error: bool,
}

impl PlateCombo {
  /// Count of one denomination per side (0 for unknown denominations)
  pub fn count_for(&self, denomination: f64) -> u32 {
    PLATES
      .iter()
      .position(|p| *p == denomination)
      .map(|i| self.plate_counts[i])
      .unwrap_or(0)
  }

  /// Denominations actually used, heaviest first
  pub fn used_plates(&self) -> impl Iterator<Item = (f64, u32)> + '_ {
    PLATES
      .iter()
      .copied()
      .zip(self.plate_counts.iter().copied())
      .filter(|(_, count)| *count > 0)
  }

  /// Weight per side the greedy pass could not express with plates
  pub fn unmatched_per_side(&self) -> f64 {
    if self.error {
      return 0.0;
    }
    let loaded: f64 = self.used_plates().map(|(plate, count)| plate * count as f64).sum();
    (self.load_per_side - loaded).max(0.0)
  }
}

impl std::fmt::Display for PlateCombo {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if self.error {
      return write!(f, "{} kg: lighter than the {} kg bar", self.total_weight, self.bar_weight);
    }
    let plates: Vec<String> = self
      .used_plates()
      .map(|(plate, count)| format!("{}x{}", plate, count))
      .collect();
    if plates.is_empty() {
      write!(f, "{} kg: empty bar", self.total_weight)
    } else {
      write!(f, "{} kg: {} per side", self.total_weight, plates.join(" + "))
    }
  }
}

/// Decompose a total bar weight into per-side plates, largest first
pub fn plate_combo(total_weight: f64) -> PlateCombo {
  let load_per_side = (total_weight - BAR_WEIGHT) / 2.0;

  if load_per_side < 0.0 || !load_per_side.is_finite() {
    return PlateCombo {
      total_weight,
      bar_weight: BAR_WEIGHT,
      load_per_side,
      plate_counts: [0; 5],
      error: true,
    };
  }

  let mut remaining = load_per_side;
  let mut plate_counts = [0u32; 5];
  for (i, plate) in PLATES.iter().enumerate() {
    let count = ((remaining + EPSILON) / plate).floor();
    if count >= 1.0 {
      plate_counts[i] = count as u32;
      remaining -= count * plate;
    }
  }

  PlateCombo {
    total_weight,
    bar_weight: BAR_WEIGHT,
    load_per_side,
    plate_counts,
    error: false,
  }
}

/// Number of single plate add/remove actions to go from `a` to `b`.
///
/// `None` means the two loads are not comparable (either combo is errored)
/// and must not be treated as a cost.
pub fn plate_operations(a: &PlateCombo, b: &PlateCombo) -> Option<u32> {
  if a.error || b.error {
    return None;
  }

  Some(
    a.plate_counts
      .iter()
      .zip(b.plate_counts.iter())
      .map(|(from, to)| from.abs_diff(*to))
      .sum(),
  )
}

/// Order candidate weights by how cheaply they are reached from `main_weight`.
///
/// Candidates that cannot be loaded are dropped; equal costs keep their input
/// order. An unloadable main weight returns the candidates untouched.
pub fn rank_candidates(main_weight: f64, candidates: &[f64]) -> Vec<f64> {
  let main = plate_combo(main_weight);
  if main.error {
    return candidates.to_vec();
  }

  let mut scored: Vec<(f64, u32)> = candidates
    .iter()
    .filter_map(|&weight| plate_operations(&main, &plate_combo(weight)).map(|ops| (weight, ops)))
    .collect();

  scored.sort_by_key(|(_, ops)| *ops);
  scored.into_iter().map(|(weight, _)| weight).collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_combo_70kg() {
    let combo = plate_combo(70.0);
    assert!(!combo.error);
    assert_eq!(combo.load_per_side, 25.0);
    assert_eq!(combo.plate_counts, [1, 0, 1, 0, 0]);
    assert_eq!(combo.count_for(20.0), 1);
    assert_eq!(combo.count_for(5.0), 1);
    assert_eq!(combo.count_for(10.0), 0);
  }

  #[test]
  fn test_combo_uses_small_plates() {
    // 43.75 per side = 20 + 20 + 2.5 + 1.25
    let combo = plate_combo(107.5);
    assert_eq!(combo.plate_counts, [2, 0, 0, 1, 1]);
    assert_eq!(combo.unmatched_per_side(), 0.0);
  }

  #[test]
  fn test_combo_below_bar_is_errored() {
    let combo = plate_combo(10.0);
    assert_eq!(combo.load_per_side, -5.0);
    assert!(combo.error);
    assert_eq!(combo.plate_counts, [0; 5]);
  }

  #[test]
  fn test_empty_bar_is_valid() {
    let combo = plate_combo(20.0);
    assert!(!combo.error);
    assert_eq!(combo.plate_counts, [0; 5]);
    assert_eq!(combo.to_string(), "20 kg: empty bar");
  }

  #[test]
  fn test_unmatched_remainder() {
    // 0.5 per side cannot be built from a 1.25 plate
    let combo = plate_combo(21.0);
    assert!(!combo.error);
    assert_eq!(combo.plate_counts, [0; 5]);
    assert!((combo.unmatched_per_side() - 0.5).abs() < 1e-9);
  }

  #[test]
  fn test_plate_operations_counts_both_directions() {
    let main = plate_combo(70.0); // 20 + 5
    let lighter = plate_combo(50.0); // 10 + 5
    // remove 20, add 10
    assert_eq!(plate_operations(&main, &lighter), Some(2));
    assert_eq!(plate_operations(&lighter, &main), Some(2));
    assert_eq!(plate_operations(&main, &main), Some(0));
  }

  #[test]
  fn test_plate_operations_incomparable() {
    let main = plate_combo(70.0);
    let bad = plate_combo(15.0);
    assert_eq!(plate_operations(&main, &bad), None);
    assert_eq!(plate_operations(&bad, &main), None);
  }

  #[test]
  fn test_rank_candidates_orders_by_cost() {
    // 70 = 20+5, 50 = 10+5 (2 ops), 60 = 20 (1 op), 65 = 20+2.5 (2 ops)
    let ranked = rank_candidates(70.0, &[50.0, 60.0, 65.0]);
    assert_eq!(ranked, vec![60.0, 50.0, 65.0]);
  }

  #[test]
  fn test_rank_candidates_is_stable_for_ties() {
    let ranked = rank_candidates(70.0, &[65.0, 50.0]);
    assert_eq!(ranked, vec![65.0, 50.0]);
  }

  #[test]
  fn test_rank_candidates_drops_unloadable() {
    let ranked = rank_candidates(70.0, &[10.0, 60.0, 5.0]);
    assert_eq!(ranked, vec![60.0]);

    let ranked = rank_candidates(70.0, &[10.0, 15.0]);
    assert!(ranked.is_empty());
  }

  #[test]
  fn test_rank_candidates_passthrough_when_main_unloadable() {
    let ranked = rank_candidates(15.0, &[65.0, 10.0, 50.0]);
    assert_eq!(ranked, vec![65.0, 10.0, 50.0]);
  }

  #[test]
  fn test_display_lists_plates() {
    assert_eq!(plate_combo(70.0).to_string(), "70 kg: 20x1 + 5x1 per side");
    assert_eq!(plate_combo(10.0).to_string(), "10 kg: lighter than the 20 kg bar");
  }
}
