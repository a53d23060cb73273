//! Command line surface

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

use crate::commands;
use crate::db::AppState;
use crate::models::{NewRecord, StoredRecord, Suggestion};
use crate::progression::Recommendation;

#[derive(Parser, Debug)]
#[command(name = "lift-log")]
#[command(about = "Workout log with next-session strength recommendations", long_about = None)]
#[command(version)]
pub struct Cli {
  /// Print machine-readable JSON instead of text
  #[arg(long, global = true)]
  pub json: bool,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Log a workout record
  Record {
    #[arg(long)]
    exercise: String,
    /// kg
    #[arg(long)]
    weight: f64,
    #[arg(long)]
    reps: Option<u32>,
    #[arg(long)]
    sets: Option<u32>,
    #[arg(long, default_value = "")]
    memo: String,
    /// Defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Show the history of one exercise
  History {
    #[arg(long)]
    exercise: String,
    #[arg(long)]
    limit: Option<i64>,
  },
  /// Show everything logged on one day
  Day {
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Workout day counts and personal bests
  Stats,
  /// Local engine recommendation from stored history or a JSON file
  #[command(group(
    ArgGroup::new("source")
      .args(["exercise", "file"])
      .required(true)
      .multiple(false)
  ))]
  Recommend {
    #[arg(long)]
    exercise: Option<String>,
    /// JSON array of raw records
    #[arg(long)]
    file: Option<PathBuf>,
  },
  /// Next-session suggestion for one exercise or for a day's plan
  #[command(group(
    ArgGroup::new("scope")
      .args(["exercise", "date"])
      .multiple(false)
  ))]
  Suggest {
    #[arg(long)]
    exercise: Option<String>,
    /// Plan day, defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Skip the remote trainer
    #[arg(long)]
    local_only: bool,
  },
  /// Rank warm-up weights by plate changes from the main weight
  Plates {
    #[arg(long)]
    main: f64,
    #[arg(long, value_delimiter = ',', required = true)]
    candidates: Vec<f64>,
  },
  /// Manage the daily plan
  Plan {
    #[command(subcommand)]
    action: PlanCommand,
  },
  /// Track body weight
  BodyWeight {
    #[command(subcommand)]
    action: BodyWeightCommand,
  },
  /// Lift targets and streak goals
  Goal {
    #[command(subcommand)]
    action: GoalCommand,
  },
  /// Saved exercises grouped by body part
  Library {
    #[command(subcommand)]
    action: LibraryCommand,
  },
}

impl Cli {
  /// Whether the command reads or writes the database
  pub fn needs_store(&self) -> bool {
    !matches!(
      self.command,
      Commands::Plates { .. } | Commands::Recommend { file: Some(_), .. }
    )
  }
}

#[derive(Subcommand, Debug)]
pub enum PlanCommand {
  Add {
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    meta: String,
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  List {
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Mark an item done (or not done with --undo)
  Done {
    id: i64,
    #[arg(long)]
    undo: bool,
  },
  Remove {
    id: i64,
  },
  /// Planned set rows of one item
  Set {
    #[command(subcommand)]
    action: PlanSetCommand,
  },
}

#[derive(Subcommand, Debug)]
pub enum PlanSetCommand {
  /// Append a set row; give a weight, reps, or both
  Add {
    item_id: i64,
    /// kg
    #[arg(long)]
    weight: Option<f64>,
    #[arg(long)]
    reps: Option<u32>,
  },
  /// Toggle a set row between checked and open
  Check {
    id: i64,
  },
  Remove {
    id: i64,
  },
}

#[derive(Subcommand, Debug)]
pub enum LibraryCommand {
  Add {
    #[arg(long)]
    name: String,
    #[arg(long)]
    body_part: String,
  },
  /// Toggle the favorite flag
  Favorite {
    id: i64,
  },
  Remove {
    id: i64,
  },
  List {
    /// Matches body parts (whole group) or exercise names
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long)]
    favorites: bool,
  },
}

#[derive(Subcommand, Debug)]
pub enum BodyWeightCommand {
  Add {
    /// kg
    value: f64,
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  List,
}

#[derive(Subcommand, Debug)]
pub enum GoalCommand {
  /// Set the target weight for an exercise
  Lift {
    #[arg(long)]
    exercise: String,
    #[arg(long)]
    target: f64,
  },
  /// Set workout-day targets; omitted targets are cleared
  Streak {
    #[arg(long)]
    weekly: Option<i64>,
    #[arg(long)]
    monthly: Option<i64>,
  },
  Show,
}

/// ---------------------------------------------------------------------------
/// Dispatch
/// ---------------------------------------------------------------------------

pub async fn dispatch(state: &AppState, cli: Cli) -> anyhow::Result<()> {
  let today = Local::now().date_naive();
  let json = cli.json;

  match cli.command {
    Commands::Record {
      exercise,
      weight,
      reps,
      sets,
      memo,
      date,
    } => {
      let record = NewRecord {
        exercise,
        date: date.unwrap_or(today),
        weight,
        reps,
        sets,
        memo,
      };
      let id = commands::records::record_workout(state, record.clone())
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("Recorded #{}: {} {} {} kg", id, record.date, record.exercise.trim(), record.weight);
      println!("{}", render_outcome(json, json!({ "id": id }), text)?);
    }
    Commands::History { exercise, limit } => {
      let records = commands::records::get_history(state, &exercise, limit)
        .await
        .map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&records);
      }
      if records.is_empty() {
        println!("No records for {}.", exercise);
      }
      for record in &records {
        println!("{}", format_record(record));
      }
    }
    Commands::Day { date } => {
      let date = date.unwrap_or(today);
      let records = commands::records::get_day(state, date)
        .await
        .map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&records);
      }
      if records.is_empty() {
        println!("Nothing logged on {}.", date);
      }
      for record in &records {
        println!("{}", format_record(record));
      }
    }
    Commands::Stats => {
      let stats = commands::records::get_stats(state, today)
        .await
        .map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&stats);
      }
      println!("Workout days this week: {}", stats.week_days);
      println!("Workout days this month: {}", stats.month_days);
      for exercise in &stats.exercises {
        let trail: Vec<String> = exercise
          .max_updates
          .iter()
          .map(|r| format!("{} kg ({})", r.weight, r.date))
          .collect();
        println!("- {}: {}", exercise.exercise, trail.join(" <- "));
      }
    }
    command @ (Commands::Plates { .. } | Commands::Recommend { file: Some(_), .. }) => {
      dispatch_offline(command, json)?
    }
    Commands::Recommend { exercise, file: None } => {
      let exercise = exercise.context("either --exercise or --file is required")?;
      let recommendation = commands::trainer::recommend(state, &exercise)
        .await
        .map_err(anyhow::Error::msg)?;
      print_recommendation(recommendation.as_ref(), json)?;
    }
    Commands::Suggest {
      exercise,
      date,
      local_only,
    } => {
      let suggestions: Vec<Suggestion> = match exercise {
        Some(exercise) => commands::trainer::suggest(state, &exercise, local_only)
          .await
          .map_err(anyhow::Error::msg)?
          .into_iter()
          .collect(),
        None => commands::trainer::suggest_plan(state, date.unwrap_or(today), local_only)
          .await
          .map_err(anyhow::Error::msg)?,
      };
      if json {
        return print_json(&suggestions);
      }
      if suggestions.is_empty() {
        println!("No suggestions: nothing planned with history.");
      }
      for suggestion in &suggestions {
        print!("{}", format_suggestion(suggestion));
      }
    }
    Commands::Plan { action } => dispatch_plan(state, action, today, json).await?,
    Commands::BodyWeight { action } => dispatch_body_weight(state, action, today, json).await?,
    Commands::Goal { action } => dispatch_goal(state, action, today, json).await?,
    Commands::Library { action } => dispatch_library(state, action, json).await?,
  }

  Ok(())
}

/// Commands that never touch the database. Called before the store is opened.
pub fn dispatch_offline(command: Commands, json: bool) -> anyhow::Result<()> {
  match command {
    Commands::Plates { main, candidates } => {
      let ranking = commands::trainer::rank_plates(main, &candidates);
      if json {
        return print_json(&ranking);
      }
      println!("Main  {}", ranking.main);
      for (i, combo) in ranking.ranked.iter().enumerate() {
        println!("{:>4}. {}", i + 1, combo);
      }
    }
    Commands::Recommend { file: Some(path), .. } => {
      let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
      let recommendation = commands::trainer::recommend_from_json(&contents).map_err(anyhow::Error::msg)?;
      print_recommendation(recommendation.as_ref(), json)?;
    }
    other => anyhow::bail!("command needs the database: {:?}", other),
  }
  Ok(())
}

async fn dispatch_plan(state: &AppState, action: PlanCommand, today: NaiveDate, json: bool) -> anyhow::Result<()> {
  match action {
    PlanCommand::Add { title, meta, date } => {
      let date = date.unwrap_or(today);
      let id = commands::plan::add_plan_item(state, date, &title, &meta)
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("Planned #{} for {}: {}", id, date, title.trim());
      println!("{}", render_outcome(json, json!({ "id": id }), text)?);
    }
    PlanCommand::List { date } => {
      let date = date.unwrap_or(today);
      let items = commands::plan::get_plan(state, date)
        .await
        .map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&items);
      }
      if items.is_empty() {
        println!("Nothing planned for {}.", date);
      }
      for item in &items {
        let mark = if item.done { "x" } else { " " };
        if item.meta.is_empty() {
          println!("[{}] #{} {}", mark, item.id, item.title);
        } else {
          println!("[{}] #{} {}  {}", mark, item.id, item.title, item.meta);
        }
        for set in &item.sets {
          let mark = if set.done { "x" } else { " " };
          println!("    [{}] #{} {}", mark, set.id, set);
        }
      }
    }
    PlanCommand::Done { id, undo } => {
      commands::plan::mark_plan_item(state, id, !undo)
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("Plan item #{} marked {}.", id, if undo { "not done" } else { "done" });
      println!("{}", render_outcome(json, json!({ "id": id, "done": !undo }), text)?);
    }
    PlanCommand::Remove { id } => {
      commands::plan::remove_plan_item(state, id)
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("Removed plan item #{}.", id);
      println!("{}", render_outcome(json, json!({ "ok": true }), text)?);
    }
    PlanCommand::Set { action } => dispatch_plan_set(state, action, json).await?,
  }
  Ok(())
}

async fn dispatch_plan_set(state: &AppState, action: PlanSetCommand, json: bool) -> anyhow::Result<()> {
  match action {
    PlanSetCommand::Add { item_id, weight, reps } => {
      let id = commands::plan::add_plan_set(state, item_id, weight, reps)
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("Added set #{} to plan item #{}.", id, item_id);
      println!("{}", render_outcome(json, json!({ "id": id }), text)?);
    }
    PlanSetCommand::Check { id } => {
      let done = commands::plan::toggle_plan_set(state, id)
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("Set #{} {}.", id, if done { "checked" } else { "unchecked" });
      println!("{}", render_outcome(json, json!({ "id": id, "done": done }), text)?);
    }
    PlanSetCommand::Remove { id } => {
      commands::plan::remove_plan_set(state, id)
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("Removed set #{}.", id);
      println!("{}", render_outcome(json, json!({ "ok": true }), text)?);
    }
  }
  Ok(())
}

async fn dispatch_body_weight(
  state: &AppState,
  action: BodyWeightCommand,
  today: NaiveDate,
  json: bool,
) -> anyhow::Result<()> {
  match action {
    BodyWeightCommand::Add { value, date } => {
      let date = date.unwrap_or(today);
      let id = commands::goals::log_body_weight(state, date, value)
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("Body weight {} kg logged for {}.", value, date);
      println!("{}", render_outcome(json, json!({ "id": id }), text)?);
    }
    BodyWeightCommand::List => {
      let entries = commands::goals::get_body_weights(state)
        .await
        .map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&entries);
      }
      for entry in &entries {
        println!("{}  {:.1} kg", entry.date, entry.value);
      }
    }
  }
  Ok(())
}

async fn dispatch_goal(state: &AppState, action: GoalCommand, today: NaiveDate, json: bool) -> anyhow::Result<()> {
  match action {
    GoalCommand::Lift { exercise, target } => {
      commands::goals::set_lift_target(state, &exercise, target)
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("Target for {} set to {} kg.", exercise.trim(), target);
      println!("{}", render_outcome(json, json!({ "ok": true }), text)?);
    }
    GoalCommand::Streak { weekly, monthly } => {
      commands::goals::set_streak_goal(state, weekly, monthly)
        .await
        .map_err(anyhow::Error::msg)?;
      println!("{}", render_outcome(json, json!({ "ok": true }), "Streak goal updated.".to_string())?);
    }
    GoalCommand::Show => {
      let overview = commands::goals::get_goal_overview(state, today)
        .await
        .map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&overview);
      }
      let streak = &overview.streak;
      println!(
        "This week: {} days{}",
        streak.week_days,
        format_target(streak.goal.weekly_target, streak.weekly_met())
      );
      println!(
        "This month: {} days{}",
        streak.month_days,
        format_target(streak.goal.monthly_target, streak.monthly_met())
      );
      for target in &overview.lift_targets {
        println!("- {}: {} kg", target.exercise, target.target_weight);
      }
    }
  }
  Ok(())
}

async fn dispatch_library(state: &AppState, action: LibraryCommand, json: bool) -> anyhow::Result<()> {
  match action {
    LibraryCommand::Add { name, body_part } => {
      let id = commands::library::add_library_entry(state, &name, &body_part)
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("Saved #{}: {} ({})", id, name.trim(), body_part.trim());
      println!("{}", render_outcome(json, json!({ "id": id }), text)?);
    }
    LibraryCommand::Favorite { id } => {
      let favorite = commands::library::toggle_library_favorite(state, id)
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("#{} {} favorites.", id, if favorite { "added to" } else { "removed from" });
      println!("{}", render_outcome(json, json!({ "id": id, "favorite": favorite }), text)?);
    }
    LibraryCommand::Remove { id } => {
      commands::library::remove_library_entry(state, id)
        .await
        .map_err(anyhow::Error::msg)?;
      let text = format!("Removed library entry #{}.", id);
      println!("{}", render_outcome(json, json!({ "ok": true }), text)?);
    }
    LibraryCommand::List { query, favorites } => {
      let groups = commands::library::get_library(state, &query, favorites)
        .await
        .map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&groups);
      }
      if groups.is_empty() {
        println!("No exercises found.");
      }
      for group in &groups {
        println!("{}", group.body_part);
        for item in &group.items {
          let star = if item.favorite { "*" } else { " " };
          println!("  {} #{} {}", star, item.id, item.name);
        }
      }
    }
  }
  Ok(())
}

/// ---------------------------------------------------------------------------
/// Output Formatting
/// ---------------------------------------------------------------------------

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
  let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
  println!("{}", out);
  Ok(())
}

/// Text for a mutating command: the compact JSON payload or the human line
fn render_outcome(json: bool, payload: serde_json::Value, text: String) -> anyhow::Result<String> {
  if json {
    return serde_json::to_string(&payload).context("failed to serialize output");
  }
  Ok(text)
}

fn print_recommendation(recommendation: Option<&Recommendation>, json: bool) -> anyhow::Result<()> {
  if json {
    return print_json(&recommendation);
  }
  match recommendation {
    Some(rec) => print!("{}", format_recommendation(rec)),
    None => println!("No history to recommend from."),
  }
  Ok(())
}

fn format_record(record: &StoredRecord) -> String {
  let reps = record.reps.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());
  let sets = record.sets.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());
  let mut line = format!(
    "{}  {:<16} {:>6} kg  {} reps x {} sets",
    record.date, record.exercise, record.weight, reps, sets
  );
  if !record.memo.is_empty() {
    line.push_str(&format!("  ({})", record.memo));
  }
  line
}

fn format_target(target: Option<i64>, met: Option<bool>) -> String {
  match (target, met) {
    (Some(target), Some(true)) => format!(" / {} (met)", target),
    (Some(target), _) => format!(" / {}", target),
    _ => String::new(),
  }
}

pub fn format_recommendation(rec: &Recommendation) -> String {
  let mut out = format!(
    "Estimated 1RM {} kg, focus: {}\n",
    rec.estimated_one_rep_max, rec.focus
  );
  for tier in rec.tiers.iter() {
    let paused = if tier.paused { " (paused)" } else { "" };
    out.push_str(&format!(
      "  {:<9} {:>6} kg x {} x {}{}\n",
      tier.label.to_string(),
      tier.weight,
      tier.reps,
      tier.sets,
      paused
    ));
  }
  out.push_str(&format!(
    "Projected tonnage {} kg (recent average {} kg)\n",
    rec.projected_tonnage, rec.previous_tonnage
  ));
  for line in &rec.rationale {
    out.push_str(&format!("- {}\n", line));
  }
  out
}

pub fn format_suggestion(suggestion: &Suggestion) -> String {
  let mut out = format!("{} [{}]\n", suggestion.exercise_name, suggestion.source);
  for line in &suggestion.short_message {
    out.push_str(&format!("  {}\n", line));
  }
  for set in &suggestion.plan_sets {
    out.push_str(&format!(
      "  {:<16} {:>6} kg x {} x {}\n",
      set.title, set.weight, set.reps, set.sets
    ));
  }
  if !suggestion.reasoning.is_empty() {
    out.push_str(&format!("  {}\n", suggestion.reasoning));
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::progression::recommend;
  use crate::test_utils::{date, mock_record};

  #[test]
  fn test_parse_record_command() {
    let cli = Cli::try_parse_from([
      "lift-log", "record", "--exercise", "Squat", "--weight", "102.5", "--reps", "5", "--date", "2026-03-10",
    ])
    .unwrap();
    match cli.command {
      Commands::Record {
        exercise,
        weight,
        reps,
        sets,
        date: day,
        ..
      } => {
        assert_eq!(exercise, "Squat");
        assert_eq!(weight, 102.5);
        assert_eq!(reps, Some(5));
        assert_eq!(sets, None);
        assert_eq!(day, Some(date(2026, 3, 10)));
      }
      other => panic!("unexpected command: {:?}", other),
    }
  }

  #[test]
  fn test_parse_plates_candidates() {
    let cli = Cli::try_parse_from(["lift-log", "plates", "--main", "70", "--candidates", "50,60,65", "--json"]).unwrap();
    assert!(cli.json);
    match cli.command {
      Commands::Plates { main, candidates } => {
        assert_eq!(main, 70.0);
        assert_eq!(candidates, vec![50.0, 60.0, 65.0]);
      }
      other => panic!("unexpected command: {:?}", other),
    }
  }

  #[test]
  fn test_recommend_requires_one_source() {
    assert!(Cli::try_parse_from(["lift-log", "recommend"]).is_err());
    assert!(Cli::try_parse_from(["lift-log", "recommend", "--exercise", "Squat", "--file", "r.json"]).is_err());
  }

  #[test]
  fn test_parse_nested_plan_command() {
    let cli = Cli::try_parse_from(["lift-log", "plan", "done", "3", "--undo"]).unwrap();
    assert!(matches!(
      cli.command,
      Commands::Plan {
        action: PlanCommand::Done { id: 3, undo: true }
      }
    ));
  }

  #[test]
  fn test_parse_plan_set_commands() {
    let cli = Cli::try_parse_from(["lift-log", "plan", "set", "add", "4", "--weight", "70", "--reps", "6"]).unwrap();
    match cli.command {
      Commands::Plan {
        action: PlanCommand::Set {
          action: PlanSetCommand::Add { item_id, weight, reps },
        },
      } => {
        assert_eq!(item_id, 4);
        assert_eq!(weight, Some(70.0));
        assert_eq!(reps, Some(6));
      }
      other => panic!("unexpected command: {:?}", other),
    }

    let cli = Cli::try_parse_from(["lift-log", "plan", "set", "check", "9"]).unwrap();
    assert!(matches!(
      cli.command,
      Commands::Plan {
        action: PlanCommand::Set {
          action: PlanSetCommand::Check { id: 9 }
        }
      }
    ));
  }

  #[test]
  fn test_parse_library_list() {
    let cli = Cli::try_parse_from(["lift-log", "library", "list", "--query", "legs", "--favorites"]).unwrap();
    match cli.command {
      Commands::Library {
        action: LibraryCommand::List { query, favorites },
      } => {
        assert_eq!(query, "legs");
        assert!(favorites);
      }
      other => panic!("unexpected command: {:?}", other),
    }
  }

  #[test]
  fn test_needs_store() {
    let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap();
    assert!(!parse(&["lift-log", "plates", "--main", "70", "--candidates", "50"]).needs_store());
    assert!(!parse(&["lift-log", "recommend", "--file", "r.json"]).needs_store());
    assert!(parse(&["lift-log", "recommend", "--exercise", "Squat"]).needs_store());
    assert!(parse(&["lift-log", "stats"]).needs_store());
  }

  #[test]
  fn test_dispatch_offline_reads_file() {
    let path = std::env::temp_dir().join(format!("lift-log-recommend-{}.json", std::process::id()));
    std::fs::write(&path, r#"[{"date": "2026-03-10", "weight": "100", "reps": 5, "sets": 3}]"#).unwrap();

    let cli = Cli::try_parse_from(["lift-log", "recommend", "--file", path.to_str().unwrap(), "--json"]).unwrap();
    let result = dispatch_offline(cli.command, cli.json);
    std::fs::remove_file(&path).ok();
    assert!(result.is_ok());

    let missing = Cli::try_parse_from(["lift-log", "recommend", "--file", "/nonexistent/records.json"]).unwrap();
    assert!(dispatch_offline(missing.command, false).is_err());

    let stats = Cli::try_parse_from(["lift-log", "stats"]).unwrap();
    assert!(dispatch_offline(stats.command, false).is_err());
  }

  #[test]
  fn test_render_outcome() {
    let text = render_outcome(true, json!({ "id": 7 }), "Recorded #7".to_string()).unwrap();
    assert_eq!(text, r#"{"id":7}"#);

    let text = render_outcome(false, json!({ "id": 7 }), "Recorded #7".to_string()).unwrap();
    assert_eq!(text, "Recorded #7");
  }

  #[test]
  fn test_format_recommendation_lists_tiers() {
    let rec = recommend(&[mock_record(0, 100.0, 5, 3, "")]).unwrap();
    let text = format_recommendation(&rec);
    assert!(text.contains("Neural"));
    assert!(text.contains("Strength"));
    assert!(text.contains("Volume"));
    assert!(text.contains("focus: balanced"));
  }
}
