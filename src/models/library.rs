use serde::{Deserialize, Serialize};

/// An exercise the user keeps in their library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LibraryEntry {
  pub id: i64,
  pub name: String,
  pub body_part: String,
  pub favorite: bool,
}

/// Library entries sharing a body part, in first-seen order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryGroup {
  pub body_part: String,
  pub items: Vec<LibraryEntry>,
}
