//! Contact — the single entity the directory manages.
//!
//! Identity is assigned by the store at insert time and never reused or
//! mutated afterwards. All field-shape validation (name lengths, email
//! syntax, phone pattern) happens at the API boundary, not here.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned identifier (SQLite rowid). Ascending id order is
/// insertion order, which the search engine relies on for pagination.
pub type ContactId = i64;

/// A fully materialised contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:         ContactId,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      String,
  pub birthday:   NaiveDate,
  pub notes:      Option<String>,
}

/// Input for creating a contact (and for full-replace updates).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      String,
  pub birthday:   NaiveDate,
  #[serde(default)]
  pub notes:      Option<String>,
}

/// A partial update. Fields left as `None` are not touched.
///
/// `notes` is doubly optional so a payload can distinguish "leave notes
/// alone" (key absent) from "clear notes" (`"notes": null`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPatch {
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
  pub phone:      Option<String>,
  pub birthday:   Option<NaiveDate>,
  #[serde(default, deserialize_with = "double_option")]
  pub notes:      Option<Option<String>>,
}

fn double_option<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  Option::<String>::deserialize(de).map(Some)
}

impl Contact {
  /// Return a copy of `self` with the patch's provided fields applied.
  pub fn with_patch(&self, patch: &ContactPatch) -> Contact {
    Contact {
      id:         self.id,
      first_name: patch.first_name.clone().unwrap_or_else(|| self.first_name.clone()),
      last_name:  patch.last_name.clone().unwrap_or_else(|| self.last_name.clone()),
      email:      patch.email.clone().unwrap_or_else(|| self.email.clone()),
      phone:      patch.phone.clone().unwrap_or_else(|| self.phone.clone()),
      birthday:   patch.birthday.unwrap_or(self.birthday),
      notes:      patch.notes.clone().unwrap_or_else(|| self.notes.clone()),
    }
  }
}

impl From<NewContact> for ContactPatch {
  /// A full-replace update is a patch with every field present.
  fn from(input: NewContact) -> Self {
    ContactPatch {
      first_name: Some(input.first_name),
      last_name:  Some(input.last_name),
      email:      Some(input.email),
      phone:      Some(input.phone),
      birthday:   Some(input.birthday),
      notes:      Some(input.notes),
    }
  }
}
