//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Birthdays are stored as ISO 8601 date strings (`YYYY-MM-DD`), which
//! sort correctly as text.

use chrono::NaiveDate;
use rolodex_core::contact::Contact;

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

/// Raw strings read directly from a `contacts` row.
pub struct RawContact {
  pub id:         i64,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      String,
  pub birthday:   String,
  pub notes:      Option<String>,
}

impl RawContact {
  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:         self.id,
      first_name: self.first_name,
      last_name:  self.last_name,
      email:      self.email,
      phone:      self.phone,
      birthday:   decode_date(&self.birthday)?,
      notes:      self.notes,
    })
  }

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawContact {
      id:         row.get(0)?,
      first_name: row.get(1)?,
      last_name:  row.get(2)?,
      email:      row.get(3)?,
      phone:      row.get(4)?,
      birthday:   row.get(5)?,
      notes:      row.get(6)?,
    })
  }
}
