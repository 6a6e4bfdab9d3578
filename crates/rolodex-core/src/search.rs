//! The search/list engine — a pure function over a contact snapshot.
//!
//! Two mutually exclusive filter modes:
//!
//! - **OR-mode**: when `q` is present and non-empty, a contact matches if
//!   `q` is a case-insensitive substring of first name, last name, or
//!   email. Individual field filters are ignored entirely.
//! - **AND-mode**: otherwise, every provided field filter must match its
//!   field (case-insensitive substring). Zero provided filters matches
//!   everything.
//!
//! Filter values are literal substrings — there is no pattern syntax to
//! inject.

use crate::contact::Contact;

/// Parameters for [`search`]. `limit`/`offset` are structurally validated
/// upstream (limit 1–100, offset ≥ 0); the engine trusts them.
#[derive(Debug, Clone)]
pub struct ContactQuery {
  /// Free-text filter with OR semantics across name and email fields.
  pub q:          Option<String>,
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
  pub limit:      usize,
  pub offset:     usize,
}

impl Default for ContactQuery {
  fn default() -> Self {
    ContactQuery {
      q:          None,
      first_name: None,
      last_name:  None,
      email:      None,
      limit:      20,
      offset:     0,
    }
  }
}

impl ContactQuery {
  fn matches(&self, contact: &Contact) -> bool {
    if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
      return contains_ci(&contact.first_name, q)
        || contains_ci(&contact.last_name, q)
        || contains_ci(&contact.email, q);
    }

    let field_ok = |filter: &Option<String>, value: &str| {
      match filter.as_deref().filter(|f| !f.is_empty()) {
        Some(f) => contains_ci(value, f),
        None => true,
      }
    };

    field_ok(&self.first_name, &contact.first_name)
      && field_ok(&self.last_name, &contact.last_name)
      && field_ok(&self.email, &contact.email)
  }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter, count, order, and paginate a contact snapshot.
///
/// Returns the requested page (ordered by id ascending) together with the
/// total match count, which is independent of `limit`/`offset`. An offset
/// past the end yields an empty page with the total unchanged.
pub fn search(contacts: &[Contact], query: &ContactQuery) -> (Vec<Contact>, usize) {
  let mut matched: Vec<&Contact> =
    contacts.iter().filter(|c| query.matches(c)).collect();
  matched.sort_by_key(|c| c.id);

  let total = matched.len();
  let page = matched
    .into_iter()
    .skip(query.offset)
    .take(query.limit)
    .cloned()
    .collect();

  (page, total)
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn contact(id: i64, first: &str, last: &str, email: &str) -> Contact {
    Contact {
      id,
      first_name: first.into(),
      last_name: last.into(),
      email: email.into(),
      phone: "+1 555 0100".into(),
      birthday: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
      notes: None,
    }
  }

  fn sample() -> Vec<Contact> {
    vec![
      contact(1, "John", "Doe", "john.doe@example.com"),
      contact(2, "Jane", "Smith", "jane.smith@example.com"),
      contact(3, "Johnny", "Appleseed", "seeds@orchard.example.com"),
    ]
  }

  #[test]
  fn no_filters_matches_everything() {
    let (page, total) = search(&sample(), &ContactQuery::default());
    assert_eq!(total, 3);
    assert_eq!(page.len(), 3);
    assert_eq!(page.iter().map(|c| c.id).collect::<Vec<_>>(), [1, 2, 3]);
  }

  #[test]
  fn q_searches_across_fields_with_or_semantics() {
    let query = ContactQuery { q: Some("john".into()), ..Default::default() };
    let (page, total) = search(&sample(), &query);
    // Matches first name "John", "Johnny", and email "john.doe@...".
    assert_eq!(total, 2);
    assert_eq!(page.iter().map(|c| c.id).collect::<Vec<_>>(), [1, 3]);
  }

  #[test]
  fn q_matches_on_email_alone() {
    let query = ContactQuery { q: Some("orchard".into()), ..Default::default() };
    let (page, total) = search(&sample(), &query);
    assert_eq!(total, 1);
    assert_eq!(page[0].id, 3);
  }

  #[test]
  fn individual_filters_use_and_semantics() {
    let query = ContactQuery {
      first_name: Some("john".into()),
      last_name: Some("doe".into()),
      ..Default::default()
    };
    let (page, total) = search(&sample(), &query);
    // "Johnny Appleseed" matches first_name but not last_name.
    assert_eq!(total, 1);
    assert_eq!(page[0].id, 1);
  }

  #[test]
  fn q_takes_precedence_over_individual_filters() {
    // Supplying both q and a field filter behaves as pure OR-mode.
    let query = ContactQuery {
      q: Some("jane".into()),
      first_name: Some("john".into()),
      ..Default::default()
    };
    let (page, total) = search(&sample(), &query);
    assert_eq!(total, 1);
    assert_eq!(page[0].id, 2);
  }

  #[test]
  fn empty_q_falls_back_to_field_filters() {
    let query = ContactQuery {
      q: Some(String::new()),
      last_name: Some("smith".into()),
      ..Default::default()
    };
    let (_, total) = search(&sample(), &query);
    assert_eq!(total, 1);
  }

  #[test]
  fn matching_is_case_insensitive() {
    for needle in ["JOHN", "john", "JoHn"] {
      let query = ContactQuery { q: Some(needle.into()), ..Default::default() };
      let (_, total) = search(&sample(), &query);
      assert_eq!(total, 2, "needle {needle:?}");
    }
  }

  #[test]
  fn total_is_independent_of_pagination() {
    let query = ContactQuery { limit: 1, offset: 1, ..Default::default() };
    let (page, total) = search(&sample(), &query);
    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, 2);
  }

  #[test]
  fn offset_past_total_yields_empty_page() {
    let query = ContactQuery { offset: 10, ..Default::default() };
    let (page, total) = search(&sample(), &query);
    assert!(page.is_empty());
    assert_eq!(total, 3);
  }

  #[test]
  fn empty_snapshot_degrades_gracefully() {
    let query = ContactQuery { q: Some("anything".into()), ..Default::default() };
    let (page, total) = search(&[], &query);
    assert!(page.is_empty());
    assert_eq!(total, 0);
  }
}
