//! Next-birthday computation and the windowed "upcoming birthdays" query.
//!
//! Only the month and day of a stored birthday are meaningful here; the
//! birth year is carried in the record but never consulted. The awkward
//! cases are year rollover (a birthday that has already passed resolves to
//! next year) and Feb 29 anchors, which degrade to Feb 28 in non-leap
//! candidate years.

use chrono::{Datelike, Days, NaiveDate};

use crate::contact::Contact;

/// The next calendar date on or after `reference` with `birthday`'s month
/// and day. A birthday falling on `reference` itself counts as not yet
/// passed.
pub fn next_occurrence(birthday: NaiveDate, reference: NaiveDate) -> NaiveDate {
  let this_year = anchor_in_year(birthday, reference.year());
  if this_year >= reference {
    return this_year;
  }
  // Already passed this year. The leap-day substitution is re-evaluated
  // for the new candidate year.
  anchor_in_year(birthday, reference.year() + 1)
}

/// `birthday`'s month/day placed in `year`. The only invalid combination
/// is Feb 29 in a non-leap year, which degrades to Feb 28.
fn anchor_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
    .unwrap_or_else(|| {
      NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 is valid in every year")
    })
}

/// Contacts whose next birthday occurrence falls within
/// `[reference, reference + days]`, inclusive on both ends, ordered by
/// occurrence date ascending.
///
/// This is a deliberate full scan: the rollover and leap-day semantics do
/// not reduce to a range filter the storage layer could evaluate.
pub fn upcoming_birthdays(
  contacts: &[Contact],
  reference: NaiveDate,
  days: u32,
) -> Vec<Contact> {
  let window_end = reference + Days::new(u64::from(days));

  let mut upcoming: Vec<(NaiveDate, &Contact)> = contacts
    .iter()
    .filter_map(|contact| {
      let occurrence = next_occurrence(contact.birthday, reference);
      (occurrence <= window_end).then_some((occurrence, contact))
    })
    .collect();

  // Stable sort; contacts sharing an occurrence date keep no defined
  // relative order beyond date equality.
  upcoming.sort_by_key(|(occurrence, _)| *occurrence);
  upcoming.into_iter().map(|(_, contact)| contact.clone()).collect()
}
