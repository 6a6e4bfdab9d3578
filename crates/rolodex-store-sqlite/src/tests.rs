//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use rolodex_core::{
  Error as CoreError,
  contact::{ContactPatch, NewContact},
  store::ContactStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn birthday(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_contact(email: &str) -> NewContact {
  NewContact {
    first_name: "Alice".into(),
    last_name:  "Liddell".into(),
    email:      email.into(),
    phone:      "+1 (555) 010-0100".into(),
    birthday:   birthday(1990, 5, 15),
    notes:      Some("met at the garden party".into()),
  }
}

// ─── Insert / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get_roundtrip() {
  let s = store().await;

  let created = s.insert(new_contact("alice@example.com")).await.unwrap();
  assert!(created.id > 0);

  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(99_999).await.unwrap().is_none());
}

#[tokio::test]
async fn ids_are_assigned_ascending() {
  let s = store().await;
  let a = s.insert(new_contact("a@example.com")).await.unwrap();
  let b = s.insert(new_contact("b@example.com")).await.unwrap();
  assert!(b.id > a.id);
}

#[tokio::test]
async fn insert_duplicate_email_conflicts() {
  let s = store().await;
  s.insert(new_contact("alice@example.com")).await.unwrap();

  let err = s.insert(new_contact("alice@example.com")).await.unwrap_err();
  assert!(matches!(err, CoreError::EmailConflict(_)));
}

#[tokio::test]
async fn email_uniqueness_is_case_insensitive() {
  let s = store().await;
  s.insert(new_contact("alice@example.com")).await.unwrap();

  let err = s.insert(new_contact("ALICE@Example.COM")).await.unwrap_err();
  assert!(matches!(err, CoreError::EmailConflict(_)));
}

#[tokio::test]
async fn get_by_email_ignores_case() {
  let s = store().await;
  let created = s.insert(new_contact("alice@example.com")).await.unwrap();

  let fetched = s
    .get_by_email_ci("ALICE@EXAMPLE.COM")
    .await
    .unwrap()
    .unwrap();
  assert_eq!(fetched.id, created.id);

  assert!(s.get_by_email_ci("nobody@example.com").await.unwrap().is_none());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_all_ordered_by_id() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());

  for i in 0..3 {
    s.insert(new_contact(&format!("contact{i}@example.com")))
      .await
      .unwrap();
  }

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 3);
  assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn patch_touches_only_provided_fields() {
  let s = store().await;
  let created = s.insert(new_contact("alice@example.com")).await.unwrap();

  let patch = ContactPatch {
    notes: Some(Some("new notes only".into())),
    ..Default::default()
  };
  let updated = s.update(created.id, patch).await.unwrap();

  assert_eq!(updated.notes.as_deref(), Some("new notes only"));
  assert_eq!(updated.first_name, created.first_name);
  assert_eq!(updated.email, created.email);
  assert_eq!(updated.birthday, created.birthday);

  // And the change is persisted, not just echoed.
  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched, updated);
}

#[tokio::test]
async fn full_replace_via_patch_from_new_contact() {
  let s = store().await;
  let created = s.insert(new_contact("alice@example.com")).await.unwrap();

  let mut replacement = new_contact("alice.new@example.com");
  replacement.first_name = "Alicia".into();
  replacement.notes = None;

  let updated = s
    .update(created.id, ContactPatch::from(replacement))
    .await
    .unwrap();

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.first_name, "Alicia");
  assert_eq!(updated.email, "alice.new@example.com");
  assert_eq!(updated.notes, None);
}

#[tokio::test]
async fn update_missing_contact_errors() {
  let s = store().await;
  let err = s
    .update(99_999, ContactPatch::default())
    .await
    .unwrap_err();
  assert!(matches!(err, CoreError::NotFound(99_999)));
}

#[tokio::test]
async fn update_to_other_contacts_email_conflicts() {
  let s = store().await;
  s.insert(new_contact("alice@example.com")).await.unwrap();
  let bob = s.insert(new_contact("bob@example.com")).await.unwrap();

  let patch = ContactPatch {
    email: Some("Alice@Example.com".into()),
    ..Default::default()
  };
  let err = s.update(bob.id, patch).await.unwrap_err();
  assert!(matches!(err, CoreError::EmailConflict(_)));
}

#[tokio::test]
async fn update_keeping_own_email_is_not_a_conflict() {
  let s = store().await;
  let created = s.insert(new_contact("alice@example.com")).await.unwrap();

  // Full replace that does not change the email.
  let updated = s
    .update(created.id, ContactPatch::from(new_contact("alice@example.com")))
    .await
    .unwrap();
  assert_eq!(updated.email, "alice@example.com");
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_contact() {
  let s = store().await;
  let created = s.insert(new_contact("alice@example.com")).await.unwrap();

  s.delete(created.id).await.unwrap();
  assert!(s.get(created.id).await.unwrap().is_none());

  // The freed email can be used again.
  s.insert(new_contact("alice@example.com")).await.unwrap();
}

#[tokio::test]
async fn delete_missing_contact_errors() {
  let s = store().await;
  let err = s.delete(99_999).await.unwrap_err();
  assert!(matches!(err, CoreError::NotFound(99_999)));
}
