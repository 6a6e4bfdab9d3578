//! The `ContactStore` trait — the persistence seam of the directory.
//!
//! The trait is implemented by storage backends (e.g.
//! `rolodex-store-sqlite`). The API layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  Result,
  contact::{Contact, ContactId, ContactPatch, NewContact},
};

/// Abstraction over a contacts directory backend.
///
/// Email uniqueness (case-insensitive) must be enforced atomically by the
/// backend: of two racing inserts with the same email, exactly one
/// succeeds and the other fails with
/// [`Error::EmailConflict`](crate::Error::EmailConflict).
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  /// Persist a new contact and return it with its assigned id.
  fn insert(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>>> + Send + '_;

  /// Retrieve a contact by email, compared case-insensitively.
  fn get_by_email_ci<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Contact>>> + Send + 'a;

  /// All contacts, ordered by id ascending.
  fn list_all(&self) -> impl Future<Output = Result<Vec<Contact>>> + Send + '_;

  /// Apply `patch` to the contact with `id` and return the updated record.
  ///
  /// Fails with [`Error::NotFound`](crate::Error::NotFound) if `id` does
  /// not exist, and with `EmailConflict` if the patched email collides
  /// with a *different* contact.
  fn update(
    &self,
    id: ContactId,
    patch: ContactPatch,
  ) -> impl Future<Output = Result<Contact>> + Send + '_;

  /// Delete the contact with `id`. Fails with `NotFound` if absent.
  fn delete(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<()>> + Send + '_;
}
