//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use rolodex_core::{
  Error as CoreError, Result as CoreResult,
  contact::{Contact, ContactId, ContactPatch, NewContact},
  store::ContactStore,
};

use crate::{
  Result,
  encode::{RawContact, encode_date},
  schema::SCHEMA,
};

const CONTACT_COLUMNS: &str =
  "id, first_name, last_name, email, phone, birthday, notes";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contacts directory backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Error mapping ───────────────────────────────────────────────────────────

fn storage(e: impl std::error::Error + Send + Sync + 'static) -> CoreError {
  CoreError::Storage(Box::new(e))
}

/// Whether `e` is the unique-index violation raised by
/// `contacts_email_ci_idx` — i.e. a duplicate email.
fn is_unique_violation(e: &tokio_rusqlite::Error) -> bool {
  matches!(
    e,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(f, _))
      if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  async fn insert(&self, input: NewContact) -> CoreResult<Contact> {
    let NewContact { first_name, last_name, email, phone, birthday, notes } =
      input;
    let birthday_str = encode_date(birthday);
    let row = (
      first_name.clone(),
      last_name.clone(),
      email.clone(),
      phone.clone(),
      notes.clone(),
    );

    let res = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (first_name, last_name, email, phone, birthday, notes)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![row.0, row.1, row.2, row.3, birthday_str, row.4],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await;

    match res {
      Ok(id) => {
        Ok(Contact { id, first_name, last_name, email, phone, birthday, notes })
      }
      Err(e) if is_unique_violation(&e) => Err(CoreError::EmailConflict(email)),
      Err(e) => Err(storage(e)),
    }
  }

  async fn get(&self, id: ContactId) -> CoreResult<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
              rusqlite::params![id],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await
      .map_err(storage)?;

    raw.map(RawContact::into_contact).transpose().map_err(storage)
  }

  async fn get_by_email_ci(&self, email: &str) -> CoreResult<Option<Contact>> {
    let email = email.to_owned();

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {CONTACT_COLUMNS} FROM contacts
                 WHERE lower(email) = lower(?1)"
              ),
              rusqlite::params![email],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await
      .map_err(storage)?;

    raw.map(RawContact::into_contact).transpose().map_err(storage)
  }

  async fn list_all(&self) -> CoreResult<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY id"
        ))?;
        let rows = stmt
          .query_map([], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(storage)?;

    raws
      .into_iter()
      .map(|raw| raw.into_contact().map_err(storage))
      .collect()
  }

  async fn update(&self, id: ContactId, patch: ContactPatch) -> CoreResult<Contact> {
    let existing = self.get(id).await?.ok_or(CoreError::NotFound(id))?;
    let merged = existing.with_patch(&patch);

    let row = (
      merged.first_name.clone(),
      merged.last_name.clone(),
      merged.email.clone(),
      merged.phone.clone(),
      encode_date(merged.birthday),
      merged.notes.clone(),
    );

    let res = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts
           SET first_name = ?1, last_name = ?2, email = ?3,
               phone = ?4, birthday = ?5, notes = ?6
           WHERE id = ?7",
          rusqlite::params![row.0, row.1, row.2, row.3, row.4, row.5, id],
        )?)
      })
      .await;

    match res {
      Ok(0) => Err(CoreError::NotFound(id)),
      Ok(_) => Ok(merged),
      Err(e) if is_unique_violation(&e) => {
        Err(CoreError::EmailConflict(merged.email))
      }
      Err(e) => Err(storage(e)),
    }
  }

  async fn delete(&self, id: ContactId) -> CoreResult<()> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM contacts WHERE id = ?1", rusqlite::params![id])?)
      })
      .await
      .map_err(storage)?;

    if affected == 0 {
      return Err(CoreError::NotFound(id));
    }
    Ok(())
  }
}
