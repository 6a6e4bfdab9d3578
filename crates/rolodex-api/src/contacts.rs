//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | Search + pagination, see [`ListParams`] |
//! | `POST`   | `/contacts` | 201 on success, 409 on duplicate email |
//! | `GET`    | `/contacts/upcoming-birthdays` | `?days=N`, default 7 |
//! | `GET`    | `/contacts/:id` | 404 if not found |
//! | `PUT`    | `/contacts/:id` | Full replace, all fields required |
//! | `PATCH`  | `/contacts/:id` | Partial, absent fields untouched |
//! | `DELETE` | `/contacts/:id` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Utc;
use rolodex_core::{
  birthday,
  contact::{Contact, ContactId, ContactPatch, NewContact},
  search::{self, ContactQuery},
  store::ContactStore,
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, validate};

// ─── List / search ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Free-text search across first name, last name, and email (OR
  /// semantics). When present and non-empty, the field filters below are
  /// ignored.
  pub q:          Option<String>,
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
  #[serde(default = "default_limit")]
  pub limit:      usize,
  #[serde(default)]
  pub offset:     usize,
}

fn default_limit() -> usize { 20 }

#[derive(Debug, Serialize)]
pub struct ContactListResponse {
  pub items:  Vec<Contact>,
  pub total:  usize,
  pub limit:  usize,
  pub offset: usize,
}

/// `GET /contacts[?q=...][&first_name=...][&last_name=...][&email=...][&limit=...][&offset=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<ContactListResponse>, ApiError>
where
  S: ContactStore,
{
  if !(1..=100).contains(&params.limit) {
    return Err(ApiError::Validation("limit must be between 1 and 100".into()));
  }

  let query = ContactQuery {
    q:          params.q,
    first_name: params.first_name,
    last_name:  params.last_name,
    email:      params.email,
    limit:      params.limit,
    offset:     params.offset,
  };

  let contacts = store.list_all().await?;
  let (items, total) = search::search(&contacts, &query);

  Ok(Json(ContactListResponse {
    items,
    total,
    limit: query.limit,
    offset: query.offset,
  }))
}

// ─── Upcoming birthdays ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpcomingParams {
  /// Look-ahead window length in days, inclusive on both ends.
  #[serde(default = "default_days")]
  pub days: u32,
}

fn default_days() -> u32 { 7 }

/// `GET /contacts/upcoming-birthdays[?days=N]`
pub async fn upcoming_birthdays<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<UpcomingParams>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  if !(1..=365).contains(&params.days) {
    return Err(ApiError::Validation("days must be between 1 and 365".into()));
  }

  let contacts = store.list_all().await?;
  let today = Utc::now().date_naive();
  Ok(Json(birthday::upcoming_birthdays(&contacts, today, params.days)))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewContact>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  validate::validate_new(&body)?;
  let contact = store.insert(body).await?;
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<ContactId>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let contact = store
    .get(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;
  Ok(Json(contact))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id` — full replace; every required field must be present.
pub async fn replace<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<ContactId>,
  Json(body): Json<NewContact>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  validate::validate_new(&body)?;
  let contact = store.update(id, ContactPatch::from(body)).await?;
  Ok(Json(contact))
}

/// `PATCH /contacts/:id` — partial update; absent fields are untouched.
pub async fn patch<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<ContactId>,
  Json(body): Json<ContactPatch>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  validate::validate_patch(&body)?;
  let contact = store.update(id, body).await?;
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MessageResponse {
  pub message: String,
}

/// `DELETE /contacts/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<ContactId>,
) -> Result<Json<MessageResponse>, ApiError>
where
  S: ContactStore,
{
  store.delete(id).await?;
  Ok(Json(MessageResponse { message: format!("contact {id} deleted") }))
}
