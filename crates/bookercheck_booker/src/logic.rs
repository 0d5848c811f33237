// --- File: crates/bookercheck_booker/src/logic.rs ---
use crate::auth::AuthToken;
use crate::error::BookerError;
use crate::models::{Booking, BookingId, BookingPatch, CreatedBooking};
use bookercheck_common::HTTP_CLIENT;
use bookercheck_config::BookerConfig;
use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE};
use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::{debug, info};

// --- Core API Functions ---
// One function per endpoint. Each builds the URL from the configured base,
// sends through the shared client, reads status plus body text, parses the
// body on the expected status and maps anything else to ApiError.

fn json_headers(builder: RequestBuilder) -> RequestBuilder {
    builder.header(ACCEPT, "application/json")
}

async fn read_body(response: Response) -> Result<(StatusCode, String), BookerError> {
    let status = response.status();
    let body_text = response.text().await?;
    debug!("[Booker] Response status {}: {}", status, body_text);
    Ok((status, body_text))
}

fn api_error(status: StatusCode, body_text: String) -> BookerError {
    // The service reports errors as plain text ("Not Found", "Forbidden").
    BookerError::ApiError {
        status_code: status.as_u16(),
        message: body_text.trim().to_string(),
    }
}

/// Creates a booking via `POST /booking`.
///
/// The Basic Authorization header is part of the recorded contract, so it is
/// always sent even though the sandbox also accepts unauthenticated creates.
pub async fn create_booking(
    config: &BookerConfig,
    booking: &Booking,
) -> Result<CreatedBooking, BookerError> {
    let url = format!("{}/booking", config.base_url);
    info!("[Booker] Creating booking at {}", url);

    let response = json_headers(HTTP_CLIENT.post(&url))
        .basic_auth(&config.username, Some(&config.password))
        .json(booking)
        .send()
        .await?;

    let (status, body_text) = read_body(response).await?;
    if status != StatusCode::OK {
        return Err(api_error(status, body_text));
    }
    let created: CreatedBooking = serde_json::from_str(&body_text)?;
    info!("[Booker] Created booking id {}", created.bookingid);
    Ok(created)
}

/// Fetches one booking via `GET /booking/{id}`.
pub async fn get_booking(config: &BookerConfig, booking_id: i64) -> Result<Booking, BookerError> {
    let url = format!("{}/booking/{}", config.base_url, booking_id);
    let response = json_headers(HTTP_CLIENT.get(&url)).send().await?;

    let (status, body_text) = read_body(response).await?;
    match status {
        StatusCode::OK => Ok(serde_json::from_str(&body_text)?),
        StatusCode::NOT_FOUND => Err(BookerError::NotFound(booking_id)),
        _ => Err(api_error(status, body_text)),
    }
}

/// Lists every booking id via `GET /booking`.
pub async fn list_bookings(config: &BookerConfig) -> Result<Vec<BookingId>, BookerError> {
    let url = format!("{}/booking", config.base_url);
    info!("[Booker] Listing bookings at {}", url);

    let response = json_headers(HTTP_CLIENT.get(&url)).send().await?;
    let (status, body_text) = read_body(response).await?;
    if status != StatusCode::OK {
        return Err(api_error(status, body_text));
    }
    Ok(serde_json::from_str(&body_text)?)
}

/// Applies a partial update via `PATCH /booking/{id}`.
pub async fn partial_update_booking(
    config: &BookerConfig,
    booking_id: i64,
    patch: &BookingPatch,
) -> Result<Booking, BookerError> {
    let url = format!("{}/booking/{}", config.base_url, booking_id);
    info!("[Booker] Patching booking {} at {}", booking_id, url);

    let response = json_headers(HTTP_CLIENT.patch(&url))
        .basic_auth(&config.username, Some(&config.password))
        .json(patch)
        .send()
        .await?;

    let (status, body_text) = read_body(response).await?;
    if status != StatusCode::OK {
        return Err(api_error(status, body_text));
    }
    Ok(serde_json::from_str(&body_text)?)
}

/// Replaces a booking via `PUT /booking/{id}`.
pub async fn update_booking(
    config: &BookerConfig,
    booking_id: i64,
    booking: &Booking,
) -> Result<Booking, BookerError> {
    let url = format!("{}/booking/{}", config.base_url, booking_id);
    info!("[Booker] Replacing booking {} at {}", booking_id, url);

    let response = json_headers(HTTP_CLIENT.put(&url))
        .basic_auth(&config.username, Some(&config.password))
        .json(booking)
        .send()
        .await?;

    let (status, body_text) = read_body(response).await?;
    if status != StatusCode::OK {
        return Err(api_error(status, body_text));
    }
    Ok(serde_json::from_str(&body_text)?)
}

/// Deletes a booking via `DELETE /booking/{id}`.
///
/// Authorized with the `token=<value>` cookie. The service answers
/// 201 Created on a successful delete; anything else is an API error.
pub async fn delete_booking(
    config: &BookerConfig,
    booking_id: i64,
    token: &AuthToken,
) -> Result<(), BookerError> {
    let url = format!("{}/booking/{}", config.base_url, booking_id);
    info!("[Booker] Deleting booking {} at {}", booking_id, url);

    let response = HTTP_CLIENT
        .delete(&url)
        .header(CONTENT_TYPE, "application/json")
        .header(COOKIE, token.cookie())
        .send()
        .await?;

    let (status, body_text) = read_body(response).await?;
    if status != StatusCode::CREATED {
        return Err(api_error(status, body_text));
    }
    Ok(())
}
