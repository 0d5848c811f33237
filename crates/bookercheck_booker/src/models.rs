// --- File: crates/bookercheck_booker/src/models.rs ---
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// --- Data Structures ---

/// Credentials sent to `POST /auth`.
#[derive(Serialize, Debug)]
pub struct AuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from `POST /auth`.
///
/// The service answers 200 even for bad credentials; the body then carries
/// a `reason` instead of a `token`.
#[derive(Deserialize, Debug)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub reason: Option<String>,
}

/// Stay interval of a booking. ISO dates on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingDates {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

/// A booking record as the service sends and receives it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: i64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

/// Response from `POST /booking`: the assigned id plus an echo of the record.
#[derive(Deserialize, Debug)]
pub struct CreatedBooking {
    pub bookingid: i64,
    pub booking: Booking,
}

/// Element of the `GET /booking` collection response.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingId {
    pub bookingid: i64,
}

/// Partial update payload for `PATCH /booking/{id}`. `None` fields are
/// omitted from the JSON and left untouched by the service.
#[derive(Serialize, Debug, Default)]
pub struct BookingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totalprice: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depositpaid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookingdates: Option<BookingDates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}
