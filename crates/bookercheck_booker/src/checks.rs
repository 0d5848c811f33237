// --- File: crates/bookercheck_booker/src/checks.rs ---
//! The contract scenarios, run in the order the service is meant to be
//! exercised: authenticate, create, read back, patch, replace, delete.

use crate::auth::{create_token, AuthToken};
use crate::error::BookerError;
use crate::logic::{
    create_booking, delete_booking, get_booking, list_bookings, partial_update_booking,
    update_booking,
};
use crate::models::{Booking, BookingDates, BookingPatch};
use bookercheck_config::BookerConfig;
use chrono::NaiveDate;
use tracing::info;

/// Price written by the partial update scenario.
pub const PATCHED_PRICE: i64 = 777;

/// The booking submitted by the create scenario.
pub fn sample_booking() -> Booking {
    Booking {
        firstname: "Johny".to_string(),
        lastname: "SilverHand".to_string(),
        totalprice: 123,
        depositpaid: true,
        bookingdates: stay_dates(),
        additionalneeds: Some("Breakfast".to_string()),
    }
}

/// The replacement payload submitted by the full update scenario.
pub fn replacement_booking() -> Booking {
    Booking {
        firstname: "Jim".to_string(),
        lastname: "Beam".to_string(),
        totalprice: 123,
        depositpaid: true,
        bookingdates: stay_dates(),
        additionalneeds: Some("Dinner".to_string()),
    }
}

fn stay_dates() -> BookingDates {
    // Checkin and checkout on the same day; the service accepts zero-night stays.
    let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    BookingDates {
        checkin: day,
        checkout: day,
    }
}

fn expect_field<T: PartialEq + std::fmt::Debug>(
    field: &str,
    expected: &T,
    actual: &T,
) -> Result<(), BookerError> {
    if expected == actual {
        Ok(())
    } else {
        Err(BookerError::FieldMismatch {
            field: field.to_string(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

fn verify_booking(expected: &Booking, actual: &Booking) -> Result<(), BookerError> {
    expect_field("firstname", &expected.firstname, &actual.firstname)?;
    expect_field("lastname", &expected.lastname, &actual.lastname)?;
    expect_field("totalprice", &expected.totalprice, &actual.totalprice)?;
    expect_field("depositpaid", &expected.depositpaid, &actual.depositpaid)?;
    expect_field(
        "bookingdates.checkin",
        &expected.bookingdates.checkin,
        &actual.bookingdates.checkin,
    )?;
    expect_field(
        "bookingdates.checkout",
        &expected.bookingdates.checkout,
        &actual.bookingdates.checkout,
    )?;
    expect_field(
        "additionalneeds",
        &expected.additionalneeds,
        &actual.additionalneeds,
    )?;
    Ok(())
}

/// Creates the sample booking and verifies the service stored it unchanged,
/// both in the POST response echo and in a follow-up read.
pub async fn check_create_round_trip(config: &BookerConfig) -> Result<i64, BookerError> {
    let submitted = sample_booking();
    let created = create_booking(config, &submitted).await?;
    verify_booking(&submitted, &created.booking)?;

    let fetched = get_booking(config, created.bookingid).await?;
    verify_booking(&submitted, &fetched)?;
    Ok(created.bookingid)
}

/// Every id in the collection listing must be a positive integer.
pub async fn check_listing_ids(config: &BookerConfig) -> Result<(), BookerError> {
    let ids = list_bookings(config).await?;
    info!("[Checks] Listing returned {} bookings", ids.len());
    for entry in &ids {
        if entry.bookingid <= 0 {
            return Err(BookerError::FieldMismatch {
                field: "bookingid".to_string(),
                expected: "a positive integer".to_string(),
                actual: entry.bookingid.to_string(),
            });
        }
    }
    Ok(())
}

/// Patches `totalprice` and verifies it both in the PATCH response and in a
/// follow-up read.
pub async fn check_partial_update(
    config: &BookerConfig,
    booking_id: i64,
) -> Result<(), BookerError> {
    let patch = BookingPatch {
        totalprice: Some(PATCHED_PRICE),
        ..BookingPatch::default()
    };
    let patched = partial_update_booking(config, booking_id, &patch).await?;
    expect_field("totalprice", &PATCHED_PRICE, &patched.totalprice)?;

    let fetched = get_booking(config, booking_id).await?;
    expect_field("totalprice", &PATCHED_PRICE, &fetched.totalprice)
}

/// Replaces the whole record, verifies the replaced fields in the response
/// and the full record in a follow-up read.
pub async fn check_full_update(config: &BookerConfig, booking_id: i64) -> Result<(), BookerError> {
    let replacement = replacement_booking();
    let updated = update_booking(config, booking_id, &replacement).await?;
    expect_field("firstname", &replacement.firstname, &updated.firstname)?;
    expect_field("lastname", &replacement.lastname, &updated.lastname)?;
    expect_field(
        "additionalneeds",
        &replacement.additionalneeds,
        &updated.additionalneeds,
    )?;

    let fetched = get_booking(config, booking_id).await?;
    verify_booking(&replacement, &fetched)
}

/// Deletes the booking and verifies it is actually gone.
pub async fn check_delete(
    config: &BookerConfig,
    booking_id: i64,
    token: &AuthToken,
) -> Result<(), BookerError> {
    delete_booking(config, booking_id, token).await?;
    match get_booking(config, booking_id).await {
        Err(BookerError::NotFound(_)) => Ok(()),
        Ok(_) => Err(BookerError::NotDeleted(booking_id)),
        Err(other) => Err(other),
    }
}

/// Outcome of one scenario.
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub result: Result<(), BookerError>,
}

/// Ordered outcomes of a full run.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    fn record(&mut self, name: &'static str, result: Result<(), BookerError>) {
        self.outcomes.push(CheckOutcome { name, result });
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs every scenario in order against the configured service.
///
/// Authentication and creation abort the run when they fail: everything
/// after them needs the token or the created id. Later failures are
/// recorded and the run continues, so the delete scenario still removes
/// the booking the run created.
pub async fn run_all(config: &BookerConfig) -> CheckReport {
    let mut report = CheckReport::default();

    let token = match create_token(config).await {
        Ok(token) => {
            report.record("authentication", Ok(()));
            token
        }
        Err(err) => {
            report.record("authentication", Err(err));
            return report;
        }
    };

    let booking_id = match check_create_round_trip(config).await {
        Ok(id) => {
            report.record("create round trip", Ok(()));
            id
        }
        Err(err) => {
            report.record("create round trip", Err(err));
            return report;
        }
    };

    report.record("listing ids", check_listing_ids(config).await);
    report.record("partial update", check_partial_update(config, booking_id).await);
    report.record("full update", check_full_update(config, booking_id).await);
    report.record("delete", check_delete(config, booking_id, &token).await);

    report
}
