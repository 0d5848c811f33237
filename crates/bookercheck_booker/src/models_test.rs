// --- File: crates/bookercheck_booker/src/models_test.rs ---
use crate::models::{AuthResponse, Booking, BookingDates, BookingPatch, CreatedBooking};
use chrono::NaiveDate;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn johny() -> Booking {
    Booking {
        firstname: "Johny".to_string(),
        lastname: "SilverHand".to_string(),
        totalprice: 123,
        depositpaid: true,
        bookingdates: BookingDates {
            checkin: date(2025, 1, 1),
            checkout: date(2025, 1, 1),
        },
        additionalneeds: Some("Breakfast".to_string()),
    }
}

#[test]
fn booking_serializes_with_wire_field_names() {
    let value = serde_json::to_value(johny()).unwrap();
    assert_eq!(
        value,
        json!({
            "firstname": "Johny",
            "lastname": "SilverHand",
            "totalprice": 123,
            "depositpaid": true,
            "bookingdates": {
                "checkin": "2025-01-01",
                "checkout": "2025-01-01"
            },
            "additionalneeds": "Breakfast"
        })
    );
}

#[test]
fn booking_without_needs_omits_the_field() {
    let mut booking = johny();
    booking.additionalneeds = None;
    let value = serde_json::to_value(booking).unwrap();
    assert!(value.get("additionalneeds").is_none());
}

#[test]
fn created_booking_parses_the_service_shape() {
    let body = json!({
        "bookingid": 42,
        "booking": {
            "firstname": "Johny",
            "lastname": "SilverHand",
            "totalprice": 123,
            "depositpaid": true,
            "bookingdates": {
                "checkin": "2025-01-01",
                "checkout": "2025-01-01"
            },
            "additionalneeds": "Breakfast"
        }
    });
    let created: CreatedBooking = serde_json::from_value(body).unwrap();
    assert_eq!(created.bookingid, 42);
    assert_eq!(created.booking, johny());
}

#[test]
fn patch_payload_only_carries_set_fields() {
    let patch = BookingPatch {
        totalprice: Some(777),
        ..BookingPatch::default()
    };
    let value = serde_json::to_value(patch).unwrap();
    assert_eq!(value, json!({ "totalprice": 777 }));
}

#[test]
fn auth_response_with_token() {
    let auth: AuthResponse = serde_json::from_value(json!({ "token": "abc123" })).unwrap();
    assert_eq!(auth.token.as_deref(), Some("abc123"));
    assert!(auth.reason.is_none());
}

#[test]
fn auth_response_with_reason_only() {
    let auth: AuthResponse =
        serde_json::from_value(json!({ "reason": "Bad credentials" })).unwrap();
    assert!(auth.token.is_none());
    assert_eq!(auth.reason.as_deref(), Some("Bad credentials"));
}
