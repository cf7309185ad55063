//! One-shot status payloads for the post/redirect/get cycle
//!
//! The records page reports mutation outcomes across a redirect. The
//! outcome travels as a typed payload in a cookie attached to the
//! redirecting response; the next render takes it (read and remove), so
//! a message is shown exactly once and never twice.

use axum_extra::extract::cookie::{Cookie, CookieJar};

const FLASH_COOKIE: &str = "flash";

/// Status messages shown by the records page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMessage {
    InvalidPhone,
    PhoneInUse,
    Updated,
    UpdateFailed,
    Deleted,
    DeleteFailed,
}

impl FlashMessage {
    /// Stable token stored in the cookie
    fn token(self) -> &'static str {
        match self {
            FlashMessage::InvalidPhone => "invalid-phone",
            FlashMessage::PhoneInUse => "phone-in-use",
            FlashMessage::Updated => "updated",
            FlashMessage::UpdateFailed => "update-failed",
            FlashMessage::Deleted => "deleted",
            FlashMessage::DeleteFailed => "delete-failed",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "invalid-phone" => Some(FlashMessage::InvalidPhone),
            "phone-in-use" => Some(FlashMessage::PhoneInUse),
            "updated" => Some(FlashMessage::Updated),
            "update-failed" => Some(FlashMessage::UpdateFailed),
            "deleted" => Some(FlashMessage::Deleted),
            "delete-failed" => Some(FlashMessage::DeleteFailed),
            _ => None,
        }
    }

    /// User-facing alert text
    pub fn text(self) -> &'static str {
        match self {
            FlashMessage::InvalidPhone => "Invalid phone number format.",
            FlashMessage::PhoneInUse => "This phone number is already in use.",
            FlashMessage::Updated => "Record updated successfully!",
            FlashMessage::UpdateFailed => "Error updating record.",
            FlashMessage::Deleted => "Record deleted successfully!",
            FlashMessage::DeleteFailed => "Error deleting record.",
        }
    }
}

/// Attach a flash payload to the outgoing response
pub fn set(jar: CookieJar, message: FlashMessage) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, message.token()))
            .path("/")
            .http_only(true),
    )
}

/// Read and clear the flash payload
///
/// The removal cookie rides on the same response as the render, so a
/// payload survives exactly one redirect-then-render cycle.
pub fn take(jar: CookieJar) -> (CookieJar, Option<FlashMessage>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, None);
    }

    let message = jar
        .get(FLASH_COOKIE)
        .and_then(|cookie| FlashMessage::from_token(cookie.value()));
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));

    (jar, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_is_read_once() {
        let jar = set(CookieJar::new(), FlashMessage::Updated);

        let (jar, first) = take(jar);
        assert_eq!(first, Some(FlashMessage::Updated));

        let (_, second) = take(jar);
        assert_eq!(second, None);
    }

    #[test]
    fn test_set_overwrites_pending_payload() {
        let jar = set(CookieJar::new(), FlashMessage::Updated);
        let jar = set(jar, FlashMessage::Deleted);

        let (_, message) = take(jar);
        assert_eq!(message, Some(FlashMessage::Deleted));
    }

    #[test]
    fn test_unrecognized_token_reads_as_no_message() {
        let jar = CookieJar::new().add(Cookie::new(FLASH_COOKIE, "stale-token"));

        let (_, message) = take(jar);
        assert_eq!(message, None);
    }

    #[test]
    fn test_empty_jar_reads_as_no_message() {
        let (_, message) = take(CookieJar::new());
        assert_eq!(message, None);
    }

    #[test]
    fn test_token_round_trip() {
        for message in [
            FlashMessage::InvalidPhone,
            FlashMessage::PhoneInUse,
            FlashMessage::Updated,
            FlashMessage::UpdateFailed,
            FlashMessage::Deleted,
            FlashMessage::DeleteFailed,
        ] {
            assert_eq!(FlashMessage::from_token(message.token()), Some(message));
        }
    }
}
