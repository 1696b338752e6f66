//! Client-side checks run before a draft is sent.
//!
//! Rules are applied in a fixed order and the first failure is reported:
//! required fields, contact number length, then participant count. The
//! participant count is parsed leniently, the way a browser's `parseInt`
//! does it, so `"5abc"` counts as 5 while `"abc"` is not a number at all.

use super::draft::RegistrationDraft;
use thiserror::Error;

/// Required length of the faculty incharge's phone number.
pub const CONTACT_NUMBER_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired,
    #[error("Please enter a valid 10-digit contact number")]
    InvalidContactNumber,
    #[error("Number of participants must be at least 1")]
    TooFewParticipants,
}

pub fn validate(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    let required = [
        &draft.college_name,
        &draft.college_address,
        &draft.faculty_incharge_name,
        &draft.contact_number,
        &draft.participants,
    ];
    // Stream is an enum and always holds a value.
    if required.iter().any(|value| value.is_empty()) {
        return Err(ValidationError::MissingRequired);
    }

    if draft.contact_number.chars().count() != CONTACT_NUMBER_LEN {
        return Err(ValidationError::InvalidContactNumber);
    }

    // Not-a-number compares as "less than 1".
    match parse_int_lenient(&draft.participants) {
        Some(n) if n >= 1 => Ok(()),
        _ => Err(ValidationError::TooFewParticipants),
    }
}

/// Parse the leading integer of `input`, ignoring anything after it.
///
/// Leading whitespace is skipped, an optional sign is accepted, and a `0x`
/// prefix switches to hexadecimal. Returns `None` when no digit follows.
/// Values too large for `i64` saturate.
pub fn parse_int_lenient(input: &str) -> Option<i64> {
    let mut rest = input.trim_start();

    let negative = match rest.chars().next() {
        Some('-') => {
            rest = &rest[1..];
            true
        }
        Some('+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let radix = if rest.len() >= 2 && (rest.starts_with("0x") || rest.starts_with("0X")) {
        rest = &rest[2..];
        16
    } else {
        10
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in rest.chars() {
        let Some(digit) = c.to_digit(radix) else { break };
        seen_digit = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
