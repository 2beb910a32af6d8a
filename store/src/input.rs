/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};

use super::consts::PORT_RANGE;
use super::error::{StoreError, StoreResult};

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

/// Returns a required text field, rejecting absent or blank input.
pub fn require_text(field: &str, value: Option<String>) -> StoreResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(StoreError::missing_field(field)),
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if !EmailAddress::is_valid(email) {
        return Err("Invalid email format".to_string());
    }

    if email.len() > 120 {
        return Err("Email cannot exceed 120 characters".to_string());
    }

    Ok(())
}

/// Deserializes a present field (including an explicit `null`) as `Some`, so that
/// `#[serde(default)]` leaves absent fields as `None`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
