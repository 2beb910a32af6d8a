/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Used when neither `DATABASE_URL` nor a url file is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

pub const DEFAULT_ADMIN_NAME: &str = "Holonet Admin";

pub const MAX_CONNECTIONS: u32 = 10;
pub const CONNECT_TIMEOUT_SECS: u64 = 8;
