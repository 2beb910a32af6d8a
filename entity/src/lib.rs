/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod user;
