/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250301_120000_create_table_user;
mod m20250301_120100_create_table_people;
mod m20250301_120200_create_table_planet;
mod m20250301_120300_create_table_favorite_planet;
mod m20250301_120400_create_table_favorite_character;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_120000_create_table_user::Migration),
            Box::new(m20250301_120100_create_table_people::Migration),
            Box::new(m20250301_120200_create_table_planet::Migration),
            Box::new(m20250301_120300_create_table_favorite_planet::Migration),
            Box::new(m20250301_120400_create_table_favorite_character::Migration),
        ]
    }
}
