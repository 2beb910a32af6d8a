/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritePlanet::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavoritePlanet::UserId).integer().not_null())
                    .col(ColumnDef::new(FavoritePlanet::PlanetId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorite_planet-user")
                            .from(FavoritePlanet::Table, FavoritePlanet::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorite_planet-planet")
                            .from(FavoritePlanet::Table, FavoritePlanet::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-favorite_planet-user-planet")
                    .table(FavoritePlanet::Table)
                    .col(FavoritePlanet::UserId)
                    .col(FavoritePlanet::PlanetId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePlanet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FavoritePlanet {
    Table,
    Id,
    UserId,
    PlanetId,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Planet {
    Table,
    Id,
}
