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
                    .table(FavoriteCharacter::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoriteCharacter::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FavoriteCharacter::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FavoriteCharacter::CharacterId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorite_character-user")
                            .from(FavoriteCharacter::Table, FavoriteCharacter::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorite_character-people")
                            .from(FavoriteCharacter::Table, FavoriteCharacter::CharacterId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-favorite_character-user-character")
                    .table(FavoriteCharacter::Table)
                    .col(FavoriteCharacter::UserId)
                    .col(FavoriteCharacter::CharacterId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteCharacter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FavoriteCharacter {
    Table,
    Id,
    UserId,
    CharacterId,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
}
