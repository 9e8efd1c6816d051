use sea_orm_migration::prelude::*;

use crate::domain::Rating;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Episodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Episodes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Episodes::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Episodes::Description).string_len(255).null())
                    .col(ColumnDef::new(Episodes::Date).date().not_null())
                    .col(ColumnDef::new(Episodes::Number).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Guests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Guests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Guests::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Guests::Occupation).string_len(100).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Appearances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appearances::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Appearances::Rating)
                            .integer()
                            .not_null()
                            .check(
                                Expr::col(Appearances::Rating).between(Rating::MIN, Rating::MAX),
                            ),
                    )
                    .col(ColumnDef::new(Appearances::GuestId).integer().not_null())
                    .col(ColumnDef::new(Appearances::EpisodeId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appearances_guest_id_guests")
                            .from(Appearances::Table, Appearances::GuestId)
                            .to(Guests::Table, Guests::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appearances_episode_id_episodes")
                            .from(Appearances::Table, Appearances::EpisodeId)
                            .to(Episodes::Table, Episodes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appearances_episode_id")
                    .table(Appearances::Table)
                    .col(Appearances::EpisodeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appearances_guest_id")
                    .table(Appearances::Table)
                    .col(Appearances::GuestId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appearances::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Guests::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Episodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Episodes {
    Table,
    Id,
    Title,
    Description,
    Date,
    Number,
}

#[derive(DeriveIden)]
enum Guests {
    Table,
    Id,
    Name,
    Occupation,
}

#[derive(DeriveIden)]
enum Appearances {
    Table,
    Id,
    Rating,
    GuestId,
    EpisodeId,
}
