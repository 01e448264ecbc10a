use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_applicant_profile::ApplicantProfile;

static FK_VOLUNTEER_APPLICATION_USER_ID: &str = "fk-volunteer_application-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VolunteerApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(VolunteerApplication::Id))
                    .col(string_uniq(VolunteerApplication::UserId))
                    .col(string(VolunteerApplication::FullName))
                    .col(string(VolunteerApplication::Email))
                    .col(string(VolunteerApplication::Phone))
                    .col(string(VolunteerApplication::City))
                    .col(string(VolunteerApplication::Availability))
                    .col(text_null(VolunteerApplication::Skills))
                    .col(text(VolunteerApplication::Motivation))
                    .col(timestamp(VolunteerApplication::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VOLUNTEER_APPLICATION_USER_ID)
                    .from_tbl(VolunteerApplication::Table)
                    .from_col(VolunteerApplication::UserId)
                    .to_tbl(ApplicantProfile::Table)
                    .to_col(ApplicantProfile::UserId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VOLUNTEER_APPLICATION_USER_ID)
                    .table(VolunteerApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VolunteerApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VolunteerApplication {
    Table,
    Id,
    UserId,
    FullName,
    Email,
    Phone,
    City,
    Availability,
    Skills,
    Motivation,
    CreatedAt,
}
