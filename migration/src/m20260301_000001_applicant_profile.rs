use sea_orm_migration::{prelude::*, schema::*};

static IDX_APPLICANT_PROFILE_STATUS: &str = "idx-applicant_profile-status";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicantProfile::Table)
                    .if_not_exists()
                    .col(string(ApplicantProfile::UserId).primary_key())
                    .col(boolean(ApplicantProfile::FormCompleted).default(false))
                    .col(string_len_null(ApplicantProfile::Status, 16))
                    .col(string_null(ApplicantProfile::ReviewedBy))
                    .col(timestamp_null(ApplicantProfile::ReviewedAt))
                    .col(timestamp(ApplicantProfile::CreatedAt))
                    .col(timestamp(ApplicantProfile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICANT_PROFILE_STATUS)
                    .table(ApplicantProfile::Table)
                    .col(ApplicantProfile::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICANT_PROFILE_STATUS)
                    .table(ApplicantProfile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ApplicantProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ApplicantProfile {
    Table,
    UserId,
    FormCompleted,
    Status,
    ReviewedBy,
    ReviewedAt,
    CreatedAt,
    UpdatedAt,
}
