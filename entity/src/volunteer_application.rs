use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "volunteer_application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub availability: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub skills: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub motivation: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::applicant_profile::Entity",
        from = "Column::UserId",
        to = "super::applicant_profile::Column::UserId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ApplicantProfile,
}

impl Related<super::applicant_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicantProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
