use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::ReviewStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "applicant_profile")]
pub struct Model {
    /// Identifier issued by the external auth provider
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub form_completed: bool,
    #[sea_orm(nullable)]
    pub status: Option<ReviewStatus>,
    #[sea_orm(nullable)]
    pub reviewed_by: Option<String>,
    #[sea_orm(nullable)]
    pub reviewed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::volunteer_application::Entity")]
    VolunteerApplication,
}

impl Related<super::volunteer_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VolunteerApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
