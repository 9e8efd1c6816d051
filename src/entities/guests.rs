use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub occupation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appearances::Entity")]
    Appearances,
}

impl Related<super::appearances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appearances.def()
    }
}

impl Related<super::episodes::Entity> for Entity {
    fn to() -> RelationDef {
        super::appearances::Relation::Episode.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::appearances::Relation::Guest.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
