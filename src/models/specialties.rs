use crate::schema::specialties;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = specialties)]
pub struct SpecialtyData {
    pub id: i32,
    pub name: String,
}
