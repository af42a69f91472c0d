use crate::schema::providers;
use diesel::prelude::*;

use super::{specialties::SpecialtyData, users::UserData};

#[derive(Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = providers)]
pub struct ProviderData {
    pub id: i32,
    pub user_id: i32,
    pub specialty_id: i32,
    pub location: String,
}

/// A provider row joined with its account and specialty.
pub type ProviderRow = (ProviderData, UserData, SpecialtyData);

/// `"<user display name> (<specialty>)"`, the label used wherever a provider
/// is shown next to a booking or a slot.
pub fn provider_display(user: &UserData, specialty: &SpecialtyData) -> String {
    format!("{} ({})", user.display_name(), specialty.name)
}
