use serde::Serialize;

use crate::{
    models::{
        availabilities::AvailabilityRow,
        providers::{provider_display, ProviderRow},
        specialties::SpecialtyData,
    },
    utils::format_time_str,
};

#[derive(Serialize)]
pub struct SpecialtyItem {
    pub id: i32,
    pub name: String,
}

impl From<SpecialtyData> for SpecialtyItem {
    fn from(data: SpecialtyData) -> Self {
        Self {
            id: data.id,
            name: data.name,
        }
    }
}

#[derive(Serialize)]
pub struct ProviderItem {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub specialty_id: i32,
    pub specialty_name: String,
    pub location: String,
}

impl From<ProviderRow> for ProviderItem {
    fn from((provider, user, specialty): ProviderRow) -> Self {
        Self {
            id: provider.id,
            user_id: provider.user_id,
            user_name: user.display_name(),
            specialty_id: specialty.id,
            specialty_name: specialty.name,
            location: provider.location,
        }
    }
}

#[derive(Serialize)]
pub struct AvailabilityItem {
    pub id: i32,
    pub provider_id: i32,
    pub provider_name: String,
    pub start: String,
    pub end: String,
}

impl From<AvailabilityRow> for AvailabilityItem {
    fn from((slot, user, specialty): AvailabilityRow) -> Self {
        Self {
            id: slot.id,
            provider_id: slot.provider_id,
            provider_name: provider_display(&user, &specialty),
            start: format_time_str(&slot.start_time),
            end: format_time_str(&slot.end_time),
        }
    }
}
