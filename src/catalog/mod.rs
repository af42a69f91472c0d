mod requests;
mod responses;

use crate::{
    database::{catalog::ProviderFilter, Catalog},
    error::ApiResult,
    protocol::{parse_filter_id, ItemResponse, ListResponse},
};
use actix_web::{get, post, routes, web, HttpResponse};
use chrono::Utc;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_specialties)
        .service(search_providers)
        .service(view_provider)
        .service(provider_availability)
        .service(add_availability)
        .service(search_availability);
}

#[get("/specialties/")]
async fn list_specialties(catalog: web::Data<Catalog>) -> ApiResult<HttpResponse> {
    let catalog = catalog.into_inner();
    let specialties = web::block(move || catalog.list_specialties()).await??;

    let specialties = specialties.into_iter().map(SpecialtyItem::from).collect();
    Ok(HttpResponse::Ok().json(ListResponse::ok(specialties)))
}

#[get("/providers/")]
async fn search_providers(
    catalog: web::Data<Catalog>,
    query: web::Query<SearchProviderQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let filter = ProviderFilter {
        specialty_id: parse_filter_id("specialty", query.specialty.as_deref())?,
        location: query
            .location
            .map(|location| location.trim().to_string())
            .filter(|location| !location.is_empty()),
    };

    let catalog = catalog.into_inner();
    let providers = web::block(move || catalog.list_providers(filter)).await??;

    let providers = providers.into_iter().map(ProviderItem::from).collect();
    Ok(HttpResponse::Ok().json(ListResponse::ok(providers)))
}

#[get("/providers/{id}/")]
async fn view_provider(
    catalog: web::Data<Catalog>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let catalog = catalog.into_inner();
    let provider = web::block(move || catalog.get_provider(id)).await??;

    Ok(HttpResponse::Ok().json(ItemResponse::ok(ProviderItem::from(provider))))
}

#[get("/providers/{id}/availability/")]
async fn provider_availability(
    catalog: web::Data<Catalog>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let now = Utc::now().naive_utc();
    let catalog = catalog.into_inner();
    let slots = web::block(move || catalog.provider_availability(id, now)).await??;

    let slots = slots.into_iter().map(AvailabilityItem::from).collect();
    Ok(HttpResponse::Ok().json(ListResponse::ok(slots)))
}

#[post("/providers/{id}/availability/")]
async fn add_availability(
    catalog: web::Data<Catalog>,
    path: web::Path<i32>,
    info: web::Json<AddAvailabilityRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let range = info.into_inner().validate()?;

    let catalog = catalog.into_inner();
    let slot = web::block(move || catalog.add_availability(id, range)).await??;

    tracing::info!(
        id = slot.0.id,
        provider_id = id,
        start = %range.start,
        end = %range.end,
        "availability declared"
    );
    Ok(HttpResponse::Created().json(ItemResponse::created(AvailabilityItem::from(slot))))
}

#[routes]
#[get("/availabilities/")]
#[get("/availability/")]
async fn search_availability(
    catalog: web::Data<Catalog>,
    query: web::Query<SearchAvailabilityQuery>,
) -> ApiResult<HttpResponse> {
    let provider_id = parse_filter_id("provider", query.provider.as_deref())?;
    let now = Utc::now().naive_utc();
    let catalog = catalog.into_inner();
    let slots = web::block(move || catalog.list_availability(provider_id, now)).await??;

    let slots = slots.into_iter().map(AvailabilityItem::from).collect();
    Ok(HttpResponse::Ok().json(ListResponse::ok(slots)))
}
