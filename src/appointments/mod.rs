mod requests;
mod responses;

use crate::{
    database::{store::MAX_LIST_LIMIT, AppointmentStore},
    error::{ApiError, ApiResult},
    protocol::{ItemResponse, ListResponse},
};
use actix_web::{get, patch, post, web, HttpResponse};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_appointments)
        .service(create_appointment)
        .service(update_status);
}

#[get("/appointments/")]
async fn list_appointments(
    store: web::Data<AppointmentStore>,
    query: web::Query<ListAppointmentsQuery>,
) -> ApiResult<HttpResponse> {
    let limit = query.limit.unwrap_or(MAX_LIST_LIMIT);
    let store = store.into_inner();
    let appos = web::block(move || store.list(limit)).await??;

    let appos = appos.into_iter().map(AppointmentItem::from).collect();
    Ok(HttpResponse::Ok().json(ListResponse::ok(appos)))
}

#[post("/appointments/")]
async fn create_appointment(
    store: web::Data<AppointmentStore>,
    info: web::Json<CreateAppointmentRequest>,
) -> ApiResult<HttpResponse> {
    let booking = info.into_inner().validate()?;
    let provider_id = booking.provider_id;
    let range = booking.range;

    let store = store.into_inner();
    let created = web::block(move || store.create(booking))
        .await?
        .map_err(|err| {
            if let ApiError::Conflict(_) = err {
                tracing::warn!(
                    provider_id,
                    start = %range.start,
                    end = %range.end,
                    "booking rejected, slot overlaps an existing appointment"
                );
            }
            err
        })?;

    tracing::info!(
        id = created.id,
        provider_id,
        start = %created.start_time,
        end = %created.end_time,
        "appointment booked"
    );
    Ok(HttpResponse::Created().json(ItemResponse::created(AppointmentItem::from(created))))
}

#[patch("/appointments/{id}/")]
async fn update_status(
    store: web::Data<AppointmentStore>,
    path: web::Path<i32>,
    info: web::Json<UpdateStatusRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let status = info.into_inner().validate()?;

    let store = store.into_inner();
    let updated = web::block(move || store.update_status(id, status)).await??;

    tracing::info!(id, %status, "appointment status changed");
    Ok(HttpResponse::Ok().json(ItemResponse::ok(AppointmentItem::from(updated))))
}
