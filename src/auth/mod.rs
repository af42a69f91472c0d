mod requests;
mod responses;

use crate::{
    database::Accounts,
    error::{ApiError, ApiResult},
    protocol::{STATUS_CREATED, STATUS_OK},
};
use actix_web::{post, web, HttpResponse};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/auth").service(register).service(login));
}

#[post("/register/")]
async fn register(
    accounts: web::Data<Accounts>,
    info: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let account = info.into_inner().validate()?;

    let accounts = accounts.into_inner();
    let user = web::block(move || accounts.register(account)).await??;

    tracing::info!(id = user.id, username = %user.username, "account registered");
    Ok(HttpResponse::Created().json(UserResponse {
        status: STATUS_CREATED,
        user: UserItem::from(user),
    }))
}

#[post("/login/")]
async fn login(
    accounts: web::Data<Accounts>,
    info: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let (username, password) = info.into_inner().validate()?;

    let accounts = accounts.into_inner();
    let login_name = username.clone();
    let (user, provider_id) = web::block(move || accounts.login(&username, &password))
        .await?
        .map_err(|err| {
            if let ApiError::InvalidCredentials = err {
                tracing::warn!(username = %login_name, "login failed");
            }
            err
        })?;

    Ok(HttpResponse::Ok().json(UserResponse {
        status: STATUS_OK,
        user: LoginItem {
            user: UserItem::from(user),
            is_provider: provider_id.is_some(),
            provider_id,
        },
    }))
}
