//! # Address HTTP Handlers
//!
//! 주소 생성/목록 조회 엔드포인트를 처리하는 핸들러 함수들입니다.

use actix_web::{HttpResponse, get, post, web};
use validator::Validate;

use crate::core::AppContext;
use crate::domain::auth::CurrentUser;
use crate::domain::dto::addresses::CreateAddressRequest;
use crate::errors::errors::AppError;

/// 주소 생성 핸들러
///
/// 기본 주소로 지정된 경우 기존 기본 주소는 자동으로 해제됩니다.
///
/// # Endpoint
/// `POST /api/addresses`
#[post("")]
pub async fn create_address(
    ctx: web::Data<AppContext>,
    current: CurrentUser,
    payload: web::Json<CreateAddressRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let address = ctx
        .address_service
        .create(&current.0.id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(address))
}

/// 본인 주소 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/addresses`
#[get("")]
pub async fn list_addresses(
    ctx: web::Data<AppContext>,
    current: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let addresses = ctx.address_service.list(&current.0.id).await?;

    Ok(HttpResponse::Ok().json(addresses))
}
