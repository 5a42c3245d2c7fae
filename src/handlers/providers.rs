//! # Service Provider HTTP Handlers
//!
//! 프로바이더 프로필 생성/조회 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 라우트 미들웨어가 service_provider 역할을 보장합니다.

use actix_web::{HttpResponse, get, post, web};
use validator::Validate;

use crate::core::AppContext;
use crate::domain::auth::CurrentUser;
use crate::domain::dto::providers::CreateServiceProviderRequest;
use crate::errors::errors::AppError;

/// 프로바이더 프로필 생성 핸들러
///
/// # Endpoint
/// `POST /api/service-providers`
#[post("")]
pub async fn create_provider(
    ctx: web::Data<AppContext>,
    current: CurrentUser,
    payload: web::Json<CreateServiceProviderRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let provider = ctx
        .provider_service
        .create_profile(&current.0, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(provider))
}

/// 본인 프로바이더 프로필 조회 핸들러
///
/// # Endpoint
/// `GET /api/service-providers/me`
#[get("/me")]
pub async fn get_my_provider(
    ctx: web::Data<AppContext>,
    current: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let provider = ctx.provider_service.get_own_profile(&current.0.id).await?;

    Ok(HttpResponse::Ok().json(provider))
}
