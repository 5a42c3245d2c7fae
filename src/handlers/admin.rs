//! # Admin HTTP Handlers
//!
//! 관리자 전용 목록 조회 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 라우트 미들웨어가 admin 역할을 보장합니다.

use actix_web::{HttpResponse, get, web};

use crate::core::AppContext;
use crate::errors::errors::AppError;

/// 전체 사용자 목록 조회 핸들러
///
/// 반환 개수는 1000건으로 제한됩니다.
///
/// # Endpoint
/// `GET /api/admin/users`
#[get("/users")]
pub async fn list_users(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let users = ctx.user_service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 전체 프로바이더 목록 조회 핸들러
///
/// 반환 개수는 1000건으로 제한됩니다.
///
/// # Endpoint
/// `GET /api/admin/service-providers`
#[get("/service-providers")]
pub async fn list_providers(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let providers = ctx.provider_service.list_providers().await?;

    Ok(HttpResponse::Ok().json(providers))
}
