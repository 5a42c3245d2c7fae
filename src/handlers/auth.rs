//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 갱신 엔드포인트를 처리하는 핸들러 함수들입니다.
//! JWT 토큰 기반의 상태 없는 인증을 구현합니다.

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::core::AppContext;
use crate::domain::dto::auth::{LoginRequest, RefreshTokenRequest, RegisterRequest};
use crate::errors::errors::AppError;

/// 회원가입 핸들러
///
/// 이메일 형식과 비밀번호 길이를 검증한 뒤 계정을 생성하고
/// 액세스/리프레시 토큰 쌍을 발급합니다.
///
/// # Endpoint
/// `POST /api/auth/register`
#[post("/register")]
pub async fn register(
    ctx: web::Data<AppContext>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = ctx.auth_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 로그인 핸들러
///
/// 이메일과 패스워드를 사용한 로그인을 처리합니다.
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(
    ctx: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = ctx.auth_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증하고 새 액세스 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /api/auth/refresh`
#[post("/refresh")]
pub async fn refresh(
    ctx: web::Data<AppContext>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let response = ctx.auth_service.refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(response))
}
