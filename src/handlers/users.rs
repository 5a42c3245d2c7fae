//! # User Profile HTTP Handlers
//!
//! 본인 프로필 조회/수정 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 인증 미들웨어가 해석한 호출자를 `CurrentUser` extractor로 전달받습니다.

use actix_web::{HttpResponse, get, put, web};

use crate::core::AppContext;
use crate::domain::auth::CurrentUser;
use crate::domain::dto::users::{UpdateProfileRequest, UserResponse};
use crate::errors::errors::AppError;

/// 본인 프로필 조회 핸들러
///
/// # Endpoint
/// `GET /api/users/me`
#[get("/me")]
pub async fn get_me(current: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse::from(current.0)))
}

/// 본인 프로필 부분 수정 핸들러
///
/// 요청에 포함된 필드만 반영됩니다.
///
/// # Endpoint
/// `PUT /api/users/me`
#[put("/me")]
pub async fn update_me(
    ctx: web::Data<AppContext>,
    current: CurrentUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = ctx
        .user_service
        .update_profile(&current.0.id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}
