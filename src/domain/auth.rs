//! 인증된 요청 컨텍스트
//!
//! 인증 미들웨어가 해석한 호출자 정보를 핸들러로 전달하는 타입입니다.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};

use crate::domain::entities::user::User;
use crate::errors::errors::AppError;

/// 현재 요청의 인증된 사용자
///
/// 인증 미들웨어가 토큰 검증과 DB 조회를 마친 사용자 엔티티를
/// Request Extensions에 저장하면, 핸들러에서 extractor로 꺼내 씁니다.
///
/// # Examples
///
/// ```rust,ignore
/// #[get("/me")]
/// pub async fn get_me(current: CurrentUser) -> Result<HttpResponse, AppError> {
///     Ok(HttpResponse::Ok().json(UserResponse::from(current.0)))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // 미들웨어를 거치지 않은 라우트에서의 사용은 인증 실패로 처리
        ready(req.extensions().get::<CurrentUser>().cloned().ok_or_else(
            || AppError::AuthenticationError("Could not validate credentials".to_string()),
        ))
    }
}
