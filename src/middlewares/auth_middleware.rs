//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고
//! 데이터베이스에서 호출자를 해석하여 핸들러에 전달합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::domain::entities::user::UserRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 토큰 검증 → 사용자 조회 → 활성 상태 확인 → (선택) 역할 검증의
/// 순서로 요청을 거릅니다.
pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<UserRole>,
}

impl AuthMiddleware {
    /// 인증만 요구하는 미들웨어 생성
    pub fn required() -> Self {
        Self {
            required_role: None,
        }
    }

    /// 특정 역할을 요구하는 미들웨어 생성
    pub fn required_with_role(role: UserRole) -> Self {
        Self {
            required_role: Some(role),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middlewares::auth_inner::role_denial_message;

    #[test]
    fn test_required_middleware_has_no_role_gate() {
        let middleware = AuthMiddleware::required();
        assert!(middleware.required_role.is_none());
    }

    #[test]
    fn test_required_with_role_stores_role() {
        let middleware = AuthMiddleware::required_with_role(UserRole::Admin);
        assert_eq!(middleware.required_role, Some(UserRole::Admin));
    }

    #[test]
    fn test_role_denial_messages() {
        assert_eq!(role_denial_message(UserRole::Admin), "Admin access required");
        assert_eq!(
            role_denial_message(UserRole::ServiceProvider),
            "Only service providers can access this endpoint"
        );
        assert_eq!(
            role_denial_message(UserRole::Customer),
            "Customer access required"
        );
    }
}
