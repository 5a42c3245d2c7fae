//! AuthMiddleware 인증 로직의 핵심적인 기능

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError, web};
use futures_util::future::LocalBoxFuture;

use crate::core::AppContext;
use crate::domain::auth::CurrentUser;
use crate::domain::entities::user::{User, UserRole};
use crate::errors::errors::AppError;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<UserRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role;

        Box::pin(async move {
            // 주입된 의존성 컨텍스트 가져오기
            let Some(ctx) = req.app_data::<web::Data<AppContext>>().cloned() else {
                log::error!("AppContext가 주입되지 않았습니다");
                let response = AppError::InternalError(
                    "Application context is not configured".to_string(),
                )
                .error_response();
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            };

            // 토큰 검증 및 호출자 해석
            let user = match resolve_current_user(&req, &ctx).await {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            // 역할 검증
            if let Some(required) = required_role {
                if !user.has_role(required) {
                    log::warn!(
                        "권한 부족: 사용자 ID {} ({}), 필요 권한: {}",
                        user.id,
                        user.role.as_str(),
                        required.as_str()
                    );
                    let response =
                        AppError::AuthorizationError(role_denial_message(required).to_string())
                            .error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            log::debug!("인증 성공: 사용자 ID {}", user.id);

            // 사용자 정보를 Request Extensions에 저장
            req.extensions_mut().insert(CurrentUser(user));

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 호출자를 해석
///
/// 검증 순서: Authorization 헤더 → 토큰 서명/만료 → DB 사용자 조회 →
/// 계정 활성 상태. 해석 결과는 요청 수명 동안만 유지됩니다.
async fn resolve_current_user(
    req: &ServiceRequest,
    ctx: &web::Data<AppContext>,
) -> Result<User, AppError> {
    // Authorization 헤더 추출
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::AuthenticationError("Could not validate credentials".to_string())
        })?;

    // Bearer 토큰 추출 및 검증
    let token = ctx.token_service.extract_bearer_token(auth_header)?;
    let claims = ctx.token_service.verify_token(token)?;

    // 토큰 subject로 최신 사용자 정보 조회
    let user = ctx.users.find_by_id(&claims.sub).await?.ok_or_else(|| {
        AppError::AuthenticationError("Could not validate credentials".to_string())
    })?;

    // 비활성 계정 차단
    if !user.is_active {
        return Err(AppError::ValidationError("Inactive user".to_string()));
    }

    Ok(user)
}

/// 역할 불충분 시 사용할 거부 사유 메시지
pub(crate) fn role_denial_message(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "Admin access required",
        UserRole::ServiceProvider => "Only service providers can access this endpoint",
        UserRole::Customer => "Customer access required",
    }
}
