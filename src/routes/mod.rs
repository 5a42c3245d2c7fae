//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 모든 라우트는 `/api` 접두사 아래에 등록되며,
//! 보호된 스코프에는 인증 미들웨어가 적용됩니다.
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용할 수 있습니다:
//!
//! ## 인증 불필요 (Public 라우트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/auth")
//!         .service(handlers::auth::register)  // 회원가입은 인증 불필요
//!         .service(handlers::auth::login)
//! );
//! ```
//!
//! ## 인증 필요 + 역할 기반 권한 검증
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/admin")
//!         .wrap(AuthMiddleware::required_with_role(UserRole::Admin))
//!         .service(handlers::admin::list_users)  // admin 역할만 허용
//! );
//! ```

use actix_web::web;
use serde_json::json;

use crate::domain::entities::user::UserRole;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{App, web};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_provider_routes(cfg);
    configure_address_routes(cfg);
    configure_admin_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 모든 인증 라우트는 Public 접근이 가능합니다 (인증을 위한 엔드포인트이므로).
///
/// # Available Routes
///
/// - `POST /api/auth/register` - 계정 생성 및 토큰 쌍 발급
/// - `POST /api/auth/login` - 이메일/비밀번호 로그인
/// - `POST /api/auth/refresh` - 리프레시 토큰으로 액세스 토큰 재발급
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::refresh),
    );
}

/// 사용자 프로필 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/users/me` - 본인 프로필 조회 (인증 필요)
/// - `PUT /api/users/me` - 본인 프로필 부분 수정 (인증 필요)
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::get_me)
            .service(handlers::users::update_me),
    );
}

/// 서비스 프로바이더 라우트를 설정합니다
///
/// service_provider 역할을 가진 사용자만 접근할 수 있습니다.
///
/// # Available Routes
///
/// - `POST /api/service-providers` - 프로바이더 프로필 생성
/// - `GET /api/service-providers/me` - 본인 프로바이더 프로필 조회
fn configure_provider_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/service-providers")
            .wrap(AuthMiddleware::required_with_role(UserRole::ServiceProvider))
            .service(handlers::providers::create_provider)
            .service(handlers::providers::get_my_provider),
    );
}

/// 주소 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/addresses` - 주소 생성 (인증 필요)
/// - `GET /api/addresses` - 본인 주소 목록 조회 (인증 필요)
fn configure_address_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/addresses")
            .wrap(AuthMiddleware::required())
            .service(handlers::addresses::create_address)
            .service(handlers::addresses::list_addresses),
    );
}

/// 관리자 라우트를 설정합니다
///
/// admin 역할을 가진 사용자만 접근할 수 있습니다.
///
/// # Available Routes
///
/// - `GET /api/admin/users` - 전체 사용자 목록 조회
/// - `GET /api/admin/service-providers` - 전체 프로바이더 목록 조회
fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(AuthMiddleware::required_with_role(UserRole::Admin))
            .service(handlers::admin::list_users)
            .service(handlers::admin::list_providers),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/api/health
/// ```
#[actix_web::get("/api/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "neemaflex_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_health_check_returns_healthy() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(response["status"], "healthy");
        assert!(response["timestamp"].is_string());
    }
}
