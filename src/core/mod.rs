//! 애플리케이션 의존성 컨텍스트
//!
//! 모든 리포지토리와 서비스를 시작 시점에 명시적으로 생성하여
//! 하나의 컨텍스트로 묶습니다. 컨텍스트는 `web::Data`로 래핑되어
//! 핸들러와 미들웨어에 주입되며, 전역 가변 상태는 존재하지 않습니다.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::Database;
use crate::errors::errors::AppError;
use crate::repositories::addresses::AddressRepository;
use crate::repositories::providers::ServiceProviderRepository;
use crate::repositories::users::UserRepository;
use crate::services::addresses::AddressService;
use crate::services::auth::AuthService;
use crate::services::password::PasswordService;
use crate::services::providers::ProviderService;
use crate::services::token::TokenService;
use crate::services::users::UserService;

/// 애플리케이션 의존성 컨테이너
///
/// 요청 간에 공유되는 상태는 이 컨텍스트(불변)와 MongoDB 연결 풀이
/// 전부입니다.
///
/// # Examples
///
/// ```rust,ignore
/// let config = AppConfig::from_env();
/// let database = Database::connect(&config.database).await?;
/// let context = AppContext::initialize(&config, &database);
///
/// HttpServer::new(move || {
///     App::new().app_data(web::Data::new(context.clone()))
/// })
/// ```
#[derive(Clone)]
pub struct AppContext {
    /// 사용자 리포지토리 (인증 미들웨어의 subject 해석에도 사용)
    pub users: Arc<UserRepository>,
    /// 프로바이더 리포지토리
    pub providers: Arc<ServiceProviderRepository>,
    /// JWT 토큰 서비스
    pub token_service: Arc<TokenService>,
    /// 인증 비즈니스 로직
    pub auth_service: Arc<AuthService>,
    /// 사용자 프로필 관리
    pub user_service: Arc<UserService>,
    /// 프로바이더 프로필 관리
    pub provider_service: Arc<ProviderService>,
    /// 주소 관리
    pub address_service: Arc<AddressService>,
}

impl AppContext {
    /// 설정과 데이터베이스 연결로부터 전체 의존성 그래프를 조립합니다.
    pub fn initialize(config: &AppConfig, database: &Database) -> Self {
        let users = Arc::new(UserRepository::new(database));
        let providers = Arc::new(ServiceProviderRepository::new(database));
        let addresses = Arc::new(AddressRepository::new(database));

        let token_service = Arc::new(TokenService::new(config.jwt.clone()));
        let password_service = Arc::new(PasswordService::new(config.bcrypt_cost));

        let auth_service = Arc::new(AuthService::new(
            users.clone(),
            token_service.clone(),
            password_service,
        ));
        let user_service = Arc::new(UserService::new(users.clone()));
        let provider_service = Arc::new(ProviderService::new(providers.clone()));
        let address_service = Arc::new(AddressService::new(addresses));

        Self {
            users,
            providers,
            token_service,
            auth_service,
            user_service,
            provider_service,
            address_service,
        }
    }

    /// 유니크 인덱스 생성
    ///
    /// check-then-insert 중복 검사를 스토리지 계층에서 최종 보장하기 위해
    /// 초기화 시점에 한 번 실행됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        self.users.create_indexes().await?;
        self.providers.create_indexes().await?;

        Ok(())
    }
}
