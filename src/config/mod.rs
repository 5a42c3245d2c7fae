//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반의 설정을 시작 시점에 한 번 로드하여
//! 명시적으로 주입 가능한 `AppConfig` 값으로 조립합니다.
//! 전역 싱글톤이나 호출 시점의 환경 변수 조회는 사용하지 않습니다.

pub mod auth_config;
pub mod data_config;

pub use auth_config::JwtSettings;
pub use data_config::{DatabaseSettings, Environment, RateLimitSettings, ServerSettings};

/// 전체 애플리케이션 설정
///
/// `main`에서 한 번 구성되어 모든 컴포넌트 생성자에 전달됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 실행 환경
    pub environment: Environment,
    /// 서버 바인딩 설정
    pub server: ServerSettings,
    /// MongoDB 연결 설정
    pub database: DatabaseSettings,
    /// JWT 서명/만료 설정
    pub jwt: JwtSettings,
    /// Rate Limiting 설정
    pub rate_limit: RateLimitSettings,
    /// 패스워드 해싱 bcrypt cost
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// 환경 변수에서 전체 설정을 로드합니다.
    ///
    /// `BCRYPT_COST` 환경 변수(4-15)가 설정된 경우 환경별 기본값 대신
    /// 해당 값을 사용합니다.
    pub fn from_env() -> Self {
        let environment = Environment::current();

        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| environment.bcrypt_cost());

        Self {
            server: ServerSettings::from_env(),
            database: DatabaseSettings::from_env(),
            jwt: JwtSettings::from_env(),
            rate_limit: RateLimitSettings::from_env(),
            bcrypt_cost,
            environment,
        }
    }
}
