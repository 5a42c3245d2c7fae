//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 만료 시간 설정을 관리하는 모듈입니다.
//! 설정은 시작 시점에 한 번 로드되어 `TokenService`에 주입됩니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export ACCESS_TOKEN_EXPIRE_MINUTES="30"
//! export REFRESH_TOKEN_EXPIRE_DAYS="7"
//! ```

use std::env;

/// JSON Web Token (JWT) 서명/만료 설정
///
/// 액세스 토큰(분 단위, 기본 30분)과 리프레시 토큰(일 단위, 기본 7일)의
/// 만료 시간, 그리고 HMAC-SHA256 서명용 비밀키를 보관합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 액세스 토큰은 짧게, 리프레시 토큰은 길게
/// 3. **토큰 순환**: 리프레시 토큰으로 액세스 토큰을 재발급
#[derive(Debug, Clone)]
pub struct JwtSettings {
    /// HMAC-SHA256 서명용 비밀키
    pub secret: String,
    /// 액세스 토큰 만료 시간 (분)
    pub access_ttl_minutes: i64,
    /// 리프레시 토큰 만료 시간 (일)
    pub refresh_ttl_days: i64,
}

impl JwtSettings {
    /// 환경 변수에서 JWT 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// * `JWT_SECRET` - 서명용 비밀키 (미설정 시 개발용 기본값 + 경고 로그)
    /// * `ACCESS_TOKEN_EXPIRE_MINUTES` - 액세스 토큰 만료 (기본값: 30)
    /// * `REFRESH_TOKEN_EXPIRE_DAYS` - 리프레시 토큰 만료 (기본값: 7)
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "neemaflex-secret-key-change-in-production".to_string()
        });

        let access_ttl_minutes = env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let refresh_ttl_days = env::var("REFRESH_TOKEN_EXPIRE_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7);

        Self {
            secret,
            access_ttl_minutes,
            refresh_ttl_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_settings_defaults() {
        if env::var("ACCESS_TOKEN_EXPIRE_MINUTES").is_err()
            && env::var("REFRESH_TOKEN_EXPIRE_DAYS").is_err()
        {
            let settings = JwtSettings::from_env();
            assert_eq!(settings.access_ttl_minutes, 30);
            assert_eq!(settings.refresh_ttl_days, 7);
            assert!(!settings.secret.is_empty());
        }
    }
}
