//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성, 검증을 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::JwtSettings;
use crate::domain::token::{TokenClaims, TokenPair};
use crate::errors::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 액세스 토큰(기본 30분)과 리프레시 토큰(기본 7일)을 지원합니다.
/// 토큰은 상태가 없으며 서버 측 무효화 수단은 두지 않습니다.
pub struct TokenService {
    settings: JwtSettings,
}

impl TokenService {
    /// 주입된 JWT 설정으로 서비스를 생성합니다.
    pub fn new(settings: JwtSettings) -> Self {
        Self { settings }
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `subject` - 토큰을 발급받을 사용자 ID
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패
    pub fn issue_access_token(&self, subject: &str) -> Result<String, AppError> {
        self.issue_token(subject, Duration::minutes(self.settings.access_ttl_minutes))
    }

    /// 사용자를 위한 리프레시 토큰 생성
    ///
    /// 리프레시 토큰은 새 액세스 토큰의 발급에만 사용됩니다.
    pub fn issue_refresh_token(&self, subject: &str) -> Result<String, AppError> {
        self.issue_token(subject, Duration::days(self.settings.refresh_ttl_days))
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_pair = token_service.issue_token_pair(&user.id)?;
    /// println!("Access token: {}", token_pair.access_token);
    /// ```
    pub fn issue_token_pair(&self, subject: &str) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.issue_access_token(subject)?,
            refresh_token: self.issue_refresh_token(subject)?,
        })
    }

    fn issue_token(&self, subject: &str, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + ttl;

        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(self.settings.secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명 불일치, 잘못된 형식, subject 클레임 누락, 만료를 모두
    /// 구분 없이 하나의 인증 실패로 처리합니다.
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 검증 실패 (사유 비구분)
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.settings.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| {
                AppError::AuthenticationError("Could not validate credentials".to_string())
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Arguments
    ///
    /// * `auth_header` - HTTP Authorization 헤더 값 전체
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "Could not validate credentials".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(secret: &str) -> JwtSettings {
        JwtSettings {
            secret: secret.to_string(),
            access_ttl_minutes: 30,
            refresh_ttl_days: 7,
        }
    }

    fn service() -> TokenService {
        TokenService::new(settings("test-secret"))
    }

    #[test]
    fn test_access_token_roundtrip() {
        let service = service();

        let token = service.issue_access_token("user-123").unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "user-123");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_outlives_access_token() {
        let service = service();

        let access = service.issue_access_token("user-123").unwrap();
        let refresh = service.issue_refresh_token("user-123").unwrap();

        let access_claims = service.verify_token(&access).unwrap();
        let refresh_claims = service.verify_token(&refresh).unwrap();

        assert!(refresh_claims.exp > access_claims.exp);
    }

    #[test]
    fn test_token_pair_subjects_match() {
        let service = service();

        let pair = service.issue_token_pair("user-123").unwrap();

        assert_eq!(service.verify_token(&pair.access_token).unwrap().sub, "user-123");
        assert_eq!(service.verify_token(&pair.refresh_token).unwrap().sub, "user-123");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // 음수 TTL로 이미 만료된 토큰을 발급
        let expired_service = TokenService::new(JwtSettings {
            secret: "test-secret".to_string(),
            access_ttl_minutes: -120,
            refresh_ttl_days: 7,
        });

        let token = expired_service.issue_access_token("user-123").unwrap();

        assert!(expired_service.verify_token(&token).is_err());
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let service = service();
        let other = TokenService::new(settings("different-secret"));

        let token = other.issue_access_token("user-123").unwrap();

        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let service = service();

        assert!(service.verify_token("not-a-jwt").is_err());
        assert!(service.verify_token("").is_err());
    }

    #[test]
    fn test_missing_subject_claim_is_rejected() {
        let service = service();

        // sub 클레임이 없는 서명된 토큰
        let claims = serde_json::json!({
            "iat": Utc::now().timestamp(),
            "exp": (Utc::now() + Duration::hours(1)).timestamp(),
        });
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_ref()),
        )
        .unwrap();

        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
