//! 인증 요청/응답 DTO
//!
//! 회원가입, 로그인, 토큰 갱신 엔드포인트의 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::users::UserResponse;
use crate::domain::entities::user::UserRole;

/// 회원가입 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 전화번호 패턴 검증은 비즈니스 로직 단계에서 별도로 수행됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// 전화번호 (국제 표기, 9-15자리 숫자)
    pub phone: String,

    /// 이름
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    /// 성
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    /// 계정 역할 (customer | service_provider | admin)
    pub role: UserRole,

    /// 계정 비밀번호 (최소 8자)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// 계정 비밀번호
    pub password: String,
}

/// 토큰 갱신 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    /// 리프레시 토큰
    pub refresh_token: String,
}

/// 회원가입/로그인 응답 DTO
///
/// 액세스/리프레시 토큰과 공개 사용자 정보를 함께 반환합니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

/// 토큰 갱신 응답 DTO
///
/// 갱신 시에는 새 액세스 토큰만 발급됩니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: String,
}
