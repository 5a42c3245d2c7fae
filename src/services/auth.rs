//! # 인증 비즈니스 로직 서비스
//!
//! 회원가입, 로그인, 토큰 갱신의 핵심 비즈니스 규칙을 구현합니다.
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 적응형 해시 함수로 무차별 대입 공격 방지
//! - **에러 메시지 통합**: 존재하지 않는 이메일과 틀린 비밀번호를
//!   동일한 응답으로 처리하여 계정 존재 여부 노출 방지
//! - **상태 없는 토큰**: 발급된 토큰은 만료 전까지 서버 측에서
//!   무효화할 수 없음 (수용된 설계 제약)

use std::sync::Arc;

use crate::domain::dto::auth::{
    LoginRequest, RefreshResponse, RegisterRequest, TokenResponse,
};
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::user::User;
use crate::errors::errors::AppError;
use crate::repositories::users::UserRepository;
use crate::services::password::PasswordService;
use crate::services::token::TokenService;
use crate::utils::validation::validate_phone;

/// 인증 비즈니스 로직 서비스
///
/// 리포지토리, 토큰 서비스, 패스워드 서비스를 주입받아 생성됩니다.
pub struct AuthService {
    users: Arc<UserRepository>,
    tokens: Arc<TokenService>,
    passwords: Arc<PasswordService>,
}

impl AuthService {
    /// 의존성을 주입하여 서비스를 생성합니다.
    pub fn new(
        users: Arc<UserRepository>,
        tokens: Arc<TokenService>,
        passwords: Arc<PasswordService>,
    ) -> Self {
        Self {
            users,
            tokens,
            passwords,
        }
    }

    /// 새 계정 등록
    ///
    /// # 처리 과정
    ///
    /// 1. 전화번호 형식 검증
    /// 2. 이메일/전화번호 중복 확인 (리포지토리 삽입 시)
    /// 3. 비밀번호 해싱
    /// 4. 사용자 저장 및 토큰 쌍 발급
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenResponse)` - 토큰 쌍과 공개 사용자 정보
    /// * `Err(AppError::ValidationError)` - 전화번호 형식 오류
    /// * `Err(AppError::ConflictError)` - 이메일 또는 전화번호 중복
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, AppError> {
        if !validate_phone(&request.phone) {
            return Err(AppError::ValidationError(
                "Invalid phone number format".to_string(),
            ));
        }

        let hashed_password = self.passwords.hash(&request.password).await?;

        let user = User::new(
            request.email,
            request.phone,
            request.first_name,
            request.last_name,
            request.role,
            hashed_password,
        );

        let user = self.users.insert(user).await?;

        log::info!("신규 계정 생성: {} ({})", user.email, user.role.as_str());

        self.token_response(user)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 동일한 401 응답으로
    /// 처리되어 계정 존재 여부가 상태 코드로 드러나지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenResponse)` - 토큰 쌍과 공개 사용자 정보
    /// * `Err(AppError::AuthenticationError)` - 잘못된 자격 증명
    /// * `Err(AppError::ValidationError)` - 비활성 계정
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, AppError> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("Incorrect email or password".to_string())
            })?;

        let hashed_password = user.hashed_password.as_deref().unwrap_or_default();
        let is_valid = self.passwords.verify(&request.password, hashed_password).await?;

        if !is_valid {
            log::warn!("로그인 실패: {}", request.email);
            return Err(AppError::AuthenticationError(
                "Incorrect email or password".to_string(),
            ));
        }

        if !user.is_active {
            return Err(AppError::ValidationError("Inactive user".to_string()));
        }

        log::info!("로그인 성공: {}", user.email);

        self.token_response(user)
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급
    ///
    /// 서명과 만료만 검증합니다. 액세스 토큰과 리프레시 토큰은
    /// 구조적으로 동일하므로 용도 구분은 하지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(RefreshResponse)` - 새 액세스 토큰
    /// * `Err(AppError::AuthenticationError)` - 토큰 무효 또는 사용자 없음
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, AppError> {
        let claims = self
            .tokens
            .verify_token(refresh_token)
            .map_err(|_| AppError::AuthenticationError("Invalid refresh token".to_string()))?;

        let user = self
            .users
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("User not found".to_string()))?;

        let access_token = self.tokens.issue_access_token(&user.id)?;

        log::debug!("토큰 갱신 성공: 사용자 ID {}", user.id);

        Ok(RefreshResponse {
            access_token,
            token_type: "bearer".to_string(),
        })
    }

    fn token_response(&self, user: User) -> Result<TokenResponse, AppError> {
        let pair = self.tokens.issue_token_pair(&user.id)?;

        Ok(TokenResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "bearer".to_string(),
            user: UserResponse::from(user),
        })
    }
}
