//! # 사용자 프로필 관리 서비스
//!
//! 본인 프로필의 부분 수정과 관리자용 전체 목록 조회를 담당합니다.

use std::sync::Arc;

use crate::domain::dto::users::{UpdateProfileRequest, UserResponse};
use crate::errors::errors::AppError;
use crate::repositories::users::UserRepository;

/// 관리자 목록 조회 시 최대 반환 개수
const ADMIN_PAGE_LIMIT: i64 = 1000;

/// 사용자 프로필 관리 서비스
pub struct UserService {
    users: Arc<UserRepository>,
}

impl UserService {
    /// 의존성을 주입하여 서비스를 생성합니다.
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// 본인 프로필 부분 수정
    ///
    /// 요청에 포함된 필드만 반영되며, `updated_at`은 항상 갱신됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 수정 이후의 공개 사용자 정보
    /// * `Err(AppError::NotFound)` - 사용자가 더 이상 존재하지 않음
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: UpdateProfileRequest,
    ) -> Result<UserResponse, AppError> {
        let fields = request.into_update_document();

        let updated = self
            .users
            .update_fields(user_id, fields)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(updated))
    }

    /// 전체 사용자 목록 조회 (관리자 전용)
    ///
    /// 반환 개수는 1000건으로 제한됩니다.
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.users.find_all(ADMIN_PAGE_LIMIT).await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
