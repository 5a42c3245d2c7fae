//! # 서비스 프로바이더 비즈니스 로직 서비스
//!
//! 프로바이더 프로필 생성과 조회를 담당합니다.
//! 역할 검증(service_provider)은 라우트 미들웨어에서 수행되고,
//! 이 서비스는 카테고리 검증과 프로필 유일성 규칙을 적용합니다.

use std::sync::Arc;

use crate::domain::dto::providers::CreateServiceProviderRequest;
use crate::domain::entities::service_provider::{ServiceCategory, ServiceProvider};
use crate::domain::entities::user::User;
use crate::errors::errors::AppError;
use crate::repositories::providers::ServiceProviderRepository;

/// 관리자 목록 조회 시 최대 반환 개수
const ADMIN_PAGE_LIMIT: i64 = 1000;

/// 서비스 프로바이더 비즈니스 로직 서비스
pub struct ProviderService {
    providers: Arc<ServiceProviderRepository>,
}

impl ProviderService {
    /// 의존성을 주입하여 서비스를 생성합니다.
    pub fn new(providers: Arc<ServiceProviderRepository>) -> Self {
        Self { providers }
    }

    /// 프로바이더 프로필 생성
    ///
    /// # 처리 과정
    ///
    /// 1. 기존 프로필 존재 여부 확인 (사용자당 1개)
    /// 2. 제출된 카테고리를 고정 열거에 대해 검증
    /// 3. 프로필 저장
    ///
    /// # 반환값
    ///
    /// * `Ok(ServiceProvider)` - 생성된 프로필
    /// * `Err(AppError::ConflictError)` - 프로필이 이미 존재
    /// * `Err(AppError::ValidationError)` - 유효하지 않은 카테고리 (목록 포함)
    pub async fn create_profile(
        &self,
        user: &User,
        request: CreateServiceProviderRequest,
    ) -> Result<ServiceProvider, AppError> {
        if self.providers.find_by_user_id(&user.id).await?.is_some() {
            return Err(AppError::ConflictError(
                "Service provider profile already exists".to_string(),
            ));
        }

        let categories = parse_categories(&request.service_categories)?;

        let provider = ServiceProvider::new(
            user.id.clone(),
            request.business_name,
            request.business_license,
            categories,
            request.description,
        );

        let provider = self.providers.insert(provider).await?;

        log::info!(
            "프로바이더 프로필 생성: {} (사용자 {})",
            provider.business_name,
            provider.user_id
        );

        Ok(provider)
    }

    /// 본인 프로바이더 프로필 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(ServiceProvider)` - 프로필 정보
    /// * `Err(AppError::NotFound)` - 프로필이 존재하지 않음
    pub async fn get_own_profile(&self, user_id: &str) -> Result<ServiceProvider, AppError> {
        self.providers
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service provider profile not found".to_string()))
    }

    /// 전체 프로바이더 목록 조회 (관리자 전용)
    ///
    /// 반환 개수는 1000건으로 제한됩니다.
    pub async fn list_providers(&self) -> Result<Vec<ServiceProvider>, AppError> {
        self.providers.find_all(ADMIN_PAGE_LIMIT).await
    }
}

/// 제출된 카테고리 문자열 목록을 고정 열거로 변환
///
/// 유효하지 않은 항목이 하나라도 있으면 해당 항목들을 그대로 나열한
/// 검증 에러를 반환합니다.
fn parse_categories(raw: &[String]) -> Result<Vec<ServiceCategory>, AppError> {
    let mut categories = Vec::with_capacity(raw.len());
    let mut invalid = Vec::new();

    for value in raw {
        match ServiceCategory::from_str(value) {
            Ok(category) => categories.push(category),
            Err(rejected) => invalid.push(rejected),
        }
    }

    if !invalid.is_empty() {
        return Err(AppError::ValidationError(format!(
            "Invalid service categories: {:?}",
            invalid
        )));
    }

    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories_accepts_known_values() {
        let raw = vec!["transport".to_string(), "home_services".to_string()];

        let categories = parse_categories(&raw).unwrap();

        assert_eq!(
            categories,
            vec![ServiceCategory::Transport, ServiceCategory::HomeServices]
        );
    }

    #[test]
    fn test_parse_categories_lists_exact_offenders() {
        let raw = vec![
            "transport".to_string(),
            "plumbing".to_string(),
            "delivery".to_string(),
            "catering".to_string(),
        ];

        let error = parse_categories(&raw).unwrap_err();

        match error {
            AppError::ValidationError(message) => {
                assert!(message.contains("plumbing"));
                assert!(message.contains("catering"));
                assert!(!message.contains("transport"));
                assert!(!message.contains("delivery"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_categories_empty_list_is_valid() {
        let categories = parse_categories(&[]).unwrap();
        assert!(categories.is_empty());
    }
}
