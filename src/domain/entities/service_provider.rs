//! ServiceProvider Entity Implementation
//!
//! 서비스 프로바이더 프로필 엔티티입니다.
//! `role = service_provider`인 사용자와 1:1로 연결됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 제공 가능한 서비스 카테고리 (고정 열거)
///
/// 이 목록에 없는 카테고리는 프로필 생성 시 거부됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Transport,
    Delivery,
    VideoConsultation,
    HomeServices,
    RealEstate,
    Vehicles,
    Ticketing,
    Other,
}

impl ServiceCategory {
    /// 문자열에서 ServiceCategory를 생성합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(ServiceCategory)` - 고정 열거에 포함된 카테고리
    /// * `Err(String)` - 지원하지 않는 카테고리 (입력값 그대로 반환)
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "transport" => Ok(ServiceCategory::Transport),
            "delivery" => Ok(ServiceCategory::Delivery),
            "video_consultation" => Ok(ServiceCategory::VideoConsultation),
            "home_services" => Ok(ServiceCategory::HomeServices),
            "real_estate" => Ok(ServiceCategory::RealEstate),
            "vehicles" => Ok(ServiceCategory::Vehicles),
            "ticketing" => Ok(ServiceCategory::Ticketing),
            "other" => Ok(ServiceCategory::Other),
            _ => Err(s.to_string()),
        }
    }

    /// ServiceCategory를 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Transport => "transport",
            ServiceCategory::Delivery => "delivery",
            ServiceCategory::VideoConsultation => "video_consultation",
            ServiceCategory::HomeServices => "home_services",
            ServiceCategory::RealEstate => "real_estate",
            ServiceCategory::Vehicles => "vehicles",
            ServiceCategory::Ticketing => "ticketing",
            ServiceCategory::Other => "other",
        }
    }
}

/// 프로바이더 프로필 검증 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// 심사 대기 (기본값)
    Pending,
    /// 검증 완료
    Verified,
    /// 검증 거부
    Rejected,
}

/// 서비스 프로바이더 프로필 엔티티
///
/// 사용자당 최대 하나의 프로필만 존재합니다 (`user_id` unique).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceProvider {
    /// 프로필 고유 ID (UUID v4 문자열)
    pub id: String,
    /// 소유 사용자 ID (unique)
    pub user_id: String,
    /// 상호명
    pub business_name: String,
    /// 사업자 등록번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_license: Option<String>,
    /// 제공 서비스 카테고리 목록
    pub service_categories: Vec<ServiceCategory>,
    /// 소개글
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 평균 평점
    pub rating: f64,
    /// 누적 평가 수
    pub total_ratings: i64,
    /// 예약 가능 여부
    pub is_available: bool,
    /// 프로필 검증 상태
    pub verification_status: VerificationStatus,
    /// 생성 시간
    pub created_at: DateTime,
}

impl ServiceProvider {
    /// 새 프로바이더 프로필 생성
    ///
    /// 신규 프로필은 평점 0.0, 예약 가능, 검증 대기 상태로 시작합니다.
    pub fn new(
        user_id: String,
        business_name: String,
        business_license: Option<String>,
        service_categories: Vec<ServiceCategory>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            business_name,
            business_license,
            service_categories,
            description,
            rating: 0.0,
            total_ratings: 0,
            is_available: true,
            verification_status: VerificationStatus::Pending,
            created_at: DateTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_category_from_string() {
        assert_eq!(
            ServiceCategory::from_str("transport").unwrap(),
            ServiceCategory::Transport
        );
        assert_eq!(
            ServiceCategory::from_str("video_consultation").unwrap(),
            ServiceCategory::VideoConsultation
        );
        assert_eq!(
            ServiceCategory::from_str("other").unwrap(),
            ServiceCategory::Other
        );

        // 거부된 입력은 원본 문자열을 그대로 돌려준다
        assert_eq!(
            ServiceCategory::from_str("plumbing").unwrap_err(),
            "plumbing"
        );
        assert!(ServiceCategory::from_str("Transport").is_err());
    }

    #[test]
    fn test_service_category_roundtrip() {
        let categories = [
            "transport",
            "delivery",
            "video_consultation",
            "home_services",
            "real_estate",
            "vehicles",
            "ticketing",
            "other",
        ];

        for &category_str in &categories {
            let category = ServiceCategory::from_str(category_str).unwrap();
            assert_eq!(category.as_str(), category_str);
        }
    }

    #[test]
    fn test_service_category_serialization() {
        let json = serde_json::to_string(&ServiceCategory::HomeServices).unwrap();
        assert_eq!(json, "\"home_services\"");

        let deserialized: ServiceCategory = serde_json::from_str("\"real_estate\"").unwrap();
        assert_eq!(deserialized, ServiceCategory::RealEstate);
    }

    #[test]
    fn test_new_provider_defaults() {
        let provider = ServiceProvider::new(
            "user-1".to_string(),
            "Acme Movers".to_string(),
            None,
            vec![ServiceCategory::Transport, ServiceCategory::Delivery],
            Some("Fast and careful".to_string()),
        );

        assert!(!provider.id.is_empty());
        assert_eq!(provider.user_id, "user-1");
        assert_eq!(provider.rating, 0.0);
        assert_eq!(provider.total_ratings, 0);
        assert!(provider.is_available);
        assert_eq!(provider.verification_status, VerificationStatus::Pending);
    }
}
