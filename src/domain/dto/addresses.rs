//! 주소 요청 DTO

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::address::Address;

/// 주소 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAddressRequest {
    /// 라벨 (home, work, other 등)
    #[validate(length(min = 1, message = "Label is required"))]
    pub label: String,

    /// 도로명 주소
    #[validate(length(min = 1, message = "Street address is required"))]
    pub street_address: String,

    /// 도시
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    /// 주/도
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,

    /// 우편번호
    #[validate(length(min = 1, message = "Postal code is required"))]
    pub postal_code: String,

    /// 국가
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,

    /// 위도
    pub latitude: Option<f64>,

    /// 경도
    pub longitude: Option<f64>,

    /// 기본 주소 지정 여부
    #[serde(default)]
    pub is_default: bool,
}

impl CreateAddressRequest {
    /// 소유자를 지정하여 주소 엔티티로 변환합니다.
    pub fn into_entity(self, user_id: &str) -> Address {
        Address {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            label: self.label,
            street_address: self.street_address,
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
            country: self.country,
            latitude: self.latitude,
            longitude: self.longitude,
            is_default: self.is_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_entity_assigns_owner_and_id() {
        let request = CreateAddressRequest {
            label: "home".to_string(),
            street_address: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
            country: "US".to_string(),
            latitude: Some(39.78),
            longitude: Some(-89.65),
            is_default: true,
        };

        let address = request.into_entity("user-1");

        assert!(!address.id.is_empty());
        assert_eq!(address.user_id, "user-1");
        assert_eq!(address.label, "home");
        assert!(address.is_default);
    }

    #[test]
    fn test_is_default_defaults_to_false() {
        let json = r#"{
            "label": "work",
            "street_address": "1 Office Way",
            "city": "Springfield",
            "state": "IL",
            "postal_code": "62702",
            "country": "US"
        }"#;

        let request: CreateAddressRequest = serde_json::from_str(json).unwrap();
        assert!(!request.is_default);
        assert!(request.latitude.is_none());
    }
}
