//! 사용자 요청/응답 DTO
//!
//! 사용자 프로필 조회/수정 엔드포인트의 데이터 구조를 정의합니다.

use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{KycStatus, User, UserRole};

/// 사용자 응답 DTO
///
/// 엔티티에서 `hashed_password`를 제거한 공개 뷰입니다.
/// 사용자가 호출자에게 반환되는 모든 경계에서 이 타입을 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub is_verified: bool,
    pub kyc_status: KycStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Document>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            phone,
            first_name,
            last_name,
            role,
            is_active,
            is_verified,
            kyc_status,
            profile_picture,
            address,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            email,
            phone,
            first_name,
            last_name,
            role,
            is_active,
            is_verified,
            kyc_status,
            profile_picture,
            address,
            created_at,
            updated_at,
        }
    }
}

/// 프로필 부분 수정 요청 DTO
///
/// 제공된 필드만 반영됩니다. 생략된 필드는 기존 값을 유지하며,
/// `role`과 `email`은 이 경로로 변경할 수 없습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub address: Option<Document>,
}

impl UpdateProfileRequest {
    /// 제공된 필드만 담은 `$set` 업데이트 문서를 생성합니다.
    ///
    /// `updated_at` 갱신은 리포지토리 계층에서 항상 수행됩니다.
    pub fn into_update_document(self) -> Document {
        let mut doc = Document::new();

        if let Some(first_name) = self.first_name {
            doc.insert("first_name", first_name);
        }
        if let Some(last_name) = self.last_name {
            doc.insert("last_name", last_name);
        }
        if let Some(phone) = self.phone {
            doc.insert("phone", phone);
        }
        if let Some(profile_picture) = self.profile_picture {
            doc.insert("profile_picture", profile_picture);
        }
        if let Some(address) = self.address {
            doc.insert("address", address);
        }

        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_user_response_excludes_hashed_password() {
        let user = User::new(
            "a@x.com".to_string(),
            "+12025550123".to_string(),
            "Alice".to_string(),
            "Smith".to_string(),
            UserRole::Customer,
            "super-secret-hash".to_string(),
        );

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("super-secret-hash"));
        assert!(json.contains("\"kyc_status\":\"pending\""));
    }

    #[test]
    fn test_update_document_contains_only_supplied_fields() {
        let request = UpdateProfileRequest {
            first_name: Some("Bob".to_string()),
            phone: Some("+12025550199".to_string()),
            ..Default::default()
        };

        let doc = request.into_update_document();

        assert_eq!(doc.get_str("first_name").unwrap(), "Bob");
        assert_eq!(doc.get_str("phone").unwrap(), "+12025550199");
        assert!(!doc.contains_key("last_name"));
        assert!(!doc.contains_key("profile_picture"));
        assert!(!doc.contains_key("address"));
    }

    #[test]
    fn test_update_document_empty_when_nothing_supplied() {
        let request = UpdateProfileRequest::default();
        assert!(request.into_update_document().is_empty());
    }

    #[test]
    fn test_update_document_address_map() {
        let request = UpdateProfileRequest {
            address: Some(doc! { "city": "Nairobi", "country": "KE" }),
            ..Default::default()
        };

        let doc = request.into_update_document();
        let address = doc.get_document("address").unwrap();
        assert_eq!(address.get_str("city").unwrap(), "Nairobi");
    }
}
