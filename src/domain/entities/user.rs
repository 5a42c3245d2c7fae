//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 고객, 서비스 프로바이더, 관리자 역할을 하나의 통합된 모델로 표현합니다.

use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 역할
///
/// 역할은 계정 생성 시점에 결정되며 이후 변경되지 않습니다.
/// 라우트 단위 접근 제어의 기준이 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// 일반 고객
    Customer,
    /// 서비스 프로바이더 (프로바이더 프로필 생성 가능)
    ServiceProvider,
    /// 관리자 (전체 목록 조회 가능)
    Admin,
}

impl UserRole {
    /// 문자열에서 UserRole을 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 역할 이름 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// * `Ok(UserRole)` - 유효한 역할인 경우
    /// * `Err(String)` - 지원하지 않는 역할인 경우
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "customer" => Ok(UserRole::Customer),
            "service_provider" => Ok(UserRole::ServiceProvider),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Unsupported user role: {}", s)),
        }
    }

    /// UserRole을 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::ServiceProvider => "service_provider",
            UserRole::Admin => "admin",
        }
    }
}

/// KYC (Know Your Customer) 인증 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    /// 심사 대기 (기본값)
    Pending,
    /// 인증 완료
    Verified,
    /// 인증 거부
    Rejected,
}

impl KycStatus {
    /// KycStatus를 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Pending => "pending",
            KycStatus::Verified => "verified",
            KycStatus::Rejected => "rejected",
        }
    }
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 이메일과 전화번호는 전체 사용자에 걸쳐 유니크합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 사용자 고유 ID (UUID v4 문자열)
    pub id: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 전화번호 (unique)
    pub phone: String,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 사용자 역할 (생성 이후 불변)
    pub role: UserRole,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 계정 인증 여부
    pub is_verified: bool,
    /// KYC 인증 상태
    pub kyc_status: KycStatus,
    /// 프로필 이미지 참조
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// 자유 형식 주소 정보
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Document>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
    /// 해시된 비밀번호 (API 응답에는 절대 포함되지 않음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashed_password: Option<String>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 신규 계정은 활성 상태, 미인증, KYC 대기 상태로 시작합니다.
    pub fn new(
        email: String,
        phone: String,
        first_name: String,
        last_name: String,
        role: UserRole,
        hashed_password: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: Uuid::new_v4().to_string(),
            email,
            phone,
            first_name,
            last_name,
            role,
            is_active: true,
            is_verified: false,
            kyc_status: KycStatus::Pending,
            profile_picture: None,
            address: None,
            created_at: now,
            updated_at: now,
            hashed_password: Some(hashed_password),
        }
    }

    /// 특정 역할을 가졌는지 확인
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }

    /// 관리자인지 확인
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_string() {
        assert_eq!(UserRole::from_str("customer").unwrap(), UserRole::Customer);
        assert_eq!(
            UserRole::from_str("service_provider").unwrap(),
            UserRole::ServiceProvider
        );
        assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);

        // 대소문자 무관 테스트
        assert_eq!(UserRole::from_str("ADMIN").unwrap(), UserRole::Admin);

        // 지원하지 않는 역할 테스트
        assert!(UserRole::from_str("moderator").is_err());
        assert!(UserRole::from_str("").is_err());
    }

    #[test]
    fn test_user_role_roundtrip() {
        let roles = ["customer", "service_provider", "admin"];

        for &role_str in &roles {
            let role = UserRole::from_str(role_str).unwrap();
            assert_eq!(role.as_str(), role_str);
        }
    }

    #[test]
    fn test_user_role_serialization() {
        let json = serde_json::to_string(&UserRole::ServiceProvider).unwrap();
        assert_eq!(json, "\"service_provider\"");

        let deserialized: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(deserialized, UserRole::Admin);
    }

    #[test]
    fn test_kyc_status_serialization() {
        let json = serde_json::to_string(&KycStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        assert_eq!(KycStatus::Rejected.as_str(), "rejected");
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "a@x.com".to_string(),
            "+12025550123".to_string(),
            "Alice".to_string(),
            "Smith".to_string(),
            UserRole::Customer,
            "hashed".to_string(),
        );

        assert!(!user.id.is_empty());
        assert!(user.is_active);
        assert!(!user.is_verified);
        assert_eq!(user.kyc_status, KycStatus::Pending);
        assert!(user.profile_picture.is_none());
        assert!(user.address.is_none());
        assert_eq!(user.hashed_password.as_deref(), Some("hashed"));
    }

    #[test]
    fn test_new_user_ids_are_unique() {
        let make = || {
            User::new(
                "a@x.com".to_string(),
                "+12025550123".to_string(),
                "Alice".to_string(),
                "Smith".to_string(),
                UserRole::Customer,
                "hashed".to_string(),
            )
        };

        assert_ne!(make().id, make().id);
    }

    #[test]
    fn test_role_checks() {
        let mut user = User::new(
            "a@x.com".to_string(),
            "+12025550123".to_string(),
            "Alice".to_string(),
            "Smith".to_string(),
            UserRole::Customer,
            "hashed".to_string(),
        );

        assert!(user.has_role(UserRole::Customer));
        assert!(!user.is_admin());

        user.role = UserRole::Admin;
        assert!(user.is_admin());
    }
}
