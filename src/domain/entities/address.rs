//! Address Entity Implementation
//!
//! 사용자 소유의 배송/방문 주소 엔티티입니다.
//! 사용자당 기본 주소(`is_default = true`)는 최대 하나만 존재합니다.

use serde::{Deserialize, Serialize};

/// 주소 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// 주소 고유 ID (UUID v4 문자열)
    pub id: String,
    /// 소유 사용자 ID
    pub user_id: String,
    /// 라벨 (home, work, other 등 자유 텍스트)
    pub label: String,
    /// 도로명 주소
    pub street_address: String,
    /// 도시
    pub city: String,
    /// 주/도
    pub state: String,
    /// 우편번호
    pub postal_code: String,
    /// 국가
    pub country: String,
    /// 위도
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// 경도
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// 기본 주소 여부 (사용자당 최대 1개)
    pub is_default: bool,
}
