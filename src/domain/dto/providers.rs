//! 서비스 프로바이더 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 프로바이더 프로필 생성 요청 DTO
///
/// 카테고리는 문자열 목록으로 받은 뒤 고정 열거에 대해 검증되며,
/// 유효하지 않은 항목은 목록 그대로 거부 사유에 포함됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateServiceProviderRequest {
    /// 상호명
    #[validate(length(min = 1, message = "Business name is required"))]
    pub business_name: String,

    /// 제공 서비스 카테고리 목록
    pub service_categories: Vec<String>,

    /// 소개글
    pub description: Option<String>,

    /// 사업자 등록번호
    pub business_license: Option<String>,
}
