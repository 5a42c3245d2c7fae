//! # 주소 비즈니스 로직 서비스
//!
//! 주소 생성과 목록 조회를 담당하며,
//! "사용자당 기본 주소는 최대 1개" 불변식을 유지합니다.

use std::sync::Arc;

use crate::domain::dto::addresses::CreateAddressRequest;
use crate::domain::entities::address::Address;
use crate::errors::errors::AppError;
use crate::repositories::addresses::AddressRepository;

/// 주소 목록 조회 시 최대 반환 개수
const ADDRESS_PAGE_LIMIT: i64 = 100;

/// 주소 비즈니스 로직 서비스
pub struct AddressService {
    addresses: Arc<AddressRepository>,
}

impl AddressService {
    /// 의존성을 주입하여 서비스를 생성합니다.
    pub fn new(addresses: Arc<AddressRepository>) -> Self {
        Self { addresses }
    }

    /// 새 주소 생성
    ///
    /// 기본 주소로 지정된 경우, 삽입 전에 소유자의 기존 기본 주소
    /// 플래그를 모두 해제합니다. 두 연산은 요청 내에서 순차 실행됩니다.
    pub async fn create(
        &self,
        user_id: &str,
        request: CreateAddressRequest,
    ) -> Result<Address, AppError> {
        if request.is_default {
            self.addresses.unset_default_for_user(user_id).await?;
        }

        self.addresses.insert(request.into_entity(user_id)).await
    }

    /// 소유자의 주소 목록 조회
    ///
    /// 반환 개수는 100건으로 제한됩니다.
    pub async fn list(&self, user_id: &str) -> Result<Vec<Address>, AppError> {
        self.addresses
            .find_all_by_user_id(user_id, ADDRESS_PAGE_LIMIT)
            .await
    }
}
