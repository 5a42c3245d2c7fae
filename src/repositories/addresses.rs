//! # 주소 리포지토리 구현
//!
//! 사용자 소유 주소의 데이터 액세스 계층입니다.
//! MongoDB `addresses` 컬렉션을 사용합니다.

use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::db::Database;
use crate::domain::entities::address::Address;
use crate::errors::errors::AppError;

/// 주소 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct AddressRepository {
    collection: mongodb::Collection<Address>,
}

impl AddressRepository {
    /// 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Address>("addresses"),
        }
    }

    /// 새 주소 저장
    pub async fn insert(&self, address: Address) -> Result<Address, AppError> {
        self.collection
            .insert_one(&address)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(address)
    }

    /// 소유자의 주소 목록 조회
    ///
    /// # 인자
    ///
    /// * `user_id` - 소유 사용자 ID
    /// * `limit` - 최대 반환 개수
    pub async fn find_all_by_user_id(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<Address>, AppError> {
        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소유자의 모든 주소에서 기본 주소 플래그 해제
    ///
    /// 새 기본 주소 삽입 전에 호출되어 "기본 주소는 최대 1개" 불변식을
    /// 유지합니다.
    pub async fn unset_default_for_user(&self, user_id: &str) -> Result<(), AppError> {
        self.collection
            .update_many(
                doc! { "user_id": user_id },
                doc! { "$set": { "is_default": false } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
