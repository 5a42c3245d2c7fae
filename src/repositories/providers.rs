//! # 서비스 프로바이더 리포지토리 구현
//!
//! 프로바이더 프로필의 데이터 액세스 계층입니다.
//! MongoDB `service_providers` 컬렉션을 사용하며,
//! 사용자당 하나의 프로필만 허용합니다.

use futures_util::TryStreamExt;
use mongodb::{IndexModel, bson::doc, options::IndexOptions};

use crate::db::Database;
use crate::domain::entities::service_provider::ServiceProvider;
use crate::errors::errors::AppError;

/// 서비스 프로바이더 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct ServiceProviderRepository {
    collection: mongodb::Collection<ServiceProvider>,
}

impl ServiceProviderRepository {
    /// 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<ServiceProvider>("service_providers"),
        }
    }

    /// 소유 사용자 ID로 프로필 조회
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<ServiceProvider>, AppError> {
        self.collection
            .find_one(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 프로바이더 프로필 저장
    ///
    /// # 반환값
    ///
    /// * `Ok(ServiceProvider)` - 저장된 프로필
    /// * `Err(AppError::ConflictError)` - 해당 사용자의 프로필이 이미 존재
    pub async fn insert(&self, provider: ServiceProvider) -> Result<ServiceProvider, AppError> {
        if self.find_by_user_id(&provider.user_id).await?.is_some() {
            return Err(AppError::ConflictError(
                "Service provider profile already exists".to_string(),
            ));
        }

        self.collection
            .insert_one(&provider)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(provider)
    }

    /// 전체 프로바이더 목록 조회 (관리자용)
    pub async fn find_all(&self, limit: i64) -> Result<Vec<ServiceProvider>, AppError> {
        let cursor = self
            .collection
            .find(doc! {})
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 사용자당 프로필 1개 제약을 유니크 인덱스로 보장합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([user_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
