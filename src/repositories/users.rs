//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `users` 컬렉션에 대한 조회, 생성, 부분 업데이트를 제공합니다.
//!
//! ## 데이터 무결성
//!
//! 이메일과 전화번호의 유니크성은 삽입 전 조회(check-then-insert)로
//! 우선 확인하고, 스토리지 계층의 유니크 인덱스가 최종 보장합니다.

use futures_util::TryStreamExt;
use mongodb::{IndexModel, bson::doc, options::IndexOptions};

use crate::db::Database;
use crate::domain::entities::user::User;
use crate::errors::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
/// 시작 시점에 명시적으로 생성되어 서비스 계층에 주입됩니다.
#[derive(Clone)]
pub struct UserRepository {
    collection: mongodb::Collection<User>,
}

impl UserRepository {
    /// 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<User>("users"),
        }
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전화번호로 사용자 조회
    ///
    /// 전화번호는 시스템 전체에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "phone": phone })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// 토큰의 subject 해석 등 가장 빈번한 조회 패턴입니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 저장
    ///
    /// 이메일과 전화번호의 중복 여부를 사전에 검증합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 사용자
    /// * `Err(AppError::ConflictError)` - 이메일 또는 전화번호 중복
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn insert(&self, user: User) -> Result<User, AppError> {
        // 중복 확인
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "Email already registered".to_string(),
            ));
        }

        if self.find_by_phone(&user.phone).await?.is_some() {
            return Err(AppError::ConflictError(
                "Phone number already registered".to_string(),
            ));
        }

        self.collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// 사용자 정보 부분 업데이트
    ///
    /// 주어진 필드들을 `$set`으로 병합하며, `updated_at`은 항상 갱신됩니다.
    ///
    /// # 인자
    ///
    /// * `id` - 업데이트할 사용자의 ID
    /// * `fields` - 업데이트할 필드들을 포함한 Document
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 업데이트 이후의 사용자 정보
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn update_fields(
        &self,
        id: &str,
        mut fields: mongodb::bson::Document,
    ) -> Result<Option<User>, AppError> {
        fields.insert("updated_at", mongodb::bson::DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "id": id }, doc! { "$set": fields })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 사용자 목록 조회 (관리자용)
    ///
    /// # 인자
    ///
    /// * `limit` - 최대 반환 개수
    pub async fn find_all(&self, limit: i64) -> Result<Vec<User>, AppError> {
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
    /// check-then-insert 경쟁 조건을 스토리지 계층에서 최종적으로 막기 위해
    /// 이메일/전화번호 유니크 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let phone_index = IndexModel::builder()
            .keys(doc! { "phone": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("phone_unique".to_string())
                    .build(),
            )
            .build();

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, phone_index, id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
