//! 패스워드 해싱 서비스 구현
//!
//! bcrypt 기반의 단방향 패스워드 해싱과 검증을 제공합니다.
//! 해싱은 CPU 집약적이므로 블로킹 스레드 풀에서 실행하여
//! 다른 요청의 처리를 지연시키지 않습니다.

use actix_web::web;

use crate::errors::errors::AppError;

/// 패스워드 해싱/검증 서비스
///
/// 환경별로 조절되는 bcrypt cost로 생성됩니다.
/// 솔트는 bcrypt가 호출마다 자동 생성하므로 동일한 평문도
/// 매번 다른 해시를 생성합니다.
pub struct PasswordService {
    /// bcrypt cost (4-15)
    cost: u32,
}

impl PasswordService {
    /// 주어진 bcrypt cost로 서비스를 생성합니다.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 평문 비밀번호를 해싱합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - bcrypt 해시 문자열
    /// * `Err(AppError::InternalError)` - 해싱 실패
    pub async fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        let hash_start = std::time::Instant::now();
        let hashed = web::block(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("블로킹 작업 실행 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(hashed)
    }

    /// 평문 비밀번호를 해시와 대조합니다.
    ///
    /// 잘못된 형식의 해시는 에러가 아닌 `false`로 처리됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 비밀번호 일치
    /// * `Ok(false)` - 비밀번호 불일치 또는 해시 형식 오류
    pub async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, AppError> {
        let plaintext = plaintext.to_owned();
        let hashed = hashed.to_owned();

        let verify_start = std::time::Instant::now();
        let is_valid = web::block(move || bcrypt::verify(plaintext, &hashed).unwrap_or(false))
            .await
            .map_err(|e| AppError::InternalError(format!("블로킹 작업 실행 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        Ok(is_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 테스트는 개발 환경 cost 사용
    fn service() -> PasswordService {
        PasswordService::new(4)
    }

    #[actix_web::test]
    async fn test_hash_and_verify_roundtrip() {
        let service = service();

        let hashed = service.hash("longenough1").await.unwrap();
        assert!(service.verify("longenough1", &hashed).await.unwrap());
        assert!(!service.verify("wrong-password", &hashed).await.unwrap());
    }

    #[actix_web::test]
    async fn test_same_plaintext_yields_different_hashes() {
        let service = service();

        let first = service.hash("longenough1").await.unwrap();
        let second = service.hash("longenough1").await.unwrap();

        // 솔트 랜덤화
        assert_ne!(first, second);
        assert!(service.verify("longenough1", &first).await.unwrap());
        assert!(service.verify("longenough1", &second).await.unwrap());
    }

    #[actix_web::test]
    async fn test_malformed_hash_verifies_to_false() {
        let service = service();

        assert!(!service.verify("longenough1", "not-a-bcrypt-hash").await.unwrap());
        assert!(!service.verify("longenough1", "").await.unwrap());
    }
}
