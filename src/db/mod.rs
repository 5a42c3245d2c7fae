//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 풀링과 종료 시점의 명시적 해제를 제공합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//! use crate::db::Database;
//!
//! let config = AppConfig::from_env();
//! let database = Database::connect(&config.database).await?;
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseSettings;
use crate::errors::errors::{AppResult, ErrorContext};

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 연결을 관리하며,
/// 리포지토리 계층에서 데이터베이스 작업을 위한 기본 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 설정값으로 새 MongoDB 연결을 생성합니다.
    ///
    /// 연결 옵션을 파싱하고 `ping` 명령으로 연결 상태를 검증한 후
    /// Database 인스턴스를 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `settings` - 시작 시점에 로드된 MongoDB 연결 설정
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - URI 파싱 실패 또는 연결 검증 실패
    pub async fn connect(settings: &DatabaseSettings) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&settings.uri)
            .await
            .context("MongoDB URI 파싱 실패")?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("neemaflex".to_string());

        let client = Client::with_options(client_options).context("MongoDB 클라이언트 생성 실패")?;

        // 연결 테스트
        client
            .database(&settings.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .context("MongoDB 연결 검증 실패")?;

        info!("✅ MongoDB 연결 성공: {}", settings.database_name);

        Ok(Self {
            client,
            database_name: settings.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// 실제 MongoDB 작업을 위한 `mongodb::Database` 인스턴스를 반환합니다.
    /// 리포지토리에서 컬렉션에 접근할 때 사용됩니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 이름으로 타입이 지정된 컬렉션 핸들을 반환합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let users = database.collection::<User>("users");
    /// ```
    pub fn collection<T: Send + Sync>(&self, name: &str) -> mongodb::Collection<T> {
        self.get_database().collection::<T>(name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 연결 풀을 명시적으로 해제합니다.
    ///
    /// 프로세스 종료 시점에 호출하여 열린 연결을 결정적으로 닫습니다.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB 연결 풀 해제 완료");
    }
}
