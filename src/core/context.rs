//! 애플리케이션 컨텍스트
//!
//! 저장소와 서비스를 한 번 조립하여 `Arc`로 공유합니다.
//! 전역 상태 없이 [`AppContext::configure`]가 Actix 앱 데이터로 등록하고,
//! 테스트는 [`AppContext::in_memory`]로 격리된 인스턴스를 만듭니다.

use std::sync::Arc;
use actix_web::web;
use log::{info, warn};
use crate::{
    caching::redis::RedisClient,
    config::{StorageBackend, StorageConfig},
    core::{AppError, AppResult},
    db::Database,
    repositories::{
        memory::{
            InMemoryProductRepository, InMemoryRevocationLedger, InMemoryShoppingListRepository,
            InMemoryUserRepository,
        },
        MongoProductRepository, MongoRevocationLedger, MongoShoppingListRepository,
        MongoUserRepository, ProductRepository, RevocationCache, RevocationLedger,
        ShoppingListRepository, UserRepository,
    },
    services::{
        auth::{AuthGate, PasswordHasher, SessionService, TokenService},
        products::ProductService,
        shopping::ShoppingListService,
        users::UserService,
    },
    utils::display_terminal::{print_boxed_title, print_step_complete, print_step_start, print_sub_task},
};

/// 저장소 트레이트 객체 묶음
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub ledger: Arc<dyn RevocationLedger>,
    pub lists: Arc<dyn ShoppingListRepository>,
    pub products: Arc<dyn ProductRepository>,
}

impl Repositories {
    /// 프로세스 메모리 저장소. 재시작하면 모든 데이터가 사라집니다.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::default()),
            ledger: Arc::new(InMemoryRevocationLedger::default()),
            lists: Arc::new(InMemoryShoppingListRepository::default()),
            products: Arc::new(InMemoryProductRepository::default()),
        }
    }

    /// MongoDB 저장소를 연결하고 인덱스를 생성합니다.
    ///
    /// `REDIS_URL`이 설정되어 있으면 폐기 원장 앞에 Redis 캐시를 둡니다.
    /// Redis 연결에 실패해도 캐시 없이 계속 진행합니다.
    pub async fn mongodb(token_ttl_seconds: u64) -> AppResult<Self> {
        let database = Database::new()
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB connection failed: {}", e)))?;
        let database = Arc::new(database);
        print_sub_task("MongoDB", database.database_name());

        let cache = match StorageConfig::redis_url() {
            Some(url) => match RedisClient::new(&url).await {
                Ok(redis) => {
                    let ttl = StorageConfig::revocation_cache_ttl_seconds(token_ttl_seconds);
                    print_sub_task("Redis revocation cache", &format!("TTL {}s", ttl));
                    Some(RevocationCache::new(Arc::new(redis), ttl))
                }
                Err(e) => {
                    warn!("⚠️ 캐시 없이 진행합니다: {}", AppError::RedisError(e.to_string()));
                    None
                }
            },
            None => None,
        };

        let users = MongoUserRepository::new(database.clone());
        let ledger = MongoRevocationLedger::new(database.clone(), cache);
        let lists = MongoShoppingListRepository::new(database.clone());
        let products = MongoProductRepository::new(database);

        users.create_indexes().await?;
        ledger.create_indexes().await?;
        lists.create_indexes().await?;
        print_sub_task("Indexes", "✓ Created");

        Ok(Self {
            users: Arc::new(users),
            ledger: Arc::new(ledger),
            lists: Arc::new(lists),
            products: Arc::new(products),
        })
    }
}

/// 조립이 끝난 서비스 그래프
#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<UserService>,
    pub sessions: Arc<SessionService>,
    pub gate: Arc<AuthGate>,
    pub shopping_lists: Arc<ShoppingListService>,
    pub products: Arc<ProductService>,
    pub ledger: Arc<dyn RevocationLedger>,
}

impl AppContext {
    pub fn new(repositories: Repositories, hasher: PasswordHasher, tokens: TokenService) -> Self {
        let hasher = Arc::new(hasher);
        let tokens = Arc::new(tokens);

        let users = Arc::new(UserService::new(repositories.users, hasher.clone()));
        let sessions = Arc::new(SessionService::new(
            users.clone(),
            hasher,
            tokens.clone(),
            repositories.ledger.clone(),
        ));
        let gate = Arc::new(AuthGate::new(tokens, repositories.ledger.clone()));
        let shopping_lists = Arc::new(ShoppingListService::new(
            repositories.lists,
            repositories.products.clone(),
            users.clone(),
        ));
        let products = Arc::new(ProductService::new(repositories.products));

        Self {
            users,
            sessions,
            gate,
            shopping_lists,
            products,
            ledger: repositories.ledger,
        }
    }

    /// 메모리 저장소로 구성된 컨텍스트
    pub fn in_memory(hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self::new(Repositories::in_memory(), hasher, tokens)
    }

    /// 환경 변수 설정에 따라 저장소와 서비스를 초기화합니다.
    pub async fn from_env() -> AppResult<Self> {
        print_boxed_title("🛒 INITIALIZING SHOPPING LIST SERVICE");

        print_step_start(1, "Loading security settings");
        let hasher = PasswordHasher::from_config()?;
        let tokens = TokenService::from_config();
        let token_ttl_seconds = u64::try_from(tokens.ttl().num_seconds()).unwrap_or(0);
        print_sub_task("Token TTL", &format!("{}s", token_ttl_seconds));
        print_step_complete(1, "Security settings loaded", 2);

        let backend = StorageConfig::backend();
        print_step_start(2, &format!("Connecting storage ({})", backend.as_str()));
        let repositories = match backend {
            StorageBackend::MongoDb => Repositories::mongodb(token_ttl_seconds).await?,
            StorageBackend::Memory => {
                warn!("⚠️ 메모리 저장소 사용 중: 재시작 시 데이터가 사라집니다");
                Repositories::in_memory()
            }
        };
        print_step_complete(2, "Storage ready", 4);

        let context = Self::new(repositories, hasher, tokens);
        info!("✅ 서비스 조립 완료");
        Ok(context)
    }

    /// 서비스들을 앱 데이터로 등록하고 JSON 본문 파싱 오류를 400으로 변환합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.sessions.clone()))
            .app_data(web::Data::from(self.gate.clone()))
            .app_data(web::Data::from(self.shopping_lists.clone()))
            .app_data(web::Data::from(self.products.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::ValidationError(format!("invalid request body: {}", err)).into()
            }));
    }
}
