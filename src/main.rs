//! 짐 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB, Redis 연결을 설정하고 JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use gym_service_backend::caching::redis::RedisClient;
use gym_service_backend::caching::SessionStore;
use gym_service_backend::config::PasswordConfig;
use gym_service_backend::db::Database;
use gym_service_backend::repositories::exercises::ExerciseRepository;
use gym_service_backend::repositories::users::UserRepository;
use gym_service_backend::repositories::workouts::WorkoutRepository;
use gym_service_backend::routes::configure_all_routes;
use gym_service_backend::services::auth::{AuthGuard, SessionCacheService, TokenService};
use gym_service_backend::services::exercises::ExerciseService;
use gym_service_backend::services::users::UserService;
use gym_service_backend::services::workouts::WorkoutService;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

/// 핸들러에 주입되는 서비스 묶음
///
/// 생성자 주입으로 조립된 서비스들을 `web::Data` 형태로 보관합니다.
/// `HttpServer::new` 클로저가 워커마다 복제합니다.
#[derive(Clone)]
struct AppServices {
    tokens: web::Data<TokenService>,
    sessions: web::Data<SessionCacheService>,
    guard: web::Data<AuthGuard>,
    users: web::Data<UserService>,
    workouts: web::Data<WorkoutService>,
    exercises: web::Data<ExerciseService>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 짐 서비스 시작중...");

    // 데이터 스토어 초기화
    let (database, redis_client) = initialize_data_stores().await;

    // 서비스 조립 (생성자 주입)
    let services = build_services(database, redis_client).await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(services).await
}

/// 리포지토리와 서비스를 생성자 주입으로 조립합니다
///
/// 전역 싱글톤 없이, 공유가 필요한 구성 요소만 `Arc`로 복제합니다.
/// 세션 캐시 TTL은 토큰 수명과 동일하게 맞춥니다.
///
/// # Panics
///
/// * 이메일 유니크 인덱스 생성 실패 시
async fn build_services(database: Arc<Database>, redis_client: Arc<RedisClient>) -> AppServices {
    // 리포지토리 계층
    let user_repo = Arc::new(UserRepository::new(database.clone(), redis_client.clone()));
    let workout_repo = Arc::new(WorkoutRepository::new(database.clone()));
    let exercise_repo = Arc::new(ExerciseRepository::new(database));

    user_repo
        .ensure_indexes()
        .await
        .expect("이메일 유니크 인덱스 생성 실패");

    // 인증 구성 요소
    let tokens = Arc::new(TokenService::from_env());
    let session_store: Arc<dyn SessionStore> = redis_client;
    let sessions = Arc::new(SessionCacheService::new(
        session_store,
        tokens.lifetime_secs() as u64,
    ));
    let guard = AuthGuard::new(tokens.clone(), sessions.clone());

    // 도메인 서비스
    let users = Arc::new(UserService::new(
        user_repo.clone(),
        workout_repo.clone(),
        exercise_repo.clone(),
        sessions.clone(),
        PasswordConfig::bcrypt_cost(),
    ));
    let workouts = Arc::new(WorkoutService::new(
        workout_repo,
        exercise_repo.clone(),
        user_repo,
    ));
    let exercises = Arc::new(ExerciseService::new(exercise_repo, workouts.clone()));

    AppServices {
        tokens: web::Data::from(tokens),
        sessions: web::Data::from(sessions),
        guard: web::Data::new(guard),
        users: web::Data::from(users),
        workouts: web::Data::from(workouts),
        exercises: web::Data::from(exercises),
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Actix-web 기반 HTTP 서버를 설정하고 실행합니다.
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(services: AppServices) -> std::io::Result<()> {
    let bind_address = "127.0.0.1:8080";

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .expect("Rate Limiting 설정 구성 실패");

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            // 기존 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 서비스 주입
            .app_data(services.tokens.clone())
            .app_data(services.sessions.clone())
            .app_data(services.guard.clone())
            .app_data(services.users.clone())
            .app_data(services.workouts.clone())
            .app_data(services.exercises.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 개발환경과 운영환경을 구분하여 설정을 관리합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 초기화합니다
///
/// 데이터베이스 연결을 설정하고 Arc로 래핑된 핸들을 반환합니다.
/// 연결 실패 시 애플리케이션이 종료됩니다.
///
/// # Panics
///
/// * MongoDB 연결 실패 시
/// * Redis 연결 실패 시
async fn initialize_data_stores() -> (Arc<Database>, Arc<RedisClient>) {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(
        Database::new()
            .await
            .expect("데이터베이스 연결 실패")
    );

    info!("✅ MongoDB 연결 성공");

    let redis_client = Arc::new(
        RedisClient::new()
            .await
            .expect("Redis 연결 실패")
    );

    info!("✅ Redis 연결 성공");

    (database, redis_client)
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS(Cross-Origin Resource Sharing) 설정을
/// 구성합니다. 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    RateLimitConfig {
        per_second,
        burst_size,
    }
}
