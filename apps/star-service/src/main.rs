//! # Star Service サーバー
//!
//! ダッシュボードのスター追加・解除・一覧を提供するサービス。
//!
//! ## アクセス制御
//!
//! 認証は上流のプロキシが行い、呼び出し元を `X-Identity-Id` / `X-Org-Id`
//! ヘッダーで渡す。Star Service 自身はセッションを扱わない。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `STAR_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `STAR_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `STAR_DEFAULT_ORG_ID` | No | `X-Org-Id` 省略時の組織 ID（デフォルト: `1`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! STAR_PORT=3100 DATABASE_URL=postgres://... cargo run -p starboard-star-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use starboard_domain::clock::SystemClock;
use starboard_infra::{
    db,
    repository::{PostgresDashboardRepository, PostgresStarRepository},
};
use starboard_shared::observability::{TracingConfig, init_tracing};
use starboard_star_service::{
    app_builder::build_router,
    config::StarConfig,
    deprecation::TracingDeprecationSink,
    handler::{ReadinessState, StarState},
    usecase::StarUseCaseImpl,
};
use tokio::net::TcpListener;

/// Star Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(TracingConfig::from_env("star-service"));
    let _tracing_guard = tracing::info_span!("app", service = "star-service").entered();

    // 設定読み込み
    let config = StarConfig::from_env()?;

    tracing::info!(
        "Star Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("データベースに接続しました");

    // マイグレーション実行
    db::run_migrations(&pool).await?;
    tracing::info!("マイグレーションを適用しました");

    // Readiness Check 用 State（pool が move される前に clone）
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

    // 依存コンポーネントを初期化
    let usecase = StarUseCaseImpl::new(
        Arc::new(PostgresStarRepository::new(pool.clone())),
        Arc::new(PostgresDashboardRepository::new(pool)),
        Arc::new(SystemClock),
        Arc::new(TracingDeprecationSink),
    );
    let star_state = Arc::new(StarState {
        usecase,
        default_org_id: config.default_org_id,
    });

    let app = build_router(star_state, readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Star Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
