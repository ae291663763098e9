mod config;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;
mod usecase;

use aws_config::{BehaviorVersion, Region};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, header::InvalidHeaderValue},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{AppConfig, ServerConfig},
    domain::{
        models::location::BucketLocation, repositories::user_repository::UserRepository,
        services::object_storage::ObjectStorage,
    },
    infrastructure::{
        mongodb::MongoDB, s3_object_storage::S3ObjectStorage,
        user_repository::MongoUserRepository,
    },
    presentation::handlers::{root_handler::root, user_handler::create_user_router},
    usecase::register_user_usecase::RegisterUserUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    info!("Configuration loaded: {:?}", config);

    let mongodb = MongoDB::connect(&config.mongodb).await?;
    mongodb
        .ensure_user_indexes(&config.mongodb.collection)
        .await?;
    let user_repository = MongoUserRepository::new(mongodb.collection(&config.mongodb.collection));

    let aws = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.storage.region.clone()))
        .load()
        .await;
    let object_storage = S3ObjectStorage::new(
        aws_sdk_s3::Client::new(&aws),
        config.storage.bucket.clone(),
    );

    let register_user_usecase = RegisterUserUsecase::new(
        user_repository,
        object_storage,
        BucketLocation::new(&config.storage.bucket, &config.storage.region),
    );

    let app = create_app(register_user_usecase, &config.server)?;

    let addr = config.server.addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Main router: liveness, registration, body limit, CORS and request tracing.
fn create_app<
    R: UserRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
>(
    register_user_usecase: RegisterUserUsecase<R, S>,
    server: &ServerConfig,
) -> Result<Router, InvalidHeaderValue> {
    let app = Router::new()
        .route("/", get(root))
        .merge(create_user_router(register_user_usecase))
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .layer(cors_layer(&server.allowed_origins)?)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

// credentials are allowed, so methods and headers are mirrored instead of `*`
fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
