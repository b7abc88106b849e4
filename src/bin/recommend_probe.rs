use crew_recommender::client::config::ClientConfig;
use crew_recommender::client::services::recommend_service::RecommendService;
use crew_recommender::utils::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = ClientConfig::from_env();
    logger::init(&cfg.log_level);

    let location = std::env::args().nth(1).unwrap_or_else(|| cfg.default_location.clone());
    let svc = RecommendService::new(cfg.base_url());
    println!("Using backend {}", svc.base_url());

    match svc.health().await {
        Ok(health) => println!("STATUS -> {}", health.status),
        Err(e) => println!("STATUS -> {}", e),
    }

    let recommendation = svc.recommend(&location).await?;
    println!("=== Recommendations for {} ===", location);
    println!("{}", recommendation.recommendations.trim());
    println!("=== Crew log ===");
    println!("{}", recommendation.crew_log.trim());
    Ok(())
}
