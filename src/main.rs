use iced::Application;
use log::info;
use crew_recommender::client::config::ClientConfig;
use crew_recommender::client::gui::app::RecommenderApp;
use crew_recommender::utils::logger;

fn main() -> iced::Result {
    let config = ClientConfig::from_env();
    logger::init(&config.log_level);
    info!("Client configuration loaded, backend at {}", config.base_url());

    RecommenderApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(900.0, 760.0),
            ..Default::default()
        },
        ..iced::Settings::with_flags(config)
    })
}
