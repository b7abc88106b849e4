use iced::{Application, Command, Element, Theme};
use crate::client::config::ClientConfig;
use crate::client::models::app_state::RecommenderState;
use crate::client::models::messages::Message;
use crate::client::services::recommend_service::RecommendService;
use crate::client::gui::views;

pub struct RecommenderApp {
    pub state: RecommenderState,
    pub service: RecommendService,
}

impl Application for RecommenderApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(config: ClientConfig) -> (Self, Command<Message>) {
        let service = RecommendService::new(config.base_url());
        let app = RecommenderApp {
            state: RecommenderState::new(config.default_location),
            service: service.clone(),
        };
        // Check the backend once so the user knows whether it is up before dispatching.
        let cmd = Command::perform(
            async move { service.health().await.map_err(|e| e.to_string()) },
            Message::HealthChecked,
        );
        (app, cmd)
    }

    fn title(&self) -> String {
        "Restaurant Recommender".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message, &self.service)
    }

    fn view(&self) -> Element<Message> {
        views::recommend::view(&self.state)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
