use std::sync::Arc;

use iced::{Font, Settings, Size};

use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

const WINDOW_SIZE: Size = Size::new(480.0, 640.0);

/// Build and run the card stack window with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Swipe Cards")
    .subscription(subscriptions::subscription)
    .window(iced::window::Settings {
        size: WINDOW_SIZE,
        resizable: true,
        ..Default::default()
    })
    .run()
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("swipecard-player".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::DEFAULT;
    settings
}
