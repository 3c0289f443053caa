use dayline_ui::app::App;

fn main() -> iced::Result {
    env_logger::init();
    iced::application(App::boot, App::update, App::view)
        .title("Dayline")
        .subscription(App::subscription)
        .run()
}
