mod app;
mod message;
mod state;
mod viewer;
mod widgets;

pub use app::EdgeDetectorApp;
pub use message::Message;
pub use state::{FormState, ResultPanel};
pub use viewer::WindowViewer;

/// Open the edge detection form, blocks until the window is closed
pub fn run_app() -> iced::Result {
    iced::application(EdgeDetectorApp::new, EdgeDetectorApp::update, EdgeDetectorApp::view)
        .title(EdgeDetectorApp::title)
        .window_size((1200.0, 720.0))
        .run()
}
