use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, pick_list, row, text, text_input},
};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};
use tracing::{error, info};

use super::{
    Message,
    state::{FormState, ResultPanel},
    viewer::PanelViewer,
    widgets::side_by_side,
};
use crate::{Colormap, EdgeRequest, Method, io, pipeline};

pub struct EdgeDetectorApp {
    form: FormState,
    result: Option<ResultPanel>,
}

impl EdgeDetectorApp {
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
            result: None,
        }
    }

    pub fn title(&self) -> String {
        "Edge Detector".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(input) => {
                self.form.input = input;
                Task::none()
            }
            Message::Browse => {
                let mut dialog = AsyncFileDialog::new()
                    .set_title("Select an image")
                    .add_filter("Images", io::IMAGE_EXTENSIONS);
                if let Some(dir) = io::default_browse_dir() {
                    dialog = dialog.set_directory(dir);
                }
                Task::perform(dialog.pick_file(), |handle| {
                    Message::FileSelected(handle.map(|h| h.path().to_path_buf()))
                })
            }
            Message::FileSelected(Some(path)) => {
                self.form.input = path.display().to_string();
                Task::none()
            }
            Message::FileSelected(None) => Task::none(),
            Message::MethodSelected(method) => {
                self.form.method = method;
                Task::none()
            }
            Message::ColormapSelected(colormap) => {
                self.form.colormap = colormap;
                Task::none()
            }
            Message::Detect => match self.form.to_request() {
                Some(request) => self.detect(&request),
                None => dialog(MessageLevel::Warning, "Warning", "Please select an input file".to_string()),
            },
            Message::Exit => iced::exit(),
            Message::DialogClosed => Task::none(),
        }
    }

    fn detect(&mut self, request: &EdgeRequest) -> Task<Message> {
        let viewer = PanelViewer::default();
        match pipeline::run(request, &viewer) {
            Ok(outcome) => {
                info!("Edges written to {}", outcome.output.display());
                self.result = viewer.panel.into_inner();
                Task::none()
            }
            Err(e) => {
                error!("Edge detection failed: {:#}", e);
                dialog(MessageLevel::Error, "Error", format!("{:#}", e))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let form = column![
            text("Edge Detector").size(32),
            row![
                text_input("Input image", &self.form.input)
                    .on_input(Message::InputChanged)
                    .width(Length::Fill),
                button("Browse").on_press(Message::Browse),
            ]
            .spacing(10)
            .align_y(Center),
            row![
                text("Method"),
                pick_list(Method::ALL, Some(self.form.method), Message::MethodSelected),
                text("Colormap"),
                pick_list(Colormap::ALL, Some(self.form.colormap), Message::ColormapSelected),
            ]
            .spacing(10)
            .align_y(Center),
            row![
                button("Detect edges").on_press(Message::Detect),
                button("Exit").on_press(Message::Exit),
            ]
            .spacing(20),
        ]
        .spacing(20);

        let content: Element<'_, Message> = match &self.result {
            Some(panel) => column![
                form,
                side_by_side("Input", &panel.original, "Edges", &panel.edges),
                text(panel.caption.as_str()),
            ]
            .spacing(20)
            .into(),
            None => form.into(),
        };

        container(content)
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl Default for EdgeDetectorApp {
    fn default() -> Self {
        Self::new()
    }
}

fn dialog(level: MessageLevel, title: &str, description: String) -> Task<Message> {
    Task::perform(
        AsyncMessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(description)
            .set_buttons(MessageButtons::Ok)
            .show(),
        |_| Message::DialogClosed,
    )
}
