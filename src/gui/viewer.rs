use std::cell::RefCell;

use iced::{
    Element, Length, Task,
    widget::{column, container, text},
};
use image::DynamicImage;

use super::{state::ResultPanel, widgets::side_by_side};
use crate::{Colormap, EdgeMap, Viewer};

/// Blocking window showing the input and its edge map side by side
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewer;

impl Viewer for WindowViewer {
    fn show(&self, image: &DynamicImage, edges: &EdgeMap, colormap: Colormap) -> anyhow::Result<()> {
        let caption = format!("{} edges, colormap {}", edges_label(edges), colormap);
        let panel = ResultPanel::render(image, edges, colormap, caption);

        iced::application(
            move || ViewerWindow { panel: panel.clone() },
            ViewerWindow::update,
            ViewerWindow::view,
        )
        .title("Edge Detector")
        .window_size((1200.0, 650.0))
        .run()
        .map_err(|e| anyhow::anyhow!("Viewer failed: {}", e))
    }
}

/// Renders into the form window instead of opening a new one
#[derive(Debug, Default)]
pub(super) struct PanelViewer {
    pub panel: RefCell<Option<ResultPanel>>,
}

impl Viewer for PanelViewer {
    fn show(&self, image: &DynamicImage, edges: &EdgeMap, colormap: Colormap) -> anyhow::Result<()> {
        let caption = format!("{} edges, colormap {}", edges_label(edges), colormap);
        *self.panel.borrow_mut() = Some(ResultPanel::render(image, edges, colormap, caption));
        Ok(())
    }
}

fn edges_label(edges: &EdgeMap) -> String {
    let (width, height) = edges.dimensions();
    format!("{}x{}, {} non-zero", width, height, edges.edge_count())
}

struct ViewerWindow {
    panel: ResultPanel,
}

#[derive(Debug, Clone)]
enum ViewerMessage {}

impl ViewerWindow {
    fn update(&mut self, message: ViewerMessage) -> Task<ViewerMessage> {
        match message {}
    }

    fn view(&self) -> Element<'_, ViewerMessage> {
        container(
            column![
                side_by_side("Input", &self.panel.original, "Edges", &self.panel.edges),
                text(self.panel.caption.as_str()),
            ]
            .spacing(10)
            .padding(20),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
