use std::path::PathBuf;

use crate::{Colormap, Method};

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Browse,
    FileSelected(Option<PathBuf>),
    MethodSelected(Method),
    ColormapSelected(Colormap),
    Detect,
    Exit,
    DialogClosed,
}
