mod background_renderer;
mod notification_presenter;

pub use background_renderer::*;
pub use notification_presenter::*;
