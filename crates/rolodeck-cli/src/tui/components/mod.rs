use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod footer;
pub(crate) mod gallery;
pub(crate) mod overlay;
pub(crate) mod search_bar;

pub(crate) use footer::FooterComponent;
pub(crate) use gallery::GalleryComponent;
pub(crate) use overlay::OverlayComponent;
pub(crate) use search_bar::SearchBarComponent;
