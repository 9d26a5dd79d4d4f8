use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app::AppState;
use super::components::{
    Component, FooterComponent, GalleryComponent, OverlayComponent, SearchBarComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let main_chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .split(f.area());

    SearchBarComponent.render(f, main_chunks[0], state);
    GalleryComponent.render(f, main_chunks[1], state);
    FooterComponent.render(f, main_chunks[2], state);

    // The overlay draws last, over everything else.
    if state.overlay_open() {
        OverlayComponent.render(f, f.area(), state);
    }
}
