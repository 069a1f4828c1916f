/// One browser pane: path bar, up button and folder contents
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Theme};

use crate::state::archiver::Pane;
use crate::state::browser::DirectoryBrowser;
use crate::state::data::DirEntry;
use crate::Message;

/// Height of the contents list
const CONTENTS_HEIGHT: f32 = 180.0;

pub fn view<'a>(pane: Pane, browser: &'a DirectoryBrowser, selected: Option<&str>) -> Element<'a, Message> {
    let title = match pane {
        Pane::Source => "Source Folder:",
        Pane::Destination => "Destination Folder:",
    };

    let path_bar = row![
        container(text(browser.current_path().display().to_string()).size(13))
            .padding(6)
            .width(Length::Fill)
            .style(container::bordered_box),
        button(text("Up").size(13))
            .on_press(Message::Ascend(pane))
            .padding([6, 10]),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let contents = Column::with_children(
        browser
            .entries()
            .iter()
            .map(|entry| entry_row(pane, entry, selected == Some(entry.name.as_str()))),
    )
    .spacing(1);

    column![
        text(title).size(14),
        path_bar,
        text("Contents:").size(14),
        container(scrollable(contents).height(Length::Fixed(CONTENTS_HEIGHT)))
            .padding(4)
            .width(Length::Fill)
            .style(container::bordered_box),
    ]
    .spacing(6)
    .width(Length::FillPortion(1))
    .into()
}

fn entry_row<'a>(pane: Pane, entry: &DirEntry, is_selected: bool) -> Element<'a, Message> {
    // Folders get a trailing slash so they stand out from files
    let label = if entry.is_dir {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    };

    let style: fn(&Theme, button::Status) -> button::Style = if is_selected {
        button::primary
    } else {
        button::text
    };

    button(text(label).size(13))
        .on_press(Message::EntryPressed(pane, entry.name.clone()))
        .style(style)
        .width(Length::Fill)
        .padding([2, 6])
        .into()
}
