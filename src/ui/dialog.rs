/// Native message dialogs
///
/// These block the UI thread until the user answers, same as the rest of
/// the event handling.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::error::ArchiveError;

/// Show an error as a warning dialog
pub fn warning(error: &ArchiveError) {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(error.title())
        .set_description(error.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn info(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Ask an Ok/Cancel question; true if the user accepted
pub fn confirm(title: &str, description: &str) -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::OkCancel)
        .show();

    // Some backends report the affirmative button as Yes
    matches!(answer, MessageDialogResult::Ok | MessageDialogResult::Yes)
}
