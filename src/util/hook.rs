use tracing::error;

use crate::ui::tui::Tui;

/// Puts the terminal back before the default hook prints, and records the
/// panic in the log file since the screen is gone by the time anyone looks.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Err(e) = Tui::restore() {
            eprintln!("failed to restore terminal: {e}");
        }
        error!("{}", info);
        hook(info);
    }));
}
