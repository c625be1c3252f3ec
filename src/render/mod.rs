mod clipboard;
mod page;
mod view;

pub use clipboard::{BrowserClipboard, Clipboard};
pub use page::render_page;
pub use view::{ResultView, ViewMode};
