mod chrome;
mod chrome_finder;
mod driver;
mod error;
mod launcher;
pub mod selectors;
mod session;

pub use chrome::ChromeDriver;
pub use chrome_finder::ChromeFinder;
pub use driver::{BrowserDriver, WAIT_POLL_INTERVAL};
pub use error::{Error, Result};
pub use launcher::ChromeLauncher;
pub use session::BookingSession;
