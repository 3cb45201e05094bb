/// Ticket Reporter - Chrome Extension that files a ticket from the toolbar
/// Built with Rust + WASM

pub mod config;
pub mod error;
pub mod handler;
pub mod report;
pub mod sink;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub mod host;

pub use config::HandlerConfig;
pub use error::TransportFailure;
pub use handler::{ClickHandler, InFlight};
pub use report::TicketReport;
pub use sink::{ConsoleSink, Sink};
pub use transport::{Delivery, HttpTransport, Transport};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Called by the worker's chrome.action.onClicked listener (extension/toolbar.js)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn on_toolbar_click() {
    host::toolbar_click();
}
