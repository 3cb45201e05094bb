/// Glue between the extension's service worker script and the click handler
use crate::config::HandlerConfig;
use crate::handler::{ClickHandler, InFlight};
use crate::sink::{ConsoleSink, Sink};
use crate::transport::{HttpTransport, Transport};
use std::cell::RefCell;

type Activate = Box<dyn Fn() -> InFlight>;

thread_local! {
    static ACTIVATE: RefCell<Option<Activate>> = const { RefCell::new(None) };
}

fn ticket_server() -> Activate {
    let handler = ClickHandler::new(HandlerConfig::default(), HttpTransport::new(), ConsoleSink);
    Box::new(move || handler.on_activate())
}

/// Route toolbar clicks to `handler` instead of the ticket server default.
pub fn install<T, S>(handler: ClickHandler<T, S>)
where
    T: Transport + 'static,
    S: Sink + 'static,
{
    ACTIVATE.with(|slot| {
        *slot.borrow_mut() = Some(Box::new(move || handler.on_activate()));
    });
}

/// One toolbar click: start a ticket report and return without waiting for it.
pub fn toolbar_click() -> InFlight {
    ACTIVATE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let activate = slot.get_or_insert_with(ticket_server);
        let in_flight = activate();
        log::debug!("toolbar click -> ticket report {}", in_flight.id());
        in_flight
    })
}
