/// Toolbar click handling: one click, one ticket report
use crate::config::HandlerConfig;
use crate::error::TransportFailure;
use crate::report::TicketReport;
use crate::sink::{send_failure_message, server_response_message, Sink};
use crate::transport::{Delivery, Transport};
use futures::future::{AbortHandle, Abortable, LocalBoxFuture};
use futures::FutureExt;
use std::rc::Rc;
use uuid::Uuid;

/// Handle to a single in-flight ticket report
#[derive(Debug, Clone)]
pub struct InFlight {
    id: Uuid,
    abort: AbortHandle,
}

impl InFlight {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Drop the request. Neither the response nor a failure is logged afterwards.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Reacts to the extension's action click by posting the fixed ticket report.
///
/// Every activation is independent: there is no deduplication, no queueing
/// and no state shared between requests beyond the read-only config.
pub struct ClickHandler<T, S> {
    config: Rc<HandlerConfig>,
    transport: Rc<T>,
    sink: Rc<S>,
}

impl<T, S> Clone for ClickHandler<T, S> {
    fn clone(&self) -> Self {
        ClickHandler {
            config: Rc::clone(&self.config),
            transport: Rc::clone(&self.transport),
            sink: Rc::clone(&self.sink),
        }
    }
}

impl<T, S> ClickHandler<T, S>
where
    T: Transport + 'static,
    S: Sink + 'static,
{
    pub fn new(config: HandlerConfig, transport: T, sink: S) -> ClickHandler<T, S> {
        ClickHandler {
            config: Rc::new(config),
            transport: Rc::new(transport),
            sink: Rc::new(sink),
        }
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Post the report and log the outcome. Failures stop here.
    pub async fn send_report(&self) {
        match self.deliver().await {
            Ok(delivery) => {
                log::debug!("ticket endpoint answered with status {}", delivery.status);
                self.sink.info(&server_response_message(&delivery.body));
            }
            Err(e) => {
                self.sink.error(&send_failure_message(&e));
            }
        }
    }

    async fn deliver(&self) -> Result<Delivery, TransportFailure> {
        let body = TicketReport::fixed().to_json()?;
        self.transport.post_json(&self.config.endpoint, body).await
    }

    /// Build the task for one activation without starting it.
    pub fn prepare(&self) -> (InFlight, LocalBoxFuture<'static, ()>) {
        let (abort, registration) = AbortHandle::new_pair();
        let in_flight = InFlight {
            id: Uuid::new_v4(),
            abort,
        };

        let handler = self.clone();
        let id = in_flight.id;
        let task = async move {
            log::debug!("sending ticket report {}", id);
            if Abortable::new(handler.send_report(), registration)
                .await
                .is_err()
            {
                log::debug!("ticket report {} cancelled", id);
            }
        };

        (in_flight, task.boxed_local())
    }

    /// Entry point for the host: start the request and return immediately.
    #[cfg(target_arch = "wasm32")]
    pub fn on_activate(&self) -> InFlight {
        let (in_flight, task) = self.prepare();
        wasm_bindgen_futures::spawn_local(task);
        in_flight
    }
}
