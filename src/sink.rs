/// Where the outcome of each ticket report is written
pub trait Sink {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes through the `log` facade; `wasm-logger` sends it to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

pub fn server_response_message(body: &str) -> String {
    format!("Respuesta del servidor: {}", body)
}

pub fn send_failure_message(error: &dyn std::fmt::Display) -> String {
    format!("Error al enviar el ticket: {}", error)
}
