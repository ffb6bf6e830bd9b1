use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, ErrorEvent, Event, MessageEvent, WebSocket};

use crate::core::error::PushError;
use crate::core::models::PushMessage;

pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred with the WebSocket connection";

#[derive(Debug, Clone, PartialEq)]
pub enum PushSignal {
    Opened,
    Message(PushMessage),
    Error(String),
    Closed,
}

/// Open WebSocket plus the handlers wired to it. Dropping the channel
/// detaches the handlers and closes the socket without reporting a close.
pub struct PushChannel {
    socket: WebSocket,
    closing: Rc<Cell<bool>>,
    _on_open: Closure<dyn FnMut(Event)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl PushChannel {
    pub fn connect(url: &str, on_signal: impl Fn(PushSignal) + 'static) -> Result<Self, PushError> {
        let socket = WebSocket::new(url).map_err(|e| PushError::Open(format!("{:?}", e)))?;
        let closing = Rc::new(Cell::new(false));
        let on_signal: Rc<dyn Fn(PushSignal)> = Rc::new(on_signal);

        let handler = on_signal.clone();
        let on_open = Closure::wrap(Box::new(move |_e: Event| {
            tracing::info!("push channel opened");
            handler(PushSignal::Opened);
        }) as Box<dyn FnMut(Event)>);
        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let handler = on_signal.clone();
        let on_message = Closure::wrap(Box::new(move |e: MessageEvent| {
            let Some(text) = e.data().as_string() else {
                tracing::warn!("ignoring non-text push frame");
                return;
            };
            match PushMessage::parse(&text) {
                Ok(message) => {
                    tracing::debug!("push message: {}", text);
                    handler(PushSignal::Message(message));
                }
                Err(err) => tracing::error!("error parsing push message: {}", err),
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        // Browsers usually fire a plain Event here; only ErrorEvent carries a message
        let handler = on_signal.clone();
        let on_error = Closure::wrap(Box::new(move |e: Event| {
            let message = e
                .dyn_ref::<ErrorEvent>()
                .map(ErrorEvent::message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            tracing::error!("push channel error: {}", message);
            handler(PushSignal::Error(message));
        }) as Box<dyn FnMut(Event)>);
        socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        let handler = on_signal;
        let closing_for_close = closing.clone();
        let on_close = Closure::wrap(Box::new(move |e: CloseEvent| {
            if closing_for_close.get() {
                return;
            }
            tracing::warn!("push channel closed (code {})", e.code());
            handler(PushSignal::Closed);
        }) as Box<dyn FnMut(CloseEvent)>);
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Ok(Self {
            socket,
            closing,
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        })
    }

    pub fn url(&self) -> String {
        self.socket.url()
    }
}

impl Drop for PushChannel {
    fn drop(&mut self) {
        self.closing.set(true);
        self.socket.set_onopen(None);
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        self.socket.set_onclose(None);
        if let Err(err) = self.socket.close() {
            tracing::warn!("failed to close push channel: {:?}", err);
        }
        tracing::info!("push channel released");
    }
}

/// Origin of the current page, used to resolve relative push URLs.
pub fn page_origin() -> Result<String, PushError> {
    let window = web_sys::window().ok_or(PushError::NoWindow)?;
    window
        .location()
        .origin()
        .map_err(|e| PushError::Open(format!("{:?}", e)))
}
