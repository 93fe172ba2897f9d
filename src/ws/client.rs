//! WebSocket transport driver for the viewer.
//!
//! Opens one connection in binary mode and feeds its traffic into a
//! [`SocketEvents`] subscriber, one event at a time, in arrival order.
//! There is no reconnection: when the connection ends, so does the driver.

use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::error::ViewerError;
use crate::renderer::{CloseEvent, ErrorEvent, NO_STATUS_RECEIVED, SocketEvents};

/// Client-side WebSocket stream.
pub type ClientStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Performs the WebSocket handshake against `url`.
///
/// # Errors
///
/// Returns [`ViewerError::Transport`] if the URL is invalid, the TCP
/// connection fails, or the server rejects the upgrade.
pub async fn connect(url: &str) -> Result<ClientStream, ViewerError> {
    let (stream, response) = connect_async(url).await?;
    tracing::debug!(url, status = %response.status(), "websocket handshake complete");
    Ok(stream)
}

/// Runs a single connection to `url` until it terminates.
///
/// Event order follows a browser socket: `on_open`, any number of
/// `on_message`, then `on_close`. A failure (including a failed connect)
/// fires `on_error` right before `on_close`. Returns the close event that
/// was delivered.
pub async fn run_connection<E: SocketEvents>(url: &str, events: &mut E) -> CloseEvent {
    let mut stream = match connect(url).await {
        Ok(stream) => stream,
        Err(e) => {
            events.on_error(&ErrorEvent::from_error(&e));
            let close = CloseEvent::abnormal();
            events.on_close(&close);
            return close;
        }
    };

    events.on_open(url);

    let close = loop {
        match stream.next().await {
            Some(Ok(Message::Binary(frame))) => events.on_message(frame),
            Some(Ok(Message::Text(text))) => {
                tracing::debug!(len = text.len(), "ignoring text message on binary stream");
            }
            Some(Ok(Message::Close(frame))) => {
                break match frame {
                    Some(frame) => CloseEvent::clean(u16::from(frame.code), frame.reason.as_str()),
                    None => CloseEvent::clean(NO_STATUS_RECEIVED, ""),
                };
            }
            // ping/pong are answered by the transport
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                events.on_error(&ErrorEvent::from_error(&ViewerError::from(e)));
                break CloseEvent::abnormal();
            }
            None => break CloseEvent::abnormal(),
        }
    };

    if close.was_clean
        && let Err(e) = stream.close(None).await
    {
        tracing::debug!(error = %e, "close handshake not completed");
    }

    events.on_close(&close);
    close
}
