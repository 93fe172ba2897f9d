//! Socket frame renderer: event interface, rendering context and the
//! shared handle used by the status API.

pub mod events;
pub mod frame_renderer;
pub mod shared;

pub use events::{
    ABNORMAL_CLOSURE, CloseEvent, ErrorEvent, NO_STATUS_RECEIVED, NORMAL_CLOSURE, SocketEvents,
};
pub use frame_renderer::{ConnectionState, FrameRenderer, RenderStats};
pub use shared::SharedRenderer;
