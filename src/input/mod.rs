pub mod dispatcher;
pub mod events;

pub use dispatcher::Dispatcher;
pub use events::{pointer_to_local, resolve_target, EventTarget, PointerSnapshot};
