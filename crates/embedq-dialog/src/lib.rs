mod dialog;
mod host;
mod plugin;
mod service;

pub use crate::dialog::*;
pub use crate::host::*;
pub use crate::plugin::*;
pub use crate::service::*;
