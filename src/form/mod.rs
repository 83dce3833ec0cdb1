mod command;
mod session;
mod ui;

pub use session::FormSession;
