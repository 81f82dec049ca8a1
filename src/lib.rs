//! menukit: keyboard-navigable terminal menus.
//!
//! A menu is a [`Ui`] holding named [`Page`]s of styled, selectable
//! [`Element`]s, each optionally bound to a command with arguments. The
//! interaction loop renders the current page, reads one input token
//! through the pluggable [`Console`] boundary, interprets it as page
//! navigation or element selection, dispatches bound commands, and
//! repeats until the process is terminated.

pub mod console;
pub mod element;
pub mod error;
pub mod page;
pub mod style;
pub mod ui;

pub use console::{Console, StdConsole};
pub use element::{Args, Command, CommandError, Element};
pub use error::MenuError;
pub use page::Page;
pub use style::Style;
pub use ui::Ui;
