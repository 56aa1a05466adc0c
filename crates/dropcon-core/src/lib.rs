//! dropcon-core: the console interaction engine.
//!
//! An embeddable developer console for real-time applications. The engine
//! composes line editing, command tokenization and dispatch, scrollback
//! windowing, and the open/close slide animation behind [`ConsoleEngine`].
//!
//! Rendering and raw input decoding stay on the host side: the host
//! translates its platform events into `ConsoleEvent` values, calls
//! `advance()` once per frame, and paints the panel from the engine's
//! read-only accessors. The engine never draws and never parses platform
//! event structures.
//!
//! Everything is single-threaded and synchronous. Command handlers run
//! inline inside `dispatch`; a long-running handler stalls the host loop,
//! and a panicking handler propagates to the host -- the engine does not
//! catch it, though its own state stays consistent because submission
//! bookkeeping happens before dispatch.

pub mod editor;
pub mod engine;
pub mod registry;
pub mod scrollback;
pub mod tokenizer;
pub mod visibility;

pub use editor::{InputLine, Submission};
pub use engine::ConsoleEngine;
pub use registry::{CommandHandler, CommandRegistry};
pub use scrollback::Scrollback;
pub use tokenizer::tokenize;
pub use visibility::Visibility;
