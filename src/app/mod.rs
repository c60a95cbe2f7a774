// Presentation adapter: rendering, prompts, timed reveal and exports around the pure core.

pub mod export;
pub mod i18n;
pub mod reveal;

pub use i18n::Language;
pub use reveal::{DrawFlow, FixedAnswer, RevealLoop, StdinConfirm, TerminalRenderer};
