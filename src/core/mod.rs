pub mod draw;
pub mod registry;
pub mod session;

pub use crate::domain::model::{Assignment, Couple, Pair};
pub use crate::domain::ports::{ConfigProvider, Confirm, ForbiddenPairs, Renderer, Storage};
pub use crate::utils::error::{DrawError, Result};
pub use draw::DrawEngine;
pub use registry::ConstraintRegistry;
pub use session::{DrawPhase, Session, Step};
