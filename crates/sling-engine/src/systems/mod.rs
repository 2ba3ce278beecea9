pub mod button;
pub mod collision;
pub mod pause;
pub mod slingshot;

pub use button::{ButtonPhase, ButtonVisual, Rect, RestartButton};
pub use collision::resolve_collisions;
pub use pause::{PauseController, PauseEdge};
pub use slingshot::{SlingPhase, Slingshot};
