pub mod level;
pub mod playfield;
pub mod projectile;
pub mod target;

pub use level::{LevelManager, TransitionDirection, TransitionState};
pub use playfield::Playfield;
pub use projectile::Projectile;
pub use target::Target;
