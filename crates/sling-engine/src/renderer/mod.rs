pub mod frame;

pub use frame::{
    ButtonFrame, HintFrame, HudFrame, MessageFrame, PlayfieldFrame, ProjectileFrame, RenderFrame, SlingBands,
    SlingFrame, TickOutput, TransitionFrame,
};
