pub mod blur;
pub mod carousel;
pub mod constants;
pub mod drag;
pub mod ease;
pub mod entrance;
pub mod geometry;
pub mod nudge;
pub mod spin;
pub mod trigger;
pub mod tuning;
pub mod tween;
pub mod velocity;

pub use carousel::{Carousel, CarouselParams};
pub use drag::DragPhase;
pub use entrance::WrapPose;
pub use tuning::{ThrowResume, Tuning};
