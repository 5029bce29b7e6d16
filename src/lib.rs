//! Scrollscape is a headless model of scroll-driven page choreography.
//!
//! A page is a stack of full-viewport sections. Each section's scene is a declarative timing
//! table; every visual parameter is a pure function of one scalar, the section's scroll
//! progress.
//!
//! # Pipeline overview
//!
//! 1. **Track**: `ElementBounds + Viewport -> progress` in `[0, 1]` ([`ScrollProgressTracker`])
//! 2. **Segment**: `progress -> local progress` per [`TimelineWindow`], optionally staggered
//! 3. **Ease + interpolate**: `local -> value` through an [`Ease`] and a [`Profile`]
//! 4. **Render**: `EvaluatedScene -> RenderedScene` (CSS declarations per element)
//!
//! [`Site`] runs the whole page per animation frame and owns the two pieces of state that
//! outlive a frame: the page-wide zoom progress ([`ZoomChannel`]) and the staged gallery
//! reveal ([`GalleryReveal`]).
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod interp;
mod scene;
mod site;
mod state;
mod timeline;
mod tracker;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use animation::stops::{InterpMode, Stop, Stops};
pub use foundation::core::{ElementBounds, Transform2D, Vec2, Viewport};
pub use foundation::error::{ScrollError, ScrollResult};
pub use foundation::math::clamp01;
pub use interp::color::{Hsl, Rgba8};
pub use interp::envelope::{Envelope, envelope};
pub use interp::param::ParamRange;
pub use scene::config::{ElementSpec, Profile, Property, SceneConfig, Track, ValueKind};
pub use scene::engine::{EvaluatedElement, EvaluatedScene, SceneEngine, VisualState};
pub use scene::presets;
pub use scene::render::{RenderedNode, RenderedScene, SceneRenderer, style_for};
pub use site::{DEFAULT_ZOOM_DAMPING, PageFrame, SectionFrame, SectionSpec, Site, SiteConfig};
pub use state::gallery::{
    GalleryConfig, GalleryReveal, GalleryTimer, RevealState, RevealTrigger, TimerRequest,
    Transition,
};
pub use state::lifecycle::{
    DeviceClass, LifecycleSignal, MOBILE_BREAKPOINT_PX, RecoveryAction, recovery_for,
};
pub use state::zoom::{ZoomChannel, ZoomReader, ZoomSubscription, ZoomWriter};
pub use timeline::stagger::Stagger;
pub use timeline::window::{Timeline, TimelineWindow, local_progress, segment};
pub use tracker::listeners::{ListenerGuard, ListenerId, ListenerRegistry};
pub use tracker::scroll::{ScrollEvent, ScrollProgressTracker, scroll_progress};
pub use tracker::smoothing::{FrameHandle, FrameLoop, FrameScheduler, ManualFrames, Smoother};
