use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

use crate::{
    foundation::{
        core::{ElementBounds, Viewport},
        error::{ScrollError, ScrollResult},
    },
    scene::{
        config::SceneConfig,
        engine::SceneEngine,
        presets,
        render::{RenderedScene, SceneRenderer},
    },
    state::{
        gallery::{
            GalleryConfig, GalleryReveal, GalleryTimer, RevealState, RevealTrigger, TimerRequest,
            Transition,
        },
        lifecycle::{DeviceClass, LifecycleSignal, RecoveryAction, recovery_for},
        zoom::{ZoomChannel, ZoomReader, ZoomWriter},
    },
    tracker::{
        listeners::{ListenerGuard, ListenerRegistry},
        scroll::{ScrollEvent, ScrollProgressTracker},
        smoothing::{FrameHandle, FrameLoop, FrameScheduler, ManualFrames, Smoother},
    },
};

/// Damping used when the site config does not set one.
pub const DEFAULT_ZOOM_DAMPING: f64 = 0.18;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SiteConfig {
    pub sections: Vec<SectionSpec>,
    /// Scene whose (smoothed) progress drives the page-wide zoom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_scene: Option<String>,
    #[serde(default = "default_zoom_damping")]
    pub zoom_damping: f64,
    /// Scene whose progress opens the staged gallery reveal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_scene: Option<String>,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

fn default_zoom_damping() -> f64 {
    DEFAULT_ZOOM_DAMPING
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionSpec {
    /// Section height in viewport heights.
    pub height_vh: f64,
    pub scene: SceneConfig,
}

impl SiteConfig {
    /// The roofing site: hero, house build-out, door, sunset, gallery.
    pub fn builtin() -> ScrollResult<Self> {
        let heights = [1.5, 4.0, 3.0, 4.0, 3.0];
        let sections = presets::all()?
            .into_iter()
            .zip(heights)
            .map(|(scene, height_vh)| SectionSpec { height_vh, scene })
            .collect();
        Ok(Self {
            sections,
            zoom_scene: Some(presets::DOOR.to_string()),
            zoom_damping: DEFAULT_ZOOM_DAMPING,
            gallery_scene: Some(presets::GALLERY.to_string()),
            gallery: GalleryConfig::default(),
        })
    }

    pub fn validate(&self) -> ScrollResult<()> {
        if self.sections.is_empty() {
            return Err(ScrollError::validation("site must have at least one section"));
        }
        let mut names = BTreeSet::new();
        for s in &self.sections {
            s.scene.validate()?;
            if !s.height_vh.is_finite() || s.height_vh <= 0.0 {
                return Err(ScrollError::validation(format!(
                    "section '{}' height_vh must be finite and > 0",
                    s.scene.name
                )));
            }
            if !names.insert(s.scene.name.as_str()) {
                return Err(ScrollError::validation(format!(
                    "duplicate section '{}'",
                    s.scene.name
                )));
            }
        }
        for (what, name) in [("zoom", &self.zoom_scene), ("gallery", &self.gallery_scene)] {
            if let Some(name) = name {
                if !names.contains(name.as_str()) {
                    return Err(ScrollError::validation(format!(
                        "{what}_scene '{name}' is not a section"
                    )));
                }
            }
        }
        self.gallery.validate()?;
        Smoother::new(self.zoom_damping)?;
        Ok(())
    }

    pub fn scene(&self, name: &str) -> Option<&SceneConfig> {
        self.sections
            .iter()
            .map(|s| &s.scene)
            .find(|s| s.name == name)
    }

    /// Document-space `(top, height)` of each section for `viewport`, top to bottom.
    pub fn layout(&self, viewport: Viewport) -> Vec<(f64, f64)> {
        let mut top = 0.0;
        self.sections
            .iter()
            .map(|s| {
                let h = s.height_vh * viewport.height;
                let out = (top, h);
                top += h;
                out
            })
            .collect()
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PageFrame {
    pub scroll_y: f64,
    pub viewport: Viewport,
    pub device: DeviceClass,
    pub zoom: f64,
    pub nav_opacity: f64,
    /// `false` while zoom smoothing still has a frame pending.
    pub zoom_settled: bool,
    pub gallery: RevealState,
    /// Timers requested during this frame; the host reports them back via
    /// [`Site::timer_elapsed`].
    pub timers: Vec<TimerRequest>,
    pub sections: Vec<SectionFrame>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SectionFrame {
    pub progress: f64,
    pub active: bool,
    pub rendered: RenderedScene,
}

/// The whole page: one tracker per section, the zoom writer with its smoothing loop, and the
/// gallery reveal.
///
/// Zoom smoothing runs on its own frames through `S`: [`Site::frame`] only retargets it, and
/// the host feeds every fired request back through [`Site::animation_frame`]. Dropping the
/// site cancels the outstanding request.
pub struct Site<S: FrameScheduler = ManualFrames> {
    config: SiteConfig,
    trackers: Vec<ScrollProgressTracker>,
    zoom: ZoomWriter,
    zoom_reader: ZoomReader,
    zoom_loop: FrameLoop<S>,
    scheduler: Rc<S>,
    gallery: GalleryReveal,
    last_input: Option<(f64, Viewport)>,
}

impl Site<ManualFrames> {
    /// A site driven by an in-process frame queue (headless hosts, the CLI).
    pub fn new(config: SiteConfig) -> ScrollResult<Self> {
        Self::with_scheduler(config, Rc::new(ManualFrames::new()))
    }

    /// Fire queued smoothing frames until the zoom settles; returns how many fired.
    pub fn run_pending_frames(&mut self) -> usize {
        let mut fired = 0;
        while let Some(handle) = self.scheduler.fire_next() {
            self.animation_frame(handle);
            fired += 1;
        }
        fired
    }

    /// [`Site::frame`] followed by [`Site::run_pending_frames`], reporting the settled zoom.
    pub fn frame_settled(
        &mut self,
        scroll_y: f64,
        viewport: Viewport,
    ) -> ScrollResult<PageFrame> {
        let mut frame = self.frame(scroll_y, viewport)?;
        if self.run_pending_frames() > 0 {
            frame.zoom = self.zoom_reader.get();
            frame.nav_opacity = self.zoom_reader.nav_opacity();
            frame.zoom_settled = self.zoom_loop.is_settled();
        }
        Ok(frame)
    }
}

impl<S: FrameScheduler> Site<S> {
    pub fn with_scheduler(config: SiteConfig, scheduler: Rc<S>) -> ScrollResult<Self> {
        config.validate()?;
        let (zoom, zoom_reader) = ZoomChannel::new();
        let smoother = Smoother::new(config.zoom_damping)?;
        Ok(Self {
            trackers: vec![ScrollProgressTracker::new(); config.sections.len()],
            zoom_loop: FrameLoop::new(smoother, Rc::clone(&scheduler)),
            scheduler,
            gallery: GalleryReveal::new(config.gallery)?,
            zoom,
            zoom_reader,
            last_input: None,
            config,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn zoom_reader(&self) -> ZoomReader {
        self.zoom_reader.clone()
    }

    pub fn gallery_state(&self) -> RevealState {
        self.gallery.state()
    }

    /// Whether zoom smoothing is waiting on a requested frame.
    pub fn needs_frame(&self) -> bool {
        self.zoom_loop.pending().is_some()
    }

    /// Host callback for a fired frame request; advances zoom smoothing one step and
    /// publishes the result. Returns the zoom progress.
    pub fn animation_frame(&mut self, handle: FrameHandle) -> f64 {
        let v = self.zoom_loop.on_frame(handle);
        self.zoom.set(v);
        v
    }

    pub fn notify(&mut self, event: ScrollEvent) {
        for t in &mut self.trackers {
            t.notify(event);
        }
    }

    /// Forward window scroll/resize events to `site` for as long as the guard lives.
    pub fn attach(site: &Rc<RefCell<Self>>, registry: &ListenerRegistry) -> ListenerGuard
    where
        S: 'static,
    {
        let weak = Rc::downgrade(site);
        registry.subscribe(move |event| {
            if let Some(site) = weak.upgrade() {
                if let Ok(mut site) = site.try_borrow_mut() {
                    site.notify(event);
                }
            }
        })
    }

    /// Evaluate one animation frame at document scroll offset `scroll_y`.
    #[tracing::instrument(skip(self))]
    pub fn frame(&mut self, scroll_y: f64, viewport: Viewport) -> ScrollResult<PageFrame> {
        if let Some((y, v)) = self.last_input {
            if v != viewport {
                self.notify(ScrollEvent::Resize(viewport));
            } else if y != scroll_y {
                self.notify(ScrollEvent::Scroll { y: scroll_y });
            }
        }
        self.last_input = Some((scroll_y, viewport));

        let layout = self.config.layout(viewport);
        let mut sections = Vec::with_capacity(self.config.sections.len());
        let mut timers = Vec::new();

        for ((section, tracker), (top, height)) in self
            .config
            .sections
            .iter()
            .zip(self.trackers.iter_mut())
            .zip(layout)
        {
            let progress = tracker.on_frame(|| {
                (Some(ElementBounds::new(top - scroll_y, height)), viewport)
            });
            let scene = &section.scene;

            if self.config.zoom_scene.as_deref() == Some(scene.name.as_str()) {
                self.zoom_loop.set_target(progress);
            }
            if self.config.gallery_scene.as_deref() == Some(scene.name.as_str()) {
                if let Transition::Advanced {
                    schedule: Some(req),
                    ..
                } = self.gallery.observe_progress(progress)
                {
                    timers.push(req);
                }
            }

            let evaluated = SceneEngine::eval_unchecked(scene, progress)?;
            sections.push(SectionFrame {
                progress,
                active: evaluated.active,
                rendered: SceneRenderer::render(&evaluated),
            });
        }

        Ok(PageFrame {
            scroll_y,
            viewport,
            device: DeviceClass::for_viewport(viewport),
            zoom: self.zoom_reader.get(),
            nav_opacity: self.zoom_reader.nav_opacity(),
            zoom_settled: self.zoom_loop.is_settled(),
            gallery: self.gallery.state(),
            timers,
            sections,
        })
    }

    /// Deliver a fired gallery timer; returns the follow-up timer to schedule, if any.
    pub fn timer_elapsed(&mut self, timer: GalleryTimer) -> Option<TimerRequest> {
        match self.gallery.handle(RevealTrigger::TimerElapsed(timer)) {
            Transition::Advanced { schedule, .. } => schedule,
            Transition::Ignored => None,
        }
    }

    /// React to a page lifecycle signal. On `SoftReset` the caller scrolls to the top; on
    /// `FullReload` it rebuilds the document (and this site).
    pub fn lifecycle(&mut self, signal: LifecycleSignal, viewport: Viewport) -> RecoveryAction {
        let action = recovery_for(signal, DeviceClass::for_viewport(viewport));
        if action == RecoveryAction::SoftReset {
            for t in &mut self.trackers {
                t.reset();
            }
            self.zoom_loop.reset(0.0);
            self.zoom.reset();
            self.last_input = None;
        }
        action
    }
}

#[cfg(test)]
#[path = "../tests/unit/site.rs"]
mod tests;
