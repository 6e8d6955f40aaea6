// SPDX-License-Identifier: MPL-2.0
//! Hover zoom component: load detection, ready transition, pointer
//! tracking and the animation tick.
//!
//! The widget goes through three phases:
//!
//! ```text
//! Loading ──(image complete)──▶ Ready ──(dispose)──▶ Disposed
//! ```
//!
//! `Loading` never resumes once left. While `Ready`, the image alternates
//! between the centered fit pose and the zoomed pose under the pointer.

use super::container::Container;
use super::options::{LoadDetection, Options, StopRule};
use super::schedule::{Scheduler, TimerHandle, TimerSlot};
use crate::config::defaults::LOAD_POLL_INTERVAL_MS;
use crate::domain::zoom::{Fit, IncrementCount, Pose, StepDelay, TargetPose, TargetSize};
use crate::error::Result;
use crate::media::ImageData;
use crate::ui::widgets::ZoomFrame;
use iced::widget::{container, text, Stack};
use iced::{time, Background, Color, Element, Length, Point, Subscription, Theme};
use std::time::Duration;

/// Messages for the hover zoom component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Load-detection poll fired.
    PollTick,
    /// The host finished decoding the container's image.
    ImageLoaded,
    /// Pointer entered the container.
    PointerEntered { position: Point, origin: Point },
    /// Pointer moved inside the container.
    PointerMoved { position: Point, origin: Point },
    /// Pointer left the container.
    PointerExited,
    /// Animation tick fired.
    Tick,
    /// Stop every timer and release the image.
    Dispose,
}

/// Effects produced by the hover zoom component.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The image completed loading and was scaled to fit.
    Ready { scale: f64 },
    /// A (re)started animation tick is now running.
    AnimationStarted,
    /// The animation tick cancelled itself.
    AnimationStopped,
    /// The widget was disposed.
    Disposed,
}

/// Presentation written onto the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decor {
    pub width: u32,
    pub height: u32,
    /// Overflow is clipped to the container box.
    pub clip: bool,
    /// Transient label shown until the image is ready.
    pub loading_label: Option<String>,
    /// Loading indicator styling.
    pub loading_class: bool,
}

/// Which repeating activity a timer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TimerKind {
    Poll,
    Tick,
}

/// A repeating timer the widget currently needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Timer {
    pub handle: TimerHandle,
    pub period: Duration,
    pub kind: TimerKind,
}

#[derive(Debug, Clone)]
struct Stage {
    image: ImageData,
    fit: Fit,
    pose: Pose,
    increments: IncrementCount,
    delay: StepDelay,
}

#[derive(Debug, Clone)]
enum Phase {
    Loading,
    Ready(Stage),
    Disposed,
}

/// Hover zoom widget state.
#[derive(Debug, Clone)]
pub struct State {
    container: Option<Container>,
    options: Options,
    target: TargetSize,
    decor: Decor,
    phase: Phase,
    /// Last pointer position in window space.
    pointer: Point,
    /// Container top-left in window space.
    origin: Point,
    hovering: bool,
    scheduler: Scheduler,
    poll: TimerSlot,
    tick: TimerSlot,
}

impl State {
    /// Constructs the widget on `container` and starts load detection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`](crate::error::Error::InvalidOptions)
    /// when the target size is not strictly positive.
    pub fn new(container: Container, options: Options) -> Result<Self> {
        let target = options.target_size()?;
        let decor = Decor {
            width: target.width(),
            height: target.height(),
            clip: true,
            loading_label: Some(options.loading_message().to_string()),
            loading_class: true,
        };

        let mut state = Self {
            container: Some(container),
            options,
            target,
            decor,
            phase: Phase::Loading,
            pointer: Point::ORIGIN,
            origin: Point::ORIGIN,
            hovering: false,
            scheduler: Scheduler::default(),
            poll: TimerSlot::default(),
            tick: TimerSlot::default(),
        };

        if state.options.load_detection == LoadDetection::Poll {
            state.poll.start(&mut state.scheduler);
        }

        log::debug!(
            "hover zoom '{}' constructed ({}x{}, {:?})",
            state.container_id().unwrap_or_default(),
            target.width(),
            target.height(),
            state.options.load_detection
        );

        Ok(state)
    }

    /// Handle a hover zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        if matches!(self.phase, Phase::Disposed) {
            return Effect::None;
        }

        match msg {
            Message::PollTick => {
                if !self.poll.is_active() {
                    return Effect::None;
                }
                self.detect_load()
            }
            Message::ImageLoaded => {
                if self.options.load_detection != LoadDetection::Notify {
                    return Effect::None;
                }
                self.detect_load()
            }
            Message::PointerMoved { position, origin } => {
                if self.is_ready() {
                    self.pointer = position;
                    self.origin = origin;
                }
                Effect::None
            }
            Message::PointerEntered { position, origin } => {
                if !self.is_ready() {
                    return Effect::None;
                }
                self.pointer = position;
                self.origin = origin;
                self.hovering = true;
                self.tick.start(&mut self.scheduler);
                Effect::AnimationStarted
            }
            Message::PointerExited => {
                if self.is_ready() {
                    self.hovering = false;
                }
                Effect::None
            }
            Message::Tick => self.animate(),
            Message::Dispose => self.dispose(),
        }
    }

    /// Inspects the container's image and runs the ready transition once it
    /// has completed.
    fn detect_load(&mut self) -> Effect {
        if !matches!(self.phase, Phase::Loading) {
            return Effect::None;
        }
        let Some(image) = self
            .container
            .as_ref()
            .and_then(|container| container.image().get())
            .cloned()
        else {
            return Effect::None;
        };

        self.poll.cancel();
        self.ready(image)
    }

    fn ready(&mut self, image: ImageData) -> Effect {
        let increments = self.options.increment_count();
        let delay = self.options.step_delay();

        let fit = Fit::compute(image.natural_size(), self.target);
        let pose = fit.pose();

        self.phase = Phase::Ready(Stage {
            image,
            fit,
            pose,
            increments,
            delay,
        });

        self.decor.loading_class = false;
        self.decor.loading_label = None;

        log::debug!(
            "hover zoom '{}' ready: scale {:.4}, fit {}x{} at ({}, {})",
            self.container_id().unwrap_or_default(),
            fit.scale,
            fit.width,
            fit.height,
            fit.center.x,
            fit.center.y
        );

        Effect::Ready { scale: fit.scale }
    }

    fn animate(&mut self) -> Effect {
        if !self.tick.is_active() {
            return Effect::None;
        }
        let Phase::Ready(stage) = &mut self.phase else {
            return Effect::None;
        };

        let target = if self.hovering {
            let offset = (
                f64::from(self.pointer.x - self.origin.x),
                f64::from(self.pointer.y - self.origin.y),
            );
            TargetPose::hover(stage.pose, stage.image.natural_size(), self.target, offset)
        } else {
            TargetPose::idle(&stage.fit)
        };

        let previous = stage.pose;
        stage.pose = previous.step_toward(&target, stage.increments);

        let stop = match self.options.stop_rule {
            StopRule::LeftAtZero => stage.pose.left == 0,
            StopRule::Settled => stage.pose == previous,
        };

        if stop {
            self.tick.cancel();
            Effect::AnimationStopped
        } else {
            Effect::None
        }
    }

    /// Cancels every timer and releases the container and image.
    pub fn dispose(&mut self) -> Effect {
        if matches!(self.phase, Phase::Disposed) {
            return Effect::None;
        }

        self.poll.cancel();
        self.tick.cancel();
        self.hovering = false;
        self.decor.loading_label = None;
        self.decor.loading_class = false;

        log::debug!(
            "hover zoom '{}' disposed",
            self.container_id().unwrap_or_default()
        );

        self.container = None;
        self.phase = Phase::Disposed;
        Effect::Disposed
    }

    /// Timers the widget currently needs: the load poll while it runs and
    /// the animation tick once ready.
    pub(super) fn timers(&self) -> Vec<Timer> {
        let poll = self.poll.active().map(|handle| Timer {
            handle,
            period: Duration::from_millis(LOAD_POLL_INTERVAL_MS),
            kind: TimerKind::Poll,
        });

        let tick = match (&self.phase, self.tick.active()) {
            (Phase::Ready(stage), Some(handle)) => Some(Timer {
                handle,
                period: stage.delay.as_duration(),
                kind: TimerKind::Tick,
            }),
            _ => None,
        };

        poll.into_iter().chain(tick).collect()
    }

    /// Timers currently requested by the widget. Each one is keyed by its
    /// handle, so a restarted timer is a new subscription.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(self.timers().into_iter().map(|timer| {
            let every = time::every(timer.period).with(timer.handle);
            match timer.kind {
                TimerKind::Poll => every.map(|_| Message::PollTick),
                TimerKind::Tick => every.map(|_| Message::Tick),
            }
        }))
    }

    pub fn view(&self) -> Element<'_, Message> {
        let (image, pose) = match &self.phase {
            Phase::Ready(stage) => (Some(&stage.image.handle), stage.pose),
            Phase::Loading | Phase::Disposed => (None, Pose::default()),
        };

        let frame = ZoomFrame::new(image, pose)
            .interactive(self.is_ready())
            .into_element();

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(frame);

        if let Some(label) = &self.decor.loading_label {
            layers = layers.push(container(text(label.as_str())).center(Length::Fill));
        }

        #[allow(clippy::cast_precision_loss)]
        let (width, height) = (self.decor.width as f32, self.decor.height as f32);
        let loading = self.decor.loading_class;

        container(layers)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .clip(self.decor.clip)
            .style(move |_theme: &Theme| container::Style {
                background: loading.then_some(Background::Color(Color {
                    r: 0.5,
                    g: 0.5,
                    b: 0.5,
                    a: 0.15,
                })),
                ..container::Style::default()
            })
            .into()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        matches!(self.phase, Phase::Disposed)
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Identifier of the container, until disposed.
    #[must_use]
    pub fn container_id(&self) -> Option<&str> {
        self.container.as_ref().map(Container::id)
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn decor(&self) -> &Decor {
        &self.decor
    }

    /// Fit geometry, once ready.
    #[must_use]
    pub fn fit(&self) -> Option<Fit> {
        match &self.phase {
            Phase::Ready(stage) => Some(stage.fit),
            _ => None,
        }
    }

    /// Current image pose, once ready.
    #[must_use]
    pub fn pose(&self) -> Option<Pose> {
        match &self.phase {
            Phase::Ready(stage) => Some(stage.pose),
            _ => None,
        }
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    #[must_use]
    pub fn poll_handle(&self) -> Option<TimerHandle> {
        self.poll.active()
    }

    #[must_use]
    pub fn tick_handle(&self) -> Option<TimerHandle> {
        self.tick.active()
    }

    /// Number of times the load-detection poll was cancelled.
    #[must_use]
    pub fn poll_cancellations(&self) -> u32 {
        self.poll.cancellations()
    }
}
