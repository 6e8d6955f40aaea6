// SPDX-License-Identifier: MPL-2.0
//! Application root: a gallery of hover zoom containers.
//!
//! `App` declares one container per configured or command-line image on a
//! [`Page`], constructs a widget on each by identifier, decodes the images
//! in the background and routes pointer and timer messages to the widget
//! they belong to.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, ContainerConfig};
use crate::error::Error;
use crate::i18n::I18n;
use crate::media::{self, ImageData, ImageSlot};
use crate::ui::hover_zoom::{self, Container, ContainerRef, Effect, Page};
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;

/// One constructed widget and the file its image comes from.
#[derive(Debug)]
struct Entry {
    image_path: PathBuf,
    zoom: hover_zoom::State,
}

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    page: Page,
    entries: Vec<Entry>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("containers", &self.page.len())
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Builds the window settings. Closing is intercepted so widgets can be
/// disposed before the window goes away.
pub fn window_settings() -> window::Settings {
    #[allow(clippy::cast_precision_loss)]
    let size = iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
    window::Settings {
        size,
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Lists the containers to show: every configured one, then one per
/// command-line image named `image-N`.
pub fn gallery_containers(config: &Config, flags: &Flags) -> Vec<ContainerConfig> {
    let mut containers = config.containers.clone();
    for (n, path) in flags.images.iter().enumerate() {
        let mut container = ContainerConfig::new(format!("image-{}", n + 1), path.clone());
        if let Some(width) = flags.width {
            container.width = width;
        }
        if let Some(height) = flags.height {
            container.height = height;
        }
        containers.push(container);
    }
    containers
}

/// Localized explanation for a container whose widget could not be built.
fn skip_reason(i18n: &I18n, id: &str, err: &Error) -> String {
    match err {
        Error::ContainerNotFound(_) => {
            i18n.tr_with_args("error-container-not-found", &[("id", id)])
        }
        other => format!(
            "{}: {other}",
            i18n.tr_with_args("error-container-skipped", &[("id", id)])
        ),
    }
}

impl App {
    /// Loads the configuration and builds the gallery.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        };
        let config = config.unwrap_or_else(|err| {
            log::warn!("using default configuration: {err}");
            Config::default()
        });

        Self::with_config(flags, config)
    }

    /// Declares the containers, constructs their widgets and schedules the
    /// image decodes.
    pub fn with_config(flags: Flags, mut config: Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        if config.zoom.loading_message.is_none() {
            config.zoom.loading_message = Some(i18n.tr("zoom-loading-message"));
        }

        let containers = gallery_containers(&config, &flags);
        let mut page = Page::new();
        for container in &containers {
            page.insert(Container::with_image(container.id.clone(), ImageSlot::new()));
        }

        let mut entries = Vec::with_capacity(containers.len());
        for container in &containers {
            let options = container.options(&config.zoom);
            match page.construct(ContainerRef::Id(&container.id), options) {
                Ok(zoom) => entries.push(Entry {
                    image_path: container.image.clone(),
                    zoom,
                }),
                Err(err) => log::warn!("{}", skip_reason(&i18n, &container.id, &err)),
            }
        }

        let tasks = entries.iter().enumerate().map(|(index, entry)| {
            let path = entry.image_path.clone();
            Task::perform(async move { media::load_image(&path) }, move |result| {
                Message::ImageLoaded { index, result }
            })
        });
        let task = Task::batch(tasks);

        log::info!("gallery ready with {} container(s)", entries.len());

        (
            Self {
                i18n,
                page,
                entries,
            },
            task,
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Zoom(index, message) => {
                self.forward(index, message);
                Task::none()
            }
            Message::ImageLoaded { index, result } => {
                match result {
                    Ok(image) => self.image_loaded(index, image),
                    Err(err) => self.image_failed(index, &err),
                }
                Task::none()
            }
            Message::CloseRequested(id) => {
                for index in 0..self.entries.len() {
                    self.forward(index, hover_zoom::Message::Dispose);
                }
                window::close(id)
            }
        }
    }

    fn forward(&mut self, index: usize, message: hover_zoom::Message) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        match entry.zoom.handle(message) {
            Effect::None => {}
            effect => log::trace!(
                "container '{}': {effect:?}",
                entry.zoom.container_id().unwrap_or_default()
            ),
        }
    }

    /// Publishes the decoded image on the entry's container and notifies
    /// its widget.
    fn image_loaded(&mut self, index: usize, image: ImageData) {
        let Some(id) = self
            .entries
            .get(index)
            .and_then(|entry| entry.zoom.container_id())
        else {
            return;
        };
        if let Some(container) = self.page.get(id) {
            container.image().fill(image);
        }
        self.forward(index, hover_zoom::Message::ImageLoaded);
    }

    fn image_failed(&self, index: usize, err: &Error) {
        if let Some(entry) = self.entries.get(index) {
            let path = entry.image_path.display().to_string();
            log::warn!(
                "{}: {err}",
                self.i18n.tr_with_args("error-image-load", &[("path", path.as_str())])
            );
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            entries: &self.entries,
        })
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(&self.entries)
    }

    /// Widget states in gallery order.
    pub fn widgets(&self) -> impl Iterator<Item = &hover_zoom::State> {
        self.entries.iter().map(|entry| &entry.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::recipe_hashes;
    use std::collections::HashSet;

    fn flags(images: &[&str]) -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            images: images.iter().map(PathBuf::from).collect(),
            ..Flags::default()
        }
    }

    fn blank_image() -> ImageData {
        ImageData::from_rgba(400, 300, vec![0; 400 * 300 * 4])
    }

    #[test]
    fn command_line_images_follow_configured_containers() {
        let config = Config {
            containers: vec![ContainerConfig::new("hero", "hero.jpg")],
            ..Config::default()
        };
        let flags = Flags {
            width: Some(320),
            ..flags(&["a.png", "b.png"])
        };

        let containers = gallery_containers(&config, &flags);

        let ids: Vec<_> = containers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["hero", "image-1", "image-2"]);
        assert_eq!(containers[0].width, config::DEFAULT_CONTAINER_WIDTH);
        assert_eq!(containers[1].width, 320);
        assert_eq!(containers[2].height, config::DEFAULT_CONTAINER_HEIGHT);
    }

    #[test]
    fn loading_label_is_localized() {
        let (app, _task) = App::with_config(flags(&["a.png"]), Config::default());
        let widget = app.widgets().next().expect("one widget");
        assert_eq!(
            widget.decor().loading_label.as_deref(),
            Some("loading image...")
        );
    }

    #[test]
    fn invalid_container_is_skipped() {
        let mut broken = ContainerConfig::new("broken", "broken.png");
        broken.width = 0;
        let config = Config {
            containers: vec![broken],
            ..Config::default()
        };

        let (app, _task) = App::with_config(flags(&["a.png"]), config);

        let ids: Vec<_> = app.widgets().filter_map(|w| w.container_id()).collect();
        assert_eq!(ids, ["image-1"]);
    }

    #[test]
    fn skipped_containers_are_explained_in_the_interface_language() {
        let en = I18n::new(Some("en-US".to_string()), &Config::default());
        let missing = Error::ContainerNotFound("hero".into());
        assert_eq!(
            skip_reason(&en, "hero", &missing),
            "Container not found: hero"
        );

        let fr = I18n::new(Some("fr".to_string()), &Config::default());
        let invalid = Error::InvalidOptions("target size must be positive, got 0x250".into());
        assert_eq!(
            skip_reason(&fr, "broken", &invalid),
            "Conteneur ignoré : broken: Invalid Options: target size must be positive, got 0x250"
        );
    }

    #[test]
    fn decoded_image_makes_widget_ready() {
        let (mut app, _task) = App::with_config(flags(&["a.png"]), Config::default());

        let _ = app.update(Message::ImageLoaded {
            index: 0,
            result: Ok(blank_image()),
        });

        let widget = app.widgets().next().expect("one widget");
        assert!(widget.is_ready());
        assert!(widget.decor().loading_label.is_none());
    }

    #[test]
    fn failed_decode_keeps_widget_loading() {
        let (mut app, _task) = App::with_config(flags(&["a.png"]), Config::default());

        let _ = app.update(Message::ImageLoaded {
            index: 0,
            result: Err(Error::Image("corrupt".into())),
        });

        assert!(app.widgets().all(hover_zoom::State::is_loading));
    }

    #[test]
    fn widget_timers_are_keyed_by_gallery_index() {
        let (mut app, _task) = App::with_config(flags(&["a.png", "b.png"]), Config::default());
        for index in 0..2 {
            let _ = app.update(Message::ImageLoaded {
                index,
                result: Ok(blank_image()),
            });
            let _ = app.update(Message::Zoom(
                index,
                hover_zoom::Message::PointerEntered {
                    position: iced::Point::new(40.0, 40.0),
                    origin: iced::Point::ORIGIN,
                },
            ));
        }

        // Both widgets hold the same timer handle; only the index tells
        // their ticks apart. The close-request listener is the third entry.
        let mut widgets = app.widgets();
        let first = widgets.next().and_then(hover_zoom::State::tick_handle);
        let second = widgets.next().and_then(hover_zoom::State::tick_handle);
        assert!(first.is_some());
        assert_eq!(first, second);

        let hashes = recipe_hashes(app.subscription());
        let unique: HashSet<_> = hashes.iter().collect();
        assert_eq!(hashes.len(), 3);
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn disposed_gallery_only_listens_for_close() {
        let (mut app, _task) = App::with_config(flags(&["a.png"]), Config::default());
        let _ = app.update(Message::ImageLoaded {
            index: 0,
            result: Ok(blank_image()),
        });
        let _ = app.update(Message::Zoom(
            0,
            hover_zoom::Message::PointerEntered {
                position: iced::Point::new(40.0, 40.0),
                origin: iced::Point::ORIGIN,
            },
        ));
        assert_eq!(recipe_hashes(app.subscription()).len(), 2);

        let _ = app.update(Message::Zoom(0, hover_zoom::Message::Dispose));

        assert!(app.widgets().all(hover_zoom::State::is_disposed));
        assert_eq!(recipe_hashes(app.subscription()).len(), 1);
    }

    #[test]
    fn messages_for_unknown_entries_are_ignored() {
        let (mut app, _task) = App::with_config(flags(&[]), Config::default());
        let _ = app.update(Message::Zoom(3, hover_zoom::Message::Tick));
        let _ = app.update(Message::ImageLoaded {
            index: 3,
            result: Ok(blank_image()),
        });
        assert_eq!(app.widgets().count(), 0);
    }
}
