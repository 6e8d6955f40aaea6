// SPDX-License-Identifier: MPL-2.0
use iced::Point;
use iced_hover_zoom::config::{self, Config, ContainerConfig, ZoomDefaults};
use iced_hover_zoom::domain::zoom::Pose;
use iced_hover_zoom::i18n::I18n;
use iced_hover_zoom::media::{self, ImageSlot};
use iced_hover_zoom::ui::hover_zoom::{
    Container, ContainerRef, Effect, LoadDetection, Message, Page, StopRule,
};
use std::path::Path;
use tempfile::tempdir;

fn write_png(path: &Path, width: u32, height: u32) {
    image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([200, 40, 40, 255]))
        .save(path)
        .expect("failed to write test image");
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("failed to write config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let french = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("failed to write config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("window-title"), "Loupe au survol");
}

#[test]
fn decoded_file_zooms_under_pointer() {
    let dir = tempdir().expect("failed to create temporary directory");
    let image_path = dir.path().join("hero.png");
    write_png(&image_path, 400, 300);

    let mut hero = ContainerConfig::new("hero", &image_path);
    hero.increment_count = Some(1);
    let config = Config {
        containers: vec![hero],
        ..Config::default()
    };

    let slot = ImageSlot::new();
    let mut page = Page::new();
    page.insert(Container::with_image("hero", slot.clone()));

    let declared = &config.containers[0];
    let mut widget = page
        .construct(ContainerRef::Id(&declared.id), declared.options(&config.zoom))
        .expect("declared container");
    assert!(widget.is_loading());

    let image = media::load_image(&declared.image).expect("decodable image");
    assert!(slot.fill(image));
    match widget.handle(Message::ImageLoaded) {
        Effect::Ready { scale } => assert!((scale - 0.47).abs() < 1e-12),
        other => panic!("expected Ready, got {other:?}"),
    }

    let origin = Point::new(20.0, 30.0);
    let effect = widget.handle(Message::PointerEntered {
        position: Point::new(20.0, 130.0),
        origin,
    });
    assert_eq!(effect, Effect::AnimationStarted);

    assert_eq!(widget.handle(Message::Tick), Effect::AnimationStopped);
    assert_eq!(
        widget.pose(),
        Some(Pose {
            left: 0,
            top: -28,
            width: 400,
            height: 300
        })
    );
}

#[test]
fn polling_widget_becomes_ready_from_config_defaults() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        r#"
        [zoom]
        load_detection = "poll"
        stop_rule = "settled"

        [[containers]]
        id = "thumb"
        image = "thumb.png"
        width = 100
        height = 100
        "#,
    )
    .expect("failed to write config");

    let config = config::load_from_path(&config_path).expect("valid config");
    assert_eq!(
        config.zoom,
        ZoomDefaults {
            load_detection: Some(LoadDetection::Poll),
            stop_rule: Some(StopRule::Settled),
            ..ZoomDefaults::default()
        }
    );

    let slot = ImageSlot::new();
    let mut page = Page::new();
    page.insert(Container::with_image("thumb", slot.clone()));
    let options = config.containers[0].options(&config.zoom);
    let mut widget = page.construct("thumb", options).expect("declared container");
    assert!(widget.poll_handle().is_some());

    write_png(&dir.path().join("thumb.png"), 50, 50);
    let image = media::load_image(dir.path().join("thumb.png")).expect("decodable image");
    slot.fill(image);

    assert!(matches!(
        widget.handle(Message::PollTick),
        Effect::Ready { .. }
    ));
    assert!(widget.poll_handle().is_none());
    assert_eq!(widget.poll_cancellations(), 1);
}

#[test]
fn unknown_container_is_reported() {
    let page = Page::new();
    let options = ContainerConfig::new("missing", "x.png").options(&ZoomDefaults::default());
    let result = page.construct("missing", options);
    assert!(matches!(
        result,
        Err(iced_hover_zoom::error::Error::ContainerNotFound(_))
    ));
}
