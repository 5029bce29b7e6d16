//! Timing tables for the scenes of the roofing site, top to bottom.

use crate::{
    animation::{
        ease::Ease,
        stops::{InterpMode, Stop, Stops},
    },
    foundation::{
        core::{Transform2D, Vec2},
        error::ScrollResult,
    },
    interp::{
        color::{Hsl, Rgba8},
        envelope::Envelope,
        param::ParamRange,
    },
    scene::config::{ElementSpec, Profile, Property, SceneConfig, Track},
    timeline::{stagger::Stagger, window::TimelineWindow},
};

pub const HERO: &str = "hero";
pub const HOUSE: &str = "house";
pub const DOOR: &str = "door";
pub const SUNSET: &str = "sunset";
pub const GALLERY: &str = "gallery";

pub const GALLERY_HEADING: &str = "Built to weather it all";
pub const GALLERY_IMAGES: usize = 6;

/// Bottom-up order of the house build-out.
pub const ROOF_LAYERS: [&str; 10] = [
    "decking",
    "ice-shield",
    "underlayment",
    "drip-edge",
    "starter-strip",
    "shingles-lower",
    "shingles-upper",
    "flashing",
    "ridge-vent",
    "ridge-cap",
];

fn range(
    property: Property,
    window: (f64, f64),
    from: f64,
    to: f64,
    ease: Ease,
) -> ScrollResult<Track> {
    Ok(Track {
        property,
        window: TimelineWindow::new(window.0, window.1)?,
        profile: Profile::Range(ParamRange::new(from, to, ease)),
    })
}

fn fade(window: (f64, f64), fade_in_end: f64, fade_out_start: f64) -> ScrollResult<Track> {
    Ok(Track {
        property: Property::Opacity,
        window: TimelineWindow::new(window.0, window.1)?,
        profile: Profile::Envelope(Envelope::new(fade_in_end, fade_out_start)?),
    })
}

fn element(id: &str, tracks: Vec<Track>) -> ElementSpec {
    ElementSpec {
        id: id.to_string(),
        stagger: None,
        tracks,
    }
}

fn staggered(id: &str, stagger: Stagger, tracks: Vec<Track>) -> ElementSpec {
    ElementSpec {
        id: id.to_string(),
        stagger: Some(stagger),
        tracks,
    }
}

pub fn hero() -> ScrollResult<SceneConfig> {
    // The hero opens the page at 1.5 viewport heights, so its progress starts at 1 / 1.5.
    Ok(SceneConfig {
        name: HERO.to_string(),
        activation: 0.0,
        elements: vec![
            element(
                "headline",
                vec![
                    range(Property::Opacity, (0.75, 0.95), 1.0, 0.0, Ease::OutQuad)?,
                    range(Property::TranslateY, (0.7, 1.0), 0.0, -120.0, Ease::OutCubic)?,
                    range(Property::Blur, (0.8, 1.0), 0.0, 6.0, Ease::InQuad)?,
                ],
            ),
            element(
                "subline",
                vec![
                    range(Property::Opacity, (0.7, 0.9), 1.0, 0.0, Ease::OutQuad)?,
                    range(Property::TranslateY, (0.7, 1.0), 0.0, -60.0, Ease::OutCubic)?,
                ],
            ),
            element(
                "scroll-cue",
                vec![range(Property::Opacity, (0.68, 0.75), 1.0, 0.0, Ease::Linear)?],
            ),
            element(
                "backdrop",
                vec![
                    range(Property::Scale, (0.7, 1.0), 1.0, 1.15, Ease::InOutQuad)?,
                    Track {
                        property: Property::Background,
                        window: TimelineWindow::new(0.7, 1.0)?,
                        profile: Profile::ColorRange(ParamRange::new(
                            Rgba8::rgb(0x1d, 0x2b, 0x3a),
                            Rgba8::rgb(0x0f, 0x17, 0x21),
                            Ease::Linear,
                        )),
                    },
                ],
            ),
        ],
    })
}

pub fn house() -> ScrollResult<SceneConfig> {
    let mut elements = vec![
        element(
            "frame",
            vec![
                range(Property::Opacity, (0.2, 0.3), 0.0, 1.0, Ease::OutQuad)?,
                range(Property::TranslateY, (0.2, 0.3), 80.0, 0.0, Ease::OutCubic)?,
            ],
        ),
        element(
            "sky",
            vec![Track {
                property: Property::Background,
                window: TimelineWindow::new(0.2, 1.0)?,
                profile: Profile::ColorRange(ParamRange::new(
                    Rgba8::rgb(0xdc, 0xe9, 0xf2),
                    Rgba8::rgb(0x9c, 0xc3, 0xdd),
                    Ease::InOutQuad,
                )),
            }],
        ),
    ];

    let layer_windows = TimelineWindow::new(0.3, 0.8)?.split(ROOF_LAYERS.len())?;
    for (name, window) in ROOF_LAYERS.iter().zip(layer_windows) {
        elements.push(element(
            name,
            vec![
                range(
                    Property::Opacity,
                    (window.start(), window.end()),
                    0.0,
                    1.0,
                    Ease::OutQuad,
                )?,
                range(
                    Property::TranslateY,
                    (window.start(), window.end()),
                    -60.0,
                    0.0,
                    Ease::OutBack,
                )?,
            ],
        ));
    }

    elements.push(element("caption", vec![fade((0.3, 0.9), 0.15, 0.8)?]));

    Ok(SceneConfig {
        name: HOUSE.to_string(),
        activation: 0.2,
        elements,
    })
}

pub fn door() -> ScrollResult<SceneConfig> {
    Ok(SceneConfig {
        name: DOOR.to_string(),
        activation: 0.3,
        elements: vec![
            element(
                "door",
                vec![range(Property::RotateY, (0.35, 0.6), 0.0, -105.0, Ease::InOutQuad)?],
            ),
            element(
                "doorway",
                vec![Track {
                    property: Property::Transform,
                    window: TimelineWindow::new(0.5, 0.95)?,
                    profile: Profile::TransformRange(ParamRange::new(
                        Transform2D::default(),
                        Transform2D {
                            translate: Vec2::new(0.0, -40.0),
                            rotation_deg: 0.0,
                            scale: Vec2::new(6.0, 6.0),
                        },
                        Ease::InQuad,
                    )),
                }],
            ),
            element("interior-glow", vec![fade((0.45, 1.0), 0.2, 0.7)?]),
            element(
                "vignette",
                vec![Track {
                    property: Property::Background,
                    window: TimelineWindow::new(0.3, 0.6)?,
                    profile: Profile::ColorRange(ParamRange::new(
                        Rgba8::rgba(0, 0, 0, 0),
                        Rgba8::rgba(0, 0, 0, 0xb3),
                        Ease::OutQuad,
                    )),
                }],
            ),
        ],
    })
}

pub fn sunset() -> ScrollResult<SceneConfig> {
    let sky = Stops {
        keys: vec![
            Stop {
                at: 0.0,
                value: Rgba8::rgb(0x87, 0xce, 0xeb),
                ease: Ease::InOutQuad,
            },
            Stop {
                at: 0.4,
                value: Rgba8::rgb(0xff, 0xb3, 0x47),
                ease: Ease::InOutQuad,
            },
            Stop {
                at: 0.7,
                value: Rgba8::rgb(0xff, 0x6f, 0x61),
                ease: Ease::OutCubic,
            },
            Stop {
                at: 1.0,
                value: Rgba8::rgb(0x2c, 0x1e, 0x4a),
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
    };
    let reflection = Stops::linear([
        (0.0, 0.0, Ease::OutQuad),
        (0.5, 0.8, Ease::InQuad),
        (1.0, 0.0, Ease::Linear),
    ]);

    Ok(SceneConfig {
        name: SUNSET.to_string(),
        activation: 0.25,
        elements: vec![
            element(
                "sky",
                vec![Track {
                    property: Property::Background,
                    window: TimelineWindow::new(0.25, 1.0)?,
                    profile: Profile::ColorStops(sky),
                }],
            ),
            element(
                "sun",
                vec![
                    range(Property::TranslateY, (0.3, 0.9), 0.0, 320.0, Ease::InOutQuad)?,
                    Track {
                        property: Property::Color,
                        window: TimelineWindow::new(0.3, 0.9)?,
                        profile: Profile::HslRange(ParamRange::new(
                            Hsl::new(45.0, 100.0, 60.0),
                            Hsl::new(10.0, 95.0, 45.0),
                            Ease::Linear,
                        )),
                    },
                ],
            ),
            element(
                "reflection",
                vec![Track {
                    property: Property::Opacity,
                    window: TimelineWindow::new(0.3, 0.95)?,
                    profile: Profile::Stops(reflection),
                }],
            ),
            staggered(
                "star",
                Stagger::new(24, 0.03)?,
                vec![
                    range(Property::Opacity, (0.7, 1.0), 0.0, 1.0, Ease::OutQuad)?,
                    range(Property::Scale, (0.7, 1.0), 0.4, 1.0, Ease::OutBack)?,
                ],
            ),
            element("message", vec![fade((0.35, 0.85), 0.2, 0.75)?]),
        ],
    })
}

pub fn gallery() -> ScrollResult<SceneConfig> {
    Ok(SceneConfig {
        name: GALLERY.to_string(),
        activation: 0.1,
        elements: vec![
            staggered(
                "heading-char",
                Stagger::for_text(GALLERY_HEADING, 0.02)?,
                vec![
                    range(Property::Opacity, (0.1, 0.35), 0.0, 1.0, Ease::OutQuad)?,
                    range(Property::TranslateY, (0.1, 0.35), 40.0, 0.0, Ease::OutBack)?,
                ],
            ),
            staggered(
                "image",
                Stagger::new(GALLERY_IMAGES, 0.08)?,
                vec![
                    range(Property::Reveal, (0.2, 0.8), 0.0, 1.0, Ease::OutExpo)?,
                    range(Property::Scale, (0.2, 0.8), 1.1, 1.0, Ease::OutQuart)?,
                    range(Property::Blur, (0.2, 0.8), 8.0, 0.0, Ease::OutQuint)?,
                ],
            ),
        ],
    })
}

/// All scenes in page order.
pub fn all() -> ScrollResult<Vec<SceneConfig>> {
    Ok(vec![hero()?, house()?, door()?, sunset()?, gallery()?])
}

pub fn by_name(name: &str) -> ScrollResult<SceneConfig> {
    match name {
        HERO => hero(),
        HOUSE => house(),
        DOOR => door(),
        SUNSET => sunset(),
        GALLERY => gallery(),
        other => Err(crate::foundation::error::ScrollError::scene(format!(
            "unknown scene '{other}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
