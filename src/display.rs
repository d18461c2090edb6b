//! Blocking image display: open a titled window, wait for `q`, close it.
//!
//! The wait loop is written against the [`Surface`] trait; [`show_image`]
//! drives it with a `minifb` window.

use crate::constants::{CLOSE_FLUSH_ITERATIONS, POLL_INTERVAL_MS, QUIT_KEY};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::thread;
use std::time::Duration;

/// Interleaving order of colour samples in an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// Blue, green, red (alpha). What the capture side of the tuner produces.
    #[default]
    Bgr,
    /// Red, green, blue (alpha).
    Rgb,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("Image dimensions must be non-zero (got {height}x{width})")]
    EmptyDimensions { height: usize, width: usize },
    #[error("Unsupported channel count {0}; expected 1, 3 or 4")]
    UnsupportedChannels(usize),
    #[error("Pixel buffer holds {actual} bytes but {expected} are required")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Image of {height}x{width}x{channels} samples is too large to address")]
    TooLarge {
        height: usize,
        width: usize,
        channels: usize,
    },
}

/// Height x width x channels buffer of 8-bit samples, row-major, interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    height: usize,
    width: usize,
    channels: usize,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl Image {
    pub fn new(
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, ImageError> {
        if height == 0 || width == 0 {
            return Err(ImageError::EmptyDimensions { height, width });
        }
        if !matches!(channels, 1 | 3 | 4) {
            return Err(ImageError::UnsupportedChannels(channels));
        }
        let expected = height
            .checked_mul(width)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(ImageError::TooLarge {
                height,
                width,
                channels,
            })?;
        if data.len() != expected {
            return Err(ImageError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Image {
            height,
            width,
            channels,
            order: ChannelOrder::default(),
            data,
        })
    }

    pub fn with_order(mut self, order: ChannelOrder) -> Self {
        self.order = order;
        self
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Pack pixels as `0x00RRGGBB`, dropping alpha.
    pub fn to_rgb_words(&self) -> Vec<u32> {
        self.data
            .chunks_exact(self.channels)
            .map(|px| {
                let (r, g, b) = match (self.channels, self.order) {
                    (1, _) => (px[0], px[0], px[0]),
                    (_, ChannelOrder::Bgr) => (px[2], px[1], px[0]),
                    (_, ChannelOrder::Rgb) => (px[0], px[1], px[2]),
                };
                (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
            })
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("Window backend failed: {0}")]
    Backend(#[from] minifb::Error),
    #[error("Window '{0}' was closed before the quit key was pressed")]
    Closed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Longest single wait for a key press.
    pub poll_interval: Duration,
    /// Event pumps after the window is closed.
    pub close_flush_iterations: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            close_flush_iterations: CLOSE_FLUSH_ITERATIONS,
        }
    }
}

/// A windowing backend able to show one image at a time.
pub trait Surface {
    fn open(&mut self, title: &str, image: &Image) -> Result<(), DisplayError>;
    /// Wait at most `wait` for a key press. Letters are reported lowercase
    /// unless shift is held.
    fn poll_key(&mut self, wait: Duration) -> Result<Option<char>, DisplayError>;
    fn close(&mut self, title: &str);
    fn pump(&mut self, wait: Duration);
}

/// Show `image` in a window titled `title` until `q` is pressed.
pub fn show_image(image: &Image, title: &str) -> Result<(), DisplayError> {
    show_image_with(
        &mut MinifbSurface::default(),
        image,
        title,
        &DisplayOptions::default(),
    )
}

pub fn show_image_with<S: Surface>(
    surface: &mut S,
    image: &Image,
    title: &str,
    options: &DisplayOptions,
) -> Result<(), DisplayError> {
    surface.open(title, image)?;
    tracing::debug!(title, width = image.width, height = image.height, "window opened");

    if let Err(err) = wait_for_quit(surface, options.poll_interval) {
        surface.close(title);
        return Err(err);
    }

    surface.close(title);
    for _ in 0..options.close_flush_iterations {
        surface.pump(options.poll_interval);
    }
    tracing::debug!(title, "window closed");
    Ok(())
}

fn wait_for_quit<S: Surface>(surface: &mut S, wait: Duration) -> Result<(), DisplayError> {
    while surface.poll_key(wait)? != Some(QUIT_KEY) {}
    Ok(())
}

/// [`Surface`] backed by a `minifb` window.
#[derive(Default)]
pub struct MinifbSurface {
    window: Option<Window>,
    title: String,
}

impl Surface for MinifbSurface {
    fn open(&mut self, title: &str, image: &Image) -> Result<(), DisplayError> {
        let mut window = Window::new(title, image.width, image.height, WindowOptions::default())?;
        // Polling is paced by `poll_key`, not by the window's frame limiter.
        window.set_target_fps(0);
        window.update_with_buffer(&image.to_rgb_words(), image.width, image.height)?;
        self.window = Some(window);
        self.title = title.to_string();
        Ok(())
    }

    fn poll_key(&mut self, wait: Duration) -> Result<Option<char>, DisplayError> {
        let window = match self.window.as_mut() {
            Some(window) if window.is_open() => window,
            _ => return Err(DisplayError::Closed(self.title.clone())),
        };
        window.update();
        let shift = window.is_key_down(Key::LeftShift) || window.is_key_down(Key::RightShift);
        let pressed = pick_key(&window.get_keys_pressed(KeyRepeat::No), shift);
        if pressed.is_none() {
            thread::sleep(wait);
        }
        Ok(pressed)
    }

    fn close(&mut self, _title: &str) {
        self.window = None;
    }

    fn pump(&mut self, wait: Duration) {
        if let Some(window) = self.window.as_mut() {
            window.update();
        }
        thread::sleep(wait);
    }
}

const LETTER_KEYS: [(Key, char); 26] = [
    (Key::A, 'a'),
    (Key::B, 'b'),
    (Key::C, 'c'),
    (Key::D, 'd'),
    (Key::E, 'e'),
    (Key::F, 'f'),
    (Key::G, 'g'),
    (Key::H, 'h'),
    (Key::I, 'i'),
    (Key::J, 'j'),
    (Key::K, 'k'),
    (Key::L, 'l'),
    (Key::M, 'm'),
    (Key::N, 'n'),
    (Key::O, 'o'),
    (Key::P, 'p'),
    (Key::Q, 'q'),
    (Key::R, 'r'),
    (Key::S, 's'),
    (Key::T, 't'),
    (Key::U, 'u'),
    (Key::V, 'v'),
    (Key::W, 'w'),
    (Key::X, 'x'),
    (Key::Y, 'y'),
    (Key::Z, 'z'),
];

/// Keys pressed within one update arrive together; the quit key wins over the rest.
fn pick_key(keys: &[Key], shift: bool) -> Option<char> {
    let mut letters = keys.iter().filter_map(|&key| key_char(key, shift));
    let first = letters.next()?;
    if first == QUIT_KEY || letters.any(|letter| letter == QUIT_KEY) {
        return Some(QUIT_KEY);
    }
    Some(first)
}

fn key_char(key: Key, shift: bool) -> Option<char> {
    let (_, letter) = LETTER_KEYS.iter().find(|(candidate, _)| *candidate == key)?;
    Some(if shift {
        letter.to_ascii_uppercase()
    } else {
        *letter
    })
}
