//! SDL2 window that presents a `PixelBuffer`
//!
//! All drawing happens in software; SDL only owns the window, one
//! streaming texture and the event pump.

use super::{PixelBuffer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::DisplayError;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

/// Settings for [`Display::open`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "softgfx".into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
        }
    }
}

/// What the demo loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
}

impl InputEvent {
    /// Window close and fresh key presses; auto-repeat is dropped so
    /// toggles flip once per press
    fn from_sdl(event: Event) -> Option<Self> {
        match event {
            Event::Quit { .. } => Some(Self::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => Some(Self::KeyDown(key)),
            _ => None,
        }
    }
}

pub struct Display {
    canvas: Canvas<Window>,
    pump: EventPump,
    size: (u32, u32),
}

impl Display {
    /// Open the window. The texture creator is handed back separately
    /// because every [`FrameTexture`] borrows it.
    pub fn open(
        options: &WindowOptions,
    ) -> Result<(Self, TextureCreator<WindowContext>), DisplayError> {
        let sdl = sdl2::init()?;
        let window = sdl
            .video()?
            .window(&options.title, options.width, options.height)
            .position_centered()
            .build()?;

        let canvas = window.into_canvas().accelerated();
        let canvas = if options.vsync { canvas.present_vsync() } else { canvas }.build()?;
        let creator = canvas.texture_creator();
        let pump = sdl.event_pump()?;

        log::info!(
            "opened {}x{} window (vsync: {})",
            options.width,
            options.height,
            options.vsync
        );

        let size = (options.width, options.height);
        Ok((Self { canvas, pump, size }, creator))
    }

    pub fn width(&self) -> u32 {
        self.size.0
    }

    pub fn height(&self) -> u32 {
        self.size.1
    }

    /// Upload `frame` into `texture`, stretch it over the window and flip
    pub fn present(
        &mut self,
        texture: &mut FrameTexture<'_>,
        frame: &PixelBuffer,
    ) -> Result<(), DisplayError> {
        texture.upload(frame)?;
        self.canvas.copy(&texture.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    /// Drain pending SDL events
    pub fn events(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pump.poll_iter().filter_map(InputEvent::from_sdl)
    }
}

/// Streaming RGBA8888 texture sized for one `PixelBuffer`
pub struct FrameTexture<'a> {
    texture: Texture<'a>,
    size: (u32, u32),
}

impl<'a> FrameTexture<'a> {
    pub fn new(
        creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, DisplayError> {
        let texture = creator.create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)?;
        Ok(Self {
            texture,
            size: (width, height),
        })
    }

    fn upload(&mut self, frame: &PixelBuffer) -> Result<(), DisplayError> {
        let frame_size = (frame.width(), frame.height());
        if frame_size != self.size {
            return Err(DisplayError::SizeMismatch {
                frame: frame_size,
                texture: self.size,
            });
        }
        let pitch = frame.width() as usize * 4;
        self.texture.update(None, frame.as_bytes(), pitch)?;
        Ok(())
    }
}
