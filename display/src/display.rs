use sdl2::pixels::PixelFormatEnum;
use thiserror::Error;

use vip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_SIZE, DISPLAY_WIDTH};
use vip8_core::Chip8;

/// Failures setting up or drawing to the SDL2 window
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("sdl2: {0}")]
    Sdl(String),

    #[error(transparent)]
    Render(#[from] vip8_core::Error),
}

fn sdl_error(e: impl ToString) -> DisplayError {
    DisplayError::Sdl(e.to_string())
}

/// # Display
/// The Chip-8 display is composed of 64x32 pixels black/white pixels.
/// Each frame the machine renders its frame buffer into `pixels`, which is then
/// streamed to the window as an RGB888 texture.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    pixels: Vec<u32>,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(sdl_error)?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .resizable()
            .build()
            .map_err(sdl_error)?;
        let canvas = window.into_canvas().build().map_err(sdl_error)?;
        log::debug!("opened {}x scale window", scale);

        Ok(Display {
            canvas,
            pixels: vec![0; DISPLAY_SIZE],
        })
    }

    /// Flattens pixels into the byte layout of an SDL2 RGB888 texture.
    ///
    /// RGB888 stores each pixel as a native-endian 32-bit word with the
    /// top byte unused, which is exactly how `Chip8::render` writes them.
    ///
    /// # Arguments
    /// * `pixels` one 0x00RRGGBB word per pixel
    fn pixels_to_sdl_texture(pixels: &[u32]) -> Vec<u8> {
        pixels.iter().flat_map(|pixel| pixel.to_ne_bytes()).collect()
    }

    /// Renders the machine's current frame buffer and presents it.
    ///
    /// # Arguments
    /// * `chip8` the machine whose frame to draw
    pub fn render(&mut self, chip8: &Chip8) -> Result<(), DisplayError> {
        chip8.render(&mut self.pixels)?;

        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB888,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(sdl_error)?;

        texture
            .update(None, &Display::pixels_to_sdl_texture(&self.pixels), DISPLAY_WIDTH * 4)
            .map_err(sdl_error)?;

        self.canvas.copy(&texture, None, None).map_err(sdl_error)?;
        self.canvas.present();
        Ok(())
    }
}
