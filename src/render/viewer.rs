// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{Error, Result};
use crate::render::figure::Frame;

use minifb::{Key, WindowOptions};

const FPS: usize = 30;

/// Presents a finished frame. `show` blocks until the viewer has been
/// dismissed; there is no timeout and no way to cancel it from this side.
pub trait Viewer {
    fn show(&mut self, frame: &Frame) -> Result<()>;
}

/// A native window which displays the frame until the user closes it or
/// presses escape.
pub struct Window {
    title: String,
}

impl Window {
    pub fn new(title: impl AsRef<str>) -> Self {
        Self {
            title: title.as_ref().to_owned(),
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new("Order latency (μs)")
    }
}

impl Viewer for Window {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let buffer = frame.to_rgb32();

        let mut window = minifb::Window::new(&self.title, width, height, WindowOptions::default())
            .map_err(|e| Error::Viewer(e.to_string()))?;
        window.set_target_fps(FPS);

        debug!("waiting for viewer to close");
        while window.is_open() && !window.is_key_down(Key::Escape) {
            window
                .update_with_buffer(&buffer, width, height)
                .map_err(|e| Error::Viewer(e.to_string()))?;
        }
        debug!("viewer closed");

        Ok(())
    }
}
