//! Where finished frames go.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// Output side of the terminal: a fixed drawable size and a way to show a
/// finished frame.
pub trait Screen {
    /// Drawable size in cells (width, height).
    fn size(&self) -> Result<(u16, u16)>;

    /// Present a complete frame.
    fn show(&mut self, fb: &FrameBuffer) -> Result<()>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn size(&self) -> Result<(u16, u16)> {
        (**self).size()
    }

    fn show(&mut self, fb: &FrameBuffer) -> Result<()> {
        (**self).show(fb)
    }
}

/// In-memory screen of a fixed size.
///
/// Keeps the last frame shown so it can be inspected.
#[derive(Debug, Clone)]
pub struct HeadlessScreen {
    width: u16,
    height: u16,
    last: Option<FrameBuffer>,
    shown: u64,
}

impl HeadlessScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            last: None,
            shown: 0,
        }
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }

    /// Number of frames shown so far.
    pub fn frames_shown(&self) -> u64 {
        self.shown
    }
}

impl Screen for HeadlessScreen {
    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn show(&mut self, fb: &FrameBuffer) -> Result<()> {
        match self.last.as_mut() {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        self.shown += 1;
        Ok(())
    }
}
