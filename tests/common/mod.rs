#![allow(dead_code)]

use std::convert::Infallible;

use hearth::{OutputDriver, Rgb};

/// Driver that keeps every frame it was asked to show
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingDriver {
    pub fn last(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl OutputDriver for RecordingDriver {
    type Error = Infallible;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.frames.push(colors.to_vec());
        Ok(())
    }
}

/// Driver whose every `fail_every`-th write fails
#[derive(Debug)]
pub struct FlakyDriver {
    pub fail_every: usize,
    pub writes: usize,
    pub shown: usize,
}

impl FlakyDriver {
    pub fn new(fail_every: usize) -> Self {
        Self {
            fail_every,
            writes: 0,
            shown: 0,
        }
    }
}

impl OutputDriver for FlakyDriver {
    type Error = &'static str;

    fn write(&mut self, _colors: &[Rgb]) -> Result<(), Self::Error> {
        self.writes += 1;
        if self.writes % self.fail_every == 0 {
            return Err("bus error");
        }
        self.shown += 1;
        Ok(())
    }
}

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

pub fn is_blank(frame: &[Rgb]) -> bool {
    frame.iter().all(|pixel| *pixel == BLACK)
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}
