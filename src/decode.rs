use enough::Stop;

use crate::bmp;
use crate::error::BitmapError;
use crate::image::Image;
use crate::limits::Limits;

/// Decode request for in-memory BMP data, with optional resource limits.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or output buffer exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<Image, BitmapError> {
        let mut input = self.data;
        bmp::read_bmp24(&mut input, self.limits, stop)
    }
}
