//! Radial-gradient sprite rasterization.
//!
//! Every aggregated particle contributes one color stop to a shared radial
//! gradient; the gradient is rasterized into a small circular sprite that the
//! quad mesh maps as its diffuse texture. Rasterization is a pure function:
//! it takes the gradient by reference and returns a fresh owned texture, so
//! no bitmap is mutated in place.
//!
//! # Example
//!
//! ```ignore
//! let mut gradient = RadialGradient::new();
//! gradient.push_stop(Vec4::new(1.0, 0.0, 0.0, 1.0), 0.0);
//! let sprite = rasterize(&gradient, DEFAULT_SPRITE_SIZE);
//! sprite.to_image().save("sprite.png")?;
//! ```

use glam::Vec4;
use image::{Rgba, RgbaImage};

/// Default sprite resolution.
pub const DEFAULT_SPRITE_SIZE: u32 = 32;

/// One color stop along the radial axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Stop color (RGBA, each channel 0.0-1.0).
    pub color: Vec4,
    /// Radial offset, 0.0 at the center to 1.0 at the rim.
    pub offset: f32,
}

/// Accumulated per-particle color stops.
///
/// Stops are kept ordered by offset; stops pushed at an equal offset keep
/// their push order, and sampling at that offset takes the newest one. The
/// update loop pushes every particle color at offset 0.0, so the newest
/// particle's color dominates the sprite center.
#[derive(Debug, Clone, Default)]
pub struct RadialGradient {
    stops: Vec<GradientStop>,
}

impl RadialGradient {
    /// Create a gradient with no stops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a color stop at the given radial offset.
    pub fn push_stop(&mut self, color: Vec4, offset: f32) {
        let idx = self.stops.partition_point(|s| s.offset <= offset);
        self.stops.insert(idx, GradientStop { color, offset });
    }

    /// Reset to a fresh empty gradient.
    pub fn clear(&mut self) {
        self.stops.clear();
    }

    /// Number of accumulated stops.
    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the gradient holds no stops.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Ordered view of the stops.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Sample the gradient at normalized radial distance `t`.
    ///
    /// Pads with the nearest stop color outside the stop range and lerps
    /// between neighboring stops inside it. An empty gradient samples fully
    /// transparent.
    pub fn sample(&self, t: f32) -> Vec4 {
        let Some(first) = self.stops.first() else {
            return Vec4::ZERO;
        };
        let t = t.clamp(0.0, 1.0);
        if t < first.offset {
            return first.color;
        }
        let mut lower = first;
        for stop in &self.stops[1..] {
            if stop.offset <= t {
                lower = stop;
            } else {
                let span = stop.offset - lower.offset;
                if span <= f32::EPSILON {
                    return lower.color;
                }
                let u = (t - lower.offset) / span;
                return lower.color.lerp(stop.color, u);
            }
        }
        lower.color
    }
}

/// An owned RGBA sprite texture ready for upload or export.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteTexture {
    /// Raw RGBA pixel data (width * height * 4 bytes).
    pub data: Vec<u8>,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
}

impl SpriteTexture {
    /// RGBA value of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the texture, or if `data` was resized
    /// out from under `width`/`height`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} sprite",
            x,
            y,
            self.width,
            self.height
        );
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Convert into an [`image::RgbaImage`] for saving or further processing.
    ///
    /// # Panics
    ///
    /// Panics if `data` no longer holds `width * height * 4` bytes.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .expect("sprite data length matches dimensions")
    }
}

/// Rasterize the gradient into a circular sprite of `size` x `size` pixels.
///
/// Pixels outside the inscribed circle stay transparent; inside, color is the
/// gradient sampled at the pixel's normalized distance from the center.
/// Returns a new texture and leaves the gradient untouched.
pub fn rasterize(gradient: &RadialGradient, size: u32) -> SpriteTexture {
    let mut img = RgbaImage::new(size, size);
    let center = (size as f32 - 1.0) * 0.5;
    let radius = size as f32 * 0.5;

    for (x, y, px) in img.enumerate_pixels_mut() {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let dist = (dx * dx + dy * dy).sqrt() / radius;
        if dist > 1.0 {
            continue;
        }
        let c = gradient.sample(dist);
        *px = Rgba([
            channel_to_u8(c.x),
            channel_to_u8(c.y),
            channel_to_u8(c.z),
            channel_to_u8(c.w),
        ]);
    }

    SpriteTexture {
        data: img.into_raw(),
        width: size,
        height: size,
    }
}

fn channel_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
