use palette::{IntoColor, Oklch, Srgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend towards `other` by `t` (0.0 = self, 1.0 = other) in OKLCH space.
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }

        let (from_l, from_c, from_h) = self.to_oklch();
        let (to_l, to_c, to_h) = other.to_oklch();

        let l = from_l + (to_l - from_l) * t;
        let c = from_c + (to_c - from_c) * t;

        // Hue interpolation (shortest path around the circle)
        let mut dh = to_h - from_h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        let h = (from_h + dh * t).rem_euclid(360.0);

        Self::from_oklch(l, c, h)
    }

    fn to_oklch(self) -> (f32, f32, f32) {
        let srgb = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let oklch: Oklch = srgb.into_color();
        (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
    }

    fn from_oklch(l: f32, c: f32, h: f32) -> Self {
        let srgb: Srgb = Oklch::new(l, c, h).into_color();
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(channel(srgb.red), channel(srgb.green), channel(srgb.blue))
    }
}
