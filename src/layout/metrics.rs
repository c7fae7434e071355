//! Static advance-width tables for the PDF base-14 Helvetica faces
//!
//! Widths are in em units (1/1000 of the AFM values). Tables cover ASCII
//! 0x20..=0x7E; index = (char as usize) - 32. Anything else falls back to
//! the average width, which is close enough for centering and wrapping.

/// Millimetres per typographic point
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Which Helvetica face a string is set in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

/// Character-width table for one face
pub struct FontMetrics {
    widths: [f32; 95],
    average_char_width: f32,
    /// Ascender height in em, used to place the first baseline
    pub ascent: f32,
}

impl FontMetrics {
    /// Metrics for `face`
    #[must_use]
    pub fn for_face(face: FontFace) -> &'static Self {
        match face {
            FontFace::Regular => &HELVETICA,
            FontFace::Bold => &HELVETICA_BOLD,
        }
    }

    /// Width of `s` in em units
    #[must_use]
    pub fn measure_em(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Width of `s` in millimetres when set at `font_size_pt`
    #[must_use]
    pub fn measure_mm(&self, s: &str, font_size_pt: f32) -> f32 {
        self.measure_em(s) * font_size_pt * MM_PER_PT
    }

    /// Width of a single space in millimetres at `font_size_pt`
    #[must_use]
    pub fn space_mm(&self, font_size_pt: f32) -> f32 {
        self.widths[0] * font_size_pt * MM_PER_PT
    }
}

#[rustfmt::skip]
static HELVETICA: FontMetrics = FontMetrics {
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0-9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
    ascent: 0.718,
};

#[rustfmt::skip]
static HELVETICA_BOLD: FontMetrics = FontMetrics {
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0-9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.584,
    ascent: 0.718,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_known_strings() {
        let m = FontMetrics::for_face(FontFace::Regular);
        // "Hi" = H (0.722) + i (0.222)
        assert!((m.measure_em("Hi") - 0.944).abs() < 1e-6);
        assert!((m.measure_em(" ") - 0.278).abs() < 1e-6);
        assert_eq!(m.measure_em(""), 0.0);
    }

    #[test]
    fn bold_is_wider() {
        let regular = FontMetrics::for_face(FontFace::Regular);
        let bold = FontMetrics::for_face(FontFace::Bold);
        assert!(bold.measure_em("Bingo Card") > regular.measure_em("Bingo Card"));
    }

    #[test]
    fn non_ascii_uses_average() {
        let m = FontMetrics::for_face(FontFace::Regular);
        assert!((m.measure_em("é") - 0.556).abs() < 1e-6);
    }

    #[test]
    fn millimetre_conversion() {
        let m = FontMetrics::for_face(FontFace::Regular);
        // 72pt em square is one inch
        assert!((m.measure_mm("M", 72.0) - 0.833 * 25.4).abs() < 1e-3);
        assert!((m.space_mm(10.0) - 0.278 * 10.0 * MM_PER_PT).abs() < 1e-6);
    }
}
