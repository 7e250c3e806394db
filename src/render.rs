// render.rs - Encode simulation state to output buffer
//
// Output encoding (for canvas rendering):
//   [x0, y0, x1, y1, ...]  centre of every entity drawn this frame, f32
//
// Hidden entities (respawn pending) are simply absent. The host clears the
// canvas and draws one circle or sprite stamp per pair.

pub struct Encoder {
    out: Vec<f32>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.out.clear();
    }

    #[inline]
    pub fn push(&mut self, x: f32, y: f32) {
        self.out.push(x);
        self.out.push(y);
    }

    pub fn ptr(&self) -> *const f32 {
        self.out.as_ptr()
    }

    /// Number of encoded points
    pub fn len(&self) -> usize {
        self.out.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Raw buffer, two floats per point
    pub fn floats(&self) -> &[f32] {
        &self.out
    }

    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.out.chunks_exact(2).map(|p| (p[0], p[1]))
    }
}

/// Where a sprite stamp goes for an entity centred at (x, y).
/// The stamp is `size` wide, offset by half of it.
#[inline]
pub fn stamp_origin(x: f32, y: f32, size: f32) -> (f32, f32) {
    let half = size * 0.5;
    (x - half, y - half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_interleaved() {
        let mut enc = Encoder::new();
        enc.push(1.0, 2.0);
        enc.push(3.5, -4.0);
        assert_eq!(enc.len(), 2);
        assert_eq!(enc.floats(), &[1.0, 2.0, 3.5, -4.0]);
        assert_eq!(enc.points().collect::<Vec<_>>(), vec![(1.0, 2.0), (3.5, -4.0)]);
    }

    #[test]
    fn clear_empties_buffer() {
        let mut enc = Encoder::new();
        enc.push(1.0, 1.0);
        enc.clear();
        assert!(enc.is_empty());
        assert_eq!(enc.len(), 0);
    }

    #[test]
    fn stamp_is_centred() {
        assert_eq!(stamp_origin(100.0, 60.0, 40.0), (80.0, 40.0));
    }
}
