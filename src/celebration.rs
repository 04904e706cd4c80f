//! Confetti for the celebration screen
//!
//! A burst is generated once on entering Celebration and is then pure data:
//! the front end samples [`ConfettiPiece::position_at`] (or hands the launch
//! values to CSS) to animate it. Coordinates are normalized to the viewport,
//! `(0, 0)` top-left and `(1, 1)` bottom-right.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Downward acceleration in viewports/s²
pub const CONFETTI_GRAVITY: f32 = 0.9;
/// How long a piece stays on screen (seconds)
pub const CONFETTI_LIFETIME: f32 = 3.5;

/// Palette, as CSS hex colors
pub const CONFETTI_COLORS: [&str; 5] = ["#ec9e0e", "#4865f4", "#dc2e4e", "#40b9ce", "#f5f5f5"];

/// A single piece of confetti
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfettiPiece {
    /// Launch position
    pub pos: Vec2,
    /// Launch velocity (viewports/s)
    pub vel: Vec2,
    /// Index into [`CONFETTI_COLORS`]
    pub color: usize,
    /// Seconds after the burst before this piece appears
    pub delay: f32,
    /// Spin in degrees/s
    pub spin: f32,
    /// Edge length in px
    pub size: f32,
}

impl ConfettiPiece {
    pub fn color_css(&self) -> &'static str {
        CONFETTI_COLORS[self.color % CONFETTI_COLORS.len()]
    }

    /// Position `t` seconds after the burst started
    pub fn position_at(&self, t: f32) -> Vec2 {
        let t = (t - self.delay).max(0.0);
        self.pos + self.vel * t + Vec2::new(0.0, 0.5 * CONFETTI_GRAVITY * t * t)
    }
}

/// Generate a burst of `count` pieces launched upward from the bottom edge
pub fn generate_confetti(seed: u64, count: usize) -> Vec<ConfettiPiece> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count)
        .map(|_| ConfettiPiece {
            pos: Vec2::new(rng.random_range(0.1..0.9), 1.0),
            vel: Vec2::new(rng.random_range(-0.25..0.25), rng.random_range(-1.4..-0.8)),
            color: rng.random_range(0..CONFETTI_COLORS.len()),
            delay: rng.random_range(0.0..0.6),
            spin: rng.random_range(-720.0..720.0),
            size: rng.random_range(6.0..12.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_at(piece: &ConfettiPiece, t: f32) -> bool {
        t - piece.delay < CONFETTI_LIFETIME && piece.position_at(t).y <= 1.1
    }

    #[test]
    fn test_burst_size_and_determinism() {
        let a = generate_confetti(7, 50);
        let b = generate_confetti(7, 50);
        assert_eq!(a.len(), 50);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
        }
        assert!(generate_confetti(7, 0).is_empty());
    }

    #[test]
    fn test_pieces_start_at_bottom_moving_up() {
        for piece in generate_confetti(99, 100) {
            assert_eq!(piece.position_at(0.0).y, 1.0);
            assert!(piece.vel.y < 0.0);
            assert!((0.0..=1.0).contains(&piece.pos.x));
            assert!(piece.color < CONFETTI_COLORS.len());
        }
    }

    #[test]
    fn test_gravity_brings_pieces_down() {
        let piece = ConfettiPiece {
            pos: Vec2::new(0.5, 1.0),
            vel: Vec2::new(0.0, -1.0),
            color: 0,
            delay: 0.0,
            spin: 0.0,
            size: 8.0,
        };
        // Apex at t = v / g
        let apex = 1.0 / CONFETTI_GRAVITY;
        assert!(piece.position_at(apex).y < piece.position_at(0.0).y);
        assert!(piece.position_at(apex * 2.0).y >= 0.999);
        assert!(alive_at(&piece, 0.5));
        assert!(!alive_at(&piece, CONFETTI_LIFETIME + 0.1));
    }

    #[test]
    fn test_delay_holds_piece_at_launch() {
        let mut piece = generate_confetti(1, 1).remove(0);
        piece.delay = 0.5;
        assert_eq!(piece.position_at(0.3), piece.pos);
    }
}
