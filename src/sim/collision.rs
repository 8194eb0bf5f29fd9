//! Combat geometry
//!
//! The sword is a thick line segment from the player's center out to
//! `sword_reach` along the current swing angle. Bodies (player, enemies,
//! orbs) are circles.

use glam::Vec2;

use super::state::{Enemy, Orb, Player};
use crate::angle_to_dir;

/// Segments shorter than this (squared) are degenerate and never hit
const DEGENERATE_LEN_SQ: f32 = 1e-4;

/// Where the blade came closest to a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwordContact {
    /// Closest point on the blade to the target center
    pub point: Vec2,
    /// Distance from that point to the target center
    pub distance: f32,
}

/// Blade endpoints for a swing angle (degrees)
#[inline]
pub fn sword_segment(origin: Vec2, angle_deg: f32, reach: f32) -> (Vec2, Vec2) {
    (origin, origin + angle_to_dir(angle_deg) * reach)
}

/// Closest point on segment `a..b` to `p`, or `None` for a degenerate segment
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Option<Vec2> {
    let seg = b - a;
    let len_sq = seg.length_squared();
    if len_sq < DEGENERATE_LEN_SQ {
        return None;
    }

    let len = len_sq.sqrt();
    let dir = seg / len;
    let t = (p - a).dot(dir).clamp(0.0, len);
    Some(a + dir * t)
}

/// Test a thick blade against a circle of diameter `target_size`
pub fn sword_contact(
    a: Vec2,
    b: Vec2,
    thickness: f32,
    target: Vec2,
    target_size: f32,
) -> Option<SwordContact> {
    let point = closest_point_on_segment(target, a, b)?;
    let distance = target.distance(point);
    let hit_radius = thickness * 0.5 + target_size * 0.5;
    (distance <= hit_radius).then_some(SwordContact { point, distance })
}

/// Whether the player's blade overlaps `enemy` this tick.
///
/// Only meaningful while the swing is active; an idle blade never hits.
pub fn sword_hits_enemy(player: &Player, enemy: &Enemy) -> bool {
    if !player.swing.can_hit() {
        return false;
    }
    let (a, b) = sword_segment(player.pos, player.swing.current_angle, player.sword_reach);
    sword_contact(a, b, player.sword_thickness, enemy.pos, enemy.size).is_some()
}

/// Circle-circle overlap, touching counts
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let r = ra + rb;
    a.distance_squared(b) <= r * r
}

/// Body contact between an enemy and the player
#[inline]
pub fn enemy_touches_player(enemy: &Enemy, player: &Player) -> bool {
    circles_overlap(enemy.pos, enemy.size / 2.0, player.pos, player.radius())
}

/// Orb close enough to be collected
#[inline]
pub fn orb_in_pickup_range(orb: &Orb, player_pos: Vec2, pickup_range: f32) -> bool {
    circles_overlap(orb.pos, orb.radius, player_pos, pickup_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_point_clamps_to_ends() {
        let a = Vec2::ZERO;
        let b = Vec2::new(100.0, 0.0);

        let mid = closest_point_on_segment(Vec2::new(50.0, 30.0), a, b).unwrap();
        assert!((mid - Vec2::new(50.0, 0.0)).length() < 1e-4);

        let before = closest_point_on_segment(Vec2::new(-20.0, 5.0), a, b).unwrap();
        assert_eq!(before, a);

        let after = closest_point_on_segment(Vec2::new(150.0, -5.0), a, b).unwrap();
        assert!((after - b).length() < 1e-4);
    }

    #[test]
    fn test_zero_length_segment_never_hits() {
        let p = Vec2::new(10.0, 10.0);
        assert!(closest_point_on_segment(p, p, p).is_none());
        assert!(sword_contact(p, p, 1000.0, p, 1000.0).is_none());
    }

    #[test]
    fn test_sword_contact_radius() {
        let (a, b) = sword_segment(Vec2::ZERO, 0.0, 180.0);
        // thickness/2 + size/2 = 14 + 24 = 38
        assert!(sword_contact(a, b, 28.0, Vec2::new(100.0, 38.0), 48.0).is_some());
        assert!(sword_contact(a, b, 28.0, Vec2::new(100.0, 38.5), 48.0).is_none());
        // beyond the tip
        assert!(sword_contact(a, b, 28.0, Vec2::new(230.0, 0.0), 48.0).is_none());
    }

    #[test]
    fn test_sword_segment_direction() {
        let (a, b) = sword_segment(Vec2::new(10.0, 10.0), 90.0, 50.0);
        assert_eq!(a, Vec2::new(10.0, 10.0));
        assert!((b - Vec2::new(10.0, 60.0)).length() < 1e-3);
    }

    #[test]
    fn test_circles_overlap_touching() {
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(10.1, 0.0), 5.0));
    }

    #[test]
    fn test_idle_blade_never_hits() {
        use crate::sim::state::{Enemy, EnemyKind};

        let player = Player::new(Vec2::new(100.0, 100.0));
        let enemy = Enemy::new(1, EnemyKind::Grunt, Vec2::new(150.0, 100.0));
        assert!(!sword_hits_enemy(&player, &enemy));
    }
}
