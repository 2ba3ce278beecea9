use glam::Vec2;

use crate::core::projectile::Projectile;
use crate::core::target::Target;

/// Knock down every standing target the projectile overlaps.
/// Returns the positions of targets destroyed this tick.
pub fn resolve_collisions(projectile: &Projectile, targets: &mut [Target]) -> Vec<Vec2> {
    targets
        .iter_mut()
        .filter_map(|t| t.check_collision(projectile.pos, projectile.radius).then_some(t.pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_target_counts_once() {
        let bird = Projectile::new(Vec2::new(100.0, 100.0), 15.0);
        let mut targets = vec![
            Target::new(Vec2::new(120.0, 100.0), 20.0),
            Target::new(Vec2::new(300.0, 100.0), 20.0),
            Target::new(Vec2::new(100.0, 130.0), 20.0),
        ];
        let hits = resolve_collisions(&bird, &mut targets);
        assert_eq!(hits, vec![Vec2::new(120.0, 100.0), Vec2::new(100.0, 130.0)]);
        assert!(resolve_collisions(&bird, &mut targets).is_empty());
        assert!(!targets[1].destroyed);
    }
}
