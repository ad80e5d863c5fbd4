//! Obstacle pool and spawning
//!
//! A fixed pool of obstacles is allocated once and recycled forever. Whether
//! an obstacle is free is derived from its x alone: anything left of the
//! screen (x < 0) or past the spawn origin is available.

use rand::Rng;
use rand_pcg::Pcg32;

use super::collider::Collider;
use super::obstacle::Obstacle;
use crate::config::SpawnerOptions;
use crate::renderer::DrawSurface;

#[derive(Debug)]
pub struct Spawner {
    /// Every obstacle this spawner will ever use
    pool: Vec<Obstacle>,
    /// Pool indices on screen, in spawn order
    active: Vec<usize>,
    pub max_active: usize,
    /// Leftward scroll per tick
    pub speed: f32,
    /// Spawned obstacles appear at this x
    pub origin_x: f32,
    pub min_length: f32,
    pub max_length: f32,
    last_spawned: Option<usize>,
    /// Distance the last spawn must travel before the next one
    next_gap: f32,
    rng: Pcg32,
}

impl Spawner {
    /// Build the pool from the configured descriptors, all parked
    pub fn new(options: &SpawnerOptions, origin_x: f32, ground_y: f32, rng: Pcg32) -> Self {
        let pool: Vec<Obstacle> = options
            .obstacles
            .iter()
            .map(|desc| Obstacle::from_descriptor(desc, ground_y))
            .collect();

        if pool.is_empty() {
            log::warn!("Spawner created with an empty obstacle pool; nothing will spawn");
        }

        Self {
            active: Vec::with_capacity(options.max_active),
            pool,
            max_active: options.max_active,
            speed: options.speed,
            origin_x,
            min_length: options.min_length,
            max_length: options.max_length,
            last_spawned: None,
            next_gap: options.min_length,
            rng,
        }
    }

    /// Scroll active obstacles, drop those off screen, then try to spawn.
    /// Returns the pool index of a newly spawned obstacle.
    pub fn update(&mut self) -> Option<usize> {
        for &idx in &self.active {
            self.pool[idx].collider.position.offset(-self.speed, 0.0);
        }

        let pool = &self.pool;
        self.active.retain(|&idx| {
            let keep = pool[idx].x() >= 0.0;
            if !keep {
                log::trace!("Obstacle {} left the screen", idx);
            }
            keep
        });

        self.try_spawn()
    }

    /// Spawn a random free obstacle if the active cap and gap allow it
    pub fn try_spawn(&mut self) -> Option<usize> {
        if self.active.len() >= self.max_active {
            return None;
        }

        if let Some(last) = self.last_spawned {
            if self.pool[last].x() > self.origin_x - self.next_gap {
                return None;
            }
        }

        let inactive = self.inactive_indices();
        if inactive.is_empty() {
            return None;
        }

        let pick = inactive[self.rng.random_range(0..inactive.len())];
        self.spawn(pick);
        Some(pick)
    }

    fn spawn(&mut self, idx: usize) {
        self.pool[idx].collider.position.set_x(self.origin_x);
        self.active.push(idx);
        self.last_spawned = Some(idx);
        self.next_gap = self.draw_gap();
        log::debug!(
            "Spawned obstacle {} at x={} (next gap {:.1})",
            idx,
            self.origin_x,
            self.next_gap
        );
    }

    fn draw_gap(&mut self) -> f32 {
        let high = self.min_length + self.max_length;
        // Empty or unbounded range has nothing to sample from
        if high.is_finite() && high > self.min_length {
            self.rng.random_range(self.min_length..high)
        } else {
            self.min_length
        }
    }

    /// Pool indices currently free for spawning
    pub fn inactive_indices(&self) -> Vec<usize> {
        self.pool
            .iter()
            .enumerate()
            .filter(|(_, o)| self.is_inactive(o))
            .map(|(i, _)| i)
            .collect()
    }

    fn is_inactive(&self, obstacle: &Obstacle) -> bool {
        let x = obstacle.x();
        x < 0.0 || x > self.origin_x
    }

    /// On-screen obstacles in spawn order
    pub fn active_obstacles(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.active.iter().map(move |&i| &self.pool[i])
    }

    pub fn active_colliders(&self) -> impl Iterator<Item = &Collider> + '_ {
        self.active_obstacles().map(|o| &o.collider)
    }

    pub fn active_indices(&self) -> &[usize] {
        &self.active
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn pool(&self) -> &[Obstacle] {
        &self.pool
    }

    pub fn last_spawned(&self) -> Option<usize> {
        self.last_spawned
    }

    pub fn next_gap(&self) -> f32 {
        self.next_gap
    }

    /// Draw a fresh seed from this spawner's RNG stream
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        for obstacle in self.active_obstacles() {
            obstacle.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ObstacleDescriptor;
    use crate::consts::INACTIVE_X;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const GROUND_Y: f32 = 200.0;

    fn rock(width: f32) -> ObstacleDescriptor {
        ObstacleDescriptor::Rock {
            width,
            height: 20.0,
            parts: 1.0,
        }
    }

    fn options(pool: usize, max_active: usize, speed: f32, min: f32, max: f32) -> SpawnerOptions {
        SpawnerOptions {
            obstacles: (0..pool).map(|_| rock(20.0)).collect(),
            max_active,
            speed,
            min_length: min,
            max_length: max,
        }
    }

    fn spawner(opts: &SpawnerOptions, origin_x: f32, seed: u64) -> Spawner {
        Spawner::new(opts, origin_x, GROUND_Y, Pcg32::seed_from_u64(seed))
    }

    #[test]
    fn test_pool_starts_inactive() {
        let s = spawner(&options(4, 2, 5.0, 50.0, 50.0), 300.0, 1);
        assert_eq!(s.active_count(), 0);
        assert_eq!(s.inactive_indices().len(), 4);
        for o in s.pool() {
            assert_eq!(o.x(), INACTIVE_X);
            assert_eq!(o.collider.position.y(), GROUND_Y - o.height());
        }
    }

    #[test]
    fn test_first_update_spawns_at_origin() {
        let mut s = spawner(&options(3, 2, 5.0, 50.0, 50.0), 300.0, 1);
        let idx = s.update().unwrap();
        assert_eq!(s.pool()[idx].x(), 300.0);
        assert_eq!(s.active_indices(), &[idx]);
        assert_eq!(s.last_spawned(), Some(idx));
        assert!(s.next_gap() >= 50.0 && s.next_gap() < 100.0);
    }

    #[test]
    fn test_scrolls_and_despawns() {
        let mut s = spawner(&options(1, 1, 5.0, 50.0, 50.0), 100.0, 1);
        assert_eq!(s.update(), Some(0));
        for _ in 0..20 {
            s.update();
        }
        // 100 - 20 * 5
        assert_eq!(s.pool()[0].x(), 0.0);
        assert_eq!(s.active_count(), 1);

        // One more step goes off screen and the same obstacle is recycled
        assert_eq!(s.update(), Some(0));
        assert_eq!(s.pool()[0].x(), 100.0);
    }

    #[test]
    fn test_gap_blocks_spawn() {
        let mut s = spawner(&options(3, 3, 10.0, 50.0, 0.0), 300.0, 1);
        let first = s.update().unwrap();
        // Needs to travel 50: five ticks of 10
        for _ in 0..4 {
            assert_eq!(s.update(), None);
        }
        let second = s.update().unwrap();
        assert_ne!(first, second);
        assert_eq!(s.pool()[first].x(), 250.0);
    }

    #[test]
    fn test_max_active_blocks_spawn() {
        let mut s = spawner(&options(3, 1, 10.0, 0.0, 0.0), 300.0, 1);
        s.update();
        for _ in 0..10 {
            assert_eq!(s.update(), None);
            assert_eq!(s.active_count(), 1);
        }
    }

    #[test]
    fn test_no_inactive_is_noop() {
        // Deliberately degenerate: cap larger than the pool
        let mut s = spawner(&options(2, 5, 1.0, 0.0, 0.0), 300.0, 1);
        s.update();
        s.update();
        assert_eq!(s.active_count(), 2);
        assert!(s.inactive_indices().is_empty());
        assert_eq!(s.update(), None);
        assert_eq!(s.active_count(), 2);
    }

    #[test]
    fn test_empty_pool_never_spawns() {
        let mut s = spawner(&options(0, 1, 1.0, 0.0, 0.0), 300.0, 1);
        for _ in 0..5 {
            assert_eq!(s.update(), None);
        }
    }

    #[test]
    fn test_overflowing_gap_range_falls_back_to_min() {
        // min + max overflows f32 to infinity
        let mut s = spawner(&options(2, 2, 1.0, 2e38, 2e38), 300.0, 1);
        assert!(s.update().is_some());
        assert_eq!(s.next_gap(), 2e38);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let opts = options(5, 3, 7.0, 30.0, 60.0);
        let mut a = spawner(&opts, 400.0, 42);
        let mut b = spawner(&opts, 400.0, 42);
        for _ in 0..300 {
            assert_eq!(a.update(), b.update());
        }
    }

    #[test]
    fn test_draw_only_active() {
        let mut s = spawner(&options(3, 1, 5.0, 50.0, 50.0), 300.0, 1);
        let mut surface = crate::renderer::RecordingSurface::new();
        s.draw(&mut surface);
        assert!(surface.commands.is_empty());

        s.update();
        s.draw(&mut surface);
        assert!(surface.count_rects() > 0);
    }

    proptest! {
        #[test]
        fn prop_active_capped_and_unique(
            seed in any::<u64>(),
            pool in 1usize..8,
            max_active in 1usize..8,
            speed in 1.0f32..40.0,
            min in 0.0f32..100.0,
            max in 0.0f32..100.0,
        ) {
            let max_active = max_active.min(pool);
            let mut s = spawner(&options(pool, max_active, speed, min, max), 300.0, seed);
            for _ in 0..500 {
                s.update();
                prop_assert!(s.active_count() <= max_active);
                let unique: HashSet<_> = s.active_indices().iter().collect();
                prop_assert_eq!(unique.len(), s.active_count());
            }
        }

        #[test]
        fn prop_gap_respected(
            seed in any::<u64>(),
            speed in 1.0f32..40.0,
            min in 0.0f32..150.0,
            max in 0.0f32..150.0,
        ) {
            let origin = 500.0;
            let mut s = spawner(&options(6, 6, speed, min, max), origin, seed);
            for _ in 0..500 {
                let previous = s.last_spawned();
                let gap = s.next_gap();
                let prev_x = previous.map(|i| s.pool()[i].x() - speed);
                if s.update().is_some() {
                    if let (Some(_), Some(prev_x)) = (previous, prev_x) {
                        // prev_x is where the previous obstacle sat after this tick's scroll
                        prop_assert!(origin - prev_x >= gap - 1e-3);
                        prop_assert!(gap >= min);
                    }
                }
            }
        }
    }
}
