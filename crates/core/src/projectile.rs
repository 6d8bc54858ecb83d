//! Projectile store - live bullets of one faction
//!
//! Projectiles live in a slot arena. Every slot carries a generation counter
//! that is bumped whenever its projectile is removed, so a [`ProjectileId`]
//! handed out before the removal never resolves again, even once the slot is
//! reused for a new spawn. Freed slots are recycled through a free list, which
//! keeps `spawn` O(1) and the backing storage bounded by the peak live count.
//!
//! Iteration order is slot order and carries no meaning.

use crate::types::Vec2;

/// A single bullet: position in logical pixels, velocity in pixels/second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Generation-tagged handle into a [`ProjectileStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectileId {
    index: u32,
    generation: u32,
}

impl ProjectileId {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    projectile: Option<Projectile>,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectileStore {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl ProjectileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Add a projectile. Never fails; there is no upper bound.
    pub fn spawn(&mut self, position: Vec2, velocity: Vec2) -> ProjectileId {
        let projectile = Some(Projectile { position, velocity });
        self.live += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.projectile = projectile;
            return ProjectileId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            projectile,
        });
        ProjectileId {
            index,
            generation: 0,
        }
    }

    /// Move every live projectile by `velocity * dt`.
    pub fn advance(&mut self, dt: f32) {
        for p in self.slots.iter_mut().filter_map(|s| s.projectile.as_mut()) {
            p.position += p.velocity * dt;
        }
    }

    /// Remove every projectile outside `[0, width] x [0, height]`.
    ///
    /// Points exactly on an edge stay. Returns how many were removed.
    pub fn prune_out_of_bounds(&mut self, width: f32, height: f32) -> usize {
        let mut removed = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let outside = match &slot.projectile {
                Some(p) => {
                    let Vec2 { x, y } = p.position;
                    x < 0.0 || x > width || y < 0.0 || y > height
                }
                None => false,
            };
            if outside {
                slot.projectile = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
                removed += 1;
            }
        }
        self.live -= removed;
        removed
    }

    /// Every `(mine, theirs)` pair closer than `radius`.
    pub fn collisions_against(
        &self,
        other: &ProjectileStore,
        radius: f32,
    ) -> Vec<(ProjectileId, ProjectileId)> {
        let mut hits = Vec::new();
        for (a_id, a) in self.iter() {
            for (b_id, b) in other.iter() {
                if a.position.distance(b.position) < radius {
                    hits.push((a_id, b_id));
                }
            }
        }
        hits
    }

    /// Every projectile closer than `radius` to a static point.
    pub fn hits_on(&self, point: Vec2, radius: f32) -> Vec<ProjectileId> {
        self.iter()
            .filter(|(_, p)| p.position.distance(point) < radius)
            .map(|(id, _)| id)
            .collect()
    }

    /// Remove a projectile. Stale handles return `None` and change nothing.
    pub fn remove(&mut self, id: ProjectileId) -> Option<Projectile> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let projectile = slot.projectile.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(projectile)
    }

    pub fn get(&self, id: ProjectileId) -> Option<&Projectile> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.projectile.as_ref()
    }

    pub fn contains(&self, id: ProjectileId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProjectileId, &Projectile)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.projectile.as_ref().map(|p| {
                (
                    ProjectileId {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    p,
                )
            })
        })
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Remove everything. Outstanding handles are invalidated.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.projectile.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
        self.live = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn spawn_advance_prune() {
        let mut store = ProjectileStore::new();
        for _ in 0..3 {
            store.spawn(v(0.0, 0.0), v(100.0, 0.0));
        }
        store.advance(1.0);
        assert!(store.iter().all(|(_, p)| p.position == v(100.0, 0.0)));

        assert_eq!(store.prune_out_of_bounds(50.0, 50.0), 3);
        assert!(store.is_empty());
        assert_eq!(store.prune_out_of_bounds(50.0, 50.0), 0);
    }

    #[test]
    fn edges_are_inside() {
        let mut store = ProjectileStore::new();
        store.spawn(v(0.0, 0.0), Vec2::ZERO);
        store.spawn(v(50.0, 50.0), Vec2::ZERO);
        store.spawn(v(50.01, 10.0), Vec2::ZERO);
        store.spawn(v(10.0, -0.01), Vec2::ZERO);
        assert_eq!(store.prune_out_of_bounds(50.0, 50.0), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn zero_dt_keeps_positions() {
        let mut store = ProjectileStore::new();
        let id = store.spawn(v(10.0, 20.0), v(500.0, -500.0));
        store.advance(0.0);
        assert_eq!(store.get(id).map(|p| p.position), Some(v(10.0, 20.0)));
    }

    #[test]
    fn stale_handle_does_not_resolve_after_reuse() {
        let mut store = ProjectileStore::new();
        let old = store.spawn(v(1.0, 1.0), Vec2::ZERO);
        assert!(store.remove(old).is_some());

        let new = store.spawn(v(2.0, 2.0), Vec2::ZERO);
        assert_eq!(old.index(), new.index());
        assert_ne!(old.generation(), new.generation());

        assert!(store.get(old).is_none());
        assert!(store.remove(old).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(new).map(|p| p.position), Some(v(2.0, 2.0)));
    }

    #[test]
    fn pruned_handle_is_stale() {
        let mut store = ProjectileStore::new();
        let id = store.spawn(v(-5.0, 0.0), Vec2::ZERO);
        store.prune_out_of_bounds(100.0, 100.0);
        assert!(!store.contains(id));
        assert!(store.remove(id).is_none());
    }

    #[test]
    fn hits_use_strict_distance() {
        let mut store = ProjectileStore::new();
        let id = store.spawn(v(10.0, 10.0), Vec2::ZERO);
        assert_eq!(store.hits_on(v(15.0, 10.0), 50.0), vec![id]);
        assert!(store.hits_on(v(15.0, 10.0), 4.0).is_empty());
        assert!(store.hits_on(v(15.0, 10.0), 5.0).is_empty());
    }

    #[test]
    fn collisions_between_stores() {
        let mut player = ProjectileStore::new();
        let mut enemy = ProjectileStore::new();
        let a = player.spawn(v(0.0, 0.0), Vec2::ZERO);
        let _far = player.spawn(v(500.0, 500.0), Vec2::ZERO);
        let b = enemy.spawn(v(3.0, 4.0), Vec2::ZERO);

        assert_eq!(player.collisions_against(&enemy, 6.0), vec![(a, b)]);
        assert!(player.collisions_against(&enemy, 5.0).is_empty());
    }

    #[test]
    fn clear_invalidates_everything() {
        let mut store = ProjectileStore::new();
        let ids: Vec<_> = (0..4)
            .map(|i| store.spawn(v(i as f32, 0.0), Vec2::ZERO))
            .collect();
        store.clear();
        assert!(store.is_empty());
        assert!(ids.iter().all(|id| store.get(*id).is_none()));

        for _ in 0..4 {
            store.spawn(Vec2::ZERO, Vec2::ZERO);
        }
        assert_eq!(store.len(), 4);
        assert_eq!(store.iter().count(), 4);
    }
}
