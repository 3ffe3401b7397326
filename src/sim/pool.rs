//! Fixed-capacity entity pools
//!
//! A pool is filled once when the world is laid out and never grows or
//! shrinks afterwards. It derefs to a slice, so members can be read and
//! mutated in place but not pushed or removed.

use std::ops::{Deref, DerefMut};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;

/// Anything with a box in the play field
pub trait Body {
    fn pos(&self) -> Vec2;
    fn pos_mut(&mut self) -> &mut Vec2;
    fn size(&self) -> Vec2;

    fn aabb(&self) -> Aabb {
        Aabb::new(self.pos(), self.size())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T> Pool<T> {
    /// Freeze `items` into a pool; its length is the pool's capacity
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Body> Pool<T> {
    /// Move every member vertically by `dy`
    pub fn shift_y(&mut self, dy: f32) {
        for item in &mut self.items {
            item.pos_mut().y += dy;
        }
    }

    /// Largest y among all members other than `skip`
    pub fn bottom_most_y_excluding(&self, skip: usize) -> Option<f32> {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, item)| item.pos().y)
            .reduce(f32::max)
    }
}

impl<T> Deref for Pool<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for Pool<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}
