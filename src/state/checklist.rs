//! Checklist structure and management

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecklistError {
    #[error("task text must not be empty")]
    EmptyText,
    #[error("no task with id {0}")]
    NotFound(u64),
}

/// A single entry of the checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Ordered list of tasks with completion tracking
#[derive(Debug, Clone, Default)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
    next_id: u64,
}

impl Checklist {
    /// Create an empty checklist
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the checklist the dashboard opens with: three tasks, the first done
    pub fn with_samples() -> Self {
        let items: Vec<ChecklistItem> = [
            ("Review React components", true),
            ("Write documentation", false),
            ("Deploy to production", false),
        ]
        .into_iter()
        .zip(1..)
        .map(|((text, completed), id)| ChecklistItem {
            id,
            text: text.to_string(),
            completed,
        })
        .collect();

        Self {
            next_id: items.len() as u64,
            items,
        }
    }

    /// Append a task. Surrounding whitespace is dropped and blank text rejected.
    pub fn add(&mut self, text: &str) -> Result<ChecklistItem, ChecklistError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChecklistError::EmptyText);
        }

        self.next_id += 1;
        let item = ChecklistItem {
            id: self.next_id,
            text: text.to_string(),
            completed: false,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// Flip the completion flag of a task
    pub fn toggle(&mut self, id: u64) -> Result<ChecklistItem, ChecklistError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ChecklistError::NotFound(id))?;
        item.completed = !item.completed;
        Ok(item.clone())
    }

    /// Remove a task, keeping the order of the others
    pub fn remove(&mut self, id: u64) -> Result<ChecklistItem, ChecklistError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ChecklistError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Share of completed tasks in `0.0..=1.0`, zero for an empty list
    pub fn progress_ratio(&self) -> f64 {
        if self.items.is_empty() {
            0.0
        } else {
            self.completed_count() as f64 / self.items.len() as f64
        }
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_ratio() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_assigns_fresh_ids() {
        let mut checklist = Checklist::new();
        let first = checklist.add("  write tests ").unwrap();
        let second = checklist.add("ship").unwrap();

        assert_eq!(first.text, "write tests");
        assert!(!first.completed);
        assert_ne!(first.id, second.id);
        assert_eq!(checklist.len(), 2);
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut checklist = Checklist::new();
        assert_eq!(checklist.add("   "), Err(ChecklistError::EmptyText));
        assert_eq!(checklist.add(""), Err(ChecklistError::EmptyText));
        assert!(checklist.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut checklist = Checklist::new();
        let first = checklist.add("a").unwrap();
        checklist.remove(first.id).unwrap();
        let second = checklist.add("b").unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn toggle_flips_completion() {
        let mut checklist = Checklist::new();
        let item = checklist.add("a").unwrap();

        assert!(checklist.toggle(item.id).unwrap().completed);
        assert!(!checklist.toggle(item.id).unwrap().completed);
        assert_eq!(checklist.toggle(99), Err(ChecklistError::NotFound(99)));
    }

    #[test]
    fn remove_keeps_order_of_remaining_items() {
        let mut checklist = Checklist::new();
        let a = checklist.add("a").unwrap();
        let b = checklist.add("b").unwrap();
        let c = checklist.add("c").unwrap();

        assert_eq!(checklist.remove(b.id).unwrap().text, "b");
        let ids: Vec<u64> = checklist.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
        assert_eq!(checklist.remove(b.id), Err(ChecklistError::NotFound(b.id)));
    }

    #[test]
    fn progress_tracks_completed_share() {
        let mut checklist = Checklist::new();
        assert_eq!(checklist.progress_ratio(), 0.0);

        let a = checklist.add("a").unwrap();
        checklist.add("b").unwrap();
        checklist.add("c").unwrap();
        checklist.add("d").unwrap();
        checklist.toggle(a.id).unwrap();

        assert_eq!(checklist.completed_count(), 1);
        assert_eq!(checklist.progress_ratio(), 0.25);
        assert_eq!(checklist.progress_percent(), 25.0);
    }

    #[test]
    fn samples_start_with_one_done() {
        let checklist = Checklist::with_samples();
        assert_eq!(checklist.len(), 3);
        assert_eq!(checklist.completed_count(), 1);
        assert!(checklist.items()[0].completed);
        assert_eq!(checklist.items()[0].text, "Review React components");
    }

    #[test]
    fn samples_do_not_collide_with_new_ids() {
        let mut checklist = Checklist::with_samples();
        let added = checklist.add("plan sprint").unwrap();
        assert_eq!(added.id, 4);
        assert_eq!(checklist.len(), 4);
    }
}
