use serde::{Deserialize, Serialize};

/// A single entry in the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            text,
            completed: false,
        }
    }
}

/// Ordered task list, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new incomplete task. Blank text is ignored.
    /// Returns true if the list changed.
    pub fn add_task(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.tasks.push(Task::new(text.to_string()));
        true
    }

    /// Flip the completion flag of the task at `index`.
    /// Returns true if the list changed (false when out of range).
    pub fn toggle_task(&mut self, index: usize) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Incomplete tasks paired with their index in the full list
    pub fn incomplete(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| !task.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_task_appends_in_order() {
        let mut list = TaskList::default();
        assert!(list.add_task("Write report"));
        assert!(list.add_task("Review PR"));
        assert!(list.add_task("Write report"));

        assert_eq!(list.len(), 3);
        assert_eq!(list.tasks()[0].text, "Write report");
        assert_eq!(list.tasks()[1].text, "Review PR");
        assert_eq!(list.tasks()[2].text, "Write report");
        assert!(list.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_add_blank_task_is_noop() {
        let mut list = TaskList::default();
        assert!(!list.add_task(""));
        assert!(!list.add_task("   "));
        assert!(!list.add_task("\t\n"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_task_keeps_text_as_given() {
        let mut list = TaskList::default();
        list.add_task("  padded  ");
        assert_eq!(list.tasks()[0].text, "  padded  ");
    }

    #[test]
    fn test_toggle_task_is_involution() {
        let mut list = TaskList::default();
        list.add_task("A");
        list.add_task("B");

        assert!(list.toggle_task(1));
        assert!(list.tasks()[1].completed);
        assert!(list.toggle_task(1));
        assert!(!list.tasks()[1].completed);
        assert!(!list.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut list = TaskList::default();
        list.add_task("A");
        let before = list.clone();

        assert!(!list.toggle_task(1));
        assert!(!list.toggle_task(usize::MAX));
        assert_eq!(list, before);
    }

    #[test]
    fn test_incomplete_keeps_original_indices() {
        let mut list = TaskList::default();
        list.add_task("A");
        list.add_task("B");
        list.add_task("C");
        list.toggle_task(1);

        let open: Vec<(usize, &str)> = list
            .incomplete()
            .map(|(i, t)| (i, t.text.as_str()))
            .collect();
        assert_eq!(open, vec![(0, "A"), (2, "C")]);
        assert_eq!(list.completed_count(), 1);
    }
}
