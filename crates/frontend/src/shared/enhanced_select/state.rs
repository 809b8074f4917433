//! Selection state of an enhanced select, independent of the DOM

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: &str, label: &str, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectState {
    pub options: Vec<SelectOption>,
    pub multiple: bool,
    /// Text typed into the search box
    pub query: String,
}

impl SelectState {
    pub fn new(options: Vec<SelectOption>, multiple: bool) -> Self {
        Self {
            options,
            multiple,
            query: String::new(),
        }
    }

    /// Indices of options whose label contains the query (case-insensitive).
    /// Empty-valued placeholder options are only listed for single selects.
    pub fn visible(&self) -> Vec<usize> {
        let needle = self.query.trim().to_lowercase();
        self.options
            .iter()
            .enumerate()
            .filter(|(_, opt)| !(self.multiple && opt.value.is_empty()))
            .filter(|(_, opt)| needle.is_empty() || opt.label.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Choose option `index`. Multi-selects toggle it, single selects replace
    /// the selection. Returns true when the dropdown should close.
    pub fn pick(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        if self.multiple {
            self.options[index].selected = !self.options[index].selected;
        } else {
            for (i, opt) in self.options.iter_mut().enumerate() {
                opt.selected = i == index;
            }
        }
        self.query.clear();
        !self.multiple
    }

    pub fn deselect(&mut self, index: usize) {
        if let Some(opt) = self.options.get_mut(index) {
            opt.selected = false;
        }
    }

    pub fn selected(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, opt)| opt.selected)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|opt| opt.selected)
            .map(|opt| opt.value.clone())
            .collect()
    }

    /// Label shown in the closed control of a single select
    pub fn display_label(&self) -> String {
        self.options
            .iter()
            .find(|opt| opt.selected)
            .map(|opt| opt.label.clone())
            .unwrap_or_default()
    }
}

/// Enter has no default action in a multi-select search box, so it opens the dropdown
pub fn key_opens_dropdown(multiple: bool, key: &str) -> bool {
    multiple && key == "Enter"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(multiple: bool) -> SelectState {
        SelectState::new(
            vec![
                SelectOption::new("", "---------", !multiple),
                SelectOption::new("1", "Ann Lee", false),
                SelectOption::new("2", "Bob Annis", false),
                SelectOption::new("3", "Carla Ruiz", false),
            ],
            multiple,
        )
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut state = people(true);
        state.query = "ANN".to_string();
        assert_eq!(state.visible(), vec![1, 2]);
    }

    #[test]
    fn test_placeholder_hidden_for_multiple() {
        assert_eq!(people(true).visible(), vec![1, 2, 3]);
        assert_eq!(people(false).visible(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_multiple_toggles_and_stays_open() {
        let mut state = people(true);
        state.query = "car".to_string();
        assert!(!state.pick(3));
        assert!(!state.pick(1));
        assert_eq!(state.selected_values(), vec!["1", "3"]);
        assert!(state.query.is_empty());
        assert!(!state.pick(1));
        assert_eq!(state.selected_values(), vec!["3"]);
    }

    #[test]
    fn test_single_replaces_and_closes() {
        let mut state = people(false);
        assert!(state.pick(2));
        assert_eq!(state.selected(), vec![2]);
        assert_eq!(state.display_label(), "Bob Annis");
        assert!(!state.pick(99));
    }

    #[test]
    fn test_deselect() {
        let mut state = people(true);
        state.pick(1);
        state.deselect(1);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_enter_opens_only_multiple() {
        assert!(key_opens_dropdown(true, "Enter"));
        assert!(!key_opens_dropdown(false, "Enter"));
        assert!(!key_opens_dropdown(true, "a"));
    }
}
