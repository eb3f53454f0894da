//! Tabbed operations panel
//!
//! Tabs and their content panes are paired by id. Exactly one pair is active
//! at a time.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
    ids: Vec<String>,
    active: usize,
}

impl TabPanel {
    /// Panel with the first tab active. Returns `None` without tabs.
    pub fn new<I, S>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return None;
        }
        Some(Self { ids, active: 0 })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn active_id(&self) -> &str {
        &self.ids[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    /// Value of the tab's `aria-selected` attribute.
    pub fn aria_selected(&self, id: &str) -> &'static str {
        if self.is_active(id) { "true" } else { "false" }
    }

    /// Class marking the content pane for `id`.
    pub fn content_class(id: &str) -> String {
        format!("operations__content--{id}")
    }

    /// Activate the tab with `id`. Clicks that miss every tab are ignored.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|candidate| candidate == id) {
            Some(idx) => {
                self.active = idx;
                log::debug!("Tab {id} activated");
                true
            }
            None => false,
        }
    }

    /// Activate by position (keyboard shortcuts in terminal hosts).
    pub fn activate_index(&mut self, idx: usize) -> bool {
        if idx < self.ids.len() {
            self.active = idx;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_active_pair() {
        let mut tabs = TabPanel::new(["1", "2", "3"]).expect("tabs");
        assert!(tabs.is_active("1"));
        assert!(tabs.activate("3"));
        assert_eq!(tabs.aria_selected("3"), "true");
        assert_eq!(tabs.aria_selected("1"), "false");
        assert_eq!(TabPanel::content_class("3"), "operations__content--3");
    }

    #[test]
    fn unknown_tab_is_ignored() {
        let mut tabs = TabPanel::new(["a"]).expect("tabs");
        assert!(!tabs.activate("z"));
        assert_eq!(tabs.active_id(), "a");
        assert!(TabPanel::new(Vec::<String>::new()).is_none());
    }
}
