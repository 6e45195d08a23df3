use folio_types::DocumentId;

/// Which document is shown, which are open as tabs, and whether the
/// quick-open palette is up.
///
/// Invariants upheld by every method:
/// - `open_tabs` is never empty and never holds the same id twice
/// - `active` is always one of `open_tabs`
///
/// Breaking either is a programming defect, checked by debug assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    home: DocumentId,
    active: DocumentId,
    open_tabs: Vec<DocumentId>,
    palette_visible: bool,
}

impl Navigation {
    pub fn new(home: DocumentId) -> Self {
        Self {
            active: home.clone(),
            open_tabs: vec![home.clone()],
            home,
            palette_visible: false,
        }
    }

    pub fn home(&self) -> &DocumentId {
        &self.home
    }

    pub fn active(&self) -> &DocumentId {
        &self.active
    }

    pub fn open_tabs(&self) -> &[DocumentId] {
        &self.open_tabs
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_tabs.iter().any(|tab| tab == id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn palette_visible(&self) -> bool {
        self.palette_visible
    }

    /// Show `id`, appending it as the right-most tab if it is not open yet
    pub fn open_document(&mut self, id: &DocumentId) {
        if !self.is_open(id.as_str()) {
            self.open_tabs.push(id.clone());
        }
        self.active = id.clone();
        self.check_invariants();
    }

    /// Close the tab for `id`.
    ///
    /// Closing the last tab reopens home. Closing the active tab activates
    /// the last remaining tab (most recently opened), not the positional
    /// neighbour.
    pub fn close_tab(&mut self, id: &str) {
        self.open_tabs.retain(|tab| tab != id);
        if self.open_tabs.is_empty() {
            self.open_tabs.push(self.home.clone());
        }

        if self.active == id
            && let Some(last) = self.open_tabs.last()
        {
            self.active = last.clone();
        }
        self.check_invariants();
    }

    /// Activate an already open tab. Returns false (and changes nothing)
    /// when `id` is not open.
    pub fn select_tab(&mut self, id: &str) -> bool {
        match self.open_tabs.iter().find(|tab| *tab == id) {
            Some(tab) => {
                self.active = tab.clone();
                true
            }
            None => false,
        }
    }

    /// Activate the tab right of the active one, wrapping around
    pub fn select_next_tab(&mut self) {
        let index = self.active_index();
        let next = (index + 1) % self.open_tabs.len();
        self.active = self.open_tabs[next].clone();
    }

    /// Activate the tab left of the active one, wrapping around
    pub fn select_previous_tab(&mut self) {
        let index = self.active_index();
        let previous = (index + self.open_tabs.len() - 1) % self.open_tabs.len();
        self.active = self.open_tabs[previous].clone();
    }

    /// Returns true when the palette went from hidden to visible; the
    /// caller resets the palette query on that edge.
    pub fn set_palette_visible(&mut self, visible: bool) -> bool {
        let became_visible = visible && !self.palette_visible;
        self.palette_visible = visible;
        became_visible
    }

    fn active_index(&self) -> usize {
        self.open_tabs
            .iter()
            .position(|tab| *tab == self.active)
            .unwrap_or(0)
    }

    fn check_invariants(&self) {
        debug_assert!(!self.open_tabs.is_empty(), "open tabs must never be empty");
        debug_assert!(
            self.open_tabs
                .iter()
                .enumerate()
                .all(|(i, tab)| !self.open_tabs[..i].contains(tab)),
            "open tabs must not contain duplicates: {:?}",
            self.open_tabs
        );
        debug_assert!(
            self.open_tabs.contains(&self.active),
            "active document {} is not an open tab",
            self.active
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> DocumentId {
        DocumentId::new(s)
    }

    fn tabs(nav: &Navigation) -> Vec<&str> {
        nav.open_tabs().iter().map(|t| t.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigation::new(id("README.md"));
        assert_eq!(nav.active(), &"README.md");
        assert_eq!(tabs(&nav), vec!["README.md"]);
        assert!(!nav.palette_visible());
    }

    #[test]
    fn test_open_appends_once() {
        let mut nav = Navigation::new(id("README.md"));
        nav.open_document(&id("projects.md"));
        nav.open_document(&id("research.md"));
        nav.open_document(&id("projects.md"));

        assert_eq!(nav.active(), &"projects.md");
        assert_eq!(tabs(&nav), vec!["README.md", "projects.md", "research.md"]);
    }

    #[test]
    fn test_close_active_activates_last_remaining_tab() {
        let mut nav = Navigation::new(id("README.md"));
        nav.open_document(&id("projects.md"));
        nav.open_document(&id("research.md"));
        nav.open_document(&id("intern.md"));
        nav.select_tab("projects.md");

        nav.close_tab("projects.md");

        assert_eq!(tabs(&nav), vec!["README.md", "research.md", "intern.md"]);
        assert_eq!(nav.active(), &"intern.md");
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut nav = Navigation::new(id("README.md"));
        nav.open_document(&id("projects.md"));
        nav.open_document(&id("research.md"));

        nav.close_tab("projects.md");

        assert_eq!(nav.active(), &"research.md");
        assert_eq!(tabs(&nav), vec!["README.md", "research.md"]);
    }

    #[test]
    fn test_closing_home_alone_reinserts_home() {
        let mut nav = Navigation::new(id("README.md"));
        nav.close_tab("README.md");

        assert_eq!(tabs(&nav), vec!["README.md"]);
        assert_eq!(nav.active(), &"README.md");
    }

    #[test]
    fn test_closing_home_with_others_open_is_permitted() {
        let mut nav = Navigation::new(id("README.md"));
        nav.open_document(&id("projects.md"));

        nav.close_tab("README.md");

        assert_eq!(tabs(&nav), vec!["projects.md"]);
        assert_eq!(nav.active(), &"projects.md");

        nav.close_tab("projects.md");
        assert_eq!(tabs(&nav), vec!["README.md"]);
        assert_eq!(nav.active(), &"README.md");
    }

    #[test]
    fn test_select_unopened_tab_is_noop() {
        let mut nav = Navigation::new(id("README.md"));
        assert!(!nav.select_tab("projects.md"));
        assert_eq!(nav.active(), &"README.md");
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut nav = Navigation::new(id("README.md"));
        nav.open_document(&id("projects.md"));

        nav.select_next_tab();
        assert_eq!(nav.active(), &"README.md");
        nav.select_previous_tab();
        assert_eq!(nav.active(), &"projects.md");
    }

    #[test]
    fn test_palette_visibility_reports_rising_edge_only() {
        let mut nav = Navigation::new(id("README.md"));
        assert!(nav.set_palette_visible(true));
        assert!(!nav.set_palette_visible(true));
        assert!(!nav.set_palette_visible(false));
        assert!(!nav.palette_visible());
    }
}
