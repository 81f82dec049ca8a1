//! The top-level menu: ordered pages, a current-page cursor, header
//! construction, and the render / read-input / dispatch loop.
//!
//! Structure:
//! - Model: page list, cursor, display flags ("last added page" target)
//! - Navigation: wraparound next/prev, bounds-checked direct jumps
//! - Header: flag-driven synthesis, verbatim override
//! - Loop: render → interpret one token → clear, forever
//!
//! Everything terminal-shaped goes through the [`Console`] trait, so the
//! whole interaction loop runs against a scripted console in tests.

use log::debug;

use crate::console::{Console, NAV_LEFT, NAV_RIGHT};
use crate::element::Element;
use crate::error::MenuError;
use crate::page::{Page, DEFAULT_PAGE_NAME};
use crate::style::Style;

/// Input-prompt marker written at the end of every render.
pub const PROMPT: &str = ">>> ";

/// Name given to a `Ui` created without one.
pub const DEFAULT_UI_NAME: &str = "Untitled UI";

/// A keyboard-navigable menu: named pages of selectable elements.
///
/// The current-page cursor is the only piece of mutable navigation state.
/// The `Ui` exclusively owns its pages, each page its elements; lookups go
/// by index, never by back-reference.
pub struct Ui {
    /// Menu name, shown in the header when `show_name` is set.
    pub name: String,
    /// Explicit header override; when set it is rendered verbatim and the
    /// display flags are ignored.
    pub header: Option<String>,
    /// Show the menu name in the header.
    pub show_name: bool,
    /// Show `<current>/<total>` page numbers in the header.
    pub show_current_page: bool,
    /// Show the `P: <page name>` line in the header.
    pub show_current_page_name: bool,

    pages: Vec<Page>,
    current_page_index: usize,
    /// Target of the `add_element` sugar: the most recently added page.
    last_page_index: Option<usize>,
}

impl Default for Ui {
    fn default() -> Self {
        Ui::new(DEFAULT_UI_NAME)
    }
}

// ============================================================================
// MODEL
// ============================================================================

impl Ui {
    /// Create an empty menu. All header display flags start enabled.
    pub fn new(name: impl Into<String>) -> Ui {
        Ui {
            name: name.into(),
            header: None,
            show_name: true,
            show_current_page: true,
            show_current_page_name: true,
            pages: Vec::new(),
            current_page_index: 0,
            last_page_index: None,
        }
    }

    /// Append a new page and make it the target of the `add_element`
    /// sugar. The first page added becomes the current page.
    pub fn add_page(&mut self, name: impl Into<String>) -> &mut Page {
        let page = Page::new(name);
        debug!("added page {:?}", page.name);

        self.pages.push(page);
        let index = self.pages.len() - 1;
        self.last_page_index = Some(index);
        if index == 0 {
            self.current_page_index = 0;
        }
        &mut self.pages[index]
    }

    /// Append an element to the most recently added page. Never fails for
    /// "no page yet": a default-named page is created implicitly.
    pub fn add_element(&mut self, label: impl Into<String>, style: Style) -> &mut Element {
        if self.pages.is_empty() {
            self.add_page(DEFAULT_PAGE_NAME);
        }
        // Non-empty here, so a last-added page always exists.
        let index = self.last_page_index.unwrap_or(self.pages.len() - 1);
        self.pages[index].add_element(label, style)
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The pages in insertion order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Look up a page by its 1-based position.
    pub fn get_page(&self, position: usize) -> Result<&Page, MenuError> {
        if position < 1 || position > self.pages.len() {
            return Err(MenuError::OutOfRange {
                index: position,
                len: self.pages.len(),
            });
        }
        Ok(&self.pages[position - 1])
    }

    /// The page the cursor points at; `None` while the menu is empty.
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current_page_index)
    }

    /// Mutable access to the current page.
    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        self.pages.get_mut(self.current_page_index)
    }

    /// Zero-based index of the current page.
    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }
}

// ============================================================================
// NAVIGATION
// ============================================================================

impl Ui {
    /// Advance the cursor, wrapping past the last page to the first.
    /// No-op on an empty or single-page menu.
    pub fn next_page(&mut self) {
        let count = self.pages.len();
        if count == 0 {
            return;
        }
        self.current_page_index = (self.current_page_index + 1) % count;
        debug!("page cursor -> {}", self.current_page_index);
    }

    /// Retreat the cursor, wrapping before the first page to the last.
    /// No-op on an empty or single-page menu.
    pub fn prev_page(&mut self) {
        let count = self.pages.len();
        if count == 0 {
            return;
        }
        self.current_page_index = (self.current_page_index + count - 1) % count;
        debug!("page cursor -> {}", self.current_page_index);
    }

    /// Jump straight to a zero-based page index. Out-of-bounds indices are
    /// ignored, so menus can safely bind "go to page N" commands.
    pub fn set_page_index(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current_page_index = index;
        }
    }
}

// ============================================================================
// HEADER & RENDER
// ============================================================================

impl Ui {
    /// Synthesize the header text.
    ///
    /// An explicit [`Ui::header`] override is returned verbatim. Otherwise
    /// each informational field appears iff its display flag is set,
    /// independent of the other flags: first the `P: <page name>` line,
    /// then a line with the menu name and/or `<current>/<total>`.
    pub fn build_header(&self) -> String {
        if let Some(header) = &self.header {
            return header.clone();
        }

        let mut out = String::new();

        if self.show_current_page_name {
            if let Some(page) = self.current_page() {
                out.push_str(&format!("P: {}\n", page.name));
            }
        }

        let mut line = String::new();
        if self.show_name {
            line.push_str(&self.name);
        }
        if self.show_current_page {
            if !line.is_empty() {
                line.push(' ');
            }
            let shown = if self.pages.is_empty() {
                0
            } else {
                self.current_page_index + 1
            };
            line.push_str(&format!("{}/{}", shown, self.pages.len()));
        }
        if !line.is_empty() {
            line.push('\n');
            out.push_str(&line);
        }

        out
    }

    /// Write the header, one styled `"<position>: <label>"` line per
    /// element of the current page, and the input prompt. Pure
    /// side-effecting write — the model is not mutated, and an empty menu
    /// still renders its header and prompt.
    pub fn render(&self, console: &mut dyn Console) -> Result<(), MenuError> {
        console.write(&self.build_header())?;

        if let Some(page) = self.current_page() {
            for (offset, element) in page.elements().iter().enumerate() {
                console.write(&element.render_line(offset + 1))?;
                console.write("\n")?;
            }
        }

        console.write(PROMPT)?;
        Ok(())
    }
}

// ============================================================================
// INPUT & LOOP
// ============================================================================

impl Ui {
    /// Read one token and interpret it.
    ///
    /// Navigation tokens move the page cursor and produce no selection. A
    /// token parsing as an integer within `1..=element_count` is a
    /// selection: the element's bound command (if any) is dispatched with
    /// its payload unpacked positionally, then the 1-based position is
    /// returned. Every other token — blank, non-numeric, out-of-range — is
    /// a silent no-op. Command failures propagate as
    /// [`MenuError::Command`].
    pub fn ask_input(&mut self, console: &mut dyn Console) -> Result<Option<usize>, MenuError> {
        let token = console.read_token()?;
        let token = token.trim();

        if token == NAV_LEFT {
            self.prev_page();
            return Ok(None);
        }
        if token == NAV_RIGHT {
            self.next_page();
            return Ok(None);
        }

        let count = self.current_page().map_or(0, Page::element_count);
        match token.parse::<usize>() {
            Ok(position) if position >= 1 && position <= count => {
                // Bounds just checked against the current page.
                let element = self.pages[self.current_page_index].get_element_mut(position)?;
                element.dispatch().map_err(MenuError::Command)?;
                Ok(Some(position))
            }
            _ => Ok(None),
        }
    }

    /// The interaction loop: render, interpret one token, clear, forever.
    ///
    /// There is no built-in exit — the loop runs until the process is
    /// terminated externally or an error (terminal failure, failing bound
    /// command, Ctrl+C under [`crate::console::StdConsole`]) propagates
    /// out. With `stop` set, a selection that actually dispatched a
    /// command blocks for one acknowledgment token before the clear, so
    /// the command's output stays visible. Selecting an unbound element
    /// never pauses.
    pub fn run(&mut self, console: &mut dyn Console, stop: bool) -> Result<(), MenuError> {
        if self.pages.is_empty() {
            self.add_page(DEFAULT_PAGE_NAME);
        }

        loop {
            self.render(console)?;
            let selection = self.ask_input(console)?;

            if stop && self.selection_was_bound(selection) {
                console.read_token()?;
            }

            console.clear_screen()?;
        }
    }

    /// Did this selection land on an element with a bound command?
    fn selection_was_bound(&self, selection: Option<usize>) -> bool {
        selection
            .and_then(|position| self.current_page()?.get_element(position).ok())
            .is_some_and(Element::is_bound)
    }
}

// ============================================================================
// TESTS
// ============================================================================
