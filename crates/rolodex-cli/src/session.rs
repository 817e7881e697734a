use rolodex_store::ContactBook;
use rolodex_types::Contact;

/// Page navigation request while browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Stay,
    Prev,
    Next,
}

/// Number of pages needed to show `total` contacts, `per` to a page.
/// Zero for an empty list.
pub fn max_page(total: usize, per: usize) -> usize {
    total.div_ceil(per)
}

/// UI state owned by the command loop: the list currently on screen (which
/// may be a stale or filtered view of the book), the browsing flag, and the
/// pagination cursor.
#[derive(Debug)]
pub struct Session {
    pub contacts: Vec<Contact>,
    pub browsing: bool,
    pub page: usize,
    pub per_page: usize,
}

impl Session {
    pub fn new(book: &ContactBook, per_page: usize) -> Self {
        Self {
            contacts: book.contacts(),
            browsing: false,
            page: 1,
            per_page: per_page.max(1),
        }
    }

    /// Reload the full contact list and leave browse mode
    pub fn reset(&mut self, book: &ContactBook) {
        self.contacts = book.contacts();
        self.browsing = false;
        self.page = 1;
    }

    pub fn max_page(&self) -> usize {
        max_page(self.contacts.len(), self.per_page)
    }

    /// Apply a navigation command and report whether anything is visible.
    /// An empty list drops the session out of browse mode with `page = 0`.
    pub fn navigate(&mut self, mv: PageMove) -> bool {
        if self.contacts.is_empty() {
            self.page = 0;
            self.browsing = false;
            return false;
        }

        self.browsing = true;
        if self.page == 0 {
            self.page = 1;
        }
        match mv {
            PageMove::Prev if self.page > 1 => self.page -= 1,
            PageMove::Next if self.contacts.len() > self.per_page * self.page => self.page += 1,
            _ => {}
        }
        true
    }
}
