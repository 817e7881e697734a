use crate::session::{PageMove, Session};
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub const MAIN_MENU: &str = "Action menu:\n\
    q - quit\n\
    l - contact list\n\
    a - add new contact\n\
    r - remove a contact\n\
    e - edit a contact\n\
    s - search\n";

pub const NAV_MENU: &str = "Navigation:\n\
    b - back\n\
    p - previous page\n\
    n - next page\n";

pub fn warn_wrong_command<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}\n", "!!!Wrong command".red())
}

pub fn warn_wrong_card_number<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}\n", "!!!Wrong card number".red())
}

/// Apply a navigation command to the session and render the result:
/// either the empty-list notice, or a page header, the page indicator, and
/// the visible cards annotated with their 1-based absolute indexes.
pub fn show_page<W: Write>(out: &mut W, session: &mut Session, mv: PageMove) -> io::Result<()> {
    if !session.navigate(mv) {
        writeln!(out, "\nContact list is empty\n")?;
        return Ok(());
    }

    writeln!(out, "\nContact List------------------------")?;
    writeln!(out, "Page {}/{}", session.page, session.max_page())?;

    let first = (session.page - 1) * session.per_page;
    let last = (first + session.per_page).min(session.contacts.len());
    let cards: Vec<String> = session.contacts[first..last]
        .iter()
        .enumerate()
        .map(|(offset, contact)| contact.card_with_number(first + offset + 1))
        .collect();
    writeln!(out, "{}", cards.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_types::{Contact, ContactFields};

    fn session_with(count: usize, per_page: usize) -> Session {
        let contacts = (0..count)
            .map(|i| {
                Contact::new(ContactFields {
                    first_name: format!("Contact{}", i),
                    ..Default::default()
                })
            })
            .collect();
        Session {
            contacts,
            browsing: false,
            page: 1,
            per_page,
        }
    }

    fn rendered(session: &mut Session, mv: PageMove) -> String {
        let mut out = Vec::new();
        show_page(&mut out, session, mv).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_show_page_reports_empty_list() {
        let mut session = session_with(0, 4);
        let output = rendered(&mut session, PageMove::Stay);
        assert!(output.contains("Contact list is empty"));
    }

    #[test]
    fn test_show_page_renders_header_and_indicator() {
        let mut session = session_with(5, 4);
        let output = rendered(&mut session, PageMove::Stay);

        assert!(output.contains("Contact List------------------------"));
        assert!(output.contains("Page 1/2"));
        assert!(output.contains("Contact card: 1"));
        assert!(output.contains("Contact card: 4"));
        assert!(!output.contains("Contact card: 5"));
    }

    #[test]
    fn test_indexes_are_absolute_across_pages() {
        let mut session = session_with(5, 4);
        session.page = 2;
        let output = rendered(&mut session, PageMove::Stay);

        assert!(output.contains("Page 2/2"));
        assert!(output.contains("Contact card: 5"));
        assert!(output.contains("Full name: Contact4  "));
        assert!(!output.contains("Contact card: 1\n"));
    }
}
