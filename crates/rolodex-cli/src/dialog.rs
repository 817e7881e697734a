use crate::ui::console::Console;
use rolodex_types::{ContactFields, validate_number};
use std::io::{self, BufRead, Write};

/// Which flavor of the six-field dialog is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// Collecting a brand new contact; phone numbers are validated
    New,
    /// Editing an existing contact: Enter keeps the old value, a single
    /// space forces the field empty (and bypasses number validation)
    Editing,
    /// Collecting search criteria; phone fields are free substrings
    Search,
}

const WORK_EXAMPLES: &str = "443322, 89008007070, +59008007070";
const MOBILE_EXAMPLES: &str = "89008007070, +59008007070";

/// Prompt for all six contact fields in order
pub fn collect_contact_fields<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: DialogMode,
) -> io::Result<ContactFields> {
    if mode == DialogMode::Editing {
        console.writeln("Press Enter to save old value\nEnter Space for an empty value\n")?;
    } else {
        console.writeln("Press Enter to skip")?;
    }

    let first_name = console.prompt("Enter first name: ")?;
    let last_name = console.prompt("Enter last name: ")?;
    let patronymic = console.prompt("Enter patronymic: ")?;
    let company = console.prompt("Enter company name: ")?;
    let mut work = console.prompt("Enter work number: ")?;
    let mut mobile = console.prompt("Enter mobile number: ")?;

    if mode != DialogMode::Search {
        let editing = mode == DialogMode::Editing;
        work = prompt_valid_number(console, work, editing, false)?;
        mobile = prompt_valid_number(console, mobile, editing, true)?;
    }

    Ok(ContactFields {
        first_name,
        last_name,
        patronymic,
        company,
        work,
        mobile,
    })
}

/// Re-prompt until the number validates, the user skips with an empty
/// answer, or (editing only) forces the field empty with a single space
fn prompt_valid_number<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut number: String,
    editing: bool,
    mobile: bool,
) -> io::Result<String> {
    let examples = if mobile { MOBILE_EXAMPLES } else { WORK_EXAMPLES };
    while !validate_number(&number, mobile) && !(editing && number == " ") {
        number = console.prompt(&format!(
            "Enter number\nex. {}\nor press Enter to skip: ",
            examples
        ))?;
    }
    Ok(number)
}

/// Yes/no confirmation; only the exact answer `yes` confirms
pub fn confirm<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<bool> {
    let answer = console.prompt("Enter [yes] to confirm\n:")?;
    Ok(answer == "yes")
}
