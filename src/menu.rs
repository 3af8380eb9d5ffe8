//! Interactive terminal menu.
//!
//! The prompt sequence is data: an ordered table of field labels and
//! validating checks, consumed by one collection loop. The menu is generic
//! over its reader and writer so the whole flow is testable with in-memory
//! buffers; production wires it to stdin/stdout.
//!
//! All core results cross this boundary as structured values and are
//! rendered here; the store and domain layers never produce display text.

use crate::config::Config;
use crate::domain::{
    AddressLine, EmailAddress, PersonName, PhoneNumber, ValidationError, ZipCode,
};
use crate::models::{Contact, ContactUpdate};
use crate::store::{ContactStore, FilterField, SortField};
use std::io::{self, BufRead, Write};
use tracing::warn;

type FieldCheck = fn(&str) -> Result<(), ValidationError>;

/// One entry of the field-collection sequence.
struct FieldPrompt {
    label: &'static str,
    check: FieldCheck,
}

fn check_first_name(value: &str) -> Result<(), ValidationError> {
    PersonName::first(value).map(|_| ())
}

fn check_last_name(value: &str) -> Result<(), ValidationError> {
    PersonName::last(value).map(|_| ())
}

fn check_address(value: &str) -> Result<(), ValidationError> {
    AddressLine::address(value).map(|_| ())
}

fn check_city(value: &str) -> Result<(), ValidationError> {
    AddressLine::city(value).map(|_| ())
}

fn check_state(value: &str) -> Result<(), ValidationError> {
    AddressLine::state(value).map(|_| ())
}

fn check_zip(value: &str) -> Result<(), ValidationError> {
    ZipCode::new(value).map(|_| ())
}

fn check_phone(value: &str) -> Result<(), ValidationError> {
    PhoneNumber::new(value).map(|_| ())
}

fn check_email(value: &str) -> Result<(), ValidationError> {
    EmailAddress::new(value).map(|_| ())
}

/// Prompt order matches the validation order of `Contact::new`.
const CONTACT_FIELDS: [FieldPrompt; 8] = [
    FieldPrompt { label: "First Name", check: check_first_name },
    FieldPrompt { label: "Last Name", check: check_last_name },
    FieldPrompt { label: "Address", check: check_address },
    FieldPrompt { label: "City", check: check_city },
    FieldPrompt { label: "State", check: check_state },
    FieldPrompt { label: "ZIP Code", check: check_zip },
    FieldPrompt { label: "Phone Number", check: check_phone },
    FieldPrompt { label: "Email", check: check_email },
];

/// Fields that can be replaced through the edit flow. The name pair is the
/// contact's identity and stays fixed.
const EDIT_FIELDS: [&str; 6] = ["Address", "City", "State", "ZIP Code", "Phone Number", "Email"];

const MENU: &str = "\n==== Address Book ====\n\
                    1. Add contact\n\
                    2. List contacts\n\
                    3. Find contact\n\
                    4. Edit contact\n\
                    5. Delete contact\n\
                    6. Count contacts\n\
                    7. Filter by city or state\n\
                    8. Sort contacts\n\
                    0. Quit";

/// The menu-dispatch loop over a contact store.
pub struct Menu<R, W> {
    reader: R,
    writer: W,
    max_input_attempts: usize,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(reader: R, writer: W, config: &Config) -> Self {
        Self {
            reader,
            writer,
            max_input_attempts: config.max_input_attempts,
        }
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self, store: &mut ContactStore) -> io::Result<()> {
        loop {
            writeln!(self.writer, "{}", MENU)?;
            let choice = match self.prompt("Choice")? {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "1" => self.add_contact(store)?,
                "2" => self.list_contacts(store)?,
                "3" => self.find_contact(store)?,
                "4" => self.edit_contact(store)?,
                "5" => self.delete_contact(store)?,
                "6" => writeln!(self.writer, "{} contact(s) stored.", store.len())?,
                "7" => self.filter_contacts(store)?,
                "8" => self.sort_contacts(store)?,
                "0" | "q" | "quit" | "exit" => break,
                "" => continue,
                other => writeln!(self.writer, "Unknown choice: {}", other)?,
            }
        }

        writeln!(self.writer, "Goodbye.")?;
        Ok(())
    }

    /// Read one line, trimmed. Returns `None` when input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}: ", label)?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Collect one field, re-prompting on validation failure up to the
    /// configured attempt limit. Returns `None` if the user runs out of
    /// attempts or input ends.
    fn collect_field(&mut self, field: &FieldPrompt) -> io::Result<Option<String>> {
        for _ in 0..self.max_input_attempts {
            let value = match self.prompt(field.label)? {
                Some(value) => value,
                None => return Ok(None),
            };

            match (field.check)(&value) {
                Ok(()) => return Ok(Some(value)),
                Err(err) => {
                    warn!(field = field.label, %err, "field rejected");
                    writeln!(self.writer, "{}", err)?;
                }
            }
        }

        writeln!(self.writer, "Too many invalid attempts for {}.", field.label)?;
        Ok(None)
    }

    fn add_contact(&mut self, store: &mut ContactStore) -> io::Result<()> {
        let mut values = Vec::with_capacity(CONTACT_FIELDS.len());
        for field in &CONTACT_FIELDS {
            match self.collect_field(field)? {
                Some(value) => values.push(value),
                None => {
                    writeln!(self.writer, "Contact entry cancelled.")?;
                    return Ok(());
                }
            }
        }

        // SAFETY: the loop pushes exactly one value per field prompt
        let values: [String; 8] = values.try_into().expect("one value per field prompt");
        let [first_name, last_name, address, city, state, zip, phone, email] = values;

        let contact = match Contact::new(
            first_name, last_name, address, city, state, zip, phone, email,
        ) {
            Ok(contact) => contact,
            Err(err) => {
                writeln!(self.writer, "{}", err)?;
                return Ok(());
            }
        };

        let name = contact.full_name();
        match store.add(contact) {
            Ok(()) => writeln!(self.writer, "Contact added: {}", name),
            Err(err) => writeln!(self.writer, "{}", err),
        }
    }

    fn list_contacts(&mut self, store: &ContactStore) -> io::Result<()> {
        if store.is_empty() {
            return writeln!(self.writer, "Address book is empty.");
        }

        for (index, contact) in store.iter().enumerate() {
            writeln!(self.writer, "{}. {}", index + 1, contact)?;
        }
        Ok(())
    }

    /// Read the identity pair for find/edit/delete. The raw strings are used
    /// as given; a name that could never validate simply matches nothing.
    fn prompt_identity(&mut self) -> io::Result<Option<(String, String)>> {
        let first_name = match self.prompt("First Name")? {
            Some(value) => value,
            None => return Ok(None),
        };
        let last_name = match self.prompt("Last Name")? {
            Some(value) => value,
            None => return Ok(None),
        };
        Ok(Some((first_name, last_name)))
    }

    fn find_contact(&mut self, store: &ContactStore) -> io::Result<()> {
        let (first_name, last_name) = match self.prompt_identity()? {
            Some(identity) => identity,
            None => return Ok(()),
        };

        match store.find(&first_name, &last_name) {
            Ok(contact) => writeln!(self.writer, "{}", contact),
            Err(err) => writeln!(self.writer, "{}", err),
        }
    }

    fn edit_contact(&mut self, store: &mut ContactStore) -> io::Result<()> {
        let (first_name, last_name) = match self.prompt_identity()? {
            Some(identity) => identity,
            None => return Ok(()),
        };

        let mut replacements = Vec::with_capacity(EDIT_FIELDS.len());
        for label in EDIT_FIELDS {
            match self.prompt(&format!("New {} (blank to keep)", label))? {
                Some(value) => replacements.push(value),
                None => {
                    writeln!(self.writer, "Edit cancelled.")?;
                    return Ok(());
                }
            }
        }

        // SAFETY: the loop pushes exactly one value per editable field
        let values: [String; 6] = replacements.try_into().expect("one value per editable field");
        let [address, city, state, zip, phone, email] = values;
        let update = ContactUpdate {
            address: Some(address),
            city: Some(city),
            state: Some(state),
            zip: Some(zip),
            phone: Some(phone),
            email: Some(email),
        };

        if update.is_empty() {
            return writeln!(self.writer, "No changes provided.");
        }

        match store.edit(&first_name, &last_name, &update) {
            Ok(contact) => writeln!(self.writer, "Contact updated: {}", contact),
            Err(err) => writeln!(self.writer, "{}", err),
        }
    }

    fn delete_contact(&mut self, store: &mut ContactStore) -> io::Result<()> {
        let (first_name, last_name) = match self.prompt_identity()? {
            Some(identity) => identity,
            None => return Ok(()),
        };

        match store.delete(&first_name, &last_name) {
            Ok(removed) => writeln!(self.writer, "Contact deleted: {}", removed.full_name()),
            Err(err) => writeln!(self.writer, "{}", err),
        }
    }

    fn filter_contacts(&mut self, store: &ContactStore) -> io::Result<()> {
        let field = match self.prompt("Filter by (city/state)")? {
            Some(value) => value,
            None => return Ok(()),
        };
        let field: FilterField = match field.parse() {
            Ok(field) => field,
            Err(err) => return writeln!(self.writer, "{}", err),
        };

        let value = match self.prompt("Value")? {
            Some(value) => value,
            None => return Ok(()),
        };

        match store.filter_by(field, &value) {
            Ok(matches) => {
                for contact in &matches {
                    writeln!(self.writer, "{}", contact)?;
                }
                writeln!(self.writer, "{} match(es) found.", matches.len())
            }
            Err(err) => writeln!(self.writer, "{}", err),
        }
    }

    fn sort_contacts(&mut self, store: &mut ContactStore) -> io::Result<()> {
        let field = match self.prompt("Sort by (first name/last name/address/city/state/zip/phone/email)")? {
            Some(value) => value,
            None => return Ok(()),
        };
        let field: SortField = match field.parse() {
            Ok(field) => field,
            Err(err) => return writeln!(self.writer, "{}", err),
        };

        store.sort_by(field);
        writeln!(self.writer, "Contacts sorted by {}.", field)?;
        self.list_contacts(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> (ContactStore, String) {
        let config = Config::default();
        let mut store = ContactStore::new();
        let mut output = Vec::new();
        let mut menu = Menu::new(Cursor::new(input.as_bytes()), &mut output, &config);
        menu.run(&mut store).unwrap();
        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_quit_immediately() {
        let (store, output) = run_session("0\n");
        assert!(store.is_empty());
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_eof_ends_session() {
        let (store, output) = run_session("");
        assert!(store.is_empty());
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_add_contact_through_prompts() {
        let input = "1\nJohn\nSmith\n123 Main St\nSpringfield\nIllinois\n62704\n5551234567\njohn@example.com\n0\n";
        let (store, output) = run_session(input);
        assert_eq!(store.len(), 1);
        assert!(output.contains("Contact added: John Smith"));
    }

    #[test]
    fn test_invalid_field_is_reprompted() {
        // First name "jo" is rejected once, then "John" is accepted.
        let input = "1\njo\nJohn\nSmith\n123 Main St\nSpringfield\nIllinois\n62704\n5551234567\njohn@example.com\n0\n";
        let (store, output) = run_session(input);
        assert_eq!(store.len(), 1);
        assert!(output.contains("Invalid first name: jo"));
        assert!(output.contains("Contact added: John Smith"));
    }

    #[test]
    fn test_attempts_exhausted_cancels_entry() {
        // Three bad first names in a row with the default limit of 3.
        let input = "1\njo\nal\nxx\n0\n";
        let (store, output) = run_session(input);
        assert!(store.is_empty());
        assert!(output.contains("Too many invalid attempts for First Name."));
        assert!(output.contains("Contact entry cancelled."));
    }

    #[test]
    fn test_unknown_choice_is_reported() {
        let (_, output) = run_session("9\n0\n");
        assert!(output.contains("Unknown choice: 9"));
    }
}
