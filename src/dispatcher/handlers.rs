//! Command handlers.
//!
//! Each handler receives the session's address book and the arguments that
//! followed the command phrase. Argument counts are checked against the
//! command table before a handler runs. Lookup misses are ordinary replies;
//! only validation, missing phones and malformed arguments are errors.

use super::command::COMMAND_TABLE;
use super::session::Outcome;
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use tracing::info;

/// Function bound to a command phrase.
pub type Handler = fn(&mut AddressBook, &Invocation<'_>) -> BookResult<Outcome>;

/// Arguments and settings passed to a handler.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    pub args: &'a [&'a str],
    pub usage: &'static str,
    pub page_size: usize,
}

impl Invocation<'_> {
    /// The error reported when the arguments do not fit the usage line.
    pub fn usage_error(&self) -> BookError {
        BookError::Usage(self.usage)
    }
}

fn not_found(name: &str) -> Outcome {
    Outcome::Reply(format!("No record found for {}.", name))
}

/// Create or overwrite a record with one phone and an optional birthday.
pub fn add(book: &mut AddressBook, inv: &Invocation<'_>) -> BookResult<Outcome> {
    let (name, phone, birthday) = match inv.args {
        [name, phone] => (*name, *phone, None),
        [name, phone, birthday] => (*name, *phone, Some(*birthday)),
        _ => return Err(inv.usage_error()),
    };

    let mut record = Record::new(name, birthday)?;
    record.add_phone(phone)?;
    book.add_record(record);

    info!("Added record for {}", name);
    Ok(Outcome::Reply(format!(
        "Record for {} added to the address book.",
        name
    )))
}

/// Delete a record by name.
pub fn delete(book: &mut AddressBook, inv: &Invocation<'_>) -> BookResult<Outcome> {
    let [name] = inv.args else {
        return Err(inv.usage_error());
    };

    if book.delete(name).is_none() {
        return Ok(not_found(name));
    }

    info!("Deleted record for {}", name);
    Ok(Outcome::Reply(format!(
        "Record for {} deleted from the address book.",
        name
    )))
}

/// Show a record by name.
pub fn find(book: &mut AddressBook, inv: &Invocation<'_>) -> BookResult<Outcome> {
    let [name] = inv.args else {
        return Err(inv.usage_error());
    };

    Ok(match book.find(name) {
        Some(record) => Outcome::Reply(format!("Found record: {}", record)),
        None => not_found(name),
    })
}

/// Replace a record's whole phone list with a single number.
pub fn edit(book: &mut AddressBook, inv: &Invocation<'_>) -> BookResult<Outcome> {
    let [name, new_phone] = inv.args else {
        return Err(inv.usage_error());
    };

    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    record.replace_phones(new_phone)?;

    info!("Replaced phones of {}", name);
    Ok(Outcome::Reply(format!(
        "Phone number for {} edited to {}.",
        name, new_phone
    )))
}

/// Replace one phone number of a record with another.
pub fn change(book: &mut AddressBook, inv: &Invocation<'_>) -> BookResult<Outcome> {
    let [name, old_phone, new_phone] = inv.args else {
        return Err(inv.usage_error());
    };

    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    record.edit_phone(old_phone, new_phone)?;

    info!("Changed phone {} of {}", old_phone, name);
    Ok(Outcome::Reply(format!(
        "Phone number for {} changed from {} to {}.",
        name, old_phone, new_phone
    )))
}

/// Remove one phone number from a record.
pub fn remove(book: &mut AddressBook, inv: &Invocation<'_>) -> BookResult<Outcome> {
    let [name, phone] = inv.args else {
        return Err(inv.usage_error());
    };

    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    if record.find_phone(phone).is_none() {
        return Ok(Outcome::Reply(format!(
            "{} has no phone number {}.",
            name, phone
        )));
    }
    record.remove_phone(phone);

    info!("Removed phone {} from {}", phone, name);
    Ok(Outcome::Reply(format!(
        "Phone number {} removed from {}.",
        phone, name
    )))
}

/// Show every record, one per line.
pub fn show_all(book: &mut AddressBook, _inv: &Invocation<'_>) -> BookResult<Outcome> {
    Ok(Outcome::Reply(book.to_string()))
}

/// Show one page of records using the session page size.
pub fn show_page(book: &mut AddressBook, inv: &Invocation<'_>) -> BookResult<Outcome> {
    let [number] = inv.args else {
        return Err(inv.usage_error());
    };

    let number = match number.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            return Err(BookError::InvalidArgument(format!(
                "Page number must be a positive integer, got: {}",
                number
            )))
        }
    };

    let pages = book.iterate(inv.page_size)?;
    Ok(match pages.get(number - 1) {
        Some(page) => Outcome::Reply(
            page.iter()
                .map(|record| record.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        None => Outcome::Reply(format!("No records on page {}.", number)),
    })
}

/// Show the days left until a record's next birthday.
pub fn birthday(book: &mut AddressBook, inv: &Invocation<'_>) -> BookResult<Outcome> {
    let [name] = inv.args else {
        return Err(inv.usage_error());
    };

    let Some(record) = book.find(name) else {
        return Ok(not_found(name));
    };

    Ok(match record.days_to_birthday(None)? {
        Some(days) => Outcome::Reply(format!(
            "Days left to {}'s birthday: {} days",
            name, days
        )),
        None => Outcome::Reply(format!("{} has no birthday specified.", name)),
    })
}

/// List the usage line of every command.
pub fn help(_book: &mut AddressBook, _inv: &Invocation<'_>) -> BookResult<Outcome> {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(COMMAND_TABLE.iter().map(|spec| format!("  {}", spec.usage)));
    Ok(Outcome::Reply(lines.join("\n")))
}

/// End the session.
pub fn exit(_book: &mut AddressBook, _inv: &Invocation<'_>) -> BookResult<Outcome> {
    Ok(Outcome::Terminate("Good bye!".to_string()))
}
