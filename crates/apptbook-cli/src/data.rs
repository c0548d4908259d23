use anyhow::{Context as _, Result};
use apptbook_core::model::AddressBookData;
use apptbook_core::AddressBook;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the address book JSON file. A missing file is an empty book.
pub fn load_address_book(path: &Path) -> Result<AddressBook> {
    if !path.exists() {
        debug!(path = %path.display(), "data file missing, starting empty");
        return Ok(AddressBook::default());
    }

    let contents = fs::read_to_string(path).with_context(|| "read data file")?;
    let data: AddressBookData =
        serde_json::from_str(&contents).with_context(|| "parse data file")?;
    let book = AddressBook::from_data(data)?;
    debug!(
        persons = book.persons().len(),
        appointments = book.appointments().len(),
        "address book loaded"
    );
    Ok(book)
}
