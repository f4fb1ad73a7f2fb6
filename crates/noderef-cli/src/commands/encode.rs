//! Encode command implementation.

use crate::output;
use noderef_core::{scoped_id, IdScope};

pub fn run(
    type_name: String,
    id: String,
    local: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let scope = if local { IdScope::Local } else { IdScope::Global };
    let value = scoped_id(&type_name, &id, scope)?;

    if json {
        println!("{}", output::format_encoded(&value, scope));
    } else {
        println!("{}", value);
    }
    Ok(())
}
