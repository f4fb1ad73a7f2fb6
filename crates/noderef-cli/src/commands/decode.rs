//! Decode command implementation.

use crate::output;
use noderef_core::GlobalId;

pub fn run(token: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let id = GlobalId::decode(&token)?;

    if json {
        println!("{}", output::format_decoded(&id));
    } else {
        println!("{}\t{}", id.type_name, id.raw_id);
    }
    Ok(())
}
