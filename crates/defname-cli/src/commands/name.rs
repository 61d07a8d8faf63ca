//! Name command implementation.

use crate::config::PolicyArgs;
use crate::output;
use defname_canonical::Namer;
use tracing::debug;

pub fn run(
    descriptor: String,
    home: String,
    policy: PolicyArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let namer = Namer::new(policy.load()?);
    debug!(policy = ?namer.policy(), "loaded naming policy");

    let name = namer
        .name_descriptor(&descriptor, &home)
        .map_err(|e| format!("Invalid descriptor: {}", e))?;

    if json {
        println!("{}", output::format_json(&output::name_json(&name)));
    } else {
        println!("{}", name);
    }
    Ok(())
}
