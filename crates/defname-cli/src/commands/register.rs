//! Register command implementation.

use crate::config::PolicyArgs;
use defname_canonical::{Namer, TypeDescriptor};
use defname_registry::{DefinitionRegistry, Registration};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, Read};
use tracing::{debug, info};

/// The type half of an input entry: a structured descriptor or a descriptor
/// string with its home package.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TypeInput {
    Descriptor {
        descriptor: String,
        #[serde(default)]
        home: String,
    },
    Structured(TypeDescriptor),
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(rename = "type")]
    ty: TypeInput,
    schema: Value,
}

/// Output document; keeps definitions in registration order.
#[derive(Serialize)]
struct Document<'a> {
    definitions: &'a DefinitionRegistry,
}

pub fn run(input: Option<String>, policy: PolicyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let namer = Namer::new(policy.load()?);
    debug!(policy = ?namer.policy(), "loaded naming policy");

    // Read entries from file or stdin
    let json_str = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let entries: Vec<Entry> =
        serde_json::from_str(&json_str).map_err(|e| format!("Invalid input: {}", e))?;

    let mut registry = DefinitionRegistry::new();
    for (idx, entry) in entries.into_iter().enumerate() {
        let name = match &entry.ty {
            TypeInput::Descriptor { descriptor, home } => namer.name_descriptor(descriptor, home),
            TypeInput::Structured(descriptor) => namer.name_type(descriptor),
        }
        .map_err(|e| format!("Entry {}: invalid type: {}", idx, e))?;

        if registry.contains(&name) {
            debug!(entry = idx, name = %name, "name already registered");
        }
        let outcome = registry
            .register(name, entry.schema)
            .map_err(|e| format!("Entry {}: {}", idx, e))?;
        if outcome == Registration::Existing {
            info!(entry = idx, "duplicate definition skipped");
        }
    }

    let document = Document {
        definitions: &registry,
    };
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
