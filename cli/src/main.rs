//! `xsdmap` — map JSON-Schema type names to qualified XSD types.
//!
//! ```text
//! $ xsdmap number integer
//! number  xs:decimal
//! integer xs:integer
//!
//! $ xsdmap --json --prefix xsd boolean
//! {"type":"boolean","xsd":"xsd:boolean"}
//! ```
//!
//! Exits non-zero if any name fails to map; successful mappings are still
//! printed so a batch run reports everything it can.

use anyhow::Result;
use clap::Parser;
use xsdmap::TypeMapper;
use xsdmap_model::JsonPrimitive;

/// Map JSON-Schema primitive type names to qualified XSD simple types.
#[derive(Debug, Parser)]
#[command(name = "xsdmap", version, about)]
struct Args {
    /// Namespace prefix to qualify type names with.
    #[arg(long, default_value = xsdmap_model::consts::XML_SCHEMA_PREFIX)]
    prefix: String,

    /// Emit one JSON object per mapping instead of aligned text.
    #[arg(long)]
    json: bool,

    /// JSON-Schema type names to map.
    #[arg(required = true)]
    types: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mapper = TypeMapper::builder().prefix(&args.prefix).build();

    let width = args.types.iter().map(String::len).max().unwrap_or(0);
    let mut failures = 0usize;

    for name in &args.types {
        match mapper.to_xsd_type(name) {
            Ok(qualified) => {
                if args.json {
                    println!(
                        "{}",
                        serde_json::json!({ "type": name, "xsd": qualified })
                    );
                } else {
                    println!("{name:<width$} {qualified}");
                }
            }
            Err(err) => {
                failures += 1;
                eprintln!("error: {err}");
                if matches!(err, xsdmap::Error::Unrecognized { .. }) {
                    let known: Vec<&str> =
                        JsonPrimitive::ALL.iter().map(|p| p.as_str()).collect();
                    eprintln!("hint: known type names are {}", known.join(", "));
                }
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} names failed to map", args.types.len());
    }
    Ok(())
}
