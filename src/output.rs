use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// Write `item` as one compact JSON line.
pub fn write_ndjson<W: Write, T: Serialize + ?Sized>(out: &mut W, item: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, item)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write every element of a JSON array as its own line. Anything that is
/// not an array writes nothing.
pub fn write_nodes<W: Write>(out: &mut W, nodes: &serde_json::Value) -> Result<usize> {
    let nodes = nodes.as_array().map(Vec::as_slice).unwrap_or_default();
    for node in nodes {
        write_ndjson(out, node)?;
    }
    Ok(nodes.len())
}
