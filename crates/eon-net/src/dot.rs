//! Graphviz (DOT) topology loader.
//!
//! Accepts the subset of DOT that topology files in the wild actually use:
//!
//! ```text
//! graph nsfnet {
//!   // optional node statements
//!   seattle;
//!   seattle -- palo_alto [weight=1342];
//!   "new york" -- washington [weight=328];
//! }
//! ```
//!
//! Edge chains (`a -- b -- c`) create one link per adjacent pair.  The only
//! attribute read is `weight` (default 1); everything else is ignored, as
//! the spectrum attributes are applied uniformly afterwards with
//! [`Graph::set_units`](crate::Graph::set_units).

use std::path::Path;

use rustc_hash::FxHashMap;

use eon_core::VertexId;

use crate::error::{NetError, NetResult};
use crate::graph::{Graph, GraphBuilder};

/// Read and parse a DOT file.
pub fn load_dot(path: impl AsRef<Path>) -> NetResult<Graph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| NetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_dot(&text)
}

/// Parse DOT text into a [`Graph`].
pub fn parse_dot(text: &str) -> NetResult<Graph> {
    // Strip line comments, then work on the brace-delimited body.
    let stripped: String = text
        .lines()
        .map(|l| {
            let l = l.split("//").next().unwrap_or("");
            l.split('#').next().unwrap_or("")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let open = stripped
        .find('{')
        .ok_or_else(|| NetError::Parse("missing '{'".into()))?;
    let close = stripped
        .rfind('}')
        .ok_or_else(|| NetError::Parse("missing '}'".into()))?;
    if close < open {
        return Err(NetError::Parse("'}' before '{'".into()));
    }
    let body = &stripped[open + 1..close];

    let mut builder = GraphBuilder::new();
    let mut by_name: FxHashMap<String, VertexId> = FxHashMap::default();

    let mut intern = |builder: &mut GraphBuilder, name: &str| -> VertexId {
        match by_name.get(name) {
            Some(&v) => v,
            None => {
                let v = builder.add_vertex(name);
                by_name.insert(name.to_string(), v);
                v
            }
        }
    };

    for stmt in body.split(';') {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }

        // Separate an optional trailing attribute block.
        let (chain, attrs) = match stmt.find('[') {
            Some(i) => {
                let end = stmt
                    .rfind(']')
                    .filter(|&end| end > i)
                    .ok_or_else(|| NetError::Parse(format!("unterminated '[' in `{stmt}`")))?;
                (&stmt[..i], &stmt[i + 1..end])
            }
            None => (stmt, ""),
        };

        let weight = parse_weight(attrs)?;

        let nodes: Vec<&str> = chain.split("--").map(unquote).collect();
        if nodes.iter().any(|n| n.is_empty()) {
            return Err(NetError::Parse(format!("empty node name in `{stmt}`")));
        }

        if nodes.len() == 1 {
            // Bare node statement.
            intern(&mut builder, nodes[0]);
            continue;
        }

        for pair in nodes.windows(2) {
            let a = intern(&mut builder, pair[0]);
            let b = intern(&mut builder, pair[1]);
            if a == b {
                return Err(NetError::Parse(format!("self-loop at `{}`", pair[0])));
            }
            builder.add_link(a, b, weight);
        }
    }

    Ok(builder.build())
}

fn unquote(token: &str) -> &str {
    token.trim().trim_matches('"')
}

fn parse_weight(attrs: &str) -> NetResult<f64> {
    for attr in attrs.split(',') {
        let mut kv = attr.splitn(2, '=');
        let key = kv.next().unwrap_or("").trim();
        if key == "weight" {
            let raw = kv
                .next()
                .ok_or_else(|| NetError::Parse("weight without a value".into()))?
                .trim()
                .trim_matches('"');
            let w: f64 = raw
                .parse()
                .map_err(|_| NetError::Parse(format!("bad weight `{raw}`")))?;
            if w < 0.0 {
                return Err(NetError::Parse(format!("negative weight {w}")));
            }
            return Ok(w);
        }
    }
    Ok(1.0)
}
