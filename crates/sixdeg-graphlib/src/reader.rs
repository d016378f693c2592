//! Edge-list text format loader.
//!
//! The format is line oriented: `A -- B` records an undirected edge
//! (creating either endpoint as needed), a bare `A` records an isolated
//! vertex, `#` starts a comment, and blank lines are ignored. Vertex names
//! may contain spaces; surrounding whitespace is trimmed.

use crate::graph::Graph;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed edge-list line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Empty endpoint in edge on line {line}")]
    EmptyEndpoint { line: usize },
}

/// What a [`load_edge_list`] call actually added to the graph. Re-loading
/// the same input into the same graph reports zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub vertices_added: usize,
    pub edges_added: usize,
}

/// Parses `input` and populates `g`, which may use either representation.
///
/// Stops at the first malformed line; edges read before the error have
/// already been applied.
pub fn load_edge_list<G>(input: &str, g: &mut G) -> Result<LoadStats>
where
    G: Graph<String> + ?Sized,
{
    let mut stats = LoadStats::default();

    for (ix, raw) in input.lines().enumerate() {
        let line = ix + 1;
        let text = match raw.split_once('#') {
            Some((head, _)) => head,
            None => raw,
        }
        .trim();
        if text.is_empty() {
            continue;
        }

        match text.split_once("--") {
            Some((u, v)) => {
                let (u, v) = (u.trim(), v.trim());
                if v.contains("--") {
                    return Err(ParseError::MalformedLine {
                        line,
                        content: text.to_string(),
                    });
                }
                if u.is_empty() || v.is_empty() {
                    return Err(ParseError::EmptyEndpoint { line });
                }
                stats.vertices_added += usize::from(g.add_vertex(u.to_string()));
                stats.vertices_added += usize::from(g.add_vertex(v.to_string()));
                stats.edges_added += usize::from(g.add_edge(u.to_string(), v.to_string()));
            }
            None => {
                stats.vertices_added += usize::from(g.add_vertex(text.to_string()));
            }
        }
    }

    tracing::debug!(
        vertices_added = stats.vertices_added,
        edges_added = stats.edges_added,
        "edge list loaded"
    );
    Ok(stats)
}
