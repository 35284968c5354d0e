use crate::error::{CographError, Result};
use crate::model::{Author, Commit, InteractionGraph};
use std::collections::{BTreeSet, HashMap};

/// Builds the undirected co-modification graph for one window.
///
/// Two authors interact when they both touched the same file among the given
/// commits. Every author id from `authors` appears in the result, with an
/// empty adjacency set when isolated. A file touched by a single author
/// contributes no edges.
pub fn build_interaction_graph(
    authors: &[Author],
    commits: &[&Commit],
) -> Result<InteractionGraph> {
    let mut graph: InteractionGraph = authors
        .iter()
        .map(|a| (a.id.clone(), BTreeSet::new()))
        .collect();

    let mut modified_files: HashMap<&str, BTreeSet<&str>> = HashMap::new();
    for commit in commits {
        for file in &commit.files {
            modified_files
                .entry(file.as_str())
                .or_default()
                .insert(commit.author_id.as_str());
        }
    }

    for touching_authors in modified_files.values() {
        for a1 in touching_authors {
            for a2 in touching_authors {
                if a1 == a2 {
                    continue;
                }
                // Both orderings of the pair are visited, which is what
                // makes the adjacency symmetric.
                graph
                    .get_mut(*a1)
                    .ok_or_else(|| {
                        CographError::InvalidInput(format!(
                            "commit author '{a1}' is not in the author list"
                        ))
                    })?
                    .insert((*a2).to_string());
            }
        }
    }

    Ok(graph)
}
