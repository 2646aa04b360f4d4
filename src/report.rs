//! Plain text rendering of change logs and reference sets

use std::collections::HashSet;

use crate::model::{ChangeLogSet, PublicPartReference};

/// Render a change log the way a build's "Changes" page lists it
pub fn render_change_log(change_log: &ChangeLogSet) -> String {
    if change_log.is_empty_set() {
        return format!("No changes in {}\n", change_log.build());
    }

    let mut out = format!(
        "Changes in {} ({} activities)\n",
        change_log.build(),
        change_log.len()
    );
    for entry in change_log {
        out.push_str(&format!(
            "{}  {}  {}\n",
            entry.version,
            entry.formatted_check_in_time(),
            entry.author
        ));
        out.push_str(&format!("    {}\n", entry.display_message()));
        for path in &entry.affected_paths {
            out.push_str(&format!("      {path}\n"));
        }
    }

    out
}

/// Render references sorted by vendor and library reference, one per line
pub fn render_references(references: &HashSet<PublicPartReference>) -> String {
    let mut sorted: Vec<&PublicPartReference> = references.iter().collect();
    sorted.sort_by(|a, b| {
        (&a.vendor, &a.library_reference).cmp(&(&b.vendor, &b.library_reference))
    });

    sorted
        .into_iter()
        .map(|reference| {
            if reference.at_runtime {
                format!("{reference} (runtime)\n")
            } else {
                format!("{reference}\n")
            }
        })
        .collect()
}
