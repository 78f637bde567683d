//! Plain-text renderers for reconciliation results.

use crate::reconcile::model::{Duplicate, Reconciliation};

/// Render a verification report.
///
/// Missing items come first since they are the failure condition; added
/// items are listed for information only.
pub fn render_reconciliation(result: &Reconciliation) -> String {
    let mut out = String::new();

    if result.missing.is_empty() {
        out.push_str("No items are missing.\n");
    } else {
        out.push_str(&format!("Missing items ({}):\n", result.missing.len()));
        for item in &result.missing {
            out.push_str(&format!("  - {} (from {})\n", item.identity, item.location));
        }
    }

    if !result.added.is_empty() {
        out.push_str(&format!("Added items ({}):\n", result.added.len()));
        for item in &result.added {
            out.push_str(&format!("  + {} (in {})\n", item.identity, item.location));
        }
    }

    out
}

pub fn render_duplicates(duplicates: &[Duplicate]) -> String {
    let mut out = String::new();
    for dup in duplicates {
        out.push_str(&format!("  - {}\n", dup));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::model::LeafRef;

    #[test]
    fn test_render_complete() {
        let text = render_reconciliation(&Reconciliation::default());
        assert_eq!(text, "No items are missing.\n");
    }

    #[test]
    fn test_render_missing_and_added() {
        let result = Reconciliation {
            missing: vec![LeafRef::new("(o_o)", "Neutral > Surprise")],
            added: vec![LeafRef::new("(x_x)", "Negative > Fear")],
        };
        let text = render_reconciliation(&result);
        assert!(text.contains("Missing items (1):"));
        assert!(text.contains("(o_o) (from Neutral > Surprise)"));
        assert!(text.contains("+ (x_x) (in Negative > Fear)"));
    }
}
