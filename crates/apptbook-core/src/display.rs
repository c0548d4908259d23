//! Display ordering and labels for tags.

use crate::domain::{Tag, TagKind};
use std::cmp::Ordering;

/// Child tags come first; within a kind, names compare case-insensitively.
/// Names differing only in case fall back to a case-sensitive comparison so
/// the order never depends on set iteration order.
pub fn compare_for_display(left: &Tag, right: &Tag) -> Ordering {
    kind_rank(left.kind)
        .cmp(&kind_rank(right.kind))
        .then_with(|| compare_ignore_case(left.name.as_str(), right.name.as_str()))
        .then_with(|| left.name.as_str().cmp(right.name.as_str()))
}

/// Tags in display order.
pub fn sorted_for_display<'a>(tags: impl IntoIterator<Item = &'a Tag>) -> Vec<&'a Tag> {
    let mut sorted: Vec<&Tag> = tags.into_iter().collect();
    sorted.sort_by(|left, right| compare_for_display(left, right));
    sorted
}

fn kind_rank(kind: TagKind) -> u8 {
    match kind {
        TagKind::Child => 0,
        TagKind::Plain => 1,
    }
}

fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLabel<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

pub fn tag_label(tag: &Tag) -> TagLabel<'_> {
    TagLabel {
        text: tag.name.as_str(),
        highlighted: tag.is_child(),
    }
}

/// Labels for a tag set, in display order.
pub fn tag_labels<'a>(tags: impl IntoIterator<Item = &'a Tag>) -> Vec<TagLabel<'a>> {
    sorted_for_display(tags).into_iter().map(tag_label).collect()
}

#[cfg(test)]
mod tests {
    use super::{compare_for_display, sorted_for_display, tag_labels};
    use crate::domain::{Tag, TagName};
    use std::cmp::Ordering;
    use std::collections::HashSet;

    fn plain(name: &str) -> Tag {
        Tag::plain(TagName::new(name).unwrap())
    }

    fn child(name: &str) -> Tag {
        Tag::child(TagName::new(name).unwrap())
    }

    #[test]
    fn child_tags_sort_first_then_by_name() {
        let tags = [plain("zebra"), child("apple"), plain("apple")];
        let sorted = sorted_for_display(&tags);
        assert_eq!(sorted, vec![&child("apple"), &plain("apple"), &plain("zebra")]);
    }

    #[test]
    fn kind_dominates_name() {
        assert_eq!(compare_for_display(&child("zebra"), &plain("apple")), Ordering::Less);
        assert_eq!(compare_for_display(&plain("apple"), &child("zebra")), Ordering::Greater);
    }

    #[test]
    fn names_compare_ignoring_case() {
        assert_eq!(compare_for_display(&plain("Banana"), &plain("apple")), Ordering::Greater);
        assert_eq!(compare_for_display(&plain("apple"), &plain("Banana")), Ordering::Less);
    }

    #[test]
    fn case_variants_order_case_sensitively() {
        assert_eq!(compare_for_display(&plain("Math"), &plain("math")), Ordering::Less);
        assert_eq!(compare_for_display(&plain("math"), &plain("math")), Ordering::Equal);
    }

    #[test]
    fn order_from_hash_set_is_stable_across_sets() {
        for _ in 0..64 {
            let tags: HashSet<Tag> = [plain("math"), plain("science"), plain("Math")]
                .into_iter()
                .collect();
            let names: Vec<&str> = sorted_for_display(&tags)
                .into_iter()
                .map(|tag| tag.name.as_str())
                .collect();
            assert_eq!(names, vec!["Math", "math", "science"]);
        }
    }

    #[test]
    fn labels_highlight_child_tags() {
        let tags = [plain("math"), child("algebra")];
        let labels = tag_labels(&tags);
        assert_eq!(labels[0].text, "algebra");
        assert!(labels[0].highlighted);
        assert_eq!(labels[1].text, "math");
        assert!(!labels[1].highlighted);
    }
}
