use proptest::prelude::*;

use folio::html::{el, Node};

proptest! {
    #[test]
    fn text_content_never_leaks_markup(text in ".*") {
        let node: Node = el("span").text(text).into();
        let rendered = node.render();
        let inner = &rendered["<span>".len()..rendered.len() - "</span>".len()];
        prop_assert!(!inner.contains('<'));
        prop_assert!(!inner.contains('>'));
    }

    #[test]
    fn attribute_values_never_break_out(value in ".*") {
        let node: Node = el("div").attr("title", value).into();
        let rendered = node.render();
        // One opening tag, one quote pair, no stray quotes inside.
        let open_end = rendered.find('>').unwrap();
        let open_tag = &rendered[..open_end];
        prop_assert_eq!(open_tag.matches('"').count(), 2);
        prop_assert_eq!(open_tag.matches('<').count(), 1);
    }

    #[test]
    fn render_never_panics_on_nested_trees(texts in proptest::collection::vec(".*", 0..8)) {
        let mut root = el("div");
        for text in texts {
            root = root.child(el("p").text(text));
        }
        let node: Node = root.into();
        let _ = node.render();
    }
}
