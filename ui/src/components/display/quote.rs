use crate::components::layout::{BoxLayout, Edges, LayoutBox, Paragraph, Spacing};
use crate::utils::class_names::{class_names, element, modifier, roots};
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum QuoteSize {
    Small,
    Medium,
    #[default]
    Large,
    Full,
}

impl QuoteSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteSize::Small => "small",
            QuoteSize::Medium => "medium",
            QuoteSize::Large => "large",
            QuoteSize::Full => "full",
        }
    }
}

/// Padding used when the caller's layout leaves `pad` unset.
pub const DEFAULT_QUOTE_PAD: Edges = Edges::Sides {
    horizontal: Some(Spacing::Large),
    vertical: Some(Spacing::Small),
    between: None,
};

/// Container layout a quote starts from when the caller passes none.
pub fn default_quote_layout() -> BoxLayout {
    BoxLayout::default().with_pad(DEFAULT_QUOTE_PAD)
}

/// Padding forced onto small quotes, whatever the caller asked for.
pub const SMALL_QUOTE_PAD: Edges = Edges::Sides {
    horizontal: Some(Spacing::Medium),
    vertical: Some(Spacing::Small),
    between: None,
};

#[derive(Props, PartialEq, Clone)]
pub struct QuoteProps {
    #[props(into)]
    pub border_color_index: Option<String>,
    #[props(default)]
    pub size: QuoteSize,
    #[props(into)]
    pub credit: Option<String>,
    #[props(default = true)]
    pub emphasize_credit: bool,
    #[props(into)]
    pub class: Option<String>,
    #[props(default = default_quote_layout())]
    pub layout: BoxLayout,
    pub children: Element,
}

pub fn quote_classes(
    class: Option<&str>,
    border_color_index: Option<&str>,
    size: QuoteSize,
    emphasize_credit: bool,
) -> String {
    let border_class = border_color_index
        .map(|index| format!("{}-{}", roots::BORDER_COLOR_INDEX, index))
        .unwrap_or_default();

    class_names(
        roots::QUOTE,
        [
            (class.unwrap_or_default().to_string(), true),
            (border_class, true),
            (modifier(roots::QUOTE, size.as_str()), true),
            (modifier(roots::QUOTE, "emphasize-credit"), emphasize_credit),
        ],
    )
}

/// Layout handed to the inner container: a field-by-field copy of the
/// caller's layout. An unset pad falls back to [`DEFAULT_QUOTE_PAD`]; small
/// quotes always get [`SMALL_QUOTE_PAD`].
pub fn quote_layout(layout: &BoxLayout, size: QuoteSize) -> BoxLayout {
    let pad = match size {
        QuoteSize::Small => Some(SMALL_QUOTE_PAD),
        _ => layout.pad.or(Some(DEFAULT_QUOTE_PAD)),
    };

    BoxLayout {
        direction: layout.direction,
        align: layout.align,
        justify: layout.justify,
        pad,
        margin: layout.margin,
        color_index: layout.color_index.clone(),
        flex: layout.flex,
        wrap: layout.wrap,
        full: layout.full,
        reverse: layout.reverse,
        responsive: layout.responsive,
        separator: layout.separator,
        text_align: layout.text_align,
        role: layout.role.clone(),
        a11y_title: layout.a11y_title.clone(),
    }
}

/// Block quote with a credit line.
#[component]
pub fn Quote(props: QuoteProps) -> Element {
    let classes = quote_classes(
        props.class.as_deref(),
        props.border_color_index.as_deref(),
        props.size,
        props.emphasize_credit,
    );
    let layout = quote_layout(&props.layout, props.size);

    rsx! {
        LayoutBox {
            layout: layout,
            class: classes,
            div {
                {props.children}
                if let Some(credit) = &props.credit {
                    Paragraph {
                        class: element(roots::QUOTE, "credit"),
                        "{credit}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::{Align, Direction};

    #[test]
    fn test_default_classes() {
        let classes = quote_classes(None, None, QuoteSize::default(), true);
        assert_eq!(classes, "quote quote--large quote--emphasize-credit");
    }

    #[test]
    fn test_border_color_class_only_when_set() {
        let without = quote_classes(None, None, QuoteSize::Medium, false);
        assert!(!without.contains(roots::BORDER_COLOR_INDEX));

        let with = quote_classes(Some("wide"), Some("accent-2"), QuoteSize::Medium, false);
        assert_eq!(with, "quote wide border-color-index-accent-2 quote--medium");
    }

    #[test]
    fn test_classes_are_deterministic() {
        let first = quote_classes(Some("x"), Some("brand"), QuoteSize::Full, true);
        let second = quote_classes(Some("x"), Some("brand"), QuoteSize::Full, true);
        assert_eq!(first, second);

        let layout = default_quote_layout();
        assert_eq!(
            quote_layout(&layout, QuoteSize::Small),
            quote_layout(&layout, QuoteSize::Small)
        );
    }

    #[test]
    fn test_small_quote_forces_pad() {
        let caller = BoxLayout::default().with_pad(Edges::sides(Some(Spacing::Small), None));

        let layout = quote_layout(&caller, QuoteSize::Small);
        assert_eq!(
            layout.pad,
            Some(Edges::Sides {
                horizontal: Some(Spacing::Medium),
                vertical: Some(Spacing::Small),
                between: None,
            })
        );
    }

    #[test]
    fn test_other_sizes_keep_caller_pad() {
        let caller = BoxLayout::default().with_pad(Edges::Uniform(Spacing::None));

        for size in [QuoteSize::Medium, QuoteSize::Large, QuoteSize::Full] {
            assert_eq!(quote_layout(&caller, size).pad, Some(Edges::Uniform(Spacing::None)));
        }
    }

    #[test]
    fn test_layout_fields_pass_through() {
        let caller = BoxLayout {
            direction: Direction::Row,
            align: Some(Align::Center),
            full: true,
            role: Some("note".to_string()),
            ..default_quote_layout()
        };

        let layout = quote_layout(&caller, QuoteSize::Small);
        assert_eq!(layout.direction, Direction::Row);
        assert_eq!(layout.align, Some(Align::Center));
        assert!(layout.full);
        assert_eq!(layout.role.as_deref(), Some("note"));
        assert_eq!(layout.pad, Some(SMALL_QUOTE_PAD));
    }

    #[test]
    fn test_unset_pad_falls_back_to_default() {
        let caller = BoxLayout::default().with_direction(Direction::Row);

        let layout = quote_layout(&caller, QuoteSize::Large);
        assert_eq!(layout.direction, Direction::Row);
        assert_eq!(
            layout.pad,
            Some(Edges::sides(Some(Spacing::Large), Some(Spacing::Small)))
        );
    }

    #[test]
    fn test_default_layout_pad() {
        assert_eq!(
            default_quote_layout().pad,
            Some(Edges::sides(Some(Spacing::Large), Some(Spacing::Small)))
        );
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn plain_quote() -> Element {
        rsx! {
            Quote {
                credit: "Ada Lovelace",
                p { "That brain of mine is something more than merely mortal." }
            }
        }
    }

    fn bordered_small_quote() -> Element {
        rsx! {
            Quote {
                size: QuoteSize::Small,
                border_color_index: "accent-1",
                layout: BoxLayout::default().with_pad(Edges::sides(Some(Spacing::Small), None)),
                p { "Short." }
            }
        }
    }

    #[test]
    fn test_render_is_repeatable() {
        assert_eq!(render(plain_quote), render(plain_quote));
    }

    #[test]
    fn test_render_without_border_color() {
        let html = render(plain_quote);
        assert!(!html.contains(roots::BORDER_COLOR_INDEX));
        assert!(html.contains("quote quote--large quote--emphasize-credit"));
        assert!(html.contains("box--pad-horizontal-large"));
        assert!(html.contains("quote__credit"));
        assert!(html.contains("Ada Lovelace"));
    }

    #[test]
    fn test_render_small_with_border_color() {
        let html = render(bordered_small_quote);
        assert!(html.contains("border-color-index-accent-1"));
        assert!(html.contains("quote--small"));
        assert!(html.contains("box--pad-horizontal-medium"));
        assert!(html.contains("box--pad-vertical-small"));
        assert!(!html.contains("box--pad-horizontal-small"));
        assert!(!html.contains("quote__credit"));
    }
}
