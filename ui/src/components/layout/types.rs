// Layout container properties - plain data, no dioxus imports needed here
use crate::utils::class_names::{class_names, modifier, roots};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Spacing {
    None,
    Small,
    Medium,
    Large,
}

impl Spacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Spacing::None => "none",
            Spacing::Small => "small",
            Spacing::Medium => "medium",
            Spacing::Large => "large",
        }
    }
}

/// Padding or margin: one size for every side, or per axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Edges {
    Uniform(Spacing),
    Sides {
        horizontal: Option<Spacing>,
        vertical: Option<Spacing>,
        between: Option<Spacing>,
    },
}

impl Edges {
    pub fn sides(horizontal: Option<Spacing>, vertical: Option<Spacing>) -> Self {
        Edges::Sides {
            horizontal,
            vertical,
            between: None,
        }
    }

    fn classes(&self, root: &str, property: &str) -> Vec<String> {
        match self {
            Edges::Uniform(size) => vec![modifier(root, &format!("{}-{}", property, size.as_str()))],
            Edges::Sides {
                horizontal,
                vertical,
                between,
            } => [("horizontal", *horizontal), ("vertical", *vertical), ("between", *between)]
                .into_iter()
                .filter_map(|(side, size)| {
                    size.map(|size| {
                        modifier(root, &format!("{}-{}-{}", property, side, size.as_str()))
                    })
                })
                .collect(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Row,
    Column,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
            Align::Stretch => "stretch",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Justify {
    Start,
    Center,
    Between,
    End,
}

impl Justify {
    pub fn as_str(&self) -> &'static str {
        match self {
            Justify::Start => "start",
            Justify::Center => "center",
            Justify::Between => "between",
            Justify::End => "end",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
    Horizontal,
    Vertical,
    All,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
            Side::Horizontal => "horizontal",
            Side::Vertical => "vertical",
            Side::All => "all",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// The property set accepted by the layout container ([`super::LayoutBox`]).
///
/// Components that wrap a container copy these fields across by name rather
/// than forwarding their whole prop set.
#[derive(Clone, PartialEq, Debug)]
pub struct BoxLayout {
    pub direction: Direction,
    pub align: Option<Align>,
    pub justify: Option<Justify>,
    pub pad: Option<Edges>,
    pub margin: Option<Edges>,
    pub color_index: Option<String>,
    pub flex: bool,
    pub wrap: bool,
    pub full: bool,
    pub reverse: bool,
    pub responsive: bool,
    pub separator: Option<Side>,
    pub text_align: Option<TextAlign>,
    pub role: Option<String>,
    pub a11y_title: Option<String>,
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self {
            direction: Direction::Column,
            align: None,
            justify: None,
            pad: None,
            margin: None,
            color_index: None,
            flex: false,
            wrap: false,
            full: false,
            reverse: false,
            responsive: true,
            separator: None,
            text_align: None,
            role: None,
            a11y_title: None,
        }
    }
}

impl BoxLayout {
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_align(mut self, align: Option<Align>) -> Self {
        self.align = align;
        self
    }

    pub fn with_pad(mut self, pad: Edges) -> Self {
        self.pad = Some(pad);
        self
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_color_index(mut self, color_index: impl Into<String>) -> Self {
        self.color_index = Some(color_index.into());
        self
    }

    /// Modifier classes for `root`, e.g. `box--direction-row box--pad-medium`.
    pub fn class_names(&self, root: &str) -> String {
        let mut conditional: Vec<(String, bool)> = vec![
            (modifier(root, &format!("direction-{}", self.direction.as_str())), true),
            (modifier(root, "reverse"), self.reverse),
            (modifier(root, "flex"), self.flex),
            (modifier(root, "wrap"), self.wrap),
            (modifier(root, "full"), self.full),
            (modifier(root, "responsive"), self.responsive),
        ];

        if let Some(align) = self.align {
            conditional.push((modifier(root, &format!("align-{}", align.as_str())), true));
        }
        if let Some(justify) = self.justify {
            conditional.push((modifier(root, &format!("justify-{}", justify.as_str())), true));
        }
        if let Some(pad) = &self.pad {
            conditional.extend(pad.classes(root, "pad").into_iter().map(|c| (c, true)));
        }
        if let Some(margin) = &self.margin {
            conditional.extend(margin.classes(root, "margin").into_iter().map(|c| (c, true)));
        }
        if let Some(separator) = self.separator {
            conditional.push((modifier(root, &format!("separator-{}", separator.as_str())), true));
        }
        if let Some(text_align) = self.text_align {
            conditional.push((modifier(root, &format!("text-align-{}", text_align.as_str())), true));
        }
        if let Some(color_index) = &self.color_index {
            conditional.push((format!("{}-{}", roots::BACKGROUND_COLOR_INDEX, color_index), true));
        }

        class_names(root, conditional)
    }
}
