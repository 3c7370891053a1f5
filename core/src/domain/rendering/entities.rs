use crate::domain::recommendation::entities::Meal;

/// Inline run of text inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    Emphasis(String),
    Code(String),
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text)
            | Inline::Strong(text)
            | Inline::Emphasis(text)
            | Inline::Code(text) => text,
        }
    }
}

/// Block-level structure produced from markdown.
///
/// A list item is itself a sequence of blocks, so nested lists stay nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupBlock {
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    List {
        ordered: bool,
        items: Vec<Vec<MarkupBlock>>,
    },
    CodeBlock(String),
    Rule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    DietaryOverview,
    MealSchedule,
    FoodsToAvoid,
    RecommendedFoods,
    HealthAdvice,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::DietaryOverview => "AI Analysis Overview",
            SectionKind::MealSchedule => "Intelligent Meal Schedule",
            SectionKind::FoodsToAvoid => "Avoid These Foods",
            SectionKind::RecommendedFoods => "Recommended Foods",
            SectionKind::HealthAdvice => "Evidence-Based Health Advice from Real Studies",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealView {
    pub meal: Meal,
    pub body: Vec<MarkupBlock>,
}

impl MealView {
    pub fn title(&self) -> &'static str {
        self.meal.title()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Markup(Vec<MarkupBlock>),
    Meals(Vec<MealView>),
    Foods(Vec<String>),
}

/// One self-contained renderable unit of a recommendation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub kind: SectionKind,
    pub body: SectionBody,
}

impl SectionView {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}
