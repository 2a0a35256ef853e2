use std::collections::{BTreeMap, HashMap};

/// How a list level renders its counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberFormat {
    Decimal,
    DecimalZero,
    LowerLetter,
    UpperLetter,
    LowerRoman,
    UpperRoman,
    Bullet,
    /// The level shows its template text with an empty value.
    None,
    /// Any format this crate does not render natively. Rendered as decimal.
    Other(String),
}

impl From<&str> for NumberFormat {
    /// Maps the word-processor format names (`decimal`, `lowerLetter`, ...).
    fn from(name: &str) -> Self {
        match name {
            "decimal" => NumberFormat::Decimal,
            "decimalZero" => NumberFormat::DecimalZero,
            "lowerLetter" => NumberFormat::LowerLetter,
            "upperLetter" => NumberFormat::UpperLetter,
            "lowerRoman" => NumberFormat::LowerRoman,
            "upperRoman" => NumberFormat::UpperRoman,
            "bullet" => NumberFormat::Bullet,
            "none" => NumberFormat::None,
            other => NumberFormat::Other(other.to_string()),
        }
    }
}

/// Style of one indent level within a list definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLevelStyle {
    pub format: NumberFormat,
    /// Level text such as `"%1."` or `"(%2)"`; for bullets, the glyph itself.
    pub template: Option<String>,
    /// Value shown for the first item at this level.
    pub start: u32,
}

impl ListLevelStyle {
    pub fn new(format: NumberFormat, template: impl Into<String>) -> Self {
        Self {
            format,
            template: Some(template.into()),
            start: 1,
        }
    }

    pub fn untemplated(format: NumberFormat) -> Self {
        Self {
            format,
            template: None,
            start: 1,
        }
    }

    pub fn bullet(glyph: impl Into<String>) -> Self {
        Self::new(NumberFormat::Bullet, glyph)
    }

    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Value displayed for the `count`-th item at this level.
    pub fn display_value(&self, count: u32) -> u32 {
        self.start.saturating_add(count).saturating_sub(1)
    }
}

/// Read access to the list styles of a document.
pub trait StyleLookup {
    fn level_style(&self, list_id: u32, level: u8) -> Option<&ListLevelStyle>;
}

impl StyleLookup for HashMap<(u32, u8), ListLevelStyle> {
    fn level_style(&self, list_id: u32, level: u8) -> Option<&ListLevelStyle> {
        self.get(&(list_id, level))
    }
}

/// List definitions as a word processor stores them: each list instance points
/// at an abstract definition, and the abstract definition owns the per-level
/// styles. Several instances may share one abstract definition while keeping
/// separate counters.
#[derive(Debug, Clone, Default)]
pub struct NumberingDefinitions {
    /// list instance id -> abstract definition id
    instances: HashMap<u32, u32>,
    /// abstract definition id -> level -> style
    abstracts: HashMap<u32, BTreeMap<u8, ListLevelStyle>>,
}

impl NumberingDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_instance(&mut self, list_id: u32, abstract_id: u32) {
        self.instances.insert(list_id, abstract_id);
    }

    pub fn add_level(&mut self, abstract_id: u32, level: u8, style: ListLevelStyle) {
        self.abstracts
            .entry(abstract_id)
            .or_default()
            .insert(level, style);
    }

    /// Define a list instance backed by its own abstract definition with the
    /// same id.
    pub fn with_list<I>(mut self, list_id: u32, levels: I) -> Self
    where
        I: IntoIterator<Item = (u8, ListLevelStyle)>,
    {
        self.add_instance(list_id, list_id);
        for (level, style) in levels {
            self.add_level(list_id, level, style);
        }
        self
    }

    pub fn abstract_id(&self, list_id: u32) -> Option<u32> {
        self.instances.get(&list_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl StyleLookup for NumberingDefinitions {
    fn level_style(&self, list_id: u32, level: u8) -> Option<&ListLevelStyle> {
        let abstract_id = self.abstract_id(list_id)?;
        self.abstracts.get(&abstract_id)?.get(&level)
    }
}
